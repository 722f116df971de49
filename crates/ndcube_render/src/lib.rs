//! Rendering for the ndcube viewer
//!
//! This crate provides the wgpu-based pipeline that draws projected
//! hypercube wireframes as colored line lists.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::OrbitCamera`] - Damped orbit camera around the origin
//! - [`pipeline::LinePipeline`] - Indexed line-list rendering
//! - [`renderable::LineGeometry`] - Projected geometry converted to vertices and indices
//! - [`renderable::GpuLines`] - GPU buffers replaced on topology changes
//! - [`palette`] - Per-dimension colors and HSL helpers

pub mod context;
pub mod camera;
pub mod pipeline;
pub mod renderable;
pub mod palette;

pub use camera::{OrbitCamera, Spherical};
pub use renderable::{GpuLines, LineGeometry};
pub use palette::{dimension_color, hsl_to_rgb, hue_color};
