//! Rendering pipeline components
//!
//! A single line-list pipeline draws the projected wireframe.

pub mod types;
pub mod line_pipeline;

pub use types::{LineUniforms, LineVertex};
pub use line_pipeline::{
    LinePipeline, DEPTH_FORMAT, euler_rotation_matrix, perspective_matrix, look_at_matrix,
    mat4_mul, transform_point,
};
