//! Application systems
//!
//! Window, animation and rendering, kept out of main.rs so each can be tested.

mod animation;
mod render;
mod window;

pub use animation::AnimationSystem;
pub use render::{base_color, RenderError, RenderSystem};
pub use window::{format_title, TitleStatus, WindowError, WindowSystem};
