//! ndcube - N-dimensional hypercube viewer
//!
//! Application layer: configuration, keyboard mapping and the systems that
//! tie the animator to a window and the GPU.

pub mod config;
pub mod input;
pub mod systems;
