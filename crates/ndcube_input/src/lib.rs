//! Input handling for the ndcube viewer
//!
//! This crate turns raw mouse input into orbit camera motion with
//! drag rotation, wheel zoom and inertia.

mod orbit_controller;

pub use orbit_controller::{OrbitController, OrbitControl};
