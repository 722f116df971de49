//! N-Dimensional Mathematics Library
//!
//! Vectors, square matrices and plane rotations with a runtime dimension,
//! used by the ndcube viewer to turn hypercubes in n-space.
//!
//! ## Core Types
//!
//! - [`VecN`] - vector with n components
//! - [`MatN`] - n×n matrix, including plane (Givens) rotations
//! - [`Rotation`] - ordered product of plane rotations
//! - [`DisplayMatrix`] - 3×n map down to 3D

mod vecn;
mod error;
pub mod matn;
pub mod rotation;
pub mod projection;

pub use vecn::{Vec3, VecN};
pub use error::MathError;
pub use matn::MatN;
pub use rotation::{Rotation, RotationPlane, RotationSchedule};
pub use projection::DisplayMatrix;
