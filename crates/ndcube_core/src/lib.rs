//! Hypercube geometry and projection for the ndcube viewer
//!
//! This crate turns an n-dimensional hypercube into 3D line geometry:
//!
//! - [`Hypercube`] - Vertices and edges of the n-cube
//! - [`Projector`] - Composed rotation plus reduction to 3 coordinates
//! - [`ProjectedGeometry`] - 3D points with the shape's edge indices
//! - [`DimensionMorph`] - Eased transition between two dimensions
//! - [`ViewParams`] - Validated user-controlled parameters
//! - [`Animator`] - Per-frame driver tying the above together

mod polytope;
mod error;
mod hypercube;
mod projector;
mod morph;
mod params;
mod animator;

pub use polytope::{Edge, Polytope, Wireframe};
pub use error::{CoreError, GeometryError, ParamError};
pub use hypercube::{Facet, Hypercube, MAX_GENERATED_DIMENSION};
pub use projector::{
    perspective_reduce, ProjectedGeometry, Projector, Reduction, DEFAULT_PERSPECTIVE_DISTANCE,
};
pub use morph::{ease_in_out_quad, DimensionMorph};
pub use params::{ProjectionKind, SpinAxis, ViewParams};
pub use animator::{Animator, ParamChange, Segment, DEFAULT_MORPH_DURATION};

// Re-export commonly used math types for convenience
pub use ndcube_math::{
    DisplayMatrix, MatN, MathError, Rotation, RotationPlane, RotationSchedule, Vec3, VecN,
};
