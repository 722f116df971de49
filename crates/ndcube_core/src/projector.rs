//! Rotate n-dimensional wireframes and bring them down to 3D
//!
//! The projector holds a composed rotation (optionally raised to a
//! recursion depth) and a reduction to 3 coordinates. It is stateless:
//! calling [`Projector::project`] twice with the same shape gives the same
//! result.
//!
//! Non-finite output coordinates are replaced by `0.0`. Vertices are never
//! dropped, so edge indices stay valid for the renderer; the number of
//! replaced coordinates is reported in [`ProjectedGeometry::coerced`].

use ndcube_math::{DisplayMatrix, MatN, MathError, Rotation, Vec3, VecN};
use crate::polytope::{Edge, Polytope};

/// Distance used by the perspective reduction unless configured otherwise
pub const DEFAULT_PERSPECTIVE_DISTANCE: f64 = 3.0;

/// How rotated n-vectors become 3-vectors
#[derive(Clone, Debug, PartialEq)]
pub enum Reduction {
    /// Keep the first three coordinates
    Truncate,
    /// Multiply by a 3×n display matrix
    Display(DisplayMatrix),
    /// Repeatedly divide out the last coordinate: `x *= d / (d + w)`
    Perspective { distance: f64 },
}

/// Projected points in vertex order, with the shape's edges
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectedGeometry {
    pub points: Vec<Vec3>,
    pub edges: Vec<Edge>,
    /// Number of non-finite coordinates replaced by zero
    pub coerced: usize,
}

impl ProjectedGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append another projection, offsetting its edge indices
    pub fn append(&mut self, other: ProjectedGeometry) {
        let offset = self.points.len();
        self.points.extend(other.points);
        self.edges.extend(other.edges.into_iter().map(|e| e.offset(offset)));
        self.coerced += other.coerced;
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Clear without releasing capacity
    pub fn clear(&mut self) {
        self.points.clear();
        self.edges.clear();
        self.coerced = 0;
    }
}

/// Rotation plus reduction, applied vertex by vertex
#[derive(Clone, Debug)]
pub struct Projector {
    /// Single rotation step
    rotation: MatN,
    /// `rotation` raised to `recursion_depth`
    effective: MatN,
    recursion_depth: usize,
    reduction: Reduction,
}

impl Projector {
    /// Projector applying `rotation` once and truncating to 3D
    pub fn new(rotation: &Rotation) -> Self {
        Self::from_matrix(rotation.to_matrix())
    }

    /// Projector from an already composed rotation matrix
    pub fn from_matrix(rotation: MatN) -> Self {
        Self {
            effective: rotation.clone(),
            rotation,
            recursion_depth: 1,
            reduction: Reduction::Truncate,
        }
    }

    /// Reapply the rotation `depth` times before reducing; 0 is treated as 1
    pub fn with_recursion_depth(mut self, depth: usize) -> Self {
        self.recursion_depth = depth.max(1);
        self.effective = self.rotation.pow(self.recursion_depth);
        self
    }

    /// Reduce through a 3×n display matrix of matching dimension
    pub fn with_display(mut self, display: DisplayMatrix) -> Result<Self, MathError> {
        if display.dim() != self.rotation.dim() {
            return Err(MathError::DimensionMismatch {
                expected: self.rotation.dim(),
                found: display.dim(),
            });
        }
        self.reduction = Reduction::Display(display);
        Ok(self)
    }

    /// Reduce with the iterative perspective divide
    pub fn with_perspective(mut self, distance: f64) -> Self {
        self.reduction = Reduction::Perspective { distance };
        self
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.rotation.dim()
    }

    #[inline]
    pub fn recursion_depth(&self) -> usize {
        self.recursion_depth
    }

    #[inline]
    pub fn reduction(&self) -> &Reduction {
        &self.reduction
    }

    /// Rotate and reduce one vertex; may contain non-finite values
    pub fn project_point(&self, v: &VecN) -> Vec3 {
        let rotated = self.effective.transform(v);
        match &self.reduction {
            Reduction::Truncate => rotated.truncate3(),
            Reduction::Display(display) => display.apply(&rotated),
            Reduction::Perspective { distance } => perspective_reduce(rotated, *distance),
        }
    }

    /// Project every vertex of `shape`, keeping vertex order and edges
    pub fn project<P: Polytope + ?Sized>(&self, shape: &P) -> Result<ProjectedGeometry, MathError> {
        if shape.dimension() != self.dimension() {
            return Err(MathError::DimensionMismatch {
                expected: self.dimension(),
                found: shape.dimension(),
            });
        }

        let mut coerced = 0;
        let points = shape
            .vertices()
            .iter()
            .map(|v| {
                let mut p = self.project_point(v);
                for c in p.iter_mut() {
                    if !c.is_finite() {
                        *c = 0.0;
                        coerced += 1;
                    }
                }
                p
            })
            .collect();

        if coerced > 0 {
            log::debug!("Replaced {} non-finite projected coordinates with 0", coerced);
        }

        Ok(ProjectedGeometry {
            points,
            edges: shape.edges().to_vec(),
            coerced,
        })
    }
}

/// Drop dimensions one at a time until three remain, scaling the leading
/// coordinates by `distance / (distance + w)` where `w` is the coordinate
/// being dropped. Dimensions below 3 are zero padded.
pub fn perspective_reduce(v: VecN, distance: f64) -> Vec3 {
    let mut coords = v.into_inner();
    while coords.len() > 3 {
        let w = coords.pop().unwrap_or(0.0);
        let scale = distance / (distance + w);
        for c in coords.iter_mut() {
            *c *= scale;
        }
    }
    VecN::new(coords).truncate3()
}
