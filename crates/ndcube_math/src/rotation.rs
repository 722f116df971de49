//! Composite rotations built from plane (Givens) rotations
//!
//! In n dimensions rotations happen in planes spanned by two axes. A
//! [`Rotation`] is an ordered list of such plane rotations; the first entry
//! is applied first, so for planes `P0, P1, …, Pk` the matrix is
//! `R_k · … · R_1 · R_0`.

use serde::{Serialize, Deserialize};
use crate::{MatN, MathError, VecN};

/// A rotation plane spanned by axes `a` and `b`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationPlane {
    pub a: usize,
    pub b: usize,
}

impl RotationPlane {
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Check that both axes exist in `dimension` and differ
    pub fn validate(&self, dimension: usize) -> Result<(), MathError> {
        for axis in [self.a, self.b] {
            if axis >= dimension {
                return Err(MathError::AxisOutOfRange { axis, dimension });
            }
        }
        if self.a == self.b {
            return Err(MathError::DegeneratePlane { axis: self.a });
        }
        Ok(())
    }
}

/// Which planes an animated rotation turns in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationSchedule {
    /// (0,1), (1,2), …, (n−2,n−1)
    #[default]
    Consecutive,
    /// Every (i, j) with i < j, in lexicographic order
    AllPairs,
}

impl RotationSchedule {
    /// The planes of this schedule for dimension `n`, in application order
    pub fn planes(self, n: usize) -> Vec<RotationPlane> {
        match self {
            RotationSchedule::Consecutive => {
                (1..n).map(|b| RotationPlane::new(b - 1, b)).collect()
            }
            RotationSchedule::AllPairs => {
                let mut planes = Vec::with_capacity(n * n.saturating_sub(1) / 2);
                for a in 0..n {
                    for b in (a + 1)..n {
                        planes.push(RotationPlane::new(a, b));
                    }
                }
                planes
            }
        }
    }
}

/// Ordered product of plane rotations in a fixed dimension
#[derive(Clone, Debug, PartialEq)]
pub struct Rotation {
    dimension: usize,
    steps: Vec<(RotationPlane, f64)>,
}

impl Rotation {
    /// The identity rotation in dimension `n`
    pub fn identity(n: usize) -> Self {
        Self { dimension: n, steps: Vec::new() }
    }

    /// A single plane rotation
    pub fn plane(n: usize, plane: RotationPlane, angle: f64) -> Result<Self, MathError> {
        Self::identity(n).then(plane, angle)
    }

    /// Append a plane rotation, applied after the existing ones
    pub fn then(mut self, plane: RotationPlane, angle: f64) -> Result<Self, MathError> {
        plane.validate(self.dimension)?;
        self.steps.push((plane, angle));
        Ok(self)
    }

    /// Every plane of `schedule` turned by the same angle
    pub fn uniform(n: usize, schedule: RotationSchedule, angle: f64) -> Self {
        let steps = schedule.planes(n).into_iter().map(|p| (p, angle)).collect();
        Self { dimension: n, steps }
    }

    /// Consecutive planes (0,1), (1,2), … each with its own angle
    ///
    /// `angles` must have exactly `n − 1` entries (none for n < 2).
    pub fn consecutive(n: usize, angles: &[f64]) -> Result<Self, MathError> {
        let planes = RotationSchedule::Consecutive.planes(n);
        if planes.len() != angles.len() {
            return Err(MathError::AngleCountMismatch {
                planes: planes.len(),
                angles: angles.len(),
            });
        }
        Ok(Self {
            dimension: n,
            steps: planes.into_iter().zip(angles.iter().copied()).collect(),
        })
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Plane/angle pairs in application order
    pub fn steps(&self) -> &[(RotationPlane, f64)] {
        &self.steps
    }

    /// The rotation undoing this one: reversed order, negated angles
    pub fn inverse(&self) -> Self {
        Self {
            dimension: self.dimension,
            steps: self.steps.iter().rev().map(|&(p, a)| (p, -a)).collect(),
        }
    }

    /// Compose into a single matrix `R_k · … · R_0`
    pub fn to_matrix(&self) -> MatN {
        let n = self.dimension;
        let mut m = MatN::identity(n);
        for &(plane, angle) in &self.steps {
            // Planes were validated on insertion
            let (sn, cs) = angle.sin_cos();
            let mut r = MatN::identity(n);
            r.set(plane.a, plane.a, cs);
            r.set(plane.a, plane.b, -sn);
            r.set(plane.b, plane.a, sn);
            r.set(plane.b, plane.b, cs);
            m = r.mul(&m);
        }
        m
    }

    /// Rotate a single vector step by step
    pub fn apply(&self, v: &VecN) -> Result<VecN, MathError> {
        if v.dim() != self.dimension {
            return Err(MathError::DimensionMismatch { expected: self.dimension, found: v.dim() });
        }
        let mut out = v.clone();
        for &(plane, angle) in &self.steps {
            let (sn, cs) = angle.sin_cos();
            let x = out[plane.a];
            let y = out[plane.b];
            out[plane.a] = cs * x - sn * y;
            out[plane.b] = sn * x + cs * y;
        }
        Ok(out)
    }
}
