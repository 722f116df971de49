//! 3×n display matrices mapping n-space onto 3-space

use rand::Rng;
use crate::{MathError, Vec3, VecN};

/// A 3×n linear map used to bring rotated vertices into 3D
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayMatrix {
    n: usize,
    rows: [Vec<f64>; 3],
}

impl DisplayMatrix {
    /// Build from three rows of length `n`
    pub fn from_rows(rows: [Vec<f64>; 3]) -> Result<Self, MathError> {
        let n = rows[0].len();
        for row in &rows[1..] {
            if row.len() != n {
                return Err(MathError::DimensionMismatch { expected: n, found: row.len() });
            }
        }
        Ok(Self { n, rows })
    }

    /// Keep the first three coordinates (rows e0, e1, e2)
    pub fn truncation(n: usize) -> Self {
        let rows = std::array::from_fn(|k| {
            let mut row = vec![0.0; n];
            if k < n {
                row[k] = 1.0;
            }
            row
        });
        Self { n, rows }
    }

    /// Oblique projection: `cos(angle)` on the diagonal and `-sin(angle)` on
    /// the wrapped sub-diagonal (`k == (j + 1) % n`, plus `(0, n - 1)`).
    pub fn oblique(n: usize, angle: f64) -> Self {
        let (sn, cs) = angle.sin_cos();
        let rows = std::array::from_fn(|k| {
            (0..n)
                .map(|j| {
                    if k == j {
                        cs
                    } else if k == (j + 1) % n || (k == 0 && j == n - 1) {
                        -sn
                    } else {
                        0.0
                    }
                })
                .collect()
        });
        Self { n, rows }
    }

    /// Matrix with every entry drawn from `U(-1, 1)`
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let rows = std::array::from_fn(|_| (0..n).map(|_| rng.gen_range(-1.0f64..=1.0)).collect());
        Self { n, rows }
    }

    /// Copy with every entry jittered by `factor · U(-1, 1)`
    pub fn distorted<R: Rng>(&self, factor: f64, rng: &mut R) -> Self {
        let rows = std::array::from_fn(|k| {
            self.rows[k]
                .iter()
                .map(|v| v + factor * rng.gen_range(-1.0f64..=1.0))
                .collect()
        });
        Self { n: self.n, rows }
    }

    /// Source dimension
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<f64>; 3] {
        &self.rows
    }

    /// `P · v`
    pub fn apply(&self, v: &VecN) -> Vec3 {
        debug_assert_eq!(self.n, v.dim());
        let x = v.as_slice();
        std::array::from_fn(|k| self.rows[k].iter().zip(x).map(|(p, c)| p * c).sum())
    }
}
