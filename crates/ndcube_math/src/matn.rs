//! Square n×n matrices and plane rotations
//!
//! Matrices are stored row-major, so `m.get(i, j)` is row `i`, column `j`,
//! and [`MatN::transform`] computes `M · v`.

use crate::{MathError, VecN};

/// Square matrix with a runtime dimension (row-major)
#[derive(Clone, Debug, PartialEq)]
pub struct MatN {
    n: usize,
    data: Vec<f64>,
}

impl MatN {
    /// Identity matrix of dimension `n`
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self { n, data }
    }

    /// Build a matrix from rows; every row must have `rows.len()` entries
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MathError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(MathError::DimensionMismatch { expected: n, found: row.len() });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    /// Create a rotation by `angle` radians in the plane of axes `i` and `j`.
    ///
    /// Identity everywhere except the 2×2 block
    /// `[[cos, -sin], [sin, cos]]` at rows/columns `i`, `j`.
    ///
    /// # Example
    /// ```
    /// use ndcube_math::MatN;
    /// let r = MatN::plane_rotation(4, 0, 1, 0.5).unwrap();
    /// assert_eq!(r.dim(), 4);
    /// ```
    pub fn plane_rotation(n: usize, i: usize, j: usize, angle: f64) -> Result<Self, MathError> {
        for axis in [i, j] {
            if axis >= n {
                return Err(MathError::AxisOutOfRange { axis, dimension: n });
            }
        }
        if i == j {
            return Err(MathError::DegeneratePlane { axis: i });
        }

        let (sn, cs) = angle.sin_cos();
        let mut m = Self::identity(n);
        m.set(i, i, cs);
        m.set(i, j, -sn);
        m.set(j, i, sn);
        m.set(j, j, cs);
        Ok(m)
    }

    /// Dimension (number of rows and columns)
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.n + col] = value;
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Matrix product `self · other` (applies `other` first)
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.n, other.n);
        let n = self.n;
        let mut result = vec![0.0; n * n];
        for i in 0..n {
            for k in 0..n {
                let a = self.data[i * n + k];
                if a == 0.0 {
                    continue;
                }
                for j in 0..n {
                    result[i * n + j] += a * other.data[k * n + j];
                }
            }
        }
        Self { n, data: result }
    }

    /// Transform a vector: `M · v`
    pub fn transform(&self, v: &VecN) -> VecN {
        debug_assert_eq!(self.n, v.dim());
        let x = v.as_slice();
        VecN::new(
            (0..self.n)
                .map(|i| self.row(i).iter().zip(x).map(|(m, c)| m * c).sum())
                .collect(),
        )
    }

    /// Checked variant of [`MatN::transform`]
    pub fn try_transform(&self, v: &VecN) -> Result<VecN, MathError> {
        if v.dim() != self.n {
            return Err(MathError::DimensionMismatch { expected: self.n, found: v.dim() });
        }
        Ok(self.transform(v))
    }

    /// Transpose (the inverse, for a rotation)
    pub fn transpose(&self) -> Self {
        let n = self.n;
        let mut t = Self::identity(n);
        for i in 0..n {
            for j in 0..n {
                t.data[j * n + i] = self.data[i * n + j];
            }
        }
        t
    }

    /// `self` multiplied by itself `k` times; `k = 0` is the identity
    pub fn pow(&self, k: usize) -> Self {
        let mut result = Self::identity(self.n);
        for _ in 0..k {
            result = self.mul(&result);
        }
        result
    }

    /// Check `Mᵀ · M ≈ I` within `tolerance`
    pub fn is_orthogonal(&self, tolerance: f64) -> bool {
        let product = self.transpose().mul(self);
        let identity = Self::identity(self.n);
        product
            .data
            .iter()
            .zip(&identity.data)
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-12;

    fn vec_approx_eq(a: &VecN, b: &VecN) -> bool {
        a.max_abs_diff(b) < EPSILON
    }

    #[test]
    fn test_identity_transform() {
        let v = VecN::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(MatN::identity(5).transform(&v), v);
    }

    #[test]
    fn test_plane_rotation_entries() {
        let angle = 0.3f64;
        let m = MatN::plane_rotation(4, 1, 2, angle).unwrap();
        assert_eq!(m.get(1, 1), angle.cos());
        assert_eq!(m.get(1, 2), -angle.sin());
        assert_eq!(m.get(2, 1), angle.sin());
        assert_eq!(m.get(2, 2), angle.cos());
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(3, 3), 1.0);
        assert_eq!(m.get(0, 3), 0.0);
    }

    #[test]
    fn test_plane_rotation_quarter_turn() {
        // 90° in the XY plane sends X to Y and Y to -X
        let m = MatN::plane_rotation(3, 0, 1, FRAC_PI_2).unwrap();
        let x = VecN::axis(3, 0);
        let y = VecN::axis(3, 1);
        assert!(vec_approx_eq(&m.transform(&x), &y));
        assert!(vec_approx_eq(&m.transform(&y), &VecN::new(vec![-1.0, 0.0, 0.0])));
        let z = VecN::axis(3, 2);
        assert!(vec_approx_eq(&m.transform(&z), &z), "Z should be unchanged");
    }

    #[test]
    fn test_plane_rotation_rejects_bad_axes() {
        assert_eq!(
            MatN::plane_rotation(3, 0, 3, 1.0),
            Err(MathError::AxisOutOfRange { axis: 3, dimension: 3 })
        );
        assert_eq!(
            MatN::plane_rotation(3, 1, 1, 1.0),
            Err(MathError::DegeneratePlane { axis: 1 })
        );
        assert!(MatN::plane_rotation(1, 0, 1, 1.0).is_err());
    }

    #[test]
    fn test_mul_composition() {
        let r45 = MatN::plane_rotation(4, 2, 3, 0.25 * std::f64::consts::PI).unwrap();
        let r90 = MatN::plane_rotation(4, 2, 3, FRAC_PI_2).unwrap();
        let composed = r45.mul(&r45);
        let v = VecN::new(vec![0.5, -1.0, 1.0, 2.0]);
        assert!(vec_approx_eq(&composed.transform(&v), &r90.transform(&v)));
    }

    #[test]
    fn test_transpose_inverts_rotation() {
        let r = MatN::plane_rotation(5, 3, 4, 1.234).unwrap();
        let product = r.transpose().mul(&r);
        for i in 0..5 {
            for j in 0..5 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((product.get(i, j) - expected).abs() < EPSILON);
            }
        }
        assert!(r.is_orthogonal(1e-12));
    }

    #[test]
    fn test_pow() {
        let r = MatN::plane_rotation(3, 0, 1, 0.1).unwrap();
        let r3 = MatN::plane_rotation(3, 0, 1, 0.3).unwrap();
        let v = VecN::new(vec![1.0, 2.0, 3.0]);
        assert!(vec_approx_eq(&r.pow(3).transform(&v), &r3.transform(&v)));
        assert_eq!(r.pow(0), MatN::identity(3));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(MatN::from_rows(&[vec![1.0, 0.0], vec![0.0]]).is_err());
        let m = MatN::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.get(1, 0), 3.0);
    }

    #[test]
    fn test_try_transform_dimension_mismatch() {
        let m = MatN::identity(3);
        assert_eq!(
            m.try_transform(&VecN::zeros(4)),
            Err(MathError::DimensionMismatch { expected: 3, found: 4 })
        );
    }
}
