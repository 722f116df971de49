//! N-dimensional vector type

use serde::{Serialize, Deserialize};

/// A 3D point handed to the renderer
pub type Vec3 = [f64; 3];

/// Vector with a runtime number of components
///
/// The dimension is the length of the component list. Operations between
/// two vectors expect equal dimensions; mismatches are a caller bug and
/// are caught by debug assertions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VecN {
    coords: Vec<f64>,
}

impl VecN {
    /// Create a vector from its components
    #[inline]
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Zero vector of dimension `n`
    #[inline]
    pub fn zeros(n: usize) -> Self {
        Self { coords: vec![0.0; n] }
    }

    /// Unit vector along `axis` in dimension `n`
    pub fn axis(n: usize, axis: usize) -> Self {
        let mut v = Self::zeros(n);
        if axis < n {
            v.coords[axis] = 1.0;
        }
        v
    }

    /// Number of components
    #[inline]
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    #[inline]
    pub fn into_inner(self) -> Vec<f64> {
        self.coords
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f64 {
        debug_assert_eq!(self.dim(), other.dim());
        self.coords.iter().zip(&other.coords).map(|(a, b)| a * b).sum()
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Linear interpolation between two vectors
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        debug_assert_eq!(self.dim(), other.dim());
        Self::new(
            self.coords
                .iter()
                .zip(&other.coords)
                .map(|(a, b)| a + (b - a) * t)
                .collect(),
        )
    }

    /// Component-wise sum
    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.dim(), other.dim());
        Self::new(self.coords.iter().zip(&other.coords).map(|(a, b)| a + b).collect())
    }

    /// Copy resized to `n` components, padding with zeros or dropping the tail
    pub fn resized(&self, n: usize) -> Self {
        let mut coords = self.coords.clone();
        coords.resize(n, 0.0);
        Self { coords }
    }

    /// The first three components, zero padded for dimensions below 3
    pub fn truncate3(&self) -> Vec3 {
        let mut out = [0.0; 3];
        for (o, c) in out.iter_mut().zip(&self.coords) {
            *o = *c;
        }
        out
    }

    /// True when every component is finite
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }

    /// Maximum absolute component difference
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        debug_assert_eq!(self.dim(), other.dim());
        self.coords
            .iter()
            .zip(&other.coords)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl From<Vec<f64>> for VecN {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(coords)
    }
}

impl From<&[f64]> for VecN {
    fn from(coords: &[f64]) -> Self {
        Self::new(coords.to_vec())
    }
}

impl std::ops::Index<usize> for VecN {
    type Output = f64;
    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.coords[i]
    }
}

impl std::ops::IndexMut<usize> for VecN {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.coords[i]
    }
}
