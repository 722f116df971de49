//! Wireframe primitives for n-dimensional geometry
//!
//! Shapes are pure geometric data - vertices and the index pairs joining
//! them. Colors and GPU buffers live in the render crate.

use ndcube_math::VecN;

/// An edge between two vertices, stored with `a < b`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Create an edge in canonical order
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }

    /// Shift both indices, for merging several shapes into one buffer
    #[inline]
    pub fn offset(self, by: usize) -> Self {
        Self { a: self.a + by, b: self.b + by }
    }

    /// True if `idx` is one of the endpoints
    #[inline]
    pub fn touches(&self, idx: usize) -> bool {
        self.a == idx || self.b == idx
    }
}

/// Trait for n-dimensional shapes drawn as line segments
pub trait Polytope {
    /// Dimension of the space the vertices live in
    fn dimension(&self) -> usize;

    /// Get the vertices of this shape
    fn vertices(&self) -> &[VecN];

    /// Get the edges of this shape
    fn edges(&self) -> &[Edge];

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Number of edges incident to vertex `idx`
    fn degree(&self, idx: usize) -> usize {
        self.edges().iter().filter(|e| e.touches(idx)).count()
    }
}

/// A free-standing wireframe: vertices plus edges in a fixed dimension
#[derive(Clone, Debug, PartialEq)]
pub struct Wireframe {
    pub dimension: usize,
    pub vertices: Vec<VecN>,
    pub edges: Vec<Edge>,
}

impl Polytope for Wireframe {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn vertices(&self) -> &[VecN] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
