//! N-dimensional hypercube geometry
//!
//! An n-cube has 2^n vertices (all combinations of ±s on n axes) and
//! n·2^(n-1) edges joining vertices that differ on exactly one axis.
//!
//! Vertex `i` is positive on axis `j` exactly when bit `j` of `i` is set,
//! so the neighbours of `i` are `i ^ (1 << j)`.

use ndcube_math::VecN;
use crate::error::GeometryError;
use crate::polytope::{Edge, Polytope, Wireframe};

/// Largest dimension the generator will enumerate (2^20 vertices)
pub const MAX_GENERATED_DIMENSION: usize = 20;

/// A hypercube centered at the origin - pure geometry without colors
#[derive(Clone, Debug, PartialEq)]
pub struct Hypercube {
    dimension: usize,
    /// Absolute value of every vertex coordinate
    size: f64,
    vertices: Vec<VecN>,
    edges: Vec<Edge>,
}

impl Hypercube {
    /// Generate the hypercube of `dimension` with coordinates `±size`
    ///
    /// Dimension 0 yields a single empty vertex and no edges.
    pub fn new(dimension: usize, size: f64) -> Result<Self, GeometryError> {
        if dimension > MAX_GENERATED_DIMENSION {
            return Err(GeometryError::DimensionTooLarge {
                dimension,
                max: MAX_GENERATED_DIMENSION,
            });
        }
        if !(size.is_finite() && size > 0.0) {
            return Err(GeometryError::InvalidSize(size));
        }

        Ok(Self {
            dimension,
            size,
            vertices: Self::generate_vertices(dimension, size),
            edges: Self::generate_edges(dimension),
        })
    }

    /// The unit hypercube (coordinates ±1)
    pub fn unit(dimension: usize) -> Result<Self, GeometryError> {
        Self::new(dimension, 1.0)
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Expected vertex count for dimension `n`, `None` when it overflows `usize`
    #[inline]
    pub fn expected_vertex_count(n: usize) -> Option<usize> {
        1usize.checked_shl(u32::try_from(n).ok()?)
    }

    /// Expected edge count for dimension `n`: n·2^(n-1), `None` when it overflows `usize`
    #[inline]
    pub fn expected_edge_count(n: usize) -> Option<usize> {
        if n == 0 {
            return Some(0);
        }
        n.checked_mul(Self::expected_vertex_count(n - 1)?)
    }

    fn generate_vertices(n: usize, s: f64) -> Vec<VecN> {
        (0..1usize << n)
            .map(|i| {
                VecN::new(
                    (0..n)
                        .map(|j| if i & (1 << j) != 0 { s } else { -s })
                        .collect(),
                )
            })
            .collect()
    }

    /// Pair each vertex with its single-bit-flip neighbours, keeping each
    /// edge once (from its lower index). O(2^n · n).
    fn generate_edges(n: usize) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(Self::expected_edge_count(n).unwrap_or(0));
        for i in 0..1usize << n {
            for j in 0..n {
                let neighbour = i ^ (1 << j);
                if neighbour > i {
                    edges.push(Edge { a: i, b: neighbour });
                }
            }
        }
        edges
    }

    /// The 2n facet cubes arranged around this one.
    ///
    /// For each axis and side, an (n-1)-cube of the same size is embedded in
    /// n-space (extra coordinate 0) and shifted by `±2·size` along that
    /// axis. Empty for n = 0.
    pub fn facets(&self) -> Result<Vec<Facet>, GeometryError> {
        let n = self.dimension;
        if n == 0 {
            return Ok(Vec::new());
        }
        let child = Hypercube::new(n - 1, self.size)?;
        let mut facets = Vec::with_capacity(2 * n);

        for axis in 0..n {
            for side in [1.0, -1.0] {
                let mut offset = VecN::zeros(n);
                offset[axis] = side * 2.0 * self.size;

                let vertices = child
                    .vertices()
                    .iter()
                    .map(|v| v.resized(n).add(&offset))
                    .collect();

                let half_turn = if side > 0.0 { 0.0 } else { 0.5 };
                facets.push(Facet {
                    axis,
                    side,
                    hue: (axis as f64 + half_turn) / n as f64,
                    shape: Wireframe {
                        dimension: n,
                        vertices,
                        edges: child.edges().to_vec(),
                    },
                });
            }
        }

        Ok(facets)
    }
}

impl Polytope for Hypercube {
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

/// A lower-dimensional cube placed beside its parent in the parent's space
#[derive(Clone, Debug, PartialEq)]
pub struct Facet {
    /// Axis the facet is shifted along
    pub axis: usize,
    /// +1.0 or -1.0
    pub side: f64,
    /// Hue in [0, 1) for coloring
    pub hue: f64,
    pub shape: Wireframe,
}

impl Polytope for Facet {
    fn dimension(&self) -> usize {
        self.shape.dimension
    }

    fn vertices(&self) -> &[VecN] {
        &self.shape.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.shape.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_counts_for_small_dimensions() {
        for n in 1..=10 {
            let cube = Hypercube::unit(n).unwrap();
            assert_eq!(cube.vertex_count(), 1 << n, "vertices for n={}", n);
            assert_eq!(cube.edge_count(), n * (1 << (n - 1)), "edges for n={}", n);
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_expected_counts_overflow() {
        assert_eq!(Hypercube::expected_vertex_count(0), Some(1));
        assert_eq!(Hypercube::expected_edge_count(0), Some(0));
        assert_eq!(Hypercube::expected_vertex_count(63), Some(1 << 63));
        assert_eq!(Hypercube::expected_vertex_count(64), None);
        assert_eq!(Hypercube::expected_vertex_count(usize::MAX), None);
        // 60 · 2^59 no longer fits
        assert_eq!(Hypercube::expected_edge_count(59), Some(59 << 58));
        assert_eq!(Hypercube::expected_edge_count(60), None);
        assert_eq!(Hypercube::expected_edge_count(64), None);
    }

    #[test]
    fn test_every_vertex_has_n_edges() {
        for n in 1..=7 {
            let cube = Hypercube::unit(n).unwrap();
            let mut degree = vec![0usize; cube.vertex_count()];
            for e in cube.edges() {
                degree[e.a] += 1;
                degree[e.b] += 1;
            }
            assert!(degree.iter().all(|&d| d == n), "n={} degrees {:?}", n, degree);
        }
    }

    #[test]
    fn test_square() {
        let square = Hypercube::unit(2).unwrap();
        let coords: Vec<&[f64]> = square.vertices().iter().map(|v| v.as_slice()).collect();
        assert_eq!(
            coords,
            vec![&[-1.0, -1.0][..], &[1.0, -1.0][..], &[-1.0, 1.0][..], &[1.0, 1.0][..]]
        );

        let edges: HashSet<Edge> = square.edges().iter().copied().collect();
        let expected: HashSet<Edge> =
            [Edge::new(0, 1), Edge::new(0, 2), Edge::new(1, 3), Edge::new(2, 3)].into();
        assert_eq!(edges, expected);
        // No diagonals
        assert!(!edges.contains(&Edge::new(0, 3)));
        assert!(!edges.contains(&Edge::new(1, 2)));
    }

    #[test]
    fn test_cube() {
        let cube = Hypercube::unit(3).unwrap();
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.edge_count(), 12);
    }

    #[test]
    fn test_edges_differ_in_one_coordinate() {
        let cube = Hypercube::new(5, 0.5).unwrap();
        for e in cube.edges() {
            assert!(e.a < e.b);
            let va = &cube.vertices()[e.a];
            let vb = &cube.vertices()[e.b];
            let diff = va
                .as_slice()
                .iter()
                .zip(vb.as_slice())
                .filter(|(x, y)| x != y)
                .count();
            assert_eq!(diff, 1);
        }
    }

    #[test]
    fn test_matches_pairwise_search() {
        // The bit-flip generator agrees with the quadratic Hamming search
        let n = 4;
        let cube = Hypercube::unit(n).unwrap();
        let mut brute = Vec::new();
        for i in 0..cube.vertex_count() {
            for j in (i + 1)..cube.vertex_count() {
                if (i ^ j).count_ones() == 1 {
                    brute.push(Edge::new(i, j));
                }
            }
        }
        let mut ours = cube.edges().to_vec();
        ours.sort();
        brute.sort();
        assert_eq!(ours, brute);
    }

    #[test]
    fn test_size_scales_coordinates() {
        let cube = Hypercube::new(3, 2.5).unwrap();
        assert_eq!(cube.size(), 2.5);
        assert!(cube
            .vertices()
            .iter()
            .all(|v| v.as_slice().iter().all(|c| c.abs() == 2.5)));
        assert_eq!(cube.vertices()[7].as_slice(), &[2.5, 2.5, 2.5]);
    }

    #[test]
    fn test_dimension_zero() {
        let point = Hypercube::unit(0).unwrap();
        assert_eq!(point.vertex_count(), 1);
        assert_eq!(point.vertices()[0].dim(), 0);
        assert_eq!(point.edge_count(), 0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            Hypercube::unit(MAX_GENERATED_DIMENSION + 1),
            Err(GeometryError::DimensionTooLarge { dimension: 21, max: 20 })
        );
        assert_eq!(Hypercube::new(3, 0.0), Err(GeometryError::InvalidSize(0.0)));
        assert!(Hypercube::new(3, -1.0).is_err());
        assert!(Hypercube::new(3, f64::NAN).is_err());
        assert!(Hypercube::new(3, f64::INFINITY).is_err());
    }

    #[test]
    fn test_facets() {
        let tesseract = Hypercube::unit(4).unwrap();
        let facets = tesseract.facets().unwrap();
        assert_eq!(facets.len(), 8);
        for f in &facets {
            assert_eq!(f.dimension(), 4);
            assert_eq!(f.vertex_count(), 8);
            assert_eq!(f.edge_count(), 12);
            assert!(f.hue >= 0.0 && f.hue < 1.0);
            // The padded axis sits exactly on the offset; the others are ±1 around it
            let expected = if f.axis == 3 { 0.0 } else { 1.0 };
            for v in f.vertices() {
                assert_eq!((v[f.axis] - 2.0 * f.side).abs(), expected);
            }
        }
        assert!(Hypercube::unit(0).unwrap().facets().unwrap().is_empty());
    }
}
