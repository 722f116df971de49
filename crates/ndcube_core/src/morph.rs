//! Smooth transition between hypercubes of different dimensions
//!
//! Both vertex sets are padded to a common dimension and vertex count
//! (missing entries are zero) and interpolated with an ease-in-out curve.
//! While morphing, the edges of the larger cube are drawn.

use ndcube_math::VecN;
use crate::hypercube::Hypercube;
use crate::polytope::{Polytope, Wireframe};

/// Quadratic ease-in-out on `[0, 1]`
#[inline]
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// An in-progress dimension change
#[derive(Clone, Debug)]
pub struct DimensionMorph {
    source: Vec<VecN>,
    target: Vec<VecN>,
    frame: Wireframe,
    target_cube: Hypercube,
    duration: f64,
    elapsed: f64,
}

impl DimensionMorph {
    /// Start morphing `from` into `to` over `duration` seconds
    pub fn new(from: &Hypercube, to: Hypercube, duration: f64) -> Self {
        let dimension = from.dimension().max(to.dimension());
        let count = from.vertex_count().max(to.vertex_count());

        let pad = |shape: &Hypercube| -> Vec<VecN> {
            let mut out: Vec<VecN> = shape.vertices().iter().map(|v| v.resized(dimension)).collect();
            out.resize(count, VecN::zeros(dimension));
            out
        };
        let source = pad(from);
        let target = pad(&to);

        let edges = if to.vertex_count() >= from.vertex_count() {
            to.edges().to_vec()
        } else {
            from.edges().to_vec()
        };

        let frame = Wireframe {
            dimension,
            vertices: source.clone(),
            edges,
        };

        Self {
            source,
            target,
            frame,
            target_cube: to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and recompute the interpolated vertices
    pub fn advance(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        let t = ease_in_out_quad(self.progress());
        for (out, (a, b)) in self
            .frame
            .vertices
            .iter_mut()
            .zip(self.source.iter().zip(&self.target))
        {
            *out = a.lerp(b, t);
        }
    }

    /// Linear progress in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Dimension the interpolated vertices live in
    pub fn dimension(&self) -> usize {
        self.frame.dimension
    }

    /// The interpolated shape for the current progress
    pub fn shape(&self) -> &Wireframe {
        &self.frame
    }

    pub fn target(&self) -> &Hypercube {
        &self.target_cube
    }

    /// Consume the morph, yielding the target hypercube
    pub fn finish(self) -> Hypercube {
        self.target_cube
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert_eq!(ease_in_out_quad(2.0), 1.0);
        assert!(ease_in_out_quad(0.25) < 0.25);
        assert!(ease_in_out_quad(0.75) > 0.75);
    }

    #[test]
    fn test_growing_morph() {
        let from = Hypercube::unit(3).unwrap();
        let to = Hypercube::unit(4).unwrap();
        let mut morph = DimensionMorph::new(&from, to.clone(), 2.0);

        assert_eq!(morph.dimension(), 4);
        assert_eq!(morph.target(), &to);
        assert_eq!(morph.shape().vertex_count(), 16);
        assert_eq!(morph.shape().edges, to.edges());
        // Start: the cube padded with a zero fourth coordinate, extra vertices at origin
        assert_eq!(morph.shape().vertices[7].as_slice(), &[1.0, 1.0, 1.0, 0.0]);
        assert_eq!(morph.shape().vertices[12], VecN::zeros(4));

        morph.advance(1.0);
        assert!((morph.progress() - 0.5).abs() < 1e-12);
        assert!(!morph.is_finished());

        morph.advance(5.0);
        assert!(morph.is_finished());
        assert_eq!(morph.shape().vertices, to.vertices());
        assert_eq!(morph.finish(), to);
    }

    #[test]
    fn test_shrinking_morph_keeps_larger_edges() {
        let from = Hypercube::unit(4).unwrap();
        let to = Hypercube::unit(2).unwrap();
        let mut morph = DimensionMorph::new(&from, to, 1.0);
        assert_eq!(morph.shape().edge_count(), 32);
        morph.advance(1.0);
        assert_eq!(morph.shape().vertices[3].as_slice(), &[1.0, 1.0, 0.0, 0.0]);
        assert_eq!(morph.shape().vertices[15], VecN::zeros(4));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let morph = DimensionMorph::new(&Hypercube::unit(2).unwrap(), Hypercube::unit(3).unwrap(), 0.0);
        assert!(morph.is_finished());
    }
}
