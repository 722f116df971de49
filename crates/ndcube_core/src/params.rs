//! View parameters driven by user input
//!
//! Input handlers mutate a [`ViewParams`] between frames; the animator reads
//! it every frame. Setters validate and leave the value untouched on error.

use serde::{Serialize, Deserialize};
use ndcube_math::RotationSchedule;
use crate::error::ParamError;
use crate::projector::DEFAULT_PERSPECTIVE_DISTANCE;

/// Which reduction to 3D the viewer uses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// First three coordinates
    #[default]
    Truncate,
    /// Oblique 3×n display matrix
    Oblique,
    /// Iterated perspective divide
    Perspective,
    /// 3×n matrix of uniform random entries, redrawn when the dimension changes
    Random,
}

impl ProjectionKind {
    /// Next kind in the cycle Truncate → Oblique → Perspective → Random → Truncate
    pub fn next(self) -> Self {
        match self {
            ProjectionKind::Truncate => ProjectionKind::Oblique,
            ProjectionKind::Oblique => ProjectionKind::Perspective,
            ProjectionKind::Perspective => ProjectionKind::Random,
            ProjectionKind::Random => ProjectionKind::Truncate,
        }
    }
}

/// Display-space axis the projected object can spin about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinAxis {
    X,
    Y,
    Z,
}

impl SpinAxis {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            SpinAxis::X => 0,
            SpinAxis::Y => 1,
            SpinAxis::Z => 2,
        }
    }
}

/// Current view state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewParams {
    dimension: usize,
    max_dimension: usize,
    size: f64,
    /// Rotation speed in radians per second
    speed: f64,
    recursion_depth: usize,
    /// Spin rate of the projected object in radians per second
    spin_speed: f64,
    /// Growth of `distortion` per second
    distortion_speed: f64,
    pub animating: bool,
    /// Static mode shows the unrotated cube and allows stepping dimensions
    pub static_mode: bool,
    pub schedule: RotationSchedule,
    pub projection: ProjectionKind,
    pub perspective_distance: f64,
    pub oblique_angle: f64,
    /// Random jitter added to the oblique or random matrix each frame
    pub distortion: f64,
    /// Draw the 2n facet cubes around cubes above 3D
    pub show_facets: bool,
    /// Spin direction weight per display axis (x, y, z)
    pub spin: [f64; 3],
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            dimension: 3,
            max_dimension: 10,
            size: 1.0,
            speed: 0.5,
            recursion_depth: 1,
            spin_speed: 0.5,
            distortion_speed: 0.0,
            animating: true,
            static_mode: false,
            schedule: RotationSchedule::Consecutive,
            projection: ProjectionKind::Truncate,
            perspective_distance: DEFAULT_PERSPECTIVE_DISTANCE,
            oblique_angle: std::f64::consts::FRAC_PI_4,
            distortion: 0.0,
            show_facets: false,
            spin: [0.0; 3],
        }
    }
}

impl ViewParams {
    /// Parameters with the given dimension bound
    pub fn with_max_dimension(max_dimension: usize) -> Self {
        let max_dimension = max_dimension.max(1);
        Self {
            dimension: 3.min(max_dimension),
            max_dimension,
            ..Self::default()
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn max_dimension(&self) -> usize {
        self.max_dimension
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn recursion_depth(&self) -> usize {
        self.recursion_depth
    }

    #[inline]
    pub fn spin_speed(&self) -> f64 {
        self.spin_speed
    }

    #[inline]
    pub fn distortion_speed(&self) -> f64 {
        self.distortion_speed
    }

    /// Check a requested dimension against `1..=max_dimension`
    pub fn validate_dimension(&self, value: i64) -> Result<usize, ParamError> {
        if value < 1 || value as u64 > self.max_dimension as u64 {
            return Err(ParamError::InvalidDimension { value, max: self.max_dimension });
        }
        Ok(value as usize)
    }

    pub fn set_dimension(&mut self, value: i64) -> Result<(), ParamError> {
        self.dimension = self.validate_dimension(value)?;
        Ok(())
    }

    pub fn set_size(&mut self, size: f64) -> Result<(), ParamError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(ParamError::InvalidSize(size));
        }
        self.size = size;
        Ok(())
    }

    /// Any finite speed; negative values spin the other way
    pub fn set_speed(&mut self, speed: f64) -> Result<(), ParamError> {
        if !speed.is_finite() {
            return Err(ParamError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    pub fn set_recursion_depth(&mut self, depth: usize) -> Result<(), ParamError> {
        if depth == 0 {
            return Err(ParamError::InvalidRecursionDepth(depth));
        }
        self.recursion_depth = depth;
        Ok(())
    }

    pub fn set_spin_speed(&mut self, speed: f64) -> Result<(), ParamError> {
        if !speed.is_finite() {
            return Err(ParamError::InvalidSpeed(speed));
        }
        self.spin_speed = speed;
        Ok(())
    }

    /// Any finite rate; negative values let the distortion decay
    pub fn set_distortion_speed(&mut self, speed: f64) -> Result<(), ParamError> {
        if !speed.is_finite() {
            return Err(ParamError::InvalidSpeed(speed));
        }
        self.distortion_speed = speed;
        Ok(())
    }

    /// Move `distortion` along by `dt` seconds of drift, never below zero
    pub fn drift_distortion(&mut self, dt: f64) {
        if self.distortion_speed != 0.0 {
            self.distortion = (self.distortion + self.distortion_speed * dt).max(0.0);
        }
    }

    /// Step one axis' spin direction through 0 → 1 → -1 → 0
    pub fn cycle_spin(&mut self, axis: SpinAxis) -> f64 {
        let direction = &mut self.spin[axis.index()];
        *direction = if *direction > 0.0 {
            -1.0
        } else if *direction < 0.0 {
            0.0
        } else {
            1.0
        };
        *direction
    }

    pub fn toggle_animation(&mut self) -> bool {
        self.animating = !self.animating;
        self.animating
    }

    pub fn toggle_static_mode(&mut self) -> bool {
        self.static_mode = !self.static_mode;
        self.static_mode
    }

    pub fn cycle_projection(&mut self) -> ProjectionKind {
        self.projection = self.projection.next();
        self.projection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = ViewParams::default();
        assert_eq!(p.dimension(), 3);
        assert_eq!(p.max_dimension(), 10);
        assert!(p.animating);
        assert!(!p.static_mode);
        assert_eq!(p.recursion_depth(), 1);
    }

    #[test]
    fn test_dimension_bounds() {
        let mut p = ViewParams::default();
        assert!(p.set_dimension(1).is_ok());
        assert!(p.set_dimension(10).is_ok());
        assert_eq!(p.set_dimension(0), Err(ParamError::InvalidDimension { value: 0, max: 10 }));
        assert_eq!(p.set_dimension(-2), Err(ParamError::InvalidDimension { value: -2, max: 10 }));
        assert!(p.set_dimension(11).is_err());
        // Failed sets leave the old value
        assert_eq!(p.dimension(), 10);
    }

    #[test]
    fn test_size_and_speed_validation() {
        let mut p = ViewParams::default();
        assert!(p.set_size(0.0).is_err());
        assert!(p.set_size(f64::NAN).is_err());
        assert!(p.set_size(2.0).is_ok());
        assert_eq!(p.size(), 2.0);

        assert!(p.set_speed(f64::INFINITY).is_err());
        assert!(p.set_speed(-1.0).is_ok());
        assert_eq!(p.speed(), -1.0);
    }

    #[test]
    fn test_recursion_depth_validation() {
        let mut p = ViewParams::default();
        assert_eq!(p.set_recursion_depth(0), Err(ParamError::InvalidRecursionDepth(0)));
        assert!(p.set_recursion_depth(4).is_ok());
        assert_eq!(p.recursion_depth(), 4);
    }

    #[test]
    fn test_projection_cycle() {
        let mut p = ViewParams::default();
        assert_eq!(p.cycle_projection(), ProjectionKind::Oblique);
        assert_eq!(p.cycle_projection(), ProjectionKind::Perspective);
        assert_eq!(p.cycle_projection(), ProjectionKind::Random);
        assert_eq!(p.cycle_projection(), ProjectionKind::Truncate);
    }

    #[test]
    fn test_spin_cycle() {
        let mut p = ViewParams::default();
        assert_eq!(p.spin, [0.0; 3]);
        assert_eq!(p.cycle_spin(SpinAxis::Y), 1.0);
        assert_eq!(p.cycle_spin(SpinAxis::Y), -1.0);
        assert_eq!(p.spin, [0.0, -1.0, 0.0]);
        assert_eq!(p.cycle_spin(SpinAxis::Y), 0.0);

        // Fractional weights from config continue the cycle by sign
        p.spin[2] = 0.25;
        assert_eq!(p.cycle_spin(SpinAxis::Z), -1.0);

        assert!(p.set_spin_speed(f64::NAN).is_err());
        assert!(p.set_spin_speed(-2.0).is_ok());
        assert_eq!(p.spin_speed(), -2.0);
    }

    #[test]
    fn test_distortion_drift() {
        let mut p = ViewParams::default();
        p.drift_distortion(10.0);
        assert_eq!(p.distortion, 0.0);

        p.set_distortion_speed(0.01).unwrap();
        p.drift_distortion(2.0);
        assert!((p.distortion - 0.02).abs() < 1e-12);

        // Decay stops at zero
        p.set_distortion_speed(-1.0).unwrap();
        p.drift_distortion(1.0);
        assert_eq!(p.distortion, 0.0);

        assert!(p.set_distortion_speed(f64::INFINITY).is_err());
        assert_eq!(p.distortion_speed(), -1.0);
    }

    #[test]
    fn test_with_max_dimension() {
        let p = ViewParams::with_max_dimension(2);
        assert_eq!(p.dimension(), 2);
        assert_eq!(p.max_dimension(), 2);
    }
}
