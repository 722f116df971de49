//! Orbit camera around the origin
//!
//! Position is kept in spherical coordinates. Input moves a target
//! position; every update the camera eases toward it, which gives the
//! damped feel of the viewer. The polar angle stays strictly inside
//! (0, π) so the view never flips over the poles.

use std::f32::consts::PI;
use ndcube_input::OrbitControl;
use crate::pipeline::{look_at_matrix, mat4_mul, perspective_matrix};

/// Margin kept between the polar angle and the poles
const POLE_EPSILON: f32 = 1e-6;

/// Frame rate the damping factor is specified at
const REFERENCE_FPS: f32 = 60.0;

/// Spherical coordinates with y up: `phi` is measured from +y, `theta`
/// around the y axis starting at +z
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
}

impl Spherical {
    pub fn new(radius: f32, theta: f32, phi: f32) -> Self {
        Self { radius, theta, phi }
    }

    pub fn from_cartesian(p: [f32; 3]) -> Self {
        let radius = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        if radius == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        Self {
            radius,
            theta: p[0].atan2(p[2]),
            phi: (p[1] / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_cartesian(self) -> [f32; 3] {
        let sin_phi = self.phi.sin();
        [
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        ]
    }
}

/// Camera orbiting a fixed point
pub struct OrbitCamera {
    current: Spherical,
    target: Spherical,
    home: Spherical,
    /// Point the camera looks at
    pub focus: [f32; 3],
    /// Fraction of the remaining distance left after one reference frame
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(15.0)
    }
}

impl OrbitCamera {
    /// Camera on the +z axis at `distance` from the origin
    pub fn new(distance: f32) -> Self {
        let home = Spherical::new(distance, 0.0, PI / 2.0);
        Self {
            current: home,
            target: home,
            home,
            focus: [0.0; 3],
            damping_factor: 0.1,
            min_distance: 5.0,
            max_distance: 1000.0,
            fov_y: 75f32.to_radians(),
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Builder: set distance bounds; the current distance is clamped into them
    pub fn with_limits(mut self, min_distance: f32, max_distance: f32) -> Self {
        self.min_distance = min_distance.max(0.0);
        self.max_distance = max_distance.max(self.min_distance);
        self.home.radius = self.clamp_radius(self.home.radius);
        self.current = self.home;
        self.target = self.home;
        self
    }

    /// Builder: set the perspective parameters (field of view in degrees)
    pub fn with_projection(mut self, fov_degrees: f32, near: f32, far: f32) -> Self {
        self.fov_y = fov_degrees.to_radians();
        self.near = near;
        self.far = far;
        self
    }

    /// Builder: set the damping factor
    pub fn with_damping(mut self, damping_factor: f32) -> Self {
        self.damping_factor = damping_factor.clamp(0.0, 1.0);
        self
    }

    pub fn spherical(&self) -> Spherical {
        self.current
    }

    pub fn target_spherical(&self) -> Spherical {
        self.target
    }

    /// Ease back to the starting position the short way round
    pub fn reset(&mut self) {
        self.current.theta = wrap_angle(self.current.theta);
        self.target = self.home;
    }

    /// Jump to the target without easing
    pub fn snap(&mut self) {
        self.current = self.target;
    }

    pub fn eye(&self) -> [f32; 3] {
        let offset = self.current.to_cartesian();
        [
            self.focus[0] + offset[0],
            self.focus[1] + offset[1],
            self.focus[2] + offset[2],
        ]
    }

    pub fn view_matrix(&self) -> [[f32; 4]; 4] {
        look_at_matrix(self.eye(), self.focus, [0.0, 1.0, 0.0])
    }

    pub fn projection_matrix(&self, aspect: f32) -> [[f32; 4]; 4] {
        perspective_matrix(self.fov_y, aspect, self.near, self.far)
    }

    /// Projection · view
    pub fn view_projection(&self, aspect: f32) -> [[f32; 4]; 4] {
        mat4_mul(self.projection_matrix(aspect), self.view_matrix())
    }

    fn clamp_phi(phi: f32) -> f32 {
        phi.clamp(POLE_EPSILON, PI - POLE_EPSILON)
    }

    fn clamp_radius(&self, radius: f32) -> f32 {
        radius.clamp(self.min_distance, self.max_distance)
    }
}

/// Same angle in (-π, π]
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

impl OrbitControl for OrbitCamera {
    fn rotate(&mut self, delta_theta: f32, delta_phi: f32) {
        self.target.theta += delta_theta;
        self.target.phi = Self::clamp_phi(self.target.phi + delta_phi);
    }

    fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.target.radius = self.clamp_radius(self.target.radius * factor);
        }
    }

    fn dolly(&mut self, delta: f32) {
        if delta.is_finite() {
            self.target.radius = self.clamp_radius(self.target.radius + delta);
        }
    }

    fn update(&mut self, dt: f32) {
        let frames = (dt * REFERENCE_FPS).max(0.0);
        let t = 1.0 - self.damping_factor.powf(frames);
        self.current.theta += (self.target.theta - self.current.theta) * t;
        self.current.phi = Self::clamp_phi(self.current.phi + (self.target.phi - self.current.phi) * t);
        self.current.radius =
            self.clamp_radius(self.current.radius + (self.target.radius - self.current.radius) * t);
    }

    fn position(&self) -> [f32; 3] {
        self.eye()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::transform_point;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_default_position() {
        let cam = OrbitCamera::default();
        let eye = cam.eye();
        assert!(approx_eq(eye[0], 0.0));
        assert!(approx_eq(eye[1], 0.0));
        assert!(approx_eq(eye[2], 15.0));
    }

    #[test]
    fn test_spherical_roundtrip() {
        let s = Spherical::new(7.0, 0.8, 1.1);
        let back = Spherical::from_cartesian(s.to_cartesian());
        assert!(approx_eq(back.radius, 7.0));
        assert!(approx_eq(back.theta, 0.8));
        assert!(approx_eq(back.phi, 1.1));
    }

    #[test]
    fn test_update_eases_toward_target() {
        let mut cam = OrbitCamera::new(20.0);
        cam.rotate(1.0, 0.0);
        cam.update(1.0 / 60.0);
        // One reference frame closes 90% of the gap
        assert!(approx_eq(cam.spherical().theta, 0.9));
        for _ in 0..20 {
            cam.update(1.0 / 60.0);
        }
        assert!(approx_eq(cam.spherical().theta, 1.0));
    }

    #[test]
    fn test_phi_clamped() {
        let mut cam = OrbitCamera::new(10.0);
        cam.rotate(0.0, 10.0);
        assert!(cam.target_spherical().phi < PI);
        cam.rotate(0.0, -20.0);
        assert!(cam.target_spherical().phi > 0.0);
    }

    #[test]
    fn test_radius_clamped() {
        let mut cam = OrbitCamera::new(10.0).with_limits(5.0, 50.0);
        cam.zoom(0.01);
        assert_eq!(cam.target_spherical().radius, 5.0);
        cam.dolly(1000.0);
        assert_eq!(cam.target_spherical().radius, 50.0);
        cam.zoom(f32::NAN);
        assert_eq!(cam.target_spherical().radius, 50.0);
    }

    #[test]
    fn test_limits_clamp_start() {
        let cam = OrbitCamera::new(2.0).with_limits(5.0, 50.0);
        assert_eq!(cam.spherical().radius, 5.0);
    }

    #[test]
    fn test_reset_returns_home() {
        let mut cam = OrbitCamera::new(15.0);
        cam.rotate(2.0, 0.5);
        cam.zoom(2.0);
        cam.snap();
        cam.reset();
        cam.snap();
        assert_eq!(cam.spherical(), Spherical::new(15.0, 0.0, PI / 2.0));
    }

    #[test]
    fn test_reset_after_many_turns_takes_short_way() {
        let mut cam = OrbitCamera::new(15.0);
        cam.rotate(10.0 * 2.0 * PI + 0.3, 0.0);
        cam.snap();
        let eye = cam.eye();

        cam.reset();
        let theta = cam.spherical().theta;
        assert!(theta > -PI && theta <= PI);
        assert!(approx_eq(theta, 0.3));
        // Wrapping does not move the camera
        for k in 0..3 {
            assert!((cam.eye()[k] - eye[k]).abs() < 1e-3);
        }

        cam.update(1.0 / 60.0);
        assert!(approx_eq(cam.spherical().theta, 0.03));
    }

    #[test]
    fn test_wrap_angle_range() {
        assert!(approx_eq(wrap_angle(0.5), 0.5));
        assert!(approx_eq(wrap_angle(-0.5), -0.5));
        assert!(approx_eq(wrap_angle(3.0 * PI), PI));
        assert!(approx_eq(wrap_angle(-PI), PI));
        assert!(approx_eq(wrap_angle(-7.0 * PI / 2.0), PI / 2.0));
    }

    #[test]
    fn test_origin_is_in_view() {
        let mut cam = OrbitCamera::new(15.0);
        cam.rotate(0.7, -0.3);
        cam.snap();
        let clip = transform_point(cam.view_projection(16.0 / 9.0), [0.0; 3]);
        let ndc = [clip[0] / clip[3], clip[1] / clip[3], clip[2] / clip[3]];
        assert!(approx_eq(ndc[0], 0.0));
        assert!(approx_eq(ndc[1], 0.0));
        assert!(ndc[2] > 0.0 && ndc[2] < 1.0);
    }
}
