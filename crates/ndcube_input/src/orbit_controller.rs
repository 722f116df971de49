//! Orbit controller for mouse-driven camera input
//!
//! Controls:
//! - Left drag: orbit around the target
//! - Mouse wheel: zoom in/out
//!
//! Drags feed a rotation velocity that keeps the camera drifting after the
//! button is released; wheel steps feed a zoom velocity the same way.

use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Pixels treated as one wheel step for touchpad scrolling
const PIXELS_PER_SCROLL_STEP: f64 = 50.0;

/// Zoom velocity added per wheel step, as a fraction of `zoom_speed`
const ZOOM_IMPULSE: f32 = 0.02;

/// Reference frame rate the damping factors are specified at
const REFERENCE_FPS: f32 = 60.0;

/// Orbit camera input state
pub struct OrbitController {
    // Mouse state
    dragging: bool,
    last_cursor: Option<(f64, f64)>,
    pending_drag: (f32, f32),
    pending_scroll: f32,

    // Inertia state
    rotation_velocity: (f32, f32),
    zoom_velocity: f32,

    // Configuration
    /// Radians per pixel of drag
    pub rotate_speed: f32,
    /// Exponent on the 0.95 per-step zoom factor
    pub zoom_speed: f32,
    /// Rotation velocity kept per reference frame
    pub inertia_damping: f32,
    /// Zoom velocity kept per reference frame
    pub zoom_damping: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            dragging: false,
            last_cursor: None,
            pending_drag: (0.0, 0.0),
            pending_scroll: 0.0,

            rotation_velocity: (0.0, 0.0),
            zoom_velocity: 0.0,

            rotate_speed: 0.005,
            zoom_speed: 0.3,
            inertia_damping: 0.98,
            zoom_damping: 0.9,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state == ElementState::Pressed;
        }
    }

    /// Process an absolute cursor position in window pixels
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        if self.dragging {
            if let Some((lx, ly)) = self.last_cursor {
                self.pending_drag.0 += (x - lx) as f32;
                self.pending_drag.1 += (y - ly) as f32;
            }
        }
        self.last_cursor = Some((x, y));
    }

    /// Process mouse wheel input; positive steps zoom out
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let steps = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y,
            MouseScrollDelta::PixelDelta(pos) => (-pos.y / PIXELS_PER_SCROLL_STEP) as f32,
        };
        self.pending_scroll += steps;
    }

    /// Apply accumulated input and inertia to `camera`, then advance its smoothing.
    ///
    /// Returns the camera position.
    pub fn update<C: OrbitControl>(&mut self, camera: &mut C, dt: f32) -> [f32; 3] {
        let frames = (dt * REFERENCE_FPS).max(0.0);

        // Direct drag plus accumulated velocity
        let (dx, dy) = self.pending_drag;
        if dx != 0.0 || dy != 0.0 {
            let (vx, vy) = (dx * self.rotate_speed, dy * self.rotate_speed);
            self.rotation_velocity.0 += vx;
            self.rotation_velocity.1 += vy;
            camera.rotate(-vx, -vy);
        }
        self.pending_drag = (0.0, 0.0);

        let keep = self.inertia_damping.powf(frames);
        self.rotation_velocity.0 *= keep;
        self.rotation_velocity.1 *= keep;
        camera.rotate(-self.rotation_velocity.0 * frames, -self.rotation_velocity.1 * frames);

        if self.pending_scroll != 0.0 {
            camera.zoom(0.95f32.powf(-self.zoom_speed * self.pending_scroll));
            self.zoom_velocity += self.pending_scroll * self.zoom_speed * ZOOM_IMPULSE;
            self.pending_scroll = 0.0;
        }
        self.zoom_velocity *= self.zoom_damping.powf(frames);
        camera.dolly(self.zoom_velocity * frames);

        camera.update(dt);
        camera.position()
    }

    /// Drop all pending input and inertia
    pub fn stop(&mut self) {
        self.pending_drag = (0.0, 0.0);
        self.pending_scroll = 0.0;
        self.rotation_velocity = (0.0, 0.0);
        self.zoom_velocity = 0.0;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Builder: set drag sensitivity
    pub fn with_rotate_speed(mut self, speed: f32) -> Self {
        self.rotate_speed = speed;
        self
    }

    /// Builder: set wheel sensitivity
    pub fn with_zoom_speed(mut self, speed: f32) -> Self {
        self.zoom_speed = speed;
        self
    }

    /// Builder: set rotation and zoom inertia
    pub fn with_damping(mut self, inertia: f32, zoom: f32) -> Self {
        self.inertia_damping = inertia.clamp(0.0, 1.0);
        self.zoom_damping = zoom.clamp(0.0, 1.0);
        self
    }
}

/// Trait for orbit-style cameras
/// Allows the controller to work with different camera implementations
pub trait OrbitControl {
    /// Move the target azimuth and polar angle
    fn rotate(&mut self, delta_theta: f32, delta_phi: f32);
    /// Multiply the target distance
    fn zoom(&mut self, factor: f32);
    /// Add to the target distance
    fn dolly(&mut self, delta: f32);
    /// Advance smoothing by `dt` seconds
    fn update(&mut self, dt: f32);
    fn position(&self) -> [f32; 3];
}
