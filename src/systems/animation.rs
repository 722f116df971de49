//! Animation system
//!
//! Owns the hypercube animator and drives it from wall-clock time:
//! - Delta time calculation
//! - Keyboard actions → view changes
//! - Per-frame reprojection

use std::time::Instant;
use ndcube_core::{Animator, CoreError};
use crate::config::HypercubeConfig;
use crate::input::InputAction;

/// Largest step a single frame may advance, in seconds
const MAX_FRAME_DT: f64 = 0.25;

/// Manages the animation loop
pub struct AnimationSystem {
    animator: Animator,
    last_frame: Instant,
    /// Amplitude of the breathing scale effect
    pulse: f64,
}

impl AnimationSystem {
    /// Build the animator described by `config`
    pub fn from_config(config: &HypercubeConfig) -> Result<Self, CoreError> {
        let params = config.to_view_params()?;
        let animator = Animator::with_seed(params, config.seed)?
            .with_morph_duration(config.morph_duration);
        Ok(Self::new(animator).with_pulse(config.pulse))
    }

    pub fn new(animator: Animator) -> Self {
        Self {
            animator,
            last_frame: Instant::now(),
            pulse: 0.0,
        }
    }

    /// Builder: set the breathing scale amplitude
    pub fn with_pulse(mut self, amplitude: f64) -> Self {
        self.pulse = amplitude;
        self
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Run one frame using the time since the previous call.
    ///
    /// Returns the capped delta time in seconds.
    pub fn update(&mut self) -> Result<f64, CoreError> {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f64();
        // Cap dt so a stalled window doesn't jump the rotation
        let dt = raw_dt.min(MAX_FRAME_DT);
        self.last_frame = now;

        self.step(dt)?;
        Ok(dt)
    }

    /// Advance the animation by exactly `dt` seconds
    pub fn step(&mut self, dt: f64) -> Result<(), CoreError> {
        self.animator.frame(dt)?;
        Ok(())
    }

    /// Apply the view change behind `action`.
    ///
    /// Returns whether the view changed. Rejected changes are logged and
    /// leave the view as it was.
    pub fn handle_action(&mut self, action: InputAction) -> bool {
        let Some(change) = action.param_change(self.animator.params()) else {
            return false;
        };
        match self.animator.apply(change) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Ignoring {:?}: {}", change, e);
                false
            }
        }
    }

    /// Scale applied to the projected geometry this frame
    pub fn model_scale(&self) -> f32 {
        self.animator.pulse_scale(self.pulse) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndcube_core::ProjectionKind;

    fn system() -> AnimationSystem {
        AnimationSystem::from_config(&HypercubeConfig::default()).unwrap()
    }

    #[test]
    fn test_from_config() {
        let mut config = HypercubeConfig::default();
        config.initial_dimension = 5;
        let sys = AnimationSystem::from_config(&config).unwrap();
        assert_eq!(sys.animator().params().dimension(), 5);
        assert_eq!(sys.animator().geometry().point_count(), 32);
    }

    #[test]
    fn test_from_config_rejects_bad_dimension() {
        let mut config = HypercubeConfig::default();
        config.initial_dimension = -2;
        assert!(AnimationSystem::from_config(&config).is_err());
    }

    #[test]
    fn test_delta_time_capped() {
        let mut sys = system();
        std::thread::sleep(std::time::Duration::from_millis(300));
        let dt = sys.update().unwrap();
        assert_eq!(dt, MAX_FRAME_DT);
    }

    #[test]
    fn test_handle_action_changes_view() {
        let mut sys = system();
        assert!(sys.handle_action(InputAction::SetDimension(4)));
        assert_eq!(sys.animator().params().dimension(), 4);
        assert_eq!(sys.animator().geometry().edge_count(), 32);

        assert!(sys.handle_action(InputAction::CycleProjection));
        assert_eq!(sys.animator().params().projection, ProjectionKind::Oblique);
    }

    #[test]
    fn test_handle_action_recursion_depth() {
        let mut sys = system();
        assert!(sys.handle_action(InputAction::DeeperRecursion));
        assert!(sys.handle_action(InputAction::DeeperRecursion));
        assert_eq!(sys.animator().params().recursion_depth(), 3);

        assert!(sys.handle_action(InputAction::ShallowerRecursion));
        assert!(sys.handle_action(InputAction::ShallowerRecursion));
        // Depth never drops below one
        assert!(!sys.handle_action(InputAction::ShallowerRecursion));
        assert_eq!(sys.animator().params().recursion_depth(), 1);
    }

    #[test]
    fn test_handle_action_morph_to() {
        let mut sys = system();
        assert!(sys.handle_action(InputAction::MorphTo(6)));
        assert!(sys.animator().is_morphing());
        assert_eq!(sys.animator().params().dimension(), 6);
        assert!(!sys.handle_action(InputAction::MorphTo(11)));
    }

    #[test]
    fn test_default_config_perspective_stays_finite() {
        let mut sys = system();
        assert!(sys.handle_action(InputAction::SetDimension(4)));
        assert!(sys.handle_action(InputAction::CycleProjection));
        assert!(sys.handle_action(InputAction::CycleProjection));
        for _ in 0..600 {
            sys.step(0.01).unwrap();
            let g = sys.animator().geometry();
            assert_eq!(g.coerced, 0);
            assert!(g.points.iter().flatten().all(|c| c.abs() < 20.0));
        }
    }

    #[test]
    fn test_handle_action_rejects_invalid() {
        let mut sys = system();
        // Dimension 11 is past the default maximum of 10
        assert!(!sys.handle_action(InputAction::SetDimension(11)));
        assert_eq!(sys.animator().params().dimension(), 3);
    }

    #[test]
    fn test_app_actions_not_forwarded() {
        let mut sys = system();
        assert!(!sys.handle_action(InputAction::ResetCamera));
        assert!(!sys.handle_action(InputAction::Exit));
    }

    #[test]
    fn test_model_scale_without_pulse() {
        let mut sys = system();
        sys.step(1.0).unwrap();
        assert_eq!(sys.model_scale(), 1.0);
    }
}
