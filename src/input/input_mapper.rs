//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like SetDimension, Exit, etc.
//! Mouse drag and wheel are NOT mapped here - they go directly to OrbitController.

use winit::event::ElementState;
use winit::keyboard::{KeyCode, ModifiersState};
use ndcube_core::{ParamChange, SpinAxis, ViewParams};

/// Size multiplier per key press
const SIZE_STEP: f64 = 1.1;
/// Speed change per key press in radians per second
const SPEED_STEP: f64 = 0.1;

/// Actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Jump straight to a dimension (digit keys, 0 = 10)
    SetDimension(i64),
    /// Animate into a dimension (Shift + digit keys)
    MorphTo(i64),
    /// One dimension up (Up/Right arrows)
    DimensionUp,
    /// One dimension down (Down/Left arrows)
    DimensionDown,
    /// Grow the hypercube (+)
    GrowSize,
    /// Shrink the hypercube (-)
    ShrinkSize,
    /// Rotate faster (])
    SpeedUp,
    /// Rotate slower ([)
    SlowDown,
    /// Apply the rotation one more time per frame (.)
    DeeperRecursion,
    /// Apply the rotation one less time per frame (,)
    ShallowerRecursion,
    /// Pause or resume (Space)
    ToggleAnimation,
    /// Static mode on/off (T)
    ToggleStaticMode,
    /// Step up one dimension in static mode (N)
    NextDimension,
    /// Animate into the next dimension (M)
    MorphNext,
    /// Cycle truncate, oblique, perspective and random projection (P)
    CycleProjection,
    /// Show or hide facet cubes (G)
    ToggleFacets,
    /// Step the spin direction about a display axis (X, Y, Z)
    CycleSpin(SpinAxis),
    /// Reset camera to starting position (R)
    ResetCamera,
    /// Toggle fullscreen mode (F)
    ToggleFullscreen,
    /// Exit application (Escape)
    Exit,
}

impl InputAction {
    /// The view change this action requests against the current `params`, if any.
    ///
    /// [`InputAction::MorphNext`] wraps back to 1 past the maximum dimension.
    pub fn param_change(self, params: &ViewParams) -> Option<ParamChange> {
        let change = match self {
            InputAction::SetDimension(n) => ParamChange::SetDimension(n),
            InputAction::MorphTo(n) => ParamChange::MorphTo(n),
            InputAction::DimensionUp => ParamChange::StepDimension(1),
            InputAction::DimensionDown => ParamChange::StepDimension(-1),
            InputAction::GrowSize => ParamChange::ScaleSize(SIZE_STEP),
            InputAction::ShrinkSize => ParamChange::ScaleSize(1.0 / SIZE_STEP),
            InputAction::SpeedUp => ParamChange::AdjustSpeed(SPEED_STEP),
            InputAction::SlowDown => ParamChange::AdjustSpeed(-SPEED_STEP),
            InputAction::DeeperRecursion => {
                ParamChange::SetRecursionDepth(params.recursion_depth() + 1)
            }
            InputAction::ShallowerRecursion => {
                ParamChange::SetRecursionDepth(params.recursion_depth().saturating_sub(1))
            }
            InputAction::ToggleAnimation => ParamChange::ToggleAnimation,
            InputAction::ToggleStaticMode => ParamChange::ToggleStaticMode,
            InputAction::NextDimension => ParamChange::NextDimension,
            InputAction::MorphNext => {
                let dimension = params.dimension();
                let target = if dimension >= params.max_dimension() { 1 } else { dimension + 1 };
                ParamChange::MorphTo(target as i64)
            }
            InputAction::CycleProjection => ParamChange::CycleProjection,
            InputAction::ToggleFacets => ParamChange::ToggleFacets,
            InputAction::CycleSpin(axis) => ParamChange::CycleSpin(axis),
            InputAction::ResetCamera | InputAction::ToggleFullscreen | InputAction::Exit => {
                return None
            }
        };
        Some(change)
    }
}

/// Dimension selected by a digit key (0 = 10)
fn digit_dimension(key: KeyCode) -> Option<i64> {
    let n = match key {
        KeyCode::Digit1 | KeyCode::Numpad1 => 1,
        KeyCode::Digit2 | KeyCode::Numpad2 => 2,
        KeyCode::Digit3 | KeyCode::Numpad3 => 3,
        KeyCode::Digit4 | KeyCode::Numpad4 => 4,
        KeyCode::Digit5 | KeyCode::Numpad5 => 5,
        KeyCode::Digit6 | KeyCode::Numpad6 => 6,
        KeyCode::Digit7 | KeyCode::Numpad7 => 7,
        KeyCode::Digit8 | KeyCode::Numpad8 => 8,
        KeyCode::Digit9 | KeyCode::Numpad9 => 9,
        KeyCode::Digit0 | KeyCode::Numpad0 => 10,
        _ => return None,
    };
    Some(n)
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases and unbound keys. Shift turns the digit
    /// keys from a jump into a morph.
    pub fn map_keyboard(
        key: KeyCode,
        state: ElementState,
        modifiers: ModifiersState,
    ) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        if let Some(n) = digit_dimension(key) {
            return Some(if modifiers.shift_key() {
                InputAction::MorphTo(n)
            } else {
                InputAction::SetDimension(n)
            });
        }

        match key {
            KeyCode::ArrowUp | KeyCode::ArrowRight => Some(InputAction::DimensionUp),
            KeyCode::ArrowDown | KeyCode::ArrowLeft => Some(InputAction::DimensionDown),
            KeyCode::Equal | KeyCode::NumpadAdd => Some(InputAction::GrowSize),
            KeyCode::Minus | KeyCode::NumpadSubtract => Some(InputAction::ShrinkSize),
            KeyCode::BracketRight => Some(InputAction::SpeedUp),
            KeyCode::BracketLeft => Some(InputAction::SlowDown),
            KeyCode::Period => Some(InputAction::DeeperRecursion),
            KeyCode::Comma => Some(InputAction::ShallowerRecursion),
            KeyCode::Space => Some(InputAction::ToggleAnimation),
            KeyCode::KeyT => Some(InputAction::ToggleStaticMode),
            KeyCode::KeyN => Some(InputAction::NextDimension),
            KeyCode::KeyM => Some(InputAction::MorphNext),
            KeyCode::KeyP => Some(InputAction::CycleProjection),
            KeyCode::KeyG => Some(InputAction::ToggleFacets),
            KeyCode::KeyX => Some(InputAction::CycleSpin(SpinAxis::X)),
            KeyCode::KeyY => Some(InputAction::CycleSpin(SpinAxis::Y)),
            KeyCode::KeyZ => Some(InputAction::CycleSpin(SpinAxis::Z)),
            KeyCode::KeyR => Some(InputAction::ResetCamera),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None,
        }
    }
}
