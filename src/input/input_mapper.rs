//! Input mapping from raw events to viewer actions
//!
//! Maps keyboard input to high-level actions like Exit or CycleProjection.
//! Slider keys are NOT mapped here - they go directly to the SliderController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special keys (not slider nudges)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Restore the configured start pose and camera (R key)
    ResetView,
    /// Switch to the next projection mode (P key)
    CycleProjection,
    /// Toggle the orbit camera's view matrix (V key)
    ToggleOrbitView,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
}

/// Maps raw keyboard events to actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for everything else
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ResetView),
            KeyCode::KeyP => Some(InputAction::CycleProjection),
            KeyCode::KeyV => Some(InputAction::ToggleOrbitView),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            _ => None,
        }
    }
}
