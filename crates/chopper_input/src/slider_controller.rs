//! Keyboard stand-in for the slider widgets
//!
//! Controls:
//! - A/D, S/W, Q/E: translate X, Y, Z
//! - I/K, J/L, U/O: rotate about X, Y, Z
//! - 1/2, 3/4, 5/6: scale X, Y, Z
//! - [ / ]: field of view
//! - , / .: camera orbit angle
//!
//! Every key press moves one slider by one step. Holding a key relies on the
//! platform's key repeat.

use chopper_core::{Axis, Slider};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// A request to move `slider` by `delta` slider units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderNudge {
    pub slider: Slider,
    pub delta: f32,
}

/// Step sizes per slider family
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSteps {
    /// Translation step in model units
    pub translation: f32,
    /// Rotation and camera-angle step in degrees
    pub rotation: f32,
    /// Scale step
    pub scale: f32,
    /// Field-of-view step in degrees
    pub field_of_view: f32,
}

impl Default for SliderSteps {
    fn default() -> Self {
        Self {
            translation: 5.0,
            rotation: 5.0,
            scale: 0.05,
            field_of_view: 1.0,
        }
    }
}

/// Maps key presses to slider nudges
#[derive(Clone, Debug, Default)]
pub struct SliderController {
    steps: SliderSteps,
}

impl SliderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_steps(mut self, steps: SliderSteps) -> Self {
        self.steps = steps;
        self
    }

    pub fn steps(&self) -> &SliderSteps {
        &self.steps
    }

    /// Slider and direction (+1/-1) bound to `key`
    fn binding(key: KeyCode) -> Option<(Slider, f32)> {
        let binding = match key {
            KeyCode::KeyA => (Slider::Translate(Axis::X), -1.0),
            KeyCode::KeyD => (Slider::Translate(Axis::X), 1.0),
            KeyCode::KeyS => (Slider::Translate(Axis::Y), -1.0),
            KeyCode::KeyW => (Slider::Translate(Axis::Y), 1.0),
            KeyCode::KeyQ => (Slider::Translate(Axis::Z), -1.0),
            KeyCode::KeyE => (Slider::Translate(Axis::Z), 1.0),
            KeyCode::KeyK => (Slider::Rotate(Axis::X), -1.0),
            KeyCode::KeyI => (Slider::Rotate(Axis::X), 1.0),
            KeyCode::KeyJ => (Slider::Rotate(Axis::Y), -1.0),
            KeyCode::KeyL => (Slider::Rotate(Axis::Y), 1.0),
            KeyCode::KeyU => (Slider::Rotate(Axis::Z), -1.0),
            KeyCode::KeyO => (Slider::Rotate(Axis::Z), 1.0),
            KeyCode::Digit1 => (Slider::Scale(Axis::X), -1.0),
            KeyCode::Digit2 => (Slider::Scale(Axis::X), 1.0),
            KeyCode::Digit3 => (Slider::Scale(Axis::Y), -1.0),
            KeyCode::Digit4 => (Slider::Scale(Axis::Y), 1.0),
            KeyCode::Digit5 => (Slider::Scale(Axis::Z), -1.0),
            KeyCode::Digit6 => (Slider::Scale(Axis::Z), 1.0),
            KeyCode::BracketLeft => (Slider::FieldOfView, -1.0),
            KeyCode::BracketRight => (Slider::FieldOfView, 1.0),
            KeyCode::Comma => (Slider::CameraAngle, -1.0),
            KeyCode::Period => (Slider::CameraAngle, 1.0),
            _ => return None,
        };
        Some(binding)
    }

    fn step_for(&self, slider: Slider) -> f32 {
        match slider {
            Slider::Translate(_) => self.steps.translation,
            Slider::Rotate(_) | Slider::CameraAngle => self.steps.rotation,
            Slider::Scale(_) => self.steps.scale,
            Slider::FieldOfView => self.steps.field_of_view,
        }
    }

    /// Process keyboard input
    ///
    /// Returns a nudge for bound keys on press; releases and unbound keys yield `None`.
    pub fn process_keyboard(&self, key: KeyCode, state: ElementState) -> Option<SliderNudge> {
        if state != ElementState::Pressed {
            return None;
        }
        let (slider, direction) = Self::binding(key)?;
        Some(SliderNudge {
            slider,
            delta: direction * self.step_for(slider),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_keys() {
        let controller = SliderController::new();
        let nudge = controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed).unwrap();
        assert_eq!(nudge.slider, Slider::Translate(Axis::X));
        assert_eq!(nudge.delta, 5.0);

        let nudge = controller.process_keyboard(KeyCode::KeyQ, ElementState::Pressed).unwrap();
        assert_eq!(nudge.slider, Slider::Translate(Axis::Z));
        assert_eq!(nudge.delta, -5.0);
    }

    #[test]
    fn test_release_is_ignored() {
        let controller = SliderController::new();
        assert!(controller.process_keyboard(KeyCode::KeyD, ElementState::Released).is_none());
    }

    #[test]
    fn test_unbound_key() {
        let controller = SliderController::new();
        assert!(controller.process_keyboard(KeyCode::KeyZ, ElementState::Pressed).is_none());
    }

    #[test]
    fn test_custom_steps() {
        let controller = SliderController::new().with_steps(SliderSteps {
            translation: 1.0,
            rotation: 15.0,
            scale: 0.5,
            field_of_view: 2.0,
        });

        let scale = controller.process_keyboard(KeyCode::Digit3, ElementState::Pressed).unwrap();
        assert_eq!(scale, SliderNudge { slider: Slider::Scale(Axis::Y), delta: -0.5 });

        let angle = controller.process_keyboard(KeyCode::Period, ElementState::Pressed).unwrap();
        assert_eq!(angle, SliderNudge { slider: Slider::CameraAngle, delta: 15.0 });

        let fov = controller.process_keyboard(KeyCode::BracketRight, ElementState::Pressed).unwrap();
        assert_eq!(fov.delta, 2.0);
    }

    #[test]
    fn test_every_slider_has_keys_both_ways() {
        let keys = [
            KeyCode::KeyA, KeyCode::KeyD, KeyCode::KeyS, KeyCode::KeyW, KeyCode::KeyQ, KeyCode::KeyE,
            KeyCode::KeyK, KeyCode::KeyI, KeyCode::KeyJ, KeyCode::KeyL, KeyCode::KeyU, KeyCode::KeyO,
            KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4,
            KeyCode::Digit5, KeyCode::Digit6,
            KeyCode::BracketLeft, KeyCode::BracketRight, KeyCode::Comma, KeyCode::Period,
        ];
        let controller = SliderController::new();
        for slider in Slider::ALL {
            let deltas: Vec<f32> = keys
                .iter()
                .filter_map(|k| controller.process_keyboard(*k, ElementState::Pressed))
                .filter(|n| n.slider == slider)
                .map(|n| n.delta)
                .collect();
            assert_eq!(deltas.len(), 2, "{:?} should have two keys", slider);
            assert!(deltas.iter().any(|d| *d > 0.0) && deltas.iter().any(|d| *d < 0.0));
        }
    }
}
