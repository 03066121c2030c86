//! Slider identities and ranges
//!
//! Each slider mirrors one control of the viewer's UI. Values outside a
//! slider's range are clamped when applied. Rotation and camera-angle
//! sliders are expressed in degrees; the state they drive stores radians.

use chopper_math::Axis;
use serde::{Serialize, Deserialize};

/// A user-adjustable transform or camera parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slider {
    Translate(Axis),
    Rotate(Axis),
    Scale(Axis),
    FieldOfView,
    CameraAngle,
}

impl Slider {
    /// Every slider, in UI order
    pub const ALL: [Slider; 11] = [
        Slider::Translate(Axis::X),
        Slider::Translate(Axis::Y),
        Slider::Translate(Axis::Z),
        Slider::Rotate(Axis::X),
        Slider::Rotate(Axis::Y),
        Slider::Rotate(Axis::Z),
        Slider::Scale(Axis::X),
        Slider::Scale(Axis::Y),
        Slider::Scale(Axis::Z),
        Slider::FieldOfView,
        Slider::CameraAngle,
    ];

    /// Inclusive `(min, max)` in slider units
    pub fn range(self) -> (f32, f32) {
        match self {
            Slider::Translate(Axis::Z) => (-1000.0, 0.0),
            Slider::Translate(_) => (-200.0, 200.0),
            Slider::Rotate(_) => (0.0, 360.0),
            Slider::Scale(_) => (-5.0, 5.0),
            Slider::FieldOfView => (1.0, 179.0),
            Slider::CameraAngle => (-360.0, 360.0),
        }
    }

    /// Clamp a raw value into this slider's range
    pub fn clamp(self, value: f32) -> f32 {
        let (min, max) = self.range();
        value.clamp(min, max)
    }

    /// Whether the slider is in degrees (and the underlying state in radians)
    pub fn is_angle(self) -> bool {
        matches!(self, Slider::Rotate(_) | Slider::FieldOfView | Slider::CameraAngle)
    }

    /// Short label used in logs and the window title
    pub fn label(self) -> &'static str {
        match self {
            Slider::Translate(Axis::X) => "x",
            Slider::Translate(Axis::Y) => "y",
            Slider::Translate(Axis::Z) => "z",
            Slider::Rotate(Axis::X) => "angleX",
            Slider::Rotate(Axis::Y) => "angleY",
            Slider::Rotate(Axis::Z) => "angleZ",
            Slider::Scale(Axis::X) => "scaleX",
            Slider::Scale(Axis::Y) => "scaleY",
            Slider::Scale(Axis::Z) => "scaleZ",
            Slider::FieldOfView => "fieldOfView",
            Slider::CameraAngle => "cameraAngle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_ranges() {
        assert_eq!(Slider::Translate(Axis::X).range(), (-200.0, 200.0));
        assert_eq!(Slider::Translate(Axis::Y).range(), (-200.0, 200.0));
        assert_eq!(Slider::Translate(Axis::Z).range(), (-1000.0, 0.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Slider::Scale(Axis::X).clamp(12.0), 5.0);
        assert_eq!(Slider::Rotate(Axis::Y).clamp(-10.0), 0.0);
        assert_eq!(Slider::FieldOfView.clamp(60.0), 60.0);
    }

    #[test]
    fn test_angle_sliders() {
        assert!(Slider::Rotate(Axis::Z).is_angle());
        assert!(Slider::CameraAngle.is_angle());
        assert!(!Slider::Scale(Axis::Z).is_angle());
        assert!(!Slider::Translate(Axis::X).is_angle());
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = Slider::ALL.iter().map(|s| s.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Slider::ALL.len());
    }
}
