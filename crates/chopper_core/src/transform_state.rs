//! Transform parameters (translation, rotation, scale)
//!
//! A `TransformState` is owned by the driver and only changes through slider
//! updates. Every frame it is folded onto the projection matrix in a fixed
//! order: translate, rotate X, rotate Y, rotate Z, scale.

use chopper_math::mat4::{self, Mat4};
use chopper_math::Vec3;
use serde::{Serialize, Deserialize};

use crate::Slider;

/// Translation, per-axis rotation (radians) and per-axis scale of the model
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    /// Translation in model units
    pub translation: Vec3,
    /// Rotation about X, Y and Z in radians
    pub rotation: Vec3,
    /// Per-axis scale factor
    pub scale: Vec3,
}

impl Default for TransformState {
    /// The viewer's start pose: pushed 500 units into the screen, tilted 2 rad about X
    fn default() -> Self {
        Self {
            translation: Vec3::new(0.0, 0.0, -500.0),
            rotation: Vec3::new(2.0, 0.0, 0.0),
            scale: Vec3::ONE,
        }
    }
}

impl TransformState {
    pub fn new(translation: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self { translation, rotation, scale }
    }

    /// No translation, rotation or scale change
    pub fn identity() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO, Vec3::ONE)
    }

    /// Current value of a transform slider, in slider units (degrees for rotations)
    ///
    /// Returns `None` for camera sliders.
    pub fn slider_value(&self, slider: Slider) -> Option<f32> {
        match slider {
            Slider::Translate(axis) => Some(self.translation.get(axis)),
            Slider::Rotate(axis) => Some(self.rotation.get(axis).to_degrees()),
            Slider::Scale(axis) => Some(self.scale.get(axis)),
            Slider::FieldOfView | Slider::CameraAngle => None,
        }
    }

    /// Apply a slider value, clamped to the slider's range
    ///
    /// Returns `false` (and changes nothing) for camera sliders.
    pub fn set_slider(&mut self, slider: Slider, value: f32) -> bool {
        let value = slider.clamp(value);
        match slider {
            Slider::Translate(axis) => *self.translation.get_mut(axis) = value,
            Slider::Rotate(axis) => *self.rotation.get_mut(axis) = value.to_radians(),
            Slider::Scale(axis) => *self.scale.get_mut(axis) = value,
            Slider::FieldOfView | Slider::CameraAngle => return false,
        }
        true
    }

    /// Compose this transform onto `m`
    ///
    /// Points are scaled first, then rotated about Z, Y, X, then translated,
    /// and finally transformed by whatever `m` already holds.
    pub fn apply_to(&self, m: Mat4) -> Mat4 {
        let m = mat4::translate(m, self.translation.x, self.translation.y, self.translation.z);
        let m = mat4::x_rotate(m, self.rotation.x);
        let m = mat4::y_rotate(m, self.rotation.y);
        let m = mat4::z_rotate(m, self.rotation.z);
        mat4::scale(m, self.scale.x, self.scale.y, self.scale.z)
    }

    /// The model matrix on its own
    #[inline]
    pub fn model_matrix(&self) -> Mat4 {
        self.apply_to(mat4::identity())
    }
}
