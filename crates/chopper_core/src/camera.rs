//! Orbit camera
//!
//! The camera circles the origin on the XZ plane. Its world transform is a
//! Y rotation followed by a push out along Z; the view matrix is the full
//! inverse of that transform.

use chopper_math::mat4::{self, Mat4};
use chopper_math::MathError;
use serde::{Serialize, Deserialize};

use crate::Slider;

/// Distance multiplier applied to the orbit radius
pub const ORBIT_DISTANCE_FACTOR: f32 = 1.5;

/// Perspective camera orbiting the origin
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitCamera {
    /// Vertical field of view in radians
    pub fov: f32,
    /// Orbit angle about the Y axis in radians
    pub angle: f32,
    /// Orbit radius; the camera sits at `radius * ORBIT_DISTANCE_FACTOR`
    pub radius: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            fov: 60f32.to_radians(),
            angle: 0.0,
            radius: 200.0,
            near: 1.0,
            far: 2000.0,
        }
    }
}

impl OrbitCamera {
    /// Camera-to-world transform
    pub fn camera_matrix(&self) -> Mat4 {
        let m = mat4::y_rotation(self.angle);
        mat4::translate(m, 0.0, 0.0, self.radius * ORBIT_DISTANCE_FACTOR)
    }

    /// World-to-camera transform
    pub fn view_matrix(&self) -> Result<Mat4, MathError> {
        mat4::inverse(self.camera_matrix())
    }

    /// Current value of a camera slider in degrees
    ///
    /// Returns `None` for transform sliders.
    pub fn slider_value(&self, slider: Slider) -> Option<f32> {
        match slider {
            Slider::FieldOfView => Some(self.fov.to_degrees()),
            Slider::CameraAngle => Some(self.angle.to_degrees()),
            _ => None,
        }
    }

    /// Apply a camera slider value (degrees), clamped to the slider's range
    pub fn set_slider(&mut self, slider: Slider, value: f32) -> bool {
        let value = slider.clamp(value);
        match slider {
            Slider::FieldOfView => self.fov = value.to_radians(),
            Slider::CameraAngle => self.angle = value.to_radians(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chopper_math::mat4::transform_vector;
    use chopper_math::{Axis, Vec4};

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_default_camera() {
        let camera = OrbitCamera::default();
        assert!((camera.fov.to_degrees() - 60.0).abs() < EPSILON);
        assert_eq!(camera.radius, 200.0);
        assert_eq!(camera.near, 1.0);
        assert_eq!(camera.far, 2000.0);
    }

    #[test]
    fn test_camera_position_on_orbit() {
        let camera = OrbitCamera::default();
        let eye = transform_vector(camera.camera_matrix(), Vec4::point(0.0, 0.0, 0.0));
        assert_eq!(eye, Vec4::point(0.0, 0.0, 300.0));
    }

    #[test]
    fn test_view_matrix_moves_eye_to_origin() {
        let mut camera = OrbitCamera::default();
        camera.set_slider(Slider::CameraAngle, 35.0);

        let eye = transform_vector(camera.camera_matrix(), Vec4::point(0.0, 0.0, 0.0));
        let view = camera.view_matrix().unwrap();
        let at_origin = transform_vector(view, eye);

        assert!(at_origin.x.abs() < EPSILON);
        assert!(at_origin.y.abs() < EPSILON);
        assert!(at_origin.z.abs() < 0.001, "got {:?}", at_origin);
        assert!((at_origin.w - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_camera_sliders() {
        let mut camera = OrbitCamera::default();
        assert!(camera.set_slider(Slider::FieldOfView, 500.0));
        assert!((camera.slider_value(Slider::FieldOfView).unwrap() - 179.0).abs() < 0.001);
        assert!(!camera.set_slider(Slider::Scale(Axis::X), 2.0));
        assert_eq!(camera.slider_value(Slider::Translate(Axis::Y)), None);
    }
}
