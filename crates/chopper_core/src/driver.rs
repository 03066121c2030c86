//! Rendering driver
//!
//! The driver owns the transform parameters and the camera, uploads the
//! model to a [`RenderBackend`] once, and rebuilds the frame matrix on every
//! redraw. Slider updates redraw immediately.
//!
//! A [`MathError`] while building the matrix (a zero-sized viewport, say)
//! skips the frame instead of sending NaNs to the GPU; the backend keeps
//! showing the last good frame.

use chopper_math::mat4::{self, Mat4};
use chopper_math::{orthographic, perspective, projection, MathError};
use serde::{Serialize, Deserialize};

use crate::{Model, ModelVertex, OrbitCamera, Slider, TransformState};

/// Rasterizer collaborator: takes the model once, then one matrix per frame
pub trait RenderBackend {
    type Error: std::error::Error;

    /// Upload the static triangle list
    fn upload_model(&mut self, vertices: &[ModelVertex]) -> Result<(), Self::Error>;

    /// Current drawable size in pixels
    fn viewport(&self) -> (u32, u32);

    /// Draw `vertex_count` vertices with `matrix` as the position transform
    fn draw(&mut self, matrix: &Mat4, vertex_count: u32) -> Result<(), Self::Error>;
}

/// Which projection the frame matrix starts from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// Camera field of view, viewport aspect, camera near/far
    #[default]
    Perspective,
    /// Pixel box `0..width` by `height..0`, depth `depth..-depth`
    Orthographic,
    /// Pixel-space projection with Y pointing down
    Pixel,
}

impl ProjectionMode {
    /// Next mode in Perspective, Orthographic, Pixel order, wrapping around
    pub fn next(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Pixel,
            ProjectionMode::Pixel => ProjectionMode::Perspective,
        }
    }
}

/// Per-frame view options
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub projection: ProjectionMode,
    /// Multiply the orbit camera's view matrix in after the projection
    pub orbit_view: bool,
    /// Depth extent for the orthographic and pixel projections
    pub depth: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            projection: ProjectionMode::Perspective,
            orbit_view: false,
            depth: 400.0,
        }
    }
}

/// Result of a redraw request
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// The backend drew a frame with this matrix
    Drawn(Mat4),
    /// No frame was drawn; the previous one stays on screen
    Skipped(MathError),
}

impl FrameOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, FrameOutcome::Drawn(_))
    }
}

/// Projection for the given viewport
pub fn projection_matrix(
    camera: &OrbitCamera,
    settings: &ViewSettings,
    viewport: (u32, u32),
) -> Result<Mat4, MathError> {
    let width = viewport.0 as f32;
    let height = viewport.1 as f32;

    match settings.projection {
        ProjectionMode::Perspective => {
            perspective(camera.fov, width / height, camera.near, camera.far)
        }
        ProjectionMode::Orthographic => {
            orthographic(0.0, width, height, 0.0, settings.depth, -settings.depth)
        }
        ProjectionMode::Pixel => projection(width, height, settings.depth),
    }
}

/// Full matrix handed to the backend: projection, optional view, then the model transform
pub fn frame_matrix(
    state: &TransformState,
    camera: &OrbitCamera,
    settings: &ViewSettings,
    viewport: (u32, u32),
) -> Result<Mat4, MathError> {
    let mut matrix = projection_matrix(camera, settings, viewport)?;
    if settings.orbit_view {
        matrix = mat4::multiply(matrix, camera.view_matrix()?);
    }
    Ok(state.apply_to(matrix))
}

/// Owns the transform state and drives a backend
pub struct Driver<B: RenderBackend> {
    backend: B,
    model: Model,
    state: TransformState,
    camera: OrbitCamera,
    settings: ViewSettings,
    frames_drawn: u64,
    frames_skipped: u64,
}

impl<B: RenderBackend> Driver<B> {
    /// Create a driver and upload `model` to the backend
    pub fn new(
        mut backend: B,
        model: Model,
        state: TransformState,
        camera: OrbitCamera,
        settings: ViewSettings,
    ) -> Result<Self, B::Error> {
        backend.upload_model(model.vertices())?;
        log::info!("Uploaded {} vertices", model.vertex_count());

        Ok(Self {
            backend,
            model,
            state,
            camera,
            settings,
            frames_drawn: 0,
            frames_skipped: 0,
        })
    }

    pub fn state(&self) -> &TransformState {
        &self.state
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }

    /// Current value of any slider, in slider units
    pub fn slider_value(&self, slider: Slider) -> f32 {
        self.state
            .slider_value(slider)
            .or_else(|| self.camera.slider_value(slider))
            .unwrap_or_default()
    }

    /// Set a slider to `value` and redraw
    pub fn apply(&mut self, slider: Slider, value: f32) -> Result<FrameOutcome, B::Error> {
        if !self.state.set_slider(slider, value) {
            self.camera.set_slider(slider, value);
        }
        log::debug!("{} = {:.2}", slider.label(), self.slider_value(slider));
        self.redraw()
    }

    /// Move a slider by `delta` and redraw
    pub fn nudge(&mut self, slider: Slider, delta: f32) -> Result<FrameOutcome, B::Error> {
        let value = self.slider_value(slider) + delta;
        self.apply(slider, value)
    }

    /// Replace the transform state (e.g. reset to the start pose) and redraw
    pub fn reset(&mut self, state: TransformState, camera: OrbitCamera) -> Result<FrameOutcome, B::Error> {
        self.state = state;
        self.camera = camera;
        self.redraw()
    }

    /// Switch projection mode and redraw
    pub fn set_projection(&mut self, projection: ProjectionMode) -> Result<FrameOutcome, B::Error> {
        self.settings.projection = projection;
        log::info!("Projection: {:?}", projection);
        self.redraw()
    }

    /// Enable or disable the orbit camera's view matrix and redraw
    pub fn set_orbit_view(&mut self, enabled: bool) -> Result<FrameOutcome, B::Error> {
        self.settings.orbit_view = enabled;
        log::info!("Orbit view: {}", if enabled { "ON" } else { "OFF" });
        self.redraw()
    }

    /// Rebuild the frame matrix and draw
    pub fn redraw(&mut self) -> Result<FrameOutcome, B::Error> {
        let viewport = self.backend.viewport();
        match frame_matrix(&self.state, &self.camera, &self.settings, viewport) {
            Ok(matrix) => {
                self.backend.draw(&matrix, self.model.vertex_count())?;
                self.frames_drawn += 1;
                Ok(FrameOutcome::Drawn(matrix))
            }
            Err(err) => {
                log::warn!("Skipping frame for viewport {:?}: {}", viewport, err);
                self.frames_skipped += 1;
                Ok(FrameOutcome::Skipped(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chopper_math::Axis;
    use std::fmt;

    #[derive(Debug)]
    struct Unreachable;

    impl fmt::Display for Unreachable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "unreachable")
        }
    }

    impl std::error::Error for Unreachable {}

    #[derive(Default)]
    struct Recorder {
        size: (u32, u32),
        uploads: usize,
        uploaded_vertices: usize,
        draws: Vec<(Mat4, u32)>,
    }

    impl RenderBackend for Recorder {
        type Error = Unreachable;

        fn upload_model(&mut self, vertices: &[ModelVertex]) -> Result<(), Self::Error> {
            self.uploads += 1;
            self.uploaded_vertices = vertices.len();
            Ok(())
        }

        fn viewport(&self) -> (u32, u32) {
            self.size
        }

        fn draw(&mut self, matrix: &Mat4, vertex_count: u32) -> Result<(), Self::Error> {
            self.draws.push((*matrix, vertex_count));
            Ok(())
        }
    }

    fn driver(size: (u32, u32), settings: ViewSettings) -> Driver<Recorder> {
        let backend = Recorder { size, ..Default::default() };
        Driver::new(
            backend,
            Model::helicopter(),
            TransformState::default(),
            OrbitCamera::default(),
            settings,
        )
        .unwrap()
    }

    #[test]
    fn test_model_uploaded_once() {
        let mut d = driver((800, 600), ViewSettings::default());
        d.redraw().unwrap();
        d.apply(Slider::Translate(Axis::X), 10.0).unwrap();
        assert_eq!(d.backend().uploads, 1);
        assert_eq!(d.backend().uploaded_vertices, 78);
    }

    #[test]
    fn test_every_slider_change_redraws() {
        let mut d = driver((800, 600), ViewSettings::default());
        for slider in Slider::ALL {
            d.nudge(slider, 1.0).unwrap();
        }
        assert_eq!(d.backend().draws.len(), Slider::ALL.len());
        assert!(d.backend().draws.iter().all(|(_, count)| *count == 78));
    }

    #[test]
    fn test_frame_matrix_composition() {
        let mut d = driver((800, 600), ViewSettings::default());
        let outcome = d.redraw().unwrap();

        let camera = OrbitCamera::default();
        let expected = TransformState::default()
            .apply_to(perspective(camera.fov, 800.0 / 600.0, 1.0, 2000.0).unwrap());
        assert_eq!(outcome, FrameOutcome::Drawn(expected));
        assert_eq!(d.backend().draws[0].0, expected);
    }

    #[test]
    fn test_orbit_view_is_inserted_between_projection_and_model() {
        let settings = ViewSettings { orbit_view: true, ..Default::default() };
        let mut d = driver((800, 600), settings);
        let outcome = d.redraw().unwrap();

        let camera = OrbitCamera::default();
        let projection = perspective(camera.fov, 800.0 / 600.0, 1.0, 2000.0).unwrap();
        let with_view = mat4::multiply(projection, camera.view_matrix().unwrap());
        let expected = TransformState::default().apply_to(with_view);
        assert_eq!(outcome, FrameOutcome::Drawn(expected));
    }

    #[test]
    fn test_zero_height_viewport_skips_frame() {
        let mut d = driver((800, 0), ViewSettings::default());
        let outcome = d.redraw().unwrap();
        assert!(matches!(outcome, FrameOutcome::Skipped(MathError::Domain(_))));
        assert!(d.backend().draws.is_empty());
        assert_eq!(d.frames_skipped(), 1);
        assert_eq!(d.frames_drawn(), 0);
    }

    #[test]
    fn test_orthographic_zero_width_skips_frame() {
        let settings = ViewSettings { projection: ProjectionMode::Orthographic, ..Default::default() };
        let mut d = driver((0, 600), settings);
        assert!(!d.redraw().unwrap().is_drawn());
    }

    #[test]
    fn test_skipped_frame_keeps_state_renderable() {
        let mut d = driver((800, 0), ViewSettings::default());
        d.apply(Slider::Scale(Axis::Y), 2.0).unwrap();
        d.backend_mut().size = (800, 600);
        assert!(d.redraw().unwrap().is_drawn());
        assert_eq!(d.state().scale.y, 2.0);
    }

    #[test]
    fn test_apply_routes_camera_sliders() {
        let mut d = driver((800, 600), ViewSettings::default());
        d.apply(Slider::FieldOfView, 90.0).unwrap();
        assert!((d.camera().fov.to_degrees() - 90.0).abs() < 0.001);
        assert_eq!(d.state(), &TransformState::default());
    }

    #[test]
    fn test_nudge_clamps_to_range() {
        let mut d = driver((800, 600), ViewSettings::default());
        d.nudge(Slider::Translate(Axis::Z), 10_000.0).unwrap();
        assert_eq!(d.state().translation.z, 0.0);
        d.nudge(Slider::Translate(Axis::Z), -10_000.0).unwrap();
        assert_eq!(d.state().translation.z, -1000.0);
    }

    #[test]
    fn test_reset_restores_pose() {
        let mut d = driver((800, 600), ViewSettings::default());
        d.apply(Slider::Rotate(Axis::X), 10.0).unwrap();
        d.reset(TransformState::default(), OrbitCamera::default()).unwrap();
        assert_eq!(d.state(), &TransformState::default());
    }

    #[test]
    fn test_projection_cycle_wraps() {
        let mut mode = ProjectionMode::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(mode, ProjectionMode::Perspective);
        assert_eq!(
            seen,
            vec![ProjectionMode::Perspective, ProjectionMode::Orthographic, ProjectionMode::Pixel]
        );
    }

    #[test]
    fn test_toggle_orbit_view_redraws() {
        let mut d = driver((800, 600), ViewSettings::default());
        let plain = d.redraw().unwrap();
        let orbit = d.set_orbit_view(true).unwrap();
        assert!(d.settings().orbit_view);
        assert_ne!(plain, orbit);
        assert_eq!(d.frames_drawn(), 2);
    }
}
