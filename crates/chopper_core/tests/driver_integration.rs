//! Integration tests for the driver pipeline
//!
//! These run the helicopter model through the same matrices a frame uses and
//! check where the geometry ends up.

use chopper_core::{
    frame_matrix, Axis, Driver, FrameOutcome, Mat4, Model, ModelVertex, OrbitCamera,
    ProjectionMode, RenderBackend, Slider, TransformState, Vec4, ViewSettings,
};
use chopper_math::mat4;

#[derive(Debug)]
struct BackendError;

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "backend rejected draw")
    }
}

impl std::error::Error for BackendError {}

/// Backend that can be told to fail its next draw
struct FlakyBackend {
    size: (u32, u32),
    fail_next_draw: bool,
    last_matrix: Option<Mat4>,
}

impl RenderBackend for FlakyBackend {
    type Error = BackendError;

    fn upload_model(&mut self, _vertices: &[ModelVertex]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn viewport(&self) -> (u32, u32) {
        self.size
    }

    fn draw(&mut self, matrix: &Mat4, _vertex_count: u32) -> Result<(), Self::Error> {
        if std::mem::take(&mut self.fail_next_draw) {
            return Err(BackendError);
        }
        self.last_matrix = Some(*matrix);
        Ok(())
    }
}

fn ndc(matrix: Mat4, v: &ModelVertex) -> [f32; 3] {
    let p = v.position;
    mat4::transform_vector(matrix, Vec4::point(p[0], p[1], p[2]))
        .perspective_divide()
        .expect("vertex projected to infinity")
        .to_array()
}

#[test]
fn test_default_pose_is_fully_visible() {
    let model = Model::helicopter();
    let matrix = frame_matrix(
        &TransformState::default(),
        &OrbitCamera::default(),
        &ViewSettings::default(),
        (1280, 720),
    )
    .unwrap();

    for v in model.vertices() {
        let p = ndc(matrix, v);
        for c in p {
            assert!((-1.0..=1.0).contains(&c), "vertex {:?} outside clip volume: {:?}", v.position, p);
        }
    }
}

#[test]
fn test_pushing_model_behind_far_plane_clips_it() {
    let model = Model::helicopter();
    let mut state = TransformState::default();
    state.translation.z = -5000.0;
    let matrix = frame_matrix(&state, &OrbitCamera::default(), &ViewSettings::default(), (800, 600))
        .unwrap();

    let hub = ndc(matrix, &model.vertices()[0]);
    assert!(hub[2] > 1.0, "expected hub past the far plane, got {:?}", hub);
}

#[test]
fn test_model_matrix_round_trips_through_inverse() {
    let mut state = TransformState::default();
    state.set_slider(Slider::Rotate(Axis::Y), 45.0);
    state.set_slider(Slider::Scale(Axis::Z), 2.5);
    let model_matrix = state.model_matrix();
    let inverse = mat4::inverse(model_matrix).unwrap();

    for v in Model::helicopter().vertices() {
        let p = Vec4::point(v.position[0], v.position[1], v.position[2]);
        let back = mat4::transform_vector(inverse, mat4::transform_vector(model_matrix, p));
        let d = Vec4::new(back.x - p.x, back.y - p.y, back.z - p.z, back.w - p.w);
        assert!(d.dot(d).sqrt() < 0.01, "{:?} came back as {:?}", p, back);
    }
}

#[test]
fn test_zero_scale_slider_still_draws() {
    // A flattened model is a valid frame; only the projection can fail
    let backend = FlakyBackend { size: (800, 600), fail_next_draw: false, last_matrix: None };
    let mut driver = Driver::new(
        backend,
        Model::helicopter(),
        TransformState::default(),
        OrbitCamera::default(),
        ViewSettings::default(),
    )
    .unwrap();

    let outcome = driver.apply(Slider::Scale(Axis::X), 0.0).unwrap();
    assert!(outcome.is_drawn());
}

#[test]
fn test_backend_errors_propagate() {
    let backend = FlakyBackend { size: (800, 600), fail_next_draw: true, last_matrix: None };
    let mut driver = Driver::new(
        backend,
        Model::helicopter(),
        TransformState::default(),
        OrbitCamera::default(),
        ViewSettings::default(),
    )
    .unwrap();

    assert!(driver.redraw().is_err());
    assert!(driver.backend().last_matrix.is_none());
    assert!(driver.redraw().unwrap().is_drawn());
}

#[test]
fn test_switching_projection_changes_matrix() {
    let backend = FlakyBackend { size: (800, 600), fail_next_draw: false, last_matrix: None };
    let mut driver = Driver::new(
        backend,
        Model::helicopter(),
        TransformState::default(),
        OrbitCamera::default(),
        ViewSettings::default(),
    )
    .unwrap();

    let perspective = driver.redraw().unwrap();
    let pixel = driver.set_projection(ProjectionMode::Pixel).unwrap();
    assert_ne!(perspective, pixel);
    match pixel {
        FrameOutcome::Drawn(m) => assert_eq!(m.get(3, 3), 1.0),
        FrameOutcome::Skipped(err) => panic!("pixel projection skipped: {}", err),
    }
}
