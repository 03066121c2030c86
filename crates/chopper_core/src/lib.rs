//! Chopper Core
//!
//! The rendering driver and everything it owns:
//!
//! - [`TransformState`] - translation, rotation and scale driven by sliders
//! - [`Slider`] - the adjustable parameters and their ranges
//! - [`OrbitCamera`] - field of view and the optional orbiting view matrix
//! - [`Model`] - the static helicopter triangle list
//! - [`Driver`] - rebuilds the frame matrix and hands it to a [`RenderBackend`]

pub mod camera;
pub mod driver;
pub mod model;
pub mod slider;
pub mod transform_state;

pub use camera::OrbitCamera;
pub use driver::{frame_matrix, Driver, FrameOutcome, ProjectionMode, RenderBackend, ViewSettings};
pub use model::{Model, ModelPart, ModelVertex, HELICOPTER_PARTS};
pub use slider::Slider;
pub use transform_state::TransformState;

// Re-export math types used throughout the public API
pub use chopper_math::{Axis, Mat4, MathError, Vec3, Vec4};
