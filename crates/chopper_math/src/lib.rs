//! 4x4 Transform Library
//!
//! This crate provides the homogeneous matrix math behind the chopper viewer:
//! construction of elementary transforms, composition, projection and full
//! cofactor inversion.
//!
//! ## Core Types
//!
//! - [`Mat4`] - 4x4 column-major matrix
//! - [`Vec4`] - homogeneous point/direction
//! - [`Vec3`] - translation/rotation/scale parameters
//! - [`MathError`] - degenerate projections and singular matrices
//!
//! See [`mat4`] for the multiplication-order convention.

mod error;
mod vec3;
mod vec4;
pub mod mat4;
pub mod projection;

pub use error::MathError;
pub use vec3::{Axis, Vec3};
pub use vec4::Vec4;
pub use mat4::Mat4;
pub use projection::{orthographic, perspective, projection};
