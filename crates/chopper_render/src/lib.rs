//! wgpu rendering backend for the chopper viewer
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ModelPipeline`] - vertex-coloured triangle pipeline with depth testing
//! - [`backend::GpuBackend`] - [`chopper_core::RenderBackend`] implementation

pub mod backend;
pub mod context;
pub mod error;
pub mod pipeline;

pub use backend::{clear_color, BackendOptions, GpuBackend};
pub use context::RenderContext;
pub use error::RenderError;
pub use pipeline::ModelPipeline;
