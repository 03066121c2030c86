//! Input handling module
//!
//! Provides input mapping from raw events to viewer actions.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
