//! Slider Input Handling
//!
//! This crate maps keyboard input onto the viewer's sliders, standing in for
//! the on-screen slider widgets.

mod slider_controller;

pub use slider_controller::{SliderController, SliderNudge, SliderSteps};
