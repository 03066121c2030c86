//! Chopper - transform-matrix model viewer
//!
//! Application-level pieces shared by the binary and its integration tests.

pub mod config;
pub mod input;
pub mod systems;
