//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use chopper::config::AppConfig;
use chopper_core::{ProjectionMode, TransformState};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chopper-config-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("CHOPPER_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("CHOPPER_WINDOW__TITLE");
    assert_eq!(config.window.title, "Test From Env");
}

#[test]
#[serial]
fn test_env_override_projection() {
    std::env::set_var("CHOPPER_RENDERING__PROJECTION", "orthographic");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("CHOPPER_RENDERING__PROJECTION");
    assert_eq!(config.rendering.projection, ProjectionMode::Orthographic);
}

#[test]
#[serial]
fn test_shipped_defaults_match_code_defaults() {
    let config = AppConfig::load().unwrap();
    let defaults = AppConfig::default();
    assert_eq!(config.window.title, defaults.window.title);
    assert_eq!(config.transform.to_transform_state(), TransformState::default());
    assert_eq!(config.rendering.to_view_settings(), defaults.rendering.to_view_settings());
    assert_eq!(config.input.to_slider_steps(), defaults.input.to_slider_steps());
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = scratch_dir("user");
    fs::write(dir.join("default.toml"), "[window]\ntitle = \"Default\"\nwidth = 800\n").unwrap();
    fs::write(dir.join("user.toml"), "[window]\ntitle = \"User\"\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.window.title, "User");
    assert_eq!(config.window.width, 800);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.camera.radius, 200.0);
}

#[test]
#[serial]
fn test_invalid_value_is_reported() {
    let dir = scratch_dir("invalid");
    fs::write(dir.join("default.toml"), "[window]\nwidth = \"wide\"\n").unwrap();

    let result = AppConfig::load_from(&dir);
    fs::remove_dir_all(&dir).unwrap();

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error:"));
}
