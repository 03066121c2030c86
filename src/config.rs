//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`CHOPPER_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::f32::consts::TAU;
use std::path::Path;

use chopper_core::{OrbitCamera, ProjectionMode, Slider, TransformState, Vec3, ViewSettings};
use chopper_input::SliderSteps;
use chopper_render::BackendOptions;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Orbit camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Start pose of the model
    #[serde(default)]
    pub transform: TransformConfig,
    /// Keyboard slider step sizes
    #[serde(default)]
    pub input: InputConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`CHOPPER_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // CHOPPER_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("CHOPPER_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Chopper - Model Viewer".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Orbit camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Orbit angle about Y in degrees
    pub angle: f32,
    /// Orbit radius
    pub radius: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 60.0,
            angle: 0.0,
            radius: 200.0,
            near: 1.0,
            far: 2000.0,
        }
    }
}

impl CameraConfig {
    pub fn to_orbit_camera(&self) -> OrbitCamera {
        OrbitCamera {
            fov: self.fov.to_radians(),
            angle: self.angle.to_radians(),
            radius: self.radius,
            near: self.near,
            far: self.far,
        }
    }
}

/// Start pose of the model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Translation [x, y, z]
    pub translation: [f32; 3],
    /// Rotation per axis in radians [x, y, z]
    pub rotation: [f32; 3],
    /// Scale [x, y, z]
    pub scale: [f32; 3],
}

impl Default for TransformConfig {
    fn default() -> Self {
        let state = TransformState::default();
        Self {
            translation: state.translation.to_array(),
            rotation: state.rotation.to_array(),
            scale: state.scale.to_array(),
        }
    }
}

impl TransformConfig {
    /// Build the start state with translation and scale clamped to the slider ranges
    ///
    /// Rotations are wrapped into `[0, 2π)` so the rotate sliders start inside their range.
    pub fn to_transform_state(&self) -> TransformState {
        let rotation = self.rotation.map(wrap_angle);
        let mut state = TransformState::new(
            Vec3::from(self.translation),
            Vec3::from(rotation),
            Vec3::from(self.scale),
        );
        for slider in Slider::ALL.into_iter().filter(|s| !s.is_angle()) {
            if let Some(value) = state.slider_value(slider) {
                state.set_slider(slider, value);
            }
        }
        state
    }
}

fn wrap_angle(radians: f32) -> f32 {
    let wrapped = radians.rem_euclid(TAU);
    // rem_euclid rounds tiny negative angles up to exactly TAU
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Keyboard slider step sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Translation step in model units
    pub translation_step: f32,
    /// Rotation and camera-angle step in degrees
    pub rotation_step: f32,
    /// Scale step
    pub scale_step: f32,
    /// Field-of-view step in degrees
    pub fov_step: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        let steps = SliderSteps::default();
        Self {
            translation_step: steps.translation,
            rotation_step: steps.rotation,
            scale_step: steps.scale,
            fov_step: steps.field_of_view,
        }
    }
}

impl InputConfig {
    pub fn to_slider_steps(&self) -> SliderSteps {
        SliderSteps {
            translation: self.translation_step,
            rotation: self.rotation_step,
            scale: self.scale_step,
            field_of_view: self.fov_step,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Starting projection: "perspective", "orthographic" or "pixel"
    pub projection: ProjectionMode,
    /// Multiply in the orbit camera's view matrix
    pub orbit_view: bool,
    /// Depth extent of the orthographic and pixel projections
    pub depth: f32,
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Drop clockwise triangles
    pub cull_back_faces: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        let view = ViewSettings::default();
        Self {
            projection: view.projection,
            orbit_view: view.orbit_view,
            depth: view.depth,
            background_color: [1.0, 1.0, 1.0, 1.0],
            cull_back_faces: true,
        }
    }
}

impl RenderingConfig {
    pub fn to_view_settings(&self) -> ViewSettings {
        ViewSettings {
            projection: self.projection,
            orbit_view: self.orbit_view,
            depth: self.depth,
        }
    }

    pub fn to_backend_options(&self, vsync: bool) -> BackendOptions {
        BackendOptions {
            vsync,
            cull_back_faces: self.cull_back_faces,
            background_color: self.background_color,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
