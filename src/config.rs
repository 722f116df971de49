//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`NDC_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use ndcube_core::{ParamError, ProjectionKind, RotationSchedule, ViewParams};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Mouse control configuration
    #[serde(default)]
    pub controls: ControlsConfig,
    /// Hypercube and projection configuration
    #[serde(default)]
    pub hypercube: HypercubeConfig,
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
    /// 3. Environment variables (`NDC_*`)
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

        // NDC_HYPERCUBE__INITIAL_DIMENSION=5 -> hypercube.initial_dimension = 5
        figment = figment.merge(Env::prefixed("NDC_").split("__"));

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
            title: "ndcube - N-Dimensional Hypercube".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Starting distance from the origin
    pub distance: f32,
    /// Closest the camera may zoom
    pub min_distance: f32,
    /// Farthest the camera may zoom
    pub max_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 15.0,
            min_distance: 5.0,
            max_distance: 1000.0,
        }
    }
}

/// Mouse control configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Radians of orbit per pixel dragged
    pub rotate_speed: f32,
    /// Exponent on the per-step zoom factor 0.95
    pub zoom_speed: f32,
    /// Fraction of the gap to the target left after one frame at 60 FPS
    pub damping_factor: f32,
    /// Rotation velocity kept per frame at 60 FPS
    pub inertia_damping: f32,
    /// Zoom velocity kept per frame at 60 FPS
    pub zoom_damping: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            rotate_speed: 0.005,
            zoom_speed: 1.0,
            damping_factor: 0.1,
            inertia_damping: 0.98,
            zoom_damping: 0.9,
        }
    }
}

/// Hypercube and projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HypercubeConfig {
    /// Dimension shown at startup
    pub initial_dimension: i64,
    /// Highest dimension the controls allow
    pub max_dimension: usize,
    /// Half edge length
    pub size: f64,
    /// Rotation speed in radians per second
    pub speed: f64,
    /// Times the rotation is applied before reducing to 3D
    pub recursion_depth: usize,
    /// Planes the animated rotation turns in
    pub schedule: RotationSchedule,
    /// Reduction to 3D
    pub projection: ProjectionKind,
    /// Viewer distance for the perspective reduction, in half edge lengths
    pub perspective_distance: f64,
    /// Angle of the oblique display matrix in radians
    pub oblique_angle: f64,
    /// Random jitter on the oblique or random matrix per frame
    pub distortion: f64,
    /// Distortion added per second while animating
    pub distortion_speed: f64,
    /// Spin direction weights about the display x, y and z axes
    pub spin: [f64; 3],
    /// Spin rate in radians per second
    pub spin_speed: f64,
    /// Amplitude of the breathing scale effect (0 disables)
    pub pulse: f64,
    /// Draw the facet cubes around cubes above 3D
    pub show_facets: bool,
    /// Seconds a dimension morph takes
    pub morph_duration: f64,
    /// Seed for projection jitter
    pub seed: u64,
}

impl Default for HypercubeConfig {
    fn default() -> Self {
        let params = ViewParams::default();
        Self {
            initial_dimension: params.dimension() as i64,
            max_dimension: params.max_dimension(),
            size: 3.0,
            speed: params.speed(),
            recursion_depth: params.recursion_depth(),
            schedule: params.schedule,
            projection: params.projection,
            perspective_distance: params.perspective_distance,
            oblique_angle: params.oblique_angle,
            distortion: params.distortion,
            distortion_speed: params.distortion_speed(),
            spin: params.spin,
            spin_speed: params.spin_speed(),
            pulse: 0.0,
            show_facets: params.show_facets,
            morph_duration: ndcube_core::DEFAULT_MORPH_DURATION,
            seed: 0,
        }
    }
}

impl HypercubeConfig {
    /// Validated view parameters for this configuration
    pub fn to_view_params(&self) -> Result<ViewParams, ParamError> {
        let mut params = ViewParams::with_max_dimension(self.max_dimension);
        params.set_dimension(self.initial_dimension)?;
        params.set_size(self.size)?;
        params.set_speed(self.speed)?;
        params.set_recursion_depth(self.recursion_depth)?;
        params.set_spin_speed(self.spin_speed)?;
        params.set_distortion_speed(self.distortion_speed)?;
        params.schedule = self.schedule;
        params.projection = self.projection;
        params.perspective_distance = self.perspective_distance;
        params.oblique_angle = self.oblique_angle;
        params.distortion = self.distortion.max(0.0);
        params.show_facets = self.show_facets;
        params.spin = self.spin.map(|w| if w.is_finite() { w } else { 0.0 });
        Ok(params)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Line alpha
    pub line_opacity: f32,
    /// Cycle the cube color through all hues instead of the dimension palette
    pub hue_cycling: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            line_opacity: 0.8,
            hue_cycling: false,
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

impl From<ParamError> for ConfigError {
    fn from(e: ParamError) -> Self {
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
