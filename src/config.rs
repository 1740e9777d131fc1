//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`VITRINE_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Particle field configuration
    #[serde(default)]
    pub field: FieldConfig,
    /// Carousel ring configuration
    #[serde(default)]
    pub ring: RingConfig,
    /// Countdown configuration
    #[serde(default)]
    pub countdown: CountdownConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Typewriter configuration
    #[serde(default)]
    pub typewriter: TypewriterConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            field: FieldConfig::default(),
            ring: RingConfig::default(),
            countdown: CountdownConfig::default(),
            rendering: RenderingConfig::default(),
            typewriter: TypewriterConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`VITRINE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // VITRINE_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("VITRINE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title, revealed by the typewriter
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
            title: "Vitrine Showcase".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Particle field configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Number of particles (fixed for the field's lifetime)
    pub particle_count: usize,
    /// Maximum drift speed per axis, surface units per frame
    pub max_drift: f32,
    /// Core radius range
    pub radius_min: f32,
    pub radius_max: f32,
    /// Base opacity range
    pub opacity_min: f32,
    pub opacity_max: f32,
    /// Pulse phase advance per frame range
    pub pulse_rate_min: f32,
    pub pulse_rate_max: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            max_drift: 0.25,
            radius_min: 1.0,
            radius_max: 4.0,
            opacity_min: 0.3,
            opacity_max: 0.8,
            pulse_rate_min: 0.01,
            pulse_rate_max: 0.03,
        }
    }
}

impl FieldConfig {
    pub fn to_field_params(&self) -> vitrine_core::FieldParams {
        vitrine_core::FieldParams {
            particle_count: self.particle_count,
            max_drift: self.max_drift,
            radius_min: self.radius_min,
            radius_max: self.radius_max,
            opacity_min: self.opacity_min,
            opacity_max: self.opacity_max,
            pulse_rate_min: self.pulse_rate_min,
            pulse_rate_max: self.pulse_rate_max,
        }
    }
}

/// Carousel ring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingConfig {
    /// Number of panels on the ring
    pub panel_count: usize,
    /// Panel size in scene units
    pub panel_width: f32,
    pub panel_height: f32,
    /// Automatic rotation period in milliseconds
    pub auto_rotate_ms: u64,
    /// Horizontal drag distance that counts as a swipe, pixels
    pub swipe_threshold: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Distance from the eye to the ring axis, scene units
    pub view_distance: f32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            panel_count: 6,
            panel_width: 480.0,
            panel_height: 320.0,
            auto_rotate_ms: 4000,
            swipe_threshold: 50.0,
            fov: 45.0,
            view_distance: 1400.0,
        }
    }
}

/// Countdown configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// Epoch date the readout measures from
    pub epoch_year: i32,
    pub epoch_month: u32,
    pub epoch_day: u32,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            epoch_year: 2017,
            epoch_month: 1,
            epoch_day: 1,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Particle core color [r, g, b, a]
    pub glow_core_color: [f32; 4],
    /// Glow gradient center color [r, g, b, a]
    pub glow_inner_color: [f32; 4],
    /// Glow gradient mid-stop color [r, g, b, a]
    pub glow_mid_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.02, 0.05, 0.01, 1.0],
            glow_core_color: [1.0, 0.922, 0.706, 1.0],
            glow_inner_color: [0.894, 0.784, 0.596, 1.0],
            glow_mid_color: [0.788, 0.663, 0.380, 1.0],
        }
    }
}

/// Typewriter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Milliseconds per revealed character
    pub speed_ms: u64,
    /// Delay before the first character, milliseconds
    pub initial_delay_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            speed_ms: 80,
            initial_delay_ms: 500,
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
