//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PG_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use pgrid_core::{ConnectorParams, FieldParams, GridParams, SketchParams, StyleParams};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Lattice layout
    #[serde(default)]
    pub grid: GridConfig,
    /// Pointer response
    #[serde(default)]
    pub field: FieldConfig,
    /// Colors, alphas and stroke weights
    #[serde(default)]
    pub style: StyleConfig,
    /// Connectors drawn towards the pointer
    #[serde(default)]
    pub pointer: PointerConfig,
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
    /// 3. Environment variables (`PG_*`)
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

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // PG_GRID__SPACING=30 -> grid.spacing = 30
        figment = figment.merge(Env::prefixed("PG_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Collect the sketch tuning from all sections
    pub fn to_sketch_params(&self) -> SketchParams {
        SketchParams {
            grid: self.grid.to_grid_params(),
            field: self.field.to_field_params(),
            style: self.style.to_style_params(),
            connectors: self.pointer.to_connector_params(self.field.active_zone),
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Particle Grid".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Lattice configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Distance between lattice cells in pixels
    pub spacing: f32,
    /// Maximum rest-position jitter on each axis
    pub jitter: f32,
    /// Glyph size range [min, max)
    pub point_size: [f32; 2],
    /// Neighbours within `link_factor * spacing` are linked
    pub link_factor: f32,
    /// Fixed RNG seed; random when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spacing: 40.0,
            jitter: 5.0,
            point_size: [1.0, 2.0],
            link_factor: 1.5,
            seed: None,
        }
    }
}

impl GridConfig {
    pub fn to_grid_params(&self) -> GridParams {
        GridParams {
            spacing: self.spacing,
            jitter: self.jitter,
            min_size: self.point_size[0],
            max_size: self.point_size[1],
            link_factor: self.link_factor,
        }
    }
}

/// Pointer response configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Radius around the pointer in which points react
    pub active_zone: f32,
    /// Fraction of the offset recovered per frame outside the zone
    pub return_rate: f32,
    /// Per-frame decay of distortion and line length outside the zone
    pub decay: f32,
    /// Frames a point stays active after activation
    pub hold_frames: u64,
    /// Strength at the pointer (falls to zero at the zone edge)
    pub falloff_start: f32,
    /// Multiplier on pointer speed
    pub speed_gain: f32,
    /// Random distortion increment bound, fraction of strength
    pub distortion_gain: f32,
    /// Random line-length increment bound, fraction of strength
    pub line_gain: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        let p = FieldParams::default();
        Self {
            active_zone: p.active_zone,
            return_rate: p.return_rate,
            decay: p.decay,
            hold_frames: p.hold_frames,
            falloff_start: p.falloff_start,
            speed_gain: p.speed_gain,
            distortion_gain: p.distortion_gain,
            line_gain: p.line_gain,
        }
    }
}

impl FieldConfig {
    pub fn to_field_params(&self) -> FieldParams {
        FieldParams {
            active_zone: self.active_zone,
            return_rate: self.return_rate,
            decay: self.decay,
            hold_frames: self.hold_frames,
            falloff_start: self.falloff_start,
            speed_gain: self.speed_gain,
            distortion_gain: self.distortion_gain,
            line_gain: self.line_gain,
        }
    }
}

/// Style configuration (alphas on the 0-255 scale)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Accent color [r, g, b]
    pub accent: [u8; 3],
    /// Link alpha at zero and full activation
    pub link_alpha: [f32; 2],
    /// Link weight at zero and full activation
    pub link_weight: [f32; 2],
    pub idle_point_alpha: f32,
    pub active_point_alpha: f32,
    /// Glyph growth per pixel of distortion
    pub point_growth: f32,
    pub extension_alpha: f32,
    /// Fraction of the spacing a line must exceed to be drawn
    pub extension_threshold: f32,
    /// Extension weight relative to glyph size
    pub extension_weight: f32,
    /// Noise frequency for extension directions
    pub noise_scale: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let s = StyleParams::default();
        Self {
            accent: s.accent,
            link_alpha: s.link_alpha,
            link_weight: s.link_weight,
            idle_point_alpha: s.idle_point_alpha,
            active_point_alpha: s.active_point_alpha,
            point_growth: s.point_growth,
            extension_alpha: s.extension_alpha,
            extension_threshold: s.extension_threshold,
            extension_weight: s.extension_weight,
            noise_scale: s.noise_scale,
        }
    }
}

impl StyleConfig {
    pub fn to_style_params(&self) -> StyleParams {
        StyleParams {
            accent: self.accent,
            link_alpha: self.link_alpha,
            link_weight: self.link_weight,
            idle_point_alpha: self.idle_point_alpha,
            active_point_alpha: self.active_point_alpha,
            point_growth: self.point_growth,
            extension_alpha: self.extension_alpha,
            extension_threshold: self.extension_threshold,
            extension_weight: self.extension_weight,
            noise_scale: self.noise_scale,
        }
    }
}

/// Pointer connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Search radius as a fraction of the active zone
    pub radius_factor: f32,
    /// Minimum pointer speed (pixels/frame) before connectors appear
    pub min_speed: f32,
    /// Speed range mapped onto `count`
    pub speed_range: [f32; 2],
    /// Connector count at the ends of the speed range
    pub count: [f32; 2],
    /// Alpha from nearest to farthest connector
    pub alpha: [f32; 2],
    /// Weight from nearest to farthest connector
    pub weight: [f32; 2],
    /// Segments per connector
    pub steps: u32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        let c = ConnectorParams::default();
        Self {
            radius_factor: 0.5,
            min_speed: c.min_speed,
            speed_range: c.speed_range,
            count: c.count,
            alpha: c.alpha,
            weight: c.weight,
            steps: c.steps,
        }
    }
}

impl PointerConfig {
    pub fn to_connector_params(&self, active_zone: f32) -> ConnectorParams {
        ConnectorParams {
            radius: active_zone * self.radius_factor,
            min_speed: self.min_speed,
            speed_range: self.speed_range,
            count: self.count,
            alpha: self.alpha,
            weight: self.weight,
            steps: self.steps,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Requested MSAA samples (1 disables); clamped to what the GPU supports
    pub msaa_samples: u32,
    /// Thinnest stroke in device pixels; thinner lines are faded instead
    pub min_line_width: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            msaa_samples: 4,
            min_line_width: 1.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    pub log_level: String,
    /// Show point count and FPS in the window title
    pub show_stats: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_stats: true,
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
