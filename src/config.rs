//! Game configuration
//!
//! Uses RON (Rusty Object Notation) for a human-editable settings file.
//! Every section falls back to its defaults when omitted, so a config file
//! only needs the values it changes.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

use crate::game::pool::MAX_ENTITIES;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "FA_CONFIG";

/// Error type for config loading and saving
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
    /// RGBA, 0xRRGGBBAA
    pub clear_color: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Forgotten Academia".to_string(),
            width: 1280,
            height: 720,
            clear_color: 0x4f4263ff,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Screen pixels per world unit
    pub zoom: f32,
    pub follow_rate: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self { zoom: 3.0, follow_rate: 30.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// World units per second
    pub speed: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self { speed: 128.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    pub selection_radius: f32,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self { selection_radius: 8.0 }
    }
}

/// Initial population of the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    pub circles: usize,
    pub skeletons: usize,
    /// Positions are drawn from [-extent, extent] on each axis
    pub extent: f32,
    pub seed: u64,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            circles: 10,
            skeletons: 10,
            extent: 500.0,
            seed: 0x5eed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Ground tiles drawn around the player in each direction
    pub tile_radius: i32,
    /// Item bob height in world units
    pub item_bob_amplitude: f32,
    /// Item bob angular speed (radians per second)
    pub item_bob_speed: f32,
    pub show_debug_overlay: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            tile_radius: 40,
            item_bob_amplitude: 2.0,
            item_bob_speed: 4.0,
            show_debug_overlay: false,
        }
    }
}

/// All settings, one section per concern
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    pub player: PlayerSettings,
    pub interaction: InteractionSettings,
    pub spawn: SpawnSettings,
    pub render: RenderSettings,
}

/// Require a finite, strictly positive value
fn check_positive(value: f32, name: &str) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!("{} must be positive and finite (got {})", name, value)))
    }
}

impl GameConfig {
    /// Parse RON text and validate it
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("    ".to_string());
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Write as pretty RON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// Where the config file is looked up: `$FA_CONFIG`, then the
    /// platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        platform_config_dir().map(|dir| dir.join("forgotten-academia").join("config.ron"))
    }

    /// Load from `default_path`, falling back to defaults on any problem.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            log::info!("No config directory available, using default settings");
            return Self::default();
        };
        Self::load_from_or_default(&path)
    }

    pub fn load_from_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at {}, using default settings", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive(self.camera.zoom, "camera.zoom")?;
        check_positive(self.camera.follow_rate, "camera.follow_rate")?;
        check_positive(self.player.speed, "player.speed")?;
        check_positive(self.interaction.selection_radius, "interaction.selection_radius")?;

        if !self.spawn.extent.is_finite() || self.spawn.extent < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "spawn.extent must be finite and non-negative (got {})", self.spawn.extent)));
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "window size must be positive (got {}x{})", self.window.width, self.window.height)));
        }
        if self.render.tile_radius < 0 {
            return Err(ConfigError::ValidationError(format!(
                "render.tile_radius must not be negative (got {})", self.render.tile_radius)));
        }

        // Player plus the initial population must fit in the pool
        let population = self.spawn.circles.saturating_add(self.spawn.skeletons).saturating_add(1);
        if population > MAX_ENTITIES {
            return Err(ConfigError::ValidationError(format!(
                "initial population of {} exceeds world capacity of {}", population, MAX_ENTITIES)));
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_config_dir() -> Option<PathBuf> {
    dirs::config_dir()
}

#[cfg(target_arch = "wasm32")]
fn platform_config_dir() -> Option<PathBuf> {
    None
}
