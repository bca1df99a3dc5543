//! Configuration file support for strokepad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/strokepad/config.toml`. Settings
//! cover stroke appearance, surface layout, and key assignments.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{KeyConfig, StrokeConfig, SurfaceConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::host::Key;
use crate::pad::PadOptions;

/// Main configuration structure containing all user settings.
///
/// This is the root type that gets deserialized from the TOML file. All
/// fields have sensible defaults and will use those if not specified.
///
/// # Example TOML
/// ```toml
/// [stroke]
/// color = "#dc3545"
/// width = 2.0
///
/// [surface]
/// container_id = "canvas-wrap"
/// height = 200.0
/// margin = 10.0
///
/// [keys]
/// clear = "c"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Stroke appearance (color, width)
    #[serde(default)]
    pub stroke: StrokeConfig,

    /// Surface layout (container, height, margin)
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Key assignments
    #[serde(default)]
    pub keys: KeyConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged, so a bad config file degrades instead of failing.
    ///
    /// Validated ranges:
    /// - `stroke.width`: 0.5 - 20.0
    /// - `surface.height`: 50.0 - 2000.0
    /// - `surface.margin`: 0.0 - 64.0
    /// - `keys.clear`: must parse as a key; falls back to `c`
    fn validate_and_clamp(&mut self) {
        if !(0.5..=20.0).contains(&self.stroke.width) {
            warn!(
                "Invalid stroke width {:.1}, clamping to 0.5-20.0 range",
                self.stroke.width
            );
            self.stroke.width = self.stroke.width.clamp(0.5, 20.0);
        }

        if !(50.0..=2000.0).contains(&self.surface.height) {
            warn!(
                "Invalid surface height {:.1}, clamping to 50.0-2000.0 range",
                self.surface.height
            );
            self.surface.height = self.surface.height.clamp(50.0, 2000.0);
        }

        if !(0.0..=64.0).contains(&self.surface.margin) {
            warn!(
                "Invalid surface margin {:.1}, clamping to 0.0-64.0 range",
                self.surface.margin
            );
            self.surface.margin = self.surface.margin.clamp(0.0, 64.0);
        }

        if self.surface.container_id.trim().is_empty() {
            warn!("Empty container_id, falling back to 'canvas-wrap'");
            self.surface.container_id = "canvas-wrap".to_string();
        }

        if Key::parse(&self.keys.clear).is_none() {
            warn!(
                "Invalid clear key '{}', falling back to 'c'",
                self.keys.clear
            );
            self.keys.clear = "c".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/strokepad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("strokepad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if
    /// the file does not exist. Loaded values are validated and clamped.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);
        Ok(config)
    }

    /// Resolves the configuration into the options the widget consumes.
    pub fn pad_options(&self) -> PadOptions {
        PadOptions {
            container_id: self.surface.container_id.clone(),
            stroke_color: self.stroke.color.to_color(),
            stroke_width: self.stroke.width,
            surface_height: self.surface.height,
            surface_margin: self.surface.margin,
            // validate_and_clamp guarantees the key parses; a hand-built
            // Config may still carry junk, so fall back rather than panic.
            clear_key: Key::parse(&self.keys.clear).unwrap_or(Key::Char('c')),
        }
    }
}
