//! Configuration file support for scratchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/scratchpad/config.toml`. Settings cover the pen and eraser
//! defaults and the display density used by the replay host.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{DisplayConfig, EraserConfig, PenConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const WIDTH_RANGE: std::ops::RangeInclusive<f64> = 0.5..=200.0;
const DPR_RANGE: std::ops::RangeInclusive<f64> = 0.5..=8.0;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [pen]
/// color = "black"
/// width = 2.0
///
/// [eraser]
/// width = 20.0
///
/// [display]
/// device_pixel_ratio = 2.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, schemars::JsonSchema)]
pub struct Config {
    /// Pen defaults (color, width)
    #[serde(default)]
    pub pen: PenConfig,

    /// Eraser defaults (width)
    #[serde(default)]
    pub eraser: EraserConfig,

    /// Display density fallback
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Validates and clamps configured defaults to acceptable ranges.
    ///
    /// Only the configured starting values are clamped; widths set at runtime
    /// through the surface API are passed through untouched.
    ///
    /// Validated ranges:
    /// - `pen.width`, `eraser.width`: 0.5 - 200.0
    /// - `display.device_pixel_ratio`: 0.5 - 8.0
    fn validate_and_clamp(&mut self) {
        self.pen.width = clamp_logged("pen.width", self.pen.width, WIDTH_RANGE);
        self.eraser.width = clamp_logged("eraser.width", self.eraser.width, WIDTH_RANGE);
        self.display.device_pixel_ratio = clamp_logged(
            "display.device_pixel_ratio",
            self.display.device_pixel_ratio,
            DPR_RANGE,
        );
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("scratchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_logged(name: &str, value: f64, range: std::ops::RangeInclusive<f64>) -> f64 {
    if range.contains(&value) {
        return value;
    }
    let clamped = if value.is_nan() {
        *range.start()
    } else {
        value.clamp(*range.start(), *range.end())
    };
    log::warn!(
        "Invalid {} {:.2}, clamping to {:.1}-{:.1} range",
        name,
        value,
        range.start(),
        range.end()
    );
    clamped
}
