//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pen defaults applied when a surface is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PenConfig {
    /// Ink color - a named color, `#rrggbb`, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_pen_color")]
    pub color: ColorSpec,

    /// Initial pen width in logical pixels (valid range: 0.5 - 200.0)
    #[serde(default = "default_pen_width")]
    pub width: f64,
}

impl Default for PenConfig {
    fn default() -> Self {
        Self {
            color: default_pen_color(),
            width: default_pen_width(),
        }
    }
}

/// Eraser defaults applied when a surface is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EraserConfig {
    /// Initial eraser width in logical pixels (valid range: 0.5 - 200.0)
    #[serde(default = "default_eraser_width")]
    pub width: f64,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            width: default_eraser_width(),
        }
    }
}

/// Display settings used when the host does not report its own density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DisplayConfig {
    /// Physical pixels per logical pixel (valid range: 0.5 - 8.0)
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            device_pixel_ratio: default_device_pixel_ratio(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_pen_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_pen_width() -> f64 {
    2.0
}

fn default_eraser_width() -> f64 {
    20.0
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}
