//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Stroke appearance settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StrokeConfig {
    /// Pen color - a named color (crimson, red, ...), a `#rrggbb` hex
    /// string, or an RGB array like `[220, 53, 69]`
    #[serde(default = "default_stroke_color")]
    pub color: ColorSpec,

    /// Pen width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub width: f64,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            color: default_stroke_color(),
            width: default_stroke_width(),
        }
    }
}

/// Surface layout settings.
///
/// Controls where the surface mounts and how it is sized. The width always
/// follows the container's content width; only the height is fixed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SurfaceConfig {
    /// Id of the host container the surface is mounted into
    #[serde(default = "default_container_id")]
    pub container_id: String,

    /// Fixed surface height in pixels (valid range: 50.0 - 2000.0)
    #[serde(default = "default_surface_height")]
    pub height: f64,

    /// Horizontal margin subtracted from the container content width
    /// (valid range: 0.0 - 64.0)
    #[serde(default = "default_surface_margin")]
    pub margin: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            height: default_surface_height(),
            margin: default_surface_margin(),
        }
    }
}

/// Key assignments.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct KeyConfig {
    /// Key that erases the surface content, matched case-insensitively.
    /// A single character, or one of: escape, return, backspace
    #[serde(default = "default_clear_key")]
    pub clear: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            clear: default_clear_key(),
        }
    }
}

// ============================================================================
// Default value functions (used by serde defaults)
// ============================================================================

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("crimson".to_string())
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_container_id() -> String {
    "canvas-wrap".to_string()
}

fn default_surface_height() -> f64 {
    200.0
}

fn default_surface_margin() -> f64 {
    10.0
}

fn default_clear_key() -> String {
    "c".to_string()
}
