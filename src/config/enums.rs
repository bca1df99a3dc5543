//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a named/hex color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "crimson"
///
/// # Hex color
/// color = "#dc3545"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (crimson, red, green, blue, yellow, orange, pink, white,
    /// black) or a `#rrggbb` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped through `util::name_to_color()`. Unknown
    /// color names fall back to crimson with a warning. RGB arrays are
    /// converted from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using crimson", name);
                CRIMSON
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_hex_and_rgb_specs_convert() {
        assert_eq!(ColorSpec::Name("crimson".into()).to_color(), CRIMSON);
        assert_eq!(ColorSpec::Name("#dc3545".into()).to_color(), CRIMSON);
        assert_eq!(ColorSpec::Rgb([220, 53, 69]).to_color(), CRIMSON);
        assert_eq!(ColorSpec::Rgb([0, 0, 255]).to_color(), BLUE);
    }

    #[test]
    fn unknown_name_falls_back_to_crimson() {
        assert_eq!(ColorSpec::Name("mauve".into()).to_color(), CRIMSON);
    }
}
