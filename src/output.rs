//! Palette printout after the terminal has been restored.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::Color;

/// One palette entry as printed with `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    /// "#RRGGBB"
    pub hex: String,
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Hue in degrees
    pub hue: f64,
    /// Saturation in percent
    pub saturation: f64,
    /// Value in percent
    pub value: f64,
}

impl From<&Color> for PaletteEntry {
    fn from(color: &Color) -> Self {
        let rgb = color.rgb();
        Self {
            hex: rgb.to_hex(),
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            hue: color.hue(),
            saturation: color.saturation(),
            value: color.value(),
        }
    }
}

/// One `#RRGGBB` per line.
#[must_use]
pub fn format_plain(colors: &[Color]) -> String {
    colors
        .iter()
        .map(|color| color.rgb().to_hex())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON array of [`PaletteEntry`].
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_json(colors: &[Color]) -> Result<String> {
    let entries: Vec<PaletteEntry> = colors.iter().map(PaletteEntry::from).collect();
    serde_json::to_string_pretty(&entries).context("Failed to serialize palette")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RgbColor;

    fn colors() -> Vec<Color> {
        vec![
            Color::from_rgb(RgbColor::new(255, 0, 0)),
            Color::from_rgb(RgbColor::new(0, 128, 255)),
        ]
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(&colors()), "#FF0000\n#0080FF");
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&colors()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["hex"], "#FF0000");
        assert_eq!(value[1]["b"], 255);
        assert_eq!(value[0]["saturation"], 100.0);
    }
}
