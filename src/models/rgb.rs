//! RGB color handling with hex parsing and HSV conversion.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSV conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Black, used as the backdrop behind swatches.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyhue::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Zero-padded decimal readout, e.g. `"255 010 000"`.
    #[must_use]
    pub fn readout(&self) -> String {
        format!("{:03} {:03} {:03}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Converts the RGB color to HSV (Hue, Saturation, Value) color space.
    ///
    /// # Returns
    ///
    /// A tuple `(h, s, v)` where:
    /// - `h` (Hue): 0.0-360.0 degrees (0.0 for grayscale)
    /// - `s` (Saturation): 0.0-1.0
    /// - `v` (Value/Brightness): 0.0-1.0
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSV color model uses single-char names
    pub fn to_hsv(&self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        let s = if max == 0.0 { 0.0 } else { delta / max };

        let h = if delta == 0.0 {
            0.0 // Grayscale, hue is undefined
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        let h = if h < 0.0 { h + 360.0 } else { h };

        (h, s, v)
    }

    /// Creates an `RgbColor` from HSV (Hue, Saturation, Value) color space.
    ///
    /// # Arguments
    ///
    /// * `h` - Hue in degrees (0.0-360.0, will be clamped)
    /// * `s` - Saturation (0.0-1.0, will be clamped)
    /// * `v` - Value/Brightness (0.0-1.0, will be clamped)
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyhue::models::RgbColor;
    ///
    /// let green = RgbColor::from_hsv(120.0, 1.0, 1.0);
    /// assert_eq!(green, RgbColor::new(0, 255, 0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h = h.clamp(0.0, 360.0);
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let c = v * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self {
            r: ((r + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            g: ((g + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            b: ((b + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        assert_eq!(RgbColor::from_hex("#FF0000").unwrap(), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from_hex("00ff00").unwrap(), RgbColor::new(0, 255, 0));
        assert_eq!(
            RgbColor::from_hex("  #FFFFFF  ").unwrap(),
            RgbColor::new(255, 255, 255)
        );
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_to_hex_and_display() {
        let color = RgbColor::new(0, 128, 255);
        assert_eq!(color.to_hex(), "#0080FF");
        assert_eq!(color.to_string(), "#0080FF");
    }

    #[test]
    fn test_readout_is_zero_padded() {
        assert_eq!(RgbColor::new(255, 10, 0).readout(), "255 010 000");
        assert_eq!(RgbColor::new(7, 77, 177).readout().len(), 11);
    }

    #[test]
    fn test_rgb_to_hsv_primary_colors() {
        let (h, s, v) = RgbColor::new(0, 0, 255).to_hsv();
        assert!((h - 240.0).abs() < 0.01);
        assert!((s - 1.0).abs() < 0.01);
        assert!((v - 1.0).abs() < 0.01);

        let (h, s, v) = RgbColor::new(128, 128, 128).to_hsv();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((v - 0.502).abs() < 0.01);
    }

    #[test]
    fn test_hsv_to_rgb() {
        assert_eq!(RgbColor::from_hsv(0.0, 1.0, 1.0), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from_hsv(240.0, 1.0, 1.0), RgbColor::new(0, 0, 255));
        assert_eq!(RgbColor::from_hsv(180.0, 0.0, 0.5), RgbColor::new(128, 128, 128));
        // Full circle lands back on red
        assert_eq!(RgbColor::from_hsv(360.0, 1.0, 1.0), RgbColor::new(255, 0, 0));
    }

    #[test]
    fn test_hsv_roundtrip_within_one_step() {
        for color in [
            RgbColor::new(255, 255, 0),
            RgbColor::new(128, 64, 192),
            RgbColor::new(200, 100, 50),
        ] {
            let (h, s, v) = color.to_hsv();
            let back = RgbColor::from_hsv(h, s, v);
            assert!((i16::from(color.r) - i16::from(back.r)).abs() <= 1);
            assert!((i16::from(color.g) - i16::from(back.g)).abs() <= 1);
            assert!((i16::from(color.b) - i16::from(back.b)).abs() <= 1);
        }
    }

    #[test]
    fn test_hsv_clamping() {
        assert_eq!(RgbColor::from_hsv(400.0, 1.5, 1.5), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from_hsv(-10.0, -0.5, -0.5), RgbColor::BLACK);
    }
}
