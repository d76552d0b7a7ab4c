//! A single color carried in both HSV and RGB form.

use super::RgbColor;

/// Upper bound (exclusive) of the hue circle in degrees.
pub const HUE_MAX: f64 = 360.0;
/// Upper bound (inclusive) of saturation and value, in percent.
pub const PERCENT_MAX: f64 = 100.0;

/// Color with hue in `[0, 360)`, saturation and value in `[0, 100]`.
///
/// `rgb` is derived when the color is built from HSV; a color built from
/// RGB keeps the exact channels and derives its HSV instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    hue: f64,
    saturation: f64,
    value: f64,
    rgb: RgbColor,
}

impl Color {
    /// Builds a color from HSV components, clamping each into its domain.
    #[must_use]
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let hue = normalize_hue(hue);
        let saturation = saturation.clamp(0.0, PERCENT_MAX);
        let value = value.clamp(0.0, PERCENT_MAX);
        Self {
            hue,
            saturation,
            value,
            rgb: RgbColor::from_hsv(hue, saturation / PERCENT_MAX, value / PERCENT_MAX),
        }
    }

    /// Builds a color from literal RGB channels.
    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let (h, s, v) = rgb.to_hsv();
        Self {
            hue: normalize_hue(h),
            saturation: s * PERCENT_MAX,
            value: v * PERCENT_MAX,
            rgb,
        }
    }

    /// Hue in degrees.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation in percent.
    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Value in percent.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// RGB channels.
    #[must_use]
    pub const fn rgb(&self) -> RgbColor {
        self.rgb
    }
}

/// Wraps any hue into `[0, 360)`.
#[must_use]
pub fn normalize_hue(hue: f64) -> f64 {
    if hue.is_finite() {
        let h = hue.rem_euclid(HUE_MAX);
        // rem_euclid can round up to the modulus for tiny negative inputs
        if h >= HUE_MAX {
            0.0
        } else {
            h
        }
    } else {
        0.0
    }
}
