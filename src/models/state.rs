//! The color model shared by every widget.
//!
//! `ColorState` owns the current HSV color and the palette of sub-colors.
//! Widgets never hold on to it; the host passes it into each call, and every
//! mutation goes through a setter here that reports what it changed.

// Exact comparison is what decides whether a setter reports a change
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]

use anyhow::Result;

use super::{Color, RgbColor, StateChange};

/// Saturation used for generated palettes.
const DEFAULT_SATURATION: f64 = 80.0;
/// Value used for generated palettes.
const DEFAULT_VALUE: f64 = 90.0;

/// Current color plus the palette it is editing.
#[derive(Debug, Clone)]
pub struct ColorState {
    current: Color,
    sub_colors: Vec<Color>,
    pos: usize,
}

impl ColorState {
    /// Creates a state over the given palette, selecting the first entry.
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        let Some(first) = colors.first() else {
            anyhow::bail!("Palette must contain at least one color");
        };
        Ok(Self {
            current: Color::from_hsv(first.hue(), first.saturation(), first.value()),
            sub_colors: colors,
            pos: 0,
        })
    }

    /// Creates a palette of `count` colors with evenly spaced hues.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub fn with_count(count: usize) -> Result<Self> {
        let colors = (0..count)
            .map(|n| {
                Color::from_hsv(
                    n as f64 * 360.0 / count as f64,
                    DEFAULT_SATURATION,
                    DEFAULT_VALUE,
                )
            })
            .collect();
        Self::new(colors)
    }

    /// Creates a palette from literal RGB colors.
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty.
    pub fn from_rgb(colors: &[RgbColor]) -> Result<Self> {
        Self::new(colors.iter().copied().map(Color::from_rgb).collect())
    }

    /// Hue of the current color in degrees.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.current.hue()
    }

    /// Saturation of the current color in percent.
    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.current.saturation()
    }

    /// Value of the current color in percent.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.current.value()
    }

    /// Index of the selected sub-color.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Number of sub-colors (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.sub_colors.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sub_colors.is_empty()
    }

    /// All sub-colors in palette order.
    #[must_use]
    pub fn sub_colors(&self) -> &[Color] {
        &self.sub_colors
    }

    /// The selected sub-color.
    #[must_use]
    pub fn selected(&self) -> &Color {
        &self.sub_colors[self.pos]
    }

    /// The current color as built from its HSV components.
    #[must_use]
    pub const fn base_color(&self) -> Color {
        self.current
    }

    /// Sets the hue, wrapping it into `[0, 360)`.
    pub fn set_hue(&mut self, hue: f64) -> StateChange {
        let next = Color::from_hsv(hue, self.saturation(), self.value());
        self.replace_current(next)
    }

    /// Sets the saturation, clamped to `[0, 100]`.
    pub fn set_saturation(&mut self, saturation: f64) -> StateChange {
        let next = Color::from_hsv(self.hue(), saturation, self.value());
        self.replace_current(next)
    }

    /// Sets the value, clamped to `[0, 100]`.
    pub fn set_value(&mut self, value: f64) -> StateChange {
        let next = Color::from_hsv(self.hue(), self.saturation(), value);
        self.replace_current(next)
    }

    /// Overwrites the selected sub-color with a literal RGB color.
    ///
    /// The current HSV color is untouched, so nothing is reported.
    pub fn set_selected(&mut self, rgb: RgbColor) -> StateChange {
        self.sub_colors[self.pos] = Color::from_rgb(rgb);
        StateChange::NONE
    }

    /// Selects the next sub-color, wrapping past the end.
    pub fn next(&mut self) -> StateChange {
        let len = self.len();
        if len < 2 {
            return StateChange::NONE;
        }
        self.pos = (self.pos + 1) % len;
        self.load_selected()
    }

    /// Selects the previous sub-color, wrapping past the start.
    pub fn prev(&mut self) -> StateChange {
        let len = self.len();
        if len < 2 {
            return StateChange::NONE;
        }
        self.pos = (self.pos + len - 1) % len;
        self.load_selected()
    }

    /// Makes the selected sub-color the current color.
    fn load_selected(&mut self) -> StateChange {
        let selected = self.sub_colors[self.pos];
        let next = Color::from_hsv(selected.hue(), selected.saturation(), selected.value());
        tracing::debug!(pos = self.pos, color = %selected.rgb(), "palette selection moved");
        self.replace_current(next) | StateChange::SELECTION
    }

    fn replace_current(&mut self, next: Color) -> StateChange {
        let mut change = StateChange::NONE;
        if next.hue() != self.current.hue() {
            change |= StateChange::HUE;
        }
        if next.saturation() != self.current.saturation() {
            change |= StateChange::SATURATION;
        }
        if next.value() != self.current.value() {
            change |= StateChange::VALUE;
        }
        self.current = next;
        change
    }
}
