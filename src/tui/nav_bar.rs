//! Generic discrete-position bar.
//!
//! A `NavBar` holds one rendered color per scale position and a bounded
//! position into them. The hue, saturation and value bars each own one and
//! decide what the items and the label mean.

#![allow(clippy::cast_possible_truncation)]

use ratatui::style::{Color, Style};

use crate::models::RgbColor;
use crate::tui::{Surface, Theme};

/// Horizontal padding on each side of a bar.
pub const BAR_PADDING: u16 = 2;

/// Rows a plain `NavBar` occupies: the strip and the label row.
pub const NAV_BAR_ROWS: u16 = 2;

const STRIP_GLYPH: char = '▀';
const POINTER_GLYPH: char = '▲';

/// Rounds half away from zero (`2.5 -> 3`, `-2.5 -> -3`).
#[must_use]
pub fn round_half_away(num: f64) -> i64 {
    (num + 0.5_f64.copysign(num)) as i64
}

/// Maps a scale value onto a bar index, never below zero.
#[must_use]
pub fn scale_index(value: f64, increment: f64) -> usize {
    usize::try_from(round_half_away(value / increment)).unwrap_or(0)
}

/// Bounded position over a fixed sequence of rendered colors.
#[derive(Debug, Clone)]
pub struct NavBar {
    title: &'static str,
    pos: usize,
    items: Vec<RgbColor>,
    label: String,
    width: Option<u16>,
    pointer_style: Style,
    theme: Theme,
}

impl NavBar {
    /// Creates a bar with `size` positions, all black, at position 0.
    #[must_use]
    pub fn new(title: &'static str, size: usize, theme: Theme) -> Self {
        debug_assert!(size > 0, "a bar needs at least one position");
        Self {
            title,
            pos: 0,
            items: vec![RgbColor::BLACK; size],
            label: String::new(),
            width: None,
            pointer_style: theme.pointer,
            theme,
        }
    }

    /// Bar title shown on the label row.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Number of positions.
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Current position.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Sets the position, clamped to the last index.
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.size() - 1);
    }

    /// Rendered colors, one per position.
    #[must_use]
    pub fn items(&self) -> &[RgbColor] {
        &self.items
    }

    /// Mutable access for specializations recomputing their colors.
    pub fn items_mut(&mut self) -> &mut [RgbColor] {
        &mut self.items
    }

    /// Label text drawn at the right end of the label row.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the label text.
    pub fn set_label(&mut self, label: String) {
        self.label = label;
    }

    /// Visible strip width in cells; `size` until the first resize.
    #[must_use]
    pub fn strip_width(&self) -> u16 {
        self.width
            .unwrap_or_else(|| u16::try_from(self.size()).unwrap_or(u16::MAX))
    }

    /// Moves forward by `step`, stopping at the last position.
    pub fn up(&mut self, step: usize) {
        self.set_pos(self.pos.saturating_add(step));
    }

    /// Moves backward by `step`, stopping at zero.
    pub fn down(&mut self, step: usize) {
        self.pos = self.pos.saturating_sub(step);
    }

    /// Fits the strip into `width` total columns.
    pub fn resize(&mut self, width: u16) {
        self.width = Some(width.saturating_sub(BAR_PADDING * 2));
    }

    /// Sets the pointer style.
    pub fn set_pointer_style(&mut self, style: Style) {
        self.pointer_style = style;
    }

    /// Draws the strip and the label row, returning the rows used.
    pub fn draw(&self, x: u16, y: u16, surface: &mut dyn Surface) -> u16 {
        let x = x.saturating_add(BAR_PADDING);
        let width = usize::from(self.strip_width());
        let size = self.size();
        let label_y = y.saturating_add(1);

        for col in 0..width {
            let item = self.items[col * size / width];
            let style = Style::new().fg(item.to_ratatui_color()).bg(Color::Black);
            surface.set_cell(offset(x, col), y, style, STRIP_GLYPH);
        }

        surface.set_str(x, label_y, self.theme.text, self.title);
        let label_x = offset(x, width.saturating_sub(self.label.chars().count()));
        surface.set_str(label_x, label_y, self.theme.text, &self.label);

        if width > 0 {
            let pointer_col = (self.pos * width / size).min(width - 1);
            surface.set_cell(offset(x, pointer_col), label_y, self.pointer_style, POINTER_GLYPH);
        }

        NAV_BAR_ROWS
    }
}

/// `x + delta`, saturating at the edge of the coordinate space.
pub(crate) fn offset(x: u16, delta: usize) -> u16 {
    x.saturating_add(u16::try_from(delta).unwrap_or(u16::MAX))
}
