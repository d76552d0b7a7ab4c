//! Palette swatch strip.
//!
//! Lays the sub-colors out left to right across the full width. Integer
//! division leaves a few spare columns; those are handed to the center
//! swatch and spread outward symmetrically so the strip stays centered for
//! any width and swatch count.
//!
//! Row layout, top to bottom:
//!
//! ```text
//! 255 000 000                 RGB readout of the selected swatch
//! ███████████████████████     5 rows in the selected color
//! ▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁     chart base
//! ▎███▕▎███▕▎███▕▎███▕▎███▕   swatch bodies (box height rows)
//! ▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔     overline
//! ```

use ratatui::style::{Color as TermColor, Style};

use crate::models::{Color, ColorState, StateChange};
use crate::tui::nav_bar::offset;
use crate::tui::{Surface, Theme, Widget};

/// Rows of the solid block showing the selected color.
pub const ACTIVE_PALETTE_HEIGHT: u16 = 5;
/// Horizontal padding on each side of the strip.
pub const PALETTE_PADDING: u16 = 2;
/// Minimum number of swatch body rows.
pub const MIN_BOX_HEIGHT: u16 = 2;

/// Width of the `"RRR GGG BBB"` readout.
const READOUT_WIDTH: usize = 11;

/// Distributes `stretch` spare columns over `count` swatches of `box_width`.
///
/// The center index (`count / 2`) receives the whole stretch, passes it
/// left two-for-one while it holds three or more, each left slot then
/// cascades anything above one to its left neighbor, and the left half is
/// mirrored onto the right. For odd counts the result is symmetric and sums
/// to `box_width * count + stretch`.
#[must_use]
pub fn distribute_widths(count: usize, box_width: usize, stretch: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }

    let center = count / 2;
    let mut extra = vec![0; count];
    extra[center] = stretch;

    if center > 0 {
        while extra[center] >= 3 {
            extra[center] -= 2;
            extra[center - 1] += 1;
        }
    }

    for idx in (1..center).rev() {
        while extra[idx] >= 2 {
            extra[idx] -= 1;
            extra[idx - 1] += 1;
        }
    }

    for idx in center + 1..count {
        extra[idx] = extra[count - 1 - idx];
    }

    extra.into_iter().map(|e| e + box_width).collect()
}

/// Swatch strip over every sub-color in the state.
#[derive(Debug, Clone)]
pub struct PaletteBox {
    width: usize,
    box_width: usize,
    x_stretch: usize,
    padded: bool,
    theme: Theme,
}

impl PaletteBox {
    /// Creates an unsized palette; call `resize` before drawing.
    #[must_use]
    pub const fn new(theme: Theme, padded: bool) -> Self {
        Self {
            width: 0,
            box_width: 0,
            x_stretch: 0,
            padded,
            theme,
        }
    }

    /// Total strip width including the stretch.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Uniform width of every swatch before stretch.
    #[must_use]
    pub const fn box_width(&self) -> usize {
        self.box_width
    }

    /// Spare columns handed to the center.
    #[must_use]
    pub const fn x_stretch(&self) -> usize {
        self.x_stretch
    }

    /// Per-swatch widths for `count` swatches at the current size.
    #[must_use]
    pub fn box_widths(&self, count: usize) -> Vec<usize> {
        distribute_widths(count, self.box_width, self.x_stretch)
    }

    /// Recomputes the layout for a total width and swatch count.
    pub fn resize_for(&mut self, total_width: u16, count: usize) {
        let total = usize::from(total_width);
        let padding = usize::from(PALETTE_PADDING);
        self.box_width = total.saturating_sub(padding * 2) / count.max(1);
        self.width = self.box_width * count;
        self.x_stretch = total.saturating_sub(self.width + padding + 1);
        self.width += self.x_stretch;
        tracing::debug!(
            total,
            count,
            box_width = self.box_width,
            stretch = self.x_stretch,
            "palette resized"
        );
    }

    fn box_height(surface: &dyn Surface) -> u16 {
        let (_, height) = surface.size();
        (height / 15).max(MIN_BOX_HEIGHT)
    }
}

impl Widget for PaletteBox {
    fn name(&self) -> &'static str {
        "palette"
    }

    fn handle(&mut self, change: StateChange, state: &mut ColorState) {
        if change.is_empty() {
            return;
        }
        let live = Color::from_hsv(state.hue(), state.saturation(), state.value());
        state.set_selected(live.rgb());
    }

    fn draw(&self, x: u16, mut y: u16, surface: &mut dyn Surface, state: &ColorState) -> u16 {
        let box_height = Self::box_height(surface);
        let x = x.saturating_add(PALETTE_PADDING);

        let pos = state.pos();
        let items = state.sub_colors();
        let selected = state.selected().rgb().to_ratatui_color();
        let widths = self.box_widths(items.len());

        let theme = &self.theme;
        let readout_x = offset(x, self.width.saturating_sub(READOUT_WIDTH) / 2);
        surface.set_str(readout_x, y, theme.hi_indicator, &state.selected().rgb().readout());
        y += 1;

        let hi = theme.hi_indicator.bg(selected);
        let lo = theme.indicator.bg(selected);

        for _ in 0..ACTIVE_PALETTE_HEIGHT {
            for col in 0..self.width {
                surface.set_cell(offset(x, col), y, hi, ' ');
            }
            y += 1;
        }

        let mut lx = 0;
        for (n, bw) in widths.iter().copied().enumerate() {
            let st = if n == pos { hi } else { lo };
            for col in 0..bw {
                surface.set_cell(offset(x, lx + col), y, st, '▁');
            }
            lx += bw;
        }
        y += 1;

        let mut lx = 0;
        for (n, (color, bw)) in items.iter().zip(widths.iter().copied()).enumerate() {
            let swatch = color.rgb().to_ratatui_color();
            let body = Style::new().bg(TermColor::Black).fg(swatch);
            let edge = match (self.padded, n == pos) {
                (true, true) => theme.hi_indicator,
                (false, true) => theme.hi_indicator.bg(swatch),
                (true, false) => theme.indicator,
                (false, false) => theme.indicator.bg(swatch),
            };

            for col in 0..bw {
                let cx = offset(x, lx);
                for row in 0..box_height {
                    let cy = y.saturating_add(row);
                    if col == 0 {
                        surface.set_cell(cx, cy, edge, '▎');
                    } else if col == bw - 1 {
                        surface.set_cell(cx, cy, edge, '▕');
                    } else if self.padded && row == 0 {
                        surface.set_cell(cx, cy, body, '▄');
                    } else if self.padded && row == box_height - 1 {
                        surface.set_cell(cx, cy, body, '▀');
                    } else {
                        surface.set_cell(cx, cy, body, '█');
                    }
                }
                lx += 1;
            }
        }
        y = y.saturating_add(box_height);

        let mut lx = 0;
        for (n, bw) in widths.iter().copied().enumerate() {
            let st = if n == pos {
                theme.hi_indicator.bg(TermColor::Black)
            } else {
                theme.indicator.bg(TermColor::Black)
            };
            for col in 0..bw {
                surface.set_cell(offset(x, lx + col), y, st, '▔');
            }
            lx += bw;
        }

        ACTIVE_PALETTE_HEIGHT + box_height + 3
    }

    fn up(&mut self, _step: usize, state: &mut ColorState) -> StateChange {
        state.next()
    }

    fn down(&mut self, _step: usize, state: &mut ColorState) -> StateChange {
        state.prev()
    }

    fn resize(&mut self, width: u16, state: &ColorState) {
        self.resize_for(width, state.len());
    }
}
