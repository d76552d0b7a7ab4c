//! Drawing surface the widgets render into.
//!
//! Widgets address single cells rather than ratatui layout rects, so the
//! surface is a small trait over a cell grid. The ratatui `Buffer` behind a
//! `Frame` implements it directly.

use ratatui::{buffer::Buffer, style::Style};

/// A grid of addressable cells, each holding one glyph and a style.
///
/// Coordinates are relative to the surface origin. Writes outside the grid
/// are dropped.
pub trait Surface {
    /// Width and height in cells.
    fn size(&self) -> (u16, u16);

    /// Writes one glyph with the given style.
    fn set_cell(&mut self, x: u16, y: u16, style: Style, glyph: char);

    /// Writes `text` into consecutive cells starting at `(x, y)`.
    fn set_str(&mut self, x: u16, y: u16, style: Style, text: &str) {
        let mut col = x;
        for glyph in text.chars() {
            self.set_cell(col, y, style, glyph);
            col = match col.checked_add(1) {
                Some(next) => next,
                None => break,
            };
        }
    }
}

impl Surface for Buffer {
    fn size(&self) -> (u16, u16) {
        (self.area.width, self.area.height)
    }

    fn set_cell(&mut self, x: u16, y: u16, style: Style, glyph: char) {
        let (width, height) = Surface::size(self);
        if x >= width || y >= height {
            return;
        }
        let position = (self.area.x + x, self.area.y + y);
        if let Some(cell) = self.cell_mut(position) {
            cell.reset();
            cell.set_char(glyph).set_style(style);
        }
    }
}
