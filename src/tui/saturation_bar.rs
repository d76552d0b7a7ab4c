//! Saturation bar.
//!
//! Shows what every saturation step would look like at the current hue and
//! value, with the pointer on the current saturation.

use ratatui::style::Style;

use crate::models::{Color, ColorState, StateChange};
use crate::tui::nav_bar::{scale_index, NavBar};
use crate::tui::{Surface, Theme, Widget};

/// Lowest saturation on the scale before pinning.
pub const SAT_MIN: f64 = 0.0;
/// Highest saturation on the scale.
pub const SAT_MAX: f64 = 100.0;
/// Distance between two scale positions.
pub const SAT_INCR: f64 = 0.5;
/// Number of scale positions, `SAT_MAX / SAT_INCR + 1`.
pub const SAT_COUNT: usize = 201;

/// Index 0 is pinned here so the first swatch never collapses to gray.
const SAT_FLOOR: f64 = 0.01;

/// Saturation bar over a fixed 0.5-step scale.
#[derive(Debug, Clone)]
pub struct SaturationBar {
    bar: NavBar,
    scale: [f64; SAT_COUNT],
}

impl SaturationBar {
    /// Creates the bar with its scale precomputed.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let mut scale = [0.0; SAT_COUNT];
        let mut value = SAT_MIN;
        for slot in &mut scale {
            *slot = value;
            value += SAT_INCR;
        }
        scale[0] = SAT_FLOOR;

        Self {
            bar: NavBar::new("saturation", SAT_COUNT, theme),
            scale,
        }
    }

    /// Saturation value at each position.
    #[must_use]
    pub const fn scale(&self) -> &[f64; SAT_COUNT] {
        &self.scale
    }

    /// The underlying bar.
    #[must_use]
    pub const fn nav(&self) -> &NavBar {
        &self.bar
    }

    fn push_to_state(&self, state: &mut ColorState) -> StateChange {
        state.set_saturation(self.scale[self.bar.pos()])
    }
}

impl Widget for SaturationBar {
    fn name(&self) -> &'static str {
        self.bar.title()
    }

    fn handle(&mut self, change: StateChange, state: &mut ColorState) {
        if change.includes(StateChange::HUE | StateChange::VALUE) {
            let (hue, value) = (state.hue(), state.value());
            for (item, saturation) in self.bar.items_mut().iter_mut().zip(self.scale) {
                *item = Color::from_hsv(hue, saturation, value).rgb();
            }
        }

        if change.includes(StateChange::SATURATION) {
            self.bar.set_pos(scale_index(state.saturation(), SAT_INCR));
            self.bar.set_label(format!("{:5.1} ", self.scale[self.bar.pos()]));
        }
    }

    fn draw(&self, x: u16, y: u16, surface: &mut dyn Surface, _state: &ColorState) -> u16 {
        // one spacer row below the bar
        self.bar.draw(x, y, surface) + 1
    }

    fn up(&mut self, step: usize, state: &mut ColorState) -> StateChange {
        self.bar.up(step);
        self.push_to_state(state)
    }

    fn down(&mut self, step: usize, state: &mut ColorState) -> StateChange {
        self.bar.down(step);
        self.push_to_state(state)
    }

    fn resize(&mut self, width: u16, _state: &ColorState) {
        self.bar.resize(width);
    }

    fn set_pointer_style(&mut self, style: Style) {
        self.bar.set_pointer_style(style);
    }
}
