//! Value (brightness) bar, same 0.5-step scale as saturation.

use ratatui::style::Style;

use crate::models::{Color, ColorState, StateChange};
use crate::tui::nav_bar::{scale_index, NavBar};
use crate::tui::saturation_bar::{SAT_COUNT, SAT_INCR};
use crate::tui::{Surface, Theme, Widget};

/// Number of positions.
pub const VALUE_COUNT: usize = SAT_COUNT;
/// Distance between two positions.
pub const VALUE_INCR: f64 = SAT_INCR;

// Pure black would erase hue and saturation when a swatch is reloaded
const VALUE_FLOOR: f64 = 0.01;

/// Value bar.
#[derive(Debug, Clone)]
pub struct ValueBar {
    bar: NavBar,
    scale: [f64; VALUE_COUNT],
}

impl ValueBar {
    /// Creates the bar with its scale precomputed.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let mut scale = [0.0; VALUE_COUNT];
        let mut value = 0.0;
        for slot in &mut scale {
            *slot = value;
            value += VALUE_INCR;
        }
        scale[0] = VALUE_FLOOR;

        Self {
            bar: NavBar::new("value", VALUE_COUNT, theme),
            scale,
        }
    }

    /// The underlying bar.
    #[must_use]
    pub const fn nav(&self) -> &NavBar {
        &self.bar
    }

    fn push_to_state(&self, state: &mut ColorState) -> StateChange {
        state.set_value(self.scale[self.bar.pos()])
    }
}

impl Widget for ValueBar {
    fn name(&self) -> &'static str {
        self.bar.title()
    }

    fn handle(&mut self, change: StateChange, state: &mut ColorState) {
        if change.includes(StateChange::HUE | StateChange::SATURATION) {
            let (hue, saturation) = (state.hue(), state.saturation());
            for (item, value) in self.bar.items_mut().iter_mut().zip(self.scale) {
                *item = Color::from_hsv(hue, saturation, value).rgb();
            }
        }

        if change.includes(StateChange::VALUE) {
            self.bar.set_pos(scale_index(state.value(), VALUE_INCR));
            self.bar.set_label(format!("{:5.1} ", self.scale[self.bar.pos()]));
        }
    }

    fn draw(&self, x: u16, y: u16, surface: &mut dyn Surface, _state: &ColorState) -> u16 {
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

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::models::RgbColor;

    #[test]
    fn test_value_tracks_state() {
        let mut state = ColorState::from_rgb(&[RgbColor::new(255, 0, 0)]).unwrap();
        let mut bar = ValueBar::new(Theme::dark());
        bar.handle(StateChange::all(), &mut state);
        assert_eq!(bar.nav().pos(), 200);
        assert_eq!(bar.nav().items()[0], RgbColor::BLACK);
        assert_eq!(bar.nav().items()[200], RgbColor::new(255, 0, 0));

        let change = bar.down(100, &mut state);
        assert_eq!(change, StateChange::VALUE);
        assert_eq!(state.value(), 50.0);
        bar.handle(change, &mut state);
        assert_eq!(bar.nav().label(), " 50.0 ");
    }

    #[test]
    fn test_no_change_is_a_no_op() {
        let mut state = ColorState::from_rgb(&[RgbColor::new(0, 255, 0)]).unwrap();
        let mut bar = ValueBar::new(Theme::dark());
        bar.handle(StateChange::all(), &mut state);
        let before = (bar.nav().pos(), bar.nav().label().to_string(), bar.nav().items().to_vec());

        state.set_value(30.0);
        state.set_hue(10.0);
        bar.handle(StateChange::NONE, &mut state);
        let after = (bar.nav().pos(), bar.nav().label().to_string(), bar.nav().items().to_vec());
        assert_eq!(before, after);
    }

    #[test]
    fn test_floor_keeps_hue_recoverable() {
        let mut state = ColorState::from_rgb(&[RgbColor::new(0, 0, 255)]).unwrap();
        let mut bar = ValueBar::new(Theme::dark());
        bar.handle(StateChange::all(), &mut state);
        bar.down(1000, &mut state);
        assert_eq!(state.value(), 0.01);
        assert_eq!(state.hue(), 240.0);
    }
}
