//! Hue bar: one position per degree around the color wheel.

use ratatui::style::Style;

use crate::models::{Color, ColorState, StateChange};
use crate::tui::nav_bar::{scale_index, NavBar};
use crate::tui::{Surface, Theme, Widget};

/// Degrees between two positions.
pub const HUE_INCR: f64 = 1.0;
/// Number of positions, 0 ..= 359 degrees.
pub const HUE_COUNT: usize = 360;

/// Hue bar over whole degrees.
#[derive(Debug, Clone)]
pub struct HueBar {
    bar: NavBar,
    scale: [f64; HUE_COUNT],
}

impl HueBar {
    /// Creates the bar with its scale precomputed.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let mut scale = [0.0; HUE_COUNT];
        let mut hue = 0.0;
        for slot in &mut scale {
            *slot = hue;
            hue += HUE_INCR;
        }
        Self {
            bar: NavBar::new("hue", HUE_COUNT, theme),
            scale,
        }
    }

    /// The underlying bar.
    #[must_use]
    pub const fn nav(&self) -> &NavBar {
        &self.bar
    }

    fn push_to_state(&self, state: &mut ColorState) -> StateChange {
        state.set_hue(self.scale[self.bar.pos()])
    }
}

impl Widget for HueBar {
    fn name(&self) -> &'static str {
        self.bar.title()
    }

    fn handle(&mut self, change: StateChange, state: &mut ColorState) {
        if change.includes(StateChange::SATURATION | StateChange::VALUE) {
            let (saturation, value) = (state.saturation(), state.value());
            for (item, hue) in self.bar.items_mut().iter_mut().zip(self.scale) {
                *item = Color::from_hsv(hue, saturation, value).rgb();
            }
        }

        if change.includes(StateChange::HUE) {
            // 359.5 and above rounds onto 360, which is 0 on the wheel
            self.bar.set_pos(scale_index(state.hue(), HUE_INCR) % HUE_COUNT);
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

    fn primed(rgb: RgbColor) -> (HueBar, ColorState) {
        let mut state = ColorState::from_rgb(&[rgb]).unwrap();
        let mut bar = HueBar::new(Theme::dark());
        bar.handle(StateChange::all(), &mut state);
        (bar, state)
    }

    #[test]
    fn test_items_span_the_wheel() {
        let (bar, _) = primed(RgbColor::new(255, 0, 0));
        assert_eq!(bar.nav().items()[0], RgbColor::new(255, 0, 0));
        assert_eq!(bar.nav().items()[120], RgbColor::new(0, 255, 0));
        assert_eq!(bar.nav().items()[240], RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_hue_sets_pos_and_label() {
        let (bar, _) = primed(RgbColor::new(0, 0, 255));
        assert_eq!(bar.nav().pos(), 240);
        assert_eq!(bar.nav().label(), "240.0 ");
    }

    #[test]
    fn test_hue_near_full_circle_wraps_to_zero() {
        let (mut bar, mut state) = primed(RgbColor::new(255, 0, 0));
        state.set_hue(359.7);
        bar.handle(StateChange::HUE, &mut state);
        assert_eq!(bar.nav().pos(), 0);
        assert_eq!(bar.nav().label(), "  0.0 ");

        state.set_hue(359.4);
        bar.handle(StateChange::HUE, &mut state);
        assert_eq!(bar.nav().pos(), 359);
    }

    #[test]
    fn test_up_from_almost_full_circle_moves_forward() {
        let (mut bar, mut state) = primed(RgbColor::new(255, 0, 1));
        assert!(state.hue() > 359.5);
        assert_eq!(bar.nav().pos(), 0);

        let change = bar.up(1, &mut state);
        assert_eq!(change, StateChange::HUE);
        assert_eq!(state.hue(), 1.0);
    }

    #[test]
    fn test_no_change_is_a_no_op() {
        let (mut bar, mut state) = primed(RgbColor::new(0, 255, 0));
        let before = (bar.nav().pos(), bar.nav().label().to_string(), bar.nav().items().to_vec());
        state.set_hue(300.0);
        state.set_saturation(20.0);
        bar.handle(StateChange::NONE, &mut state);
        let after = (bar.nav().pos(), bar.nav().label().to_string(), bar.nav().items().to_vec());
        assert_eq!(before, after);
    }

    #[test]
    fn test_up_moves_hue_and_stops_at_end() {
        let (mut bar, mut state) = primed(RgbColor::new(255, 0, 0));
        assert_eq!(bar.up(10, &mut state), StateChange::HUE);
        assert_eq!(state.hue(), 10.0);

        bar.up(1000, &mut state);
        assert_eq!(state.hue(), 359.0);
    }

    #[test]
    fn test_value_change_keeps_position() {
        let (mut bar, mut state) = primed(RgbColor::new(0, 255, 0));
        state.set_value(50.0);
        bar.handle(StateChange::VALUE, &mut state);
        assert_eq!(bar.nav().pos(), 120);
        assert_eq!(bar.nav().items()[120], RgbColor::new(0, 128, 0));
    }
}
