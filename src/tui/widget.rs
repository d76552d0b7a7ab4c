//! Widget trait shared by every bar and the palette.
//!
//! Widgets keep only their own rendering caches. The `ColorState` is passed
//! into each call so that all mutation goes through its setters.

use ratatui::style::Style;

use crate::models::{ColorState, StateChange};
use crate::tui::Surface;

/// A stackable widget driven by `StateChange` notifications.
pub trait Widget {
    /// Short name used in logs and the status line.
    fn name(&self) -> &'static str;

    /// Recomputes cached rendering state after `change`.
    ///
    /// `StateChange::NONE` must leave every cache untouched.
    fn handle(&mut self, change: StateChange, state: &mut ColorState);

    /// Draws at `(x, y)` and returns the number of rows consumed.
    fn draw(&self, x: u16, y: u16, surface: &mut dyn Surface, state: &ColorState) -> u16;

    /// Moves forward by `step` and returns what changed in the model.
    fn up(&mut self, step: usize, state: &mut ColorState) -> StateChange;

    /// Moves backward by `step` and returns what changed in the model.
    fn down(&mut self, step: usize, state: &mut ColorState) -> StateChange;

    /// Adapts to a new total surface width. Must run before the next draw.
    fn resize(&mut self, width: u16, state: &ColorState);

    /// Sets the style of the position pointer (focused vs unfocused).
    fn set_pointer_style(&mut self, _style: Style) {}
}
