//! Keyboard input routing.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

/// Handles one key event. Returns `Ok(true)` when the user asked to quit.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let step = app.config.ui.step;
    let fast = app.config.ui.fast_step;

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        KeyCode::Right if shift => app.up(fast),
        KeyCode::Left if shift => app.down(fast),
        KeyCode::Right | KeyCode::Char('l') => app.up(step),
        KeyCode::Left | KeyCode::Char('h') => app.down(step),
        KeyCode::Char('L') => app.up(fast),
        KeyCode::Char('H') => app.down(fast),

        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.focus_prev(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.focus_next(),

        _ => {}
    }

    Ok(app.should_quit)
}
