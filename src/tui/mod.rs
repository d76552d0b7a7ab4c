//! Terminal user interface: widgets, the `App` that owns the color state,
//! and the main loop.
//!
//! Widgets are stacked top to bottom. Each key press reaches the focused
//! widget, which mutates the `ColorState`; the resulting `StateChange` is
//! handed to every widget before the next frame is drawn.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod handlers;
pub mod hue_bar;
pub mod nav_bar;
pub mod palette_box;
pub mod saturation_bar;
pub mod surface;
pub mod theme;
pub mod value_bar;
pub mod widget;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::models::{ColorState, StateChange};

pub use handlers::handle_key_event;
pub use hue_bar::HueBar;
pub use nav_bar::NavBar;
pub use palette_box::PaletteBox;
pub use saturation_bar::SaturationBar;
pub use surface::Surface;
pub use theme::Theme;
pub use value_bar::ValueBar;
pub use widget::Widget;

/// Blank rows above the first widget.
const TOP_MARGIN: u16 = 1;

/// Application state: the color model and the widget stack editing it.
pub struct App {
    /// The single color model
    pub state: ColorState,
    /// Loaded configuration
    pub config: Config,
    /// Resolved theme
    pub theme: Theme,
    /// Set when the user asked to quit
    pub should_quit: bool,
    widgets: Vec<Box<dyn Widget>>,
    focus: usize,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .field("focus", &self.focused_name())
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Builds the widget stack for a terminal `width` columns wide.
    ///
    /// Every widget is primed with a full change so its caches match the
    /// state, and the palette starts focused.
    #[must_use]
    pub fn new(state: ColorState, config: Config, width: u16) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let widgets: Vec<Box<dyn Widget>> = vec![
            Box::new(HueBar::new(theme)),
            Box::new(SaturationBar::new(theme)),
            Box::new(ValueBar::new(theme)),
            Box::new(PaletteBox::new(theme, config.palette.padded)),
        ];
        let focus = widgets.len() - 1;

        let mut app = Self {
            state,
            config,
            theme,
            should_quit: false,
            widgets,
            focus,
        };
        app.resize(width);
        app.apply(StateChange::all());
        app.refresh_pointers();
        app
    }

    /// Hands `change` to every widget in stack order.
    pub fn apply(&mut self, change: StateChange) {
        tracing::trace!(?change, "dispatching state change");
        for widget in &mut self.widgets {
            widget.handle(change, &mut self.state);
        }
    }

    /// Moves the focused widget forward.
    pub fn up(&mut self, step: usize) {
        let change = self.widgets[self.focus].up(step, &mut self.state);
        self.apply(change);
    }

    /// Moves the focused widget backward.
    pub fn down(&mut self, step: usize) {
        let change = self.widgets[self.focus].down(step, &mut self.state);
        self.apply(change);
    }

    /// Focuses the next widget, wrapping to the top.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.widgets.len();
        self.refresh_pointers();
    }

    /// Focuses the previous widget, wrapping to the bottom.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.widgets.len() - 1) % self.widgets.len();
        self.refresh_pointers();
    }

    /// Name of the focused widget.
    #[must_use]
    pub fn focused_name(&self) -> &'static str {
        self.widgets[self.focus].name()
    }

    /// Re-lays out every widget for a new terminal width.
    pub fn resize(&mut self, width: u16) {
        tracing::debug!(width, "resizing widgets");
        for widget in &mut self.widgets {
            widget.resize(width, &self.state);
        }
    }

    /// Draws the widget stack into `surface`, returning the rows used.
    pub fn draw_widgets(&self, surface: &mut dyn Surface) -> u16 {
        let mut y = TOP_MARGIN;
        for widget in &self.widgets {
            y = y.saturating_add(widget.draw(0, y, surface, &self.state));
        }
        y
    }

    fn refresh_pointers(&mut self) {
        for (idx, widget) in self.widgets.iter_mut().enumerate() {
            let style = if idx == self.focus {
                self.theme.hi_pointer
            } else {
                self.theme.pointer
            };
            widget.set_pointer_style(style);
        }
    }
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(app: &mut App, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(app, key)? {
                        break;
                    }
                }
                Event::Resize(width, _) => app.resize(width),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(focus = app.focused_name(), "leaving main loop");
    Ok(())
}

/// Renders the widget stack and the status line.
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    app.draw_widgets(f.buffer_mut());

    if area.height == 0 {
        return;
    }
    let status_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
    let selected = app.state.selected().rgb();
    let status = Line::from(vec![
        Span::styled(format!(" {} ", selected.to_hex()), app.theme.hi_indicator),
        Span::styled(format!(" [{}] ", app.focused_name()), app.theme.hi_pointer),
        Span::styled(
            " ←→ adjust  ⇧←→ fast  ↑↓ focus  q quit",
            app.theme.status,
        ),
    ]);
    f.render_widget(Paragraph::new(status), status_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use ratatui::{backend::TestBackend, buffer::Buffer};

    fn app(count: usize) -> App {
        let mut config = Config::default();
        config.ui.theme_mode = ThemeMode::Dark;
        App::new(ColorState::with_count(count).unwrap(), config, 80)
    }

    #[test]
    fn test_new_focuses_palette() {
        let app = app(5);
        assert_eq!(app.focused_name(), "palette");
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut app = app(5);
        app.focus_next();
        assert_eq!(app.focused_name(), "hue");
        app.focus_prev();
        app.focus_prev();
        assert_eq!(app.focused_name(), "value");
    }

    #[test]
    fn test_bar_movement_flows_into_palette() {
        let mut app = app(3);
        app.focus_next(); // hue
        let before = app.state.selected().rgb();
        app.up(60);
        assert!((app.state.hue() - 60.0).abs() < f64::EPSILON);
        assert_ne!(app.state.selected().rgb(), before);
        assert_eq!(app.state.selected().rgb(), app.state.base_color().rgb());
    }

    #[test]
    fn test_draw_widgets_stacks_rows() {
        let app = app(5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        // 3 bars of 3 rows, palette of 5 + 2 + 3 rows, one top margin row
        assert_eq!(app.draw_widgets(&mut buf), 1 + 9 + 10);
    }

    #[test]
    fn test_render_writes_status_line() {
        let app = app(5);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let buf = terminal.backend().buffer();
        let hex = app.state.selected().rgb().to_hex();
        let status: String = (0..80).map(|x| buf[(x, 23)].symbol().to_string()).collect();
        assert!(status.contains(&hex));
        assert!(status.contains("[palette]"));
    }
}
