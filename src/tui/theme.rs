//! Indicator styles for dark and light terminals.
//!
//! Swatch bodies always render on black; the theme only decides how the
//! edge glyphs, pointers, readouts and labels around them look.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;

/// Styles shared by all widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Unselected swatch edges and dim chrome
    pub indicator: Style,
    /// Selected swatch edges and the RGB readout
    pub hi_indicator: Style,
    /// Pointer under an unfocused bar
    pub pointer: Style,
    /// Pointer under the focused bar
    pub hi_pointer: Style,
    /// Titles and labels
    pub text: Style,
    /// Bottom status line
    pub status: Style,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// Uses the `dark-light` crate; falls back to dark when detection fails.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a configured mode into a theme.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Gray-on-black chrome for dark terminals.
    #[must_use]
    pub const fn dark() -> Self {
        let base = Style::new().bg(Color::Black);
        Self {
            indicator: base.fg(Color::Rgb(80, 80, 80)),
            hi_indicator: base.fg(Color::White),
            pointer: base.fg(Color::Rgb(80, 80, 80)),
            hi_pointer: base.fg(Color::Yellow).add_modifier(Modifier::BOLD),
            text: base.fg(Color::Gray),
            status: base.fg(Color::DarkGray),
        }
    }

    /// Dark-on-white chrome for light terminals.
    #[must_use]
    pub const fn light() -> Self {
        let base = Style::new().bg(Color::White);
        Self {
            indicator: base.fg(Color::Rgb(180, 180, 180)),
            hi_indicator: base.fg(Color::Black),
            pointer: base.fg(Color::Rgb(180, 180, 180)),
            hi_pointer: base.fg(Color::Rgb(180, 100, 0)).add_modifier(Modifier::BOLD),
            text: base.fg(Color::Rgb(60, 60, 60)),
            status: base.fg(Color::Gray),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.hi_indicator.fg, Some(Color::White));
        assert_eq!(theme.indicator.bg, Some(Color::Black));
        assert_ne!(theme.pointer, theme.hi_pointer);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.hi_indicator.fg, Some(Color::Black));
        assert_eq!(theme.indicator.bg, Some(Color::White));
    }

    #[test]
    fn test_from_explicit_mode() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }
}
