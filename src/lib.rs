//! LazyHue Library
//!
//! Core of an interactive terminal color picker: a color model that reports
//! typed changes, hue/saturation/value bars that render a position on a
//! bounded scale, and a palette strip that keeps the active swatch centered.

// Module declarations
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod output;
pub mod tui;
