//! Data models for the color picker.
//!
//! This module contains the color math, the change descriptors, and the
//! color state every widget reads from. Models are independent of the UI.

pub mod change;
pub mod color;
pub mod rgb;
pub mod state;

pub use change::StateChange;
pub use color::Color;
pub use rgb::RgbColor;
pub use state::ColorState;
