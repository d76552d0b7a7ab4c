//! Configuration management for the application.
//!
//! Configuration is read from a TOML file in the platform config directory.
//! The file is optional and never written back; command-line flags override
//! whatever it contains.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::models::{ColorState, RgbColor};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Palette settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Number of generated swatches when no colors are given
    pub count: usize,
    /// Draw swatch bodies with top/bottom caps
    pub padded: bool,
    /// Initial colors as hex strings; overrides `count` when non-empty
    pub colors: Vec<String>,
}

/// Default number of generated swatches
const DEFAULT_PALETTE_COUNT: usize = 7;

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_PALETTE_COUNT,
            padded: false,
            colors: Vec::new(),
        }
    }
}

impl PaletteConfig {
    /// Parses the configured hex colors.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first color that is not valid hex.
    pub fn parsed_colors(&self) -> Result<Vec<RgbColor>> {
        self.colors
            .iter()
            .map(|hex| RgbColor::from_hex(hex).context(format!("Invalid palette color '{hex}'")))
            .collect()
    }

    /// Builds the initial color state from these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a color fails to parse or the palette is empty.
    pub fn build_state(&self) -> Result<ColorState> {
        if self.colors.is_empty() {
            ColorState::with_count(self.count)
        } else {
            ColorState::from_rgb(&self.parsed_colors()?)
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    pub theme_mode: ThemeMode,
    /// Positions moved per arrow key
    pub step: usize,
    /// Positions moved per shifted arrow key
    pub fast_step: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            step: 1,
            fast_step: 10,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/lazyhue/config.toml`
/// - macOS: `~/Library/Application Support/lazyhue/config.toml`
/// - Windows: `%APPDATA%\lazyhue\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Palette settings
    pub palette: PaletteConfig,
    /// UI preferences
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `path`, falling back to defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - palette count is at least one
    /// - every palette color is valid hex
    /// - step is at least one and fast step is not below it
    pub fn validate(&self) -> Result<()> {
        if self.palette.count == 0 {
            anyhow::bail!("Palette count must be at least 1");
        }

        self.palette.parsed_colors()?;

        if self.ui.step == 0 {
            anyhow::bail!("UI step must be at least 1");
        }

        if self.ui.fast_step < self.ui.step {
            anyhow::bail!(
                "UI fast_step ({}) must not be smaller than step ({})",
                self.ui.fast_step,
                self.ui.step
            );
        }

        Ok(())
    }
}
