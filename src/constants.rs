//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "LazyHue";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "lazyhue";

/// Config file name inside `APP_DIR_NAME`.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default `RUST_LOG` filter when file logging is enabled.
pub const DEFAULT_LOG_FILTER: &str = "debug";
