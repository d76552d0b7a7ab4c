//! File logging.
//!
//! The TUI owns stdout and stderr while it runs, so logs only ever go to a
//! file, and only when one is requested.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_FILTER;

/// Keeps the background log writer alive; logs are flushed on drop.
#[derive(Debug)]
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Routes `tracing` output to `path`, filtered by `RUST_LOG`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a global subscriber is
/// already installed.
pub fn init_file_logging(path: &Path) -> Result<LogGuard> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(path = %path.display(), "file logging enabled");
    Ok(LogGuard { _guard: guard })
}
