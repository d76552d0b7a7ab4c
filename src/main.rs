//! LazyHue - interactive terminal color picker
//!
//! Navigate hue, saturation and value bars and a palette of swatches; the
//! final palette is printed when the picker exits.

use anyhow::Result;
use clap::Parser;
use lazyhue::config::Config;
use lazyhue::constants::APP_NAME;
use lazyhue::{logging, output, tui};
use std::path::PathBuf;

/// LazyHue - interactive terminal color picker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial palette colors as hex (e.g. "#EF4444")
    #[arg(value_name = "COLOR")]
    colors: Vec<String>,

    /// Number of generated swatches when no colors are given
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Draw swatch bodies with top/bottom caps
    #[arg(short, long)]
    padded: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Print the final palette as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = cli
        .log
        .as_deref()
        .map(logging::init_file_logging)
        .transpose()?;

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config: {e:#}");
            tracing::warn!(error = %e, "falling back to default config");
            Config::default()
        }),
    };

    if let Some(count) = cli.count {
        config.palette.count = count;
    }
    if cli.padded {
        config.palette.padded = true;
    }
    if !cli.colors.is_empty() {
        config.palette.colors = cli.colors;
    }
    config.validate()?;

    let state = config.palette.build_state()?;
    tracing::info!(app = APP_NAME, swatches = state.len(), "starting");

    // Initialize TUI
    let (width, _) = crossterm::terminal::size()?;
    let mut terminal = tui::setup_terminal()?;
    let mut app = tui::App::new(state, config, width);

    // Run main TUI loop
    let result = tui::run_tui(&mut app, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    let colors = app.state.sub_colors();
    let printed = if cli.json {
        output::format_json(colors)?
    } else {
        output::format_plain(colors)
    };
    println!("{printed}");

    Ok(())
}
