// cardscope - terminal browser for a paginated card catalog API
//
// Architecture:
// - Catalog: HTTP client (reqwest) or offline demo source, one page per request
// - Browser: the browse session state machine (search, pagination, stale-response guard)
// - TUI (ratatui): gallery grid, search bar, detail modal; drives the session
// - Event system: fetches run on tokio tasks and report back over an mpsc channel

mod browser;
mod catalog;
mod cli;
mod config;
mod logging;
mod tui;

use anyhow::Result;
use catalog::CardSource;
use cli::Mode;
use config::Config;
use logging::{LogBuffer, LogOutput};

#[tokio::main]
async fn main() -> Result<()> {
    // Config subcommands run and exit before anything else is set up
    let mode = cli::handle_cli();
    if let Mode::Done = mode {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // TUI mode captures logs into the buffer so they don't garble the screen
    let log_buffer = LogBuffer::new();
    let output = match mode {
        Mode::Tui => LogOutput::Tui(log_buffer.clone()),
        _ => LogOutput::Stderr,
    };
    // Held for the life of the program so file logs flush
    let _file_guard = logging::init(&config.logging, output);

    tracing::info!("cardscope v{} starting", config::VERSION);

    let source = CardSource::from_config(&config)?;
    tracing::info!("Card source: {}", source.label());

    match mode {
        Mode::List(args) => cli::run_list(&config, &source, &args).await,
        Mode::Tui => tui::run_tui(config, source, log_buffer).await,
        Mode::Done => Ok(()),
    }
}
