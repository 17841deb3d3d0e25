//! tictactoe - unified CLI
//!
//! Runs a two-player game in the terminal UI or on a plain console.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe::{GameConfig, GameSession, console, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;
    let session = GameSession::new(config.build_players());

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            initialize_file_tracing(config.logging().file())?;
            info!(config = %cli.config.display(), "Launching terminal UI");
            tui::run_tui(session, config.messages().clone())
        }
        Command::Console => {
            initialize_stderr_tracing();
            info!(config = %cli.config.display(), "Launching console game");
            let mut session = session;
            let stdin = std::io::stdin();
            console::run(
                &mut session,
                config.messages(),
                stdin.lock(),
                std::io::stdout().lock(),
            )
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to a file so output doesn't interfere with the TUI.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
