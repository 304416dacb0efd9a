//! Strictly Noughts - Unified CLI
//!
//! Two-player tic-tac-toe with console and terminal front ends.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_noughts::{ConsoleOptions, GameConfig, PlayerOverrides, Session, run_console, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { players, json } => run_play(cli.config.as_deref(), &players, json),
        Command::Tui { players, log_file } => run_tui(cli.config.as_deref(), &players, &log_file),
    }
}

/// Builds the filter from `RUST_LOG`, falling back to the configured one.
fn env_filter(config: &GameConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Loads config and builds a session with both players set.
#[instrument(skip(overrides))]
fn start_session(config: &GameConfig, overrides: &PlayerOverrides) -> Result<Session> {
    let config = config.clone().with_overrides(overrides);
    let session = Session::with_players(config.player_one(), config.player_two())
        .context("Invalid player setup")?;
    info!("Session ready");
    Ok(session)
}

/// Run the line-oriented console
fn run_play(config_path: Option<&Path>, overrides: &PlayerOverrides, json: bool) -> Result<()> {
    let config = GameConfig::load(config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Strictly Noughts console");
    let mut session = start_session(&config, overrides)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_console(&mut session, stdin.lock(), &mut stdout, ConsoleOptions { json })
}

/// Run the terminal UI
fn run_tui(config_path: Option<&Path>, overrides: &PlayerOverrides, log_file: &Path) -> Result<()> {
    let config = GameConfig::load(config_path)?;

    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting Strictly Noughts TUI");
    let session = start_session(&config, overrides)?;
    tui::run_tui(session)
}
