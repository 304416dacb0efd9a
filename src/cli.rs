//! Command-line interface for strictly_noughts.

use clap::{Parser, Subcommand};
use strictly_noughts::PlayerOverrides;

/// Strictly Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_noughts")]
#[command(
    about = "Two-player tic-tac-toe with a console and a terminal UI",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to strictly_noughts.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play at a line-by-line prompt
    Play {
        /// Player names and markers
        #[command(flatten)]
        players: PlayerOverrides,

        /// Print each turn report as a JSON line
        #[arg(long)]
        json: bool,
    },

    /// Play in the full-screen terminal UI
    Tui {
        /// Player names and markers
        #[command(flatten)]
        players: PlayerOverrides,

        /// File that receives log output while the UI owns the screen
        #[arg(long, default_value = "strictly_noughts_tui.log")]
        log_file: std::path::PathBuf,
    },
}
