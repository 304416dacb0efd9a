//! Strictly Noughts - a two-player tic-tac-toe session engine.
//!
//! # Architecture
//!
//! - **Game**: board, outcome evaluation and turn sequencing
//! - **Session**: command channel that presenters dispatch into
//! - **Config**: player setup and logging from TOML plus CLI overrides
//! - **Front ends**: line-oriented console and a ratatui terminal UI
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{Command, PlayerSetup, Session};
//!
//! # fn main() -> Result<(), strictly_noughts::EngineError> {
//! let mut session = Session::with_players(
//!     &PlayerSetup::new("Ada", "X"),
//!     &PlayerSetup::new("Grace", "O"),
//! )?;
//!
//! let event = session.dispatch(Command::PlayTurn { row: 1, column: 1 })?;
//! assert!(event.report().valid);
//! assert_eq!(event.report().current_player.name(), "Grace");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod game;
mod session;
pub mod tui;

// Crate-level exports - Game engine
pub use game::{
    AlternatingSeatsInvariant, Board, Cell, EngineError, Game, GameInvariants, Invariant,
    InvariantSet, InvariantViolation, Line, Marker, MonotonicBoardInvariant, Move, Outcome, Phase,
    Player, Position, Roster, SIZE, Seat, TurnIndexInvariant, TurnReport, evaluate, is_draw,
    parse_coordinates, winning_line,
};

// Crate-level exports - Session command channel
pub use session::{Command, Event, PlayerSetup, Session, validate_setup};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig, PlayerOverrides};

// Crate-level exports - Console front end
pub use console::{ConsoleOptions, run_console};
