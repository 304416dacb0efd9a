//! First-class action and error types for the engine.
//!
//! Accepted moves are recorded as domain events so the game history can be
//! replayed and checked against the board.

use super::position::Position;
use super::types::{Marker, Seat};
use derive_new::new;
use serde::Serialize;

/// An accepted move: the seat that moved and where it placed its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, new)]
pub struct Move {
    /// The seat making the move.
    pub seat: Seat,
    /// The cell the marker went into.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.seat, self.position.label())
    }
}

/// Errors raised by the engine and its setup step.
///
/// Illegal moves (occupied cell, game already over) are not errors; they come
/// back as a report with `valid == false`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({row}, {column}) is off the board (rows and columns are 0-2)")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// Both players were given the same marker.
    #[display("Both players cannot use the marker '{marker}'")]
    DuplicateMarker {
        /// The shared marker.
        marker: Marker,
    },

    /// Marker input is not a single visible character.
    #[display("Marker must be a single visible character, got {input:?}")]
    InvalidMarker {
        /// The rejected input.
        input: String,
    },

    /// A player name was blank.
    #[display("Name for {seat} must not be empty")]
    EmptyName {
        /// Seat whose name was blank.
        seat: Seat,
    },

    /// Players were not supplied in seat order.
    #[display("Players must be given in seat order (seat 1, then seat 2)")]
    SeatOrder,

    /// A move or reset arrived before players were set.
    #[display("Players have not been set up yet")]
    NotSetUp,
}

impl std::error::Error for EngineError {}
