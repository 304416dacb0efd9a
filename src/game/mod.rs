mod action;
mod board;
mod engine;
mod invariants;
mod position;
mod report;
mod rules;
mod types;

pub use action::{EngineError, Move};
pub use board::Board;
pub use engine::Game;
pub use invariants::{
    AlternatingSeatsInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, TurnIndexInvariant,
};
pub use position::{Position, SIZE, parse_coordinates};
pub use report::{Phase, TurnReport};
pub use rules::{Line, Outcome, evaluate, is_draw, winning_line};
pub use types::{Cell, Marker, Player, Roster, Seat};
