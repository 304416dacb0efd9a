//! Monotonic board invariant: marks are never overwritten.

use super::super::board::Board;
use super::super::engine::Game;
use super::super::types::Cell;
use super::Invariant;

/// Invariant: marks are never overwritten.
///
/// Replaying the move history onto an empty board must hit only empty
/// cells and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut replayed = Board::new();
        for mov in game.history() {
            if !replayed.cell(mov.position).is_empty() {
                return false;
            }
            let marker = game.roster().get(mov.seat).marker();
            replayed.set(mov.position, Cell::Marked(marker));
        }
        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
