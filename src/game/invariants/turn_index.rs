//! Turn index invariant.

use super::super::engine::Game;
use super::super::report::Phase;
use super::Invariant;

/// Invariant: the turn index agrees with the history.
///
/// While awaiting a move the index equals the number of moves played. Once
/// the game is over it still points at the seat that made the final move.
pub struct TurnIndexInvariant;

impl Invariant<Game> for TurnIndexInvariant {
    fn holds(game: &Game) -> bool {
        let played = game.history().len();
        match game.phase() {
            Phase::AwaitingMove => game.turn_index() == played,
            Phase::GameOver => played > 0 && game.turn_index() == played - 1,
        }
    }

    fn description() -> &'static str {
        "Turn index matches the number of moves played"
    }
}
