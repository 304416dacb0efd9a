//! Alternating seats invariant: seat 1, seat 2, seat 1, ...

use super::super::engine::Game;
use super::super::types::Seat;
use super::Invariant;

/// Invariant: seats alternate, starting with seat one.
pub struct AlternatingSeatsInvariant;

impl Invariant<Game> for AlternatingSeatsInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .iter()
            .enumerate()
            .all(|(turn, mov)| mov.seat == Seat::for_turn(turn))
    }

    fn description() -> &'static str {
        "Seats alternate (seat 1, seat 2, seat 1, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::game;
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingSeatsInvariant::holds(&game()));
    }

    #[test]
    fn test_rejected_move_keeps_alternation() {
        let mut game = game();
        game.play_turn(1, 1).unwrap();
        let report = game.play_turn(1, 1).unwrap();
        assert!(!report.valid);
        game.play_turn(0, 0).unwrap();

        assert_eq!(game.history()[1].seat, Seat::Two);
        assert!(AlternatingSeatsInvariant::holds(&game));
    }
}
