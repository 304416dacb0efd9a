//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout a game.
//! The engine checks them after every accepted move in debug builds, and
//! they are testable independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ];
        let violations: Vec<_> = checks
            .into_iter()
            .filter(|(holds, _)| !holds)
            .map(|(_, description)| InvariantViolation::new(description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

mod alternating_seats;
mod monotonic_board;
mod turn_index;

pub use alternating_seats::AlternatingSeatsInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use turn_index::TurnIndexInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    MonotonicBoardInvariant,
    AlternatingSeatsInvariant,
    TurnIndexInvariant,
);


#[cfg(test)]
mod tests {
    use super::super::engine::Game;
    use super::super::position::Position;
    use super::super::report::Phase;
    use super::super::types::{Cell, Marker};
    use super::test_support::game;
    use super::*;

    #[test]
    fn test_invariants_hold_for_new_game() {
        assert!(GameInvariants::check_all(&game()).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_win() {
        let mut game = game();
        for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play_turn(row, column).unwrap();
        }
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_check_all_reports_only_broken_invariant() {
        let mut game = game();
        game.play_turn(1, 1).unwrap();
        let center = Position::new(1, 1).unwrap();
        game.board.set(center, Cell::Marked(Marker::new('O').unwrap()));

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(
                <MonotonicBoardInvariant as Invariant<Game>>::description()
            )]
        );
    }
}
