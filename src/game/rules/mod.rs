//! Outcome evaluation for tic-tac-toe.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{Line, winning_line};

use super::board::Board;
use super::types::{Roster, Seat};
use serde::Serialize;
use tracing::{instrument, warn};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Moves remain and nobody has a line.
    Ongoing,
    /// The player in `seat` completed `line`.
    Win {
        /// Seat owning the winning marker.
        seat: Seat,
        /// The completed line.
        line: Line,
    },
    /// Full board, no line.
    Tie,
}

/// Evaluates `board`, mapping a winning marker back to its player.
///
/// Lines are checked rows first, then columns, then diagonals; the first
/// complete line wins.
#[instrument(skip_all)]
pub fn evaluate(board: &Board, roster: &Roster) -> Outcome {
    if let Some((line, marker)) = winning_line(board) {
        match roster.seat_of(marker) {
            Some(seat) => return Outcome::Win { seat, line },
            None => warn!(%marker, "Completed line belongs to no player"),
        }
    }

    if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::super::position::Position;
    use super::super::types::{Marker, Player};
    use super::*;

    fn roster() -> Roster {
        Roster::new(
            Player::new("Xena", Marker::new('X').unwrap(), Seat::One),
            Player::new("Otto", Marker::new('O').unwrap(), Seat::Two),
        )
        .unwrap()
    }

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            for (column, symbol) in text.chars().enumerate() {
                if symbol != '.' {
                    board
                        .place(Marker::new(symbol).unwrap(), row, column)
                        .unwrap();
                }
            }
        }
        board
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new(), &roster()), Outcome::Ongoing);
    }

    #[test]
    fn test_diagonal_without_row_or_column() {
        let board = board_from(["X..", ".X.", "O.X"]);
        assert_eq!(
            evaluate(&board, &roster()),
            Outcome::Win {
                seat: Seat::One,
                line: Line::new(Position::LINES[6]),
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board = board_from(["XOX", "OXO", "OXO"]);
        assert_eq!(evaluate(&board, &roster()), Outcome::Tie);
    }

    #[test]
    fn test_win_on_last_cell_beats_tie() {
        let board = board_from(["XOX", "OXO", "XOX"]);
        assert!(matches!(
            evaluate(&board, &roster()),
            Outcome::Win { seat: Seat::One, .. }
        ));
    }

    #[test]
    fn test_unknown_marker_line_is_not_a_win() {
        let board = board_from(["ZZZ", "...", "..."]);
        assert_eq!(evaluate(&board, &roster()), Outcome::Ongoing);
    }
}
