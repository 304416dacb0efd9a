//! Win detection logic for tic-tac-toe.

use super::super::board::Board;
use super::super::position::Position;
use super::super::types::{Cell, Marker};
use serde::Serialize;
use tracing::instrument;

/// Three cells that win when they hold the same marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Line([Position; 3]);

impl Line {
    /// Wraps three positions as a line.
    pub fn new(cells: [Position; 3]) -> Self {
        Self(cells)
    }

    /// The cells of the line.
    pub fn cells(&self) -> &[Position; 3] {
        &self.0
    }

    /// Checks if `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Finds the first completed line and its marker.
///
/// Returns `Some((line, marker))` if some line has three identical markers,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Marker)> {
    Position::LINES.into_iter().find_map(|[a, b, c]| {
        let cell = board.cell(a);
        match cell {
            Cell::Marked(marker) if cell == board.cell(b) && cell == board.cell(c) => {
                Some((Line::new([a, b, c]), marker))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: &mut Board, symbol: char, cells: &[(usize, usize)]) {
        let marker = Marker::new(symbol).unwrap();
        for &(row, column) in cells {
            board.place(marker, row, column).unwrap();
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        mark(&mut board, 'X', &[(0, 0), (0, 1), (0, 2)]);
        let (line, marker) = winning_line(&board).unwrap();
        assert_eq!(marker.symbol(), 'X');
        assert_eq!(line, Line::new(Position::LINES[0]));
    }

    #[test]
    fn test_winner_middle_column() {
        let mut board = Board::new();
        mark(&mut board, 'O', &[(0, 1), (1, 1), (2, 1)]);
        let (line, marker) = winning_line(&board).unwrap();
        assert_eq!(marker.symbol(), 'O');
        assert!(line.contains(Position::new(2, 1).unwrap()));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        mark(&mut board, 'O', &[(0, 2), (1, 1), (2, 0)]);
        assert_eq!(winning_line(&board).unwrap().0, Line::new(Position::LINES[7]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        mark(&mut board, 'X', &[(0, 0), (0, 1)]);
        mark(&mut board, 'O', &[(0, 2)]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        let mut board = Board::new();
        mark(&mut board, 'X', &[(2, 0), (2, 1), (2, 2)]);
        mark(&mut board, 'O', &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(winning_line(&board).unwrap().1.symbol(), 'O');
    }
}
