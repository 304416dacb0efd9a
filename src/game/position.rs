//! Validated board coordinates.

use super::action::EngineError;
use super::board::Board;
use serde::Serialize;
use tracing::instrument;

/// Width and height of the board.
pub const SIZE: usize = 3;

/// A cell coordinate, guaranteed to lie on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Creates a position, rejecting coordinates off the 3x3 grid.
    #[instrument]
    pub fn new(row: usize, column: usize) -> Result<Self, EngineError> {
        if row >= SIZE || column >= SIZE {
            return Err(EngineError::OutOfRange { row, column });
        }
        Ok(Self { row, column })
    }

    const fn at(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Row (0 = top).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column (0 = left).
    pub fn column(self) -> usize {
        self.column
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.column
    }

    /// Creates position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIZE * SIZE).then(|| Self::at(index / SIZE, index % SIZE))
    }

    /// Keypad number shown to players (1-9).
    pub fn keypad(self) -> usize {
        self.index() + 1
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    /// The 8 winning lines: rows top to bottom, columns left to right,
    /// then the main and anti diagonals.
    pub const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
        [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
        [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
        // Columns
        [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
        [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
        [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
        // Diagonals
        [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
        [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
    ];

    /// Returns only the empty cells of `board`.
    #[instrument(skip(board))]
    pub fn open_cells(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.cell(*pos).is_empty())
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.column)
    }
}

/// Parses player input into raw `(row, column)` coordinates.
///
/// Accepts a keypad number `1`-`9` or a `row,column` pair (comma or
/// whitespace separated). Pairs are returned unchecked so the engine can
/// report them as off the board; `None` means the text is not a coordinate
/// at all.
#[instrument]
pub fn parse_coordinates(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    if let Ok(number) = input.parse::<usize>() {
        return Position::from_index(number.checked_sub(1)?)
            .map(|pos| (pos.row(), pos.column()));
    }

    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let column = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, column))
}

#[cfg(test)]
mod tests {
    use super::super::types::Marker;
    use super::*;

    #[test]
    fn test_new_rejects_off_board() {
        assert_eq!(
            Position::new(3, 0),
            Err(EngineError::OutOfRange { row: 3, column: 0 })
        );
        assert!(Position::new(0, 7).is_err());
    }

    #[test]
    fn test_index_round_trip() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), index);
            assert_eq!(Position::from_index(index), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_open_cells_skips_marked() {
        let mut board = Board::new();
        assert_eq!(Position::open_cells(&board), Position::ALL.to_vec());

        board.place(Marker::new('X').unwrap(), 1, 1).unwrap();
        let open = Position::open_cells(&board);
        assert_eq!(open.len(), 8);
        assert!(!open.contains(&Position::at(1, 1)));
    }

    #[test]
    fn test_lines_cover_every_cell() {
        for pos in Position::ALL {
            assert!(Position::LINES.iter().any(|line| line.contains(&pos)));
        }
    }

    #[test]
    fn test_parse_keypad_number() {
        assert_eq!(parse_coordinates("1"), Some((0, 0)));
        assert_eq!(parse_coordinates(" 5 "), Some((1, 1)));
        assert_eq!(parse_coordinates("9"), Some((2, 2)));
        assert_eq!(parse_coordinates("0"), None);
        assert_eq!(parse_coordinates("10"), None);
    }

    #[test]
    fn test_parse_pairs_unchecked() {
        assert_eq!(parse_coordinates("2,1"), Some((2, 1)));
        assert_eq!(parse_coordinates("0 2"), Some((0, 2)));
        assert_eq!(parse_coordinates("4, 4"), Some((4, 4)));
        assert_eq!(parse_coordinates("1,2,3"), None);
        assert_eq!(parse_coordinates("top"), None);
    }
}
