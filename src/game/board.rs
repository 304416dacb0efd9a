//! The 3x3 grid.

use super::action::EngineError;
use super::position::{Position, SIZE};
use super::types::{Cell, Marker};
use serde::Serialize;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// The board does no legality checking: `place` overwrites whatever is in
/// the cell. Keeping marks permanent is the game's job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if either coordinate is not 0, 1 or 2.
    #[instrument(skip(self))]
    pub fn get(&self, row: usize, column: usize) -> Result<Cell, EngineError> {
        Ok(self.cell(Position::new(row, column)?))
    }

    /// Writes `marker` into `(row, column)` unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if either coordinate is not 0, 1 or 2.
    #[instrument(skip(self))]
    pub fn place(&mut self, marker: Marker, row: usize, column: usize) -> Result<(), EngineError> {
        let pos = Position::new(row, column)?;
        self.set(pos, Cell::Marked(marker));
        Ok(())
    }

    /// Reads the cell at a validated position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Resets all nine cells to empty.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; SIZE * SIZE];
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; SIZE * SIZE] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid; empty cells show their keypad number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for column in 0..SIZE {
                let pos = Position::ALL[row * SIZE + column];
                match self.cell(pos) {
                    Cell::Empty => write!(f, " {} ", pos.keypad())?,
                    Cell::Marked(marker) => write!(f, " {} ", marker)?,
                }
                if column < SIZE - 1 {
                    f.write_str("|")?;
                }
            }
            if row < SIZE - 1 {
                f.write_str("\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}
