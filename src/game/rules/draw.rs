//! Draw detection logic for tic-tac-toe.

use super::super::board::Board;
use super::win::winning_line;
use tracing::instrument;

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}
