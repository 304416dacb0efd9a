//! Cursor movement for keyboard navigation.

use crate::game::{Position, SIZE};
use crossterm::event::KeyCode;

/// Moves cursor based on arrow keys (or vim-style hjkl).
///
/// The cursor stops at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), column),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(SIZE - 1), column),
        KeyCode::Left | KeyCode::Char('h') => (row, column.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (column + 1).min(SIZE - 1)),
        _ => return cursor,
    };
    Position::new(row, column).unwrap_or(cursor)
}
