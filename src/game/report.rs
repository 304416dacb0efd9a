//! Outbound snapshot handed to presenters after every engine call.

use super::board::Board;
use super::position::SIZE;
use super::rules::Line;
use super::types::{Cell, Player};
use serde::Serialize;

/// Phase of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum Phase {
    /// Waiting for the current player's move.
    AwaitingMove,
    /// A win or tie ended the game; only a reset continues play.
    GameOver,
}

/// Everything a presenter needs to redraw after a call into the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// Whether the requested move was applied.
    pub valid: bool,
    /// Winner of the game, set only on the move that completed a line.
    pub winner: Option<Player>,
    /// Set only on the move that filled the board without a line.
    pub tie: bool,
    /// The completed line when `winner` is set.
    pub line: Option<Line>,
    /// Board cells in row-major order.
    pub board: [Cell; SIZE * SIZE],
    /// Player to move (the winner stays current once the game is over).
    pub current_player: Player,
    /// Both players in seat order, with up-to-date win counts.
    pub players: [Player; 2],
    /// Phase after the call.
    pub phase: Phase,
}

impl TurnReport {
    /// Cell at `(row, column)` of the snapshot, if on the board.
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        (row < SIZE && column < SIZE).then(|| self.board[row * SIZE + column])
    }

    /// Rebuilds a board from the snapshot.
    pub fn to_board(&self) -> Board {
        let mut board = Board::new();
        for (pos, cell) in super::position::Position::ALL.iter().zip(self.board) {
            board.set(*pos, cell);
        }
        board
    }

    /// One-line summary for status bars and logs.
    pub fn headline(&self) -> String {
        match (&self.winner, self.tie, self.valid, self.phase) {
            (Some(winner), _, _, _) => format!("{} wins!", winner),
            (None, true, _, _) => "It's a tie!".to_string(),
            (None, false, _, Phase::GameOver) => {
                "The game is over. Start a new game to keep playing.".to_string()
            }
            (None, false, false, Phase::AwaitingMove) => {
                format!("That cell is taken. {} to move.", self.current_player)
            }
            (None, false, true, Phase::AwaitingMove) => format!("{} to move.", self.current_player),
        }
    }
}
