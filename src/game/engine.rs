//! Turn sequencing and move validation.

use super::action::{EngineError, Move};
use super::board::Board;
use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use super::report::{Phase, TurnReport};
use super::rules::{Outcome, evaluate};
use super::types::{Cell, Player, Roster, Seat};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns the board and both players for one session. The seat to move is
/// `players[turn % 2]`; `turn` advances only after a valid move that does
/// not end the game.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) roster: Roster,
    pub(crate) turn: usize,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a game for `roster`, awaiting the seat-one player's move.
    #[instrument(skip(roster))]
    pub fn new(roster: Roster) -> Self {
        info!(
            first = %roster.get(Seat::One),
            second = %roster.get(Seat::Two),
            "Starting game"
        );
        Self {
            board: Board::new(),
            roster,
            turn: 0,
            phase: Phase::AwaitingMove,
            history: Vec::new(),
        }
    }

    /// Installs two new contestants and starts over from a clear board.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateMarker` or `SeatOrder` from roster validation; the
    /// game is unchanged in that case.
    #[instrument(skip_all, fields(first = %first, second = %second))]
    pub fn set_players(
        &mut self,
        first: Player,
        second: Player,
    ) -> Result<TurnReport, EngineError> {
        self.roster = Roster::new(first, second)?;
        self.board.clear();
        self.history.clear();
        self.turn = 0;
        self.phase = Phase::AwaitingMove;
        info!("Players installed");
        Ok(self.report(true, None))
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.roster.get(Seat::for_turn(self.turn))
    }

    /// Plays the current player's marker at `(row, column)`.
    ///
    /// An occupied cell or a finished game yields a report with
    /// `valid == false` and leaves every piece of state untouched.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for coordinates off the board.
    #[instrument(skip(self), fields(turn = self.turn, phase = %self.phase))]
    pub fn play_turn(&mut self, row: usize, column: usize) -> Result<TurnReport, EngineError> {
        let pos = Position::new(row, column)?;

        if self.phase == Phase::GameOver {
            debug!("Move rejected: game is over");
            return Ok(self.report(false, None));
        }
        if !self.board.cell(pos).is_empty() {
            debug!(%pos, "Move rejected: cell occupied");
            return Ok(self.report(false, None));
        }

        let seat = Seat::for_turn(self.turn);
        let marker = self.roster.get(seat).marker();
        self.board.set(pos, Cell::Marked(marker));
        self.history.push(Move::new(seat, pos));

        let outcome = evaluate(&self.board, &self.roster);
        match outcome {
            Outcome::Win { seat, .. } => {
                self.roster.get_mut(seat).add_win();
                self.phase = Phase::GameOver;
                info!(winner = %self.roster.get(seat), "Game won");
            }
            Outcome::Tie => {
                self.phase = Phase::GameOver;
                info!("Game tied");
            }
            Outcome::Ongoing => {
                self.turn += 1;
            }
        }

        self.assert_invariants();
        debug!(%pos, %seat, ?outcome, "Move applied");
        Ok(self.report(true, Some(outcome)))
    }

    /// Clears the board for a new game. Win counts are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> TurnReport {
        self.board.clear();
        self.history.clear();
        self.turn = 0;
        self.phase = Phase::AwaitingMove;
        info!("Game reset");
        self.report(true, None)
    }

    /// Zeroes both players' win counts. The board is left as it is.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) -> TurnReport {
        self.roster.clear_wins();
        info!("Scores reset");
        self.report(true, None)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the turn index.
    pub fn turn_index(&self) -> usize {
        self.turn
    }

    /// Returns the game phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the accepted moves since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Snapshot for presenters.
    ///
    /// `outcome` is the result of the move just applied; pass `None` for
    /// rejected moves and for calls that did not place a marker.
    pub fn report(&self, valid: bool, outcome: Option<Outcome>) -> TurnReport {
        let (winner, line, tie) = match outcome {
            Some(Outcome::Win { seat, line }) => {
                (Some(self.roster.get(seat).clone()), Some(line), false)
            }
            Some(Outcome::Tie) => (None, None, true),
            Some(Outcome::Ongoing) | None => (None, None, false),
        };
        TurnReport {
            valid,
            winner,
            tie,
            line,
            board: *self.board.cells(),
            current_player: self.current_player().clone(),
            players: self.roster.players().clone(),
            phase: self.phase,
        }
    }

    fn assert_invariants(&self) {
        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Game invariants violated");
        }
    }
}
