//! Application state and key handling.

use super::input::move_cursor;
use crate::game::{Position, TurnReport};
use crate::session::{Command, Session};
use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use tracing::{debug, instrument, warn};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep drawing and reading keys.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    report: TurnReport,
    cursor: Position,
    status: String,
}

impl App {
    /// Creates the app around a session whose players are already set.
    #[instrument(skip(session))]
    pub fn new(session: Session) -> Result<Self> {
        let report = session
            .game()
            .context("Players must be set up before the terminal UI starts")?
            .report(true, None);
        let status = report.headline();
        Ok(Self {
            session,
            report,
            cursor: Position::ALL[4],
            status,
        })
    }

    /// Latest report from the engine.
    pub fn report(&self) -> &TurnReport {
        &self.report
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Char('n') => self.send(Command::Reset),
            KeyCode::Char('s') => self.send(Command::ResetScores),
            other => {
                self.cursor = move_cursor(self.cursor, other);
            }
        }
        Control::Continue
    }

    fn play(&mut self, pos: Position) {
        self.send(Command::PlayTurn {
            row: pos.row(),
            column: pos.column(),
        });
    }

    fn send(&mut self, command: Command) {
        match self.session.dispatch(command) {
            Ok(event) => {
                self.report = event.into_report();
                self.status = self.report.headline();
                debug!(valid = self.report.valid, "Report received");
            }
            Err(e) => {
                warn!(error = %e, "Command failed");
                self.status = e.to_string();
            }
        }
    }
}
