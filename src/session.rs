//! Command channel between presenters and the engine.
//!
//! Presenters never touch a [`Game`] directly. They build [`Command`]s from
//! user input and dispatch them into a [`Session`], which answers each one
//! with an [`Event`] once the command is fully resolved.

use crate::game::{EngineError, Game, Marker, Player, Roster, Seat, TurnReport};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Raw setup-form input for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    /// Name as typed.
    pub name: String,
    /// Marker as typed; must be one visible character.
    pub marker: String,
}

impl PlayerSetup {
    /// Creates a setup form.
    pub fn new(name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: marker.into(),
        }
    }

    /// Validates the form input and seats the player.
    ///
    /// # Errors
    ///
    /// Returns `EmptyName` for a blank name and `InvalidMarker` for anything
    /// other than a single visible character.
    #[instrument(skip(self), fields(name = %self.name, marker = %self.marker))]
    pub fn into_player(&self, seat: Seat) -> Result<Player, EngineError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EngineError::EmptyName { seat });
        }
        let marker = Marker::parse(&self.marker)?;
        Ok(Player::new(name, marker, seat))
    }
}

/// Validates both setup forms, rejecting a shared marker.
#[instrument(skip_all)]
pub fn validate_setup(
    first: &PlayerSetup,
    second: &PlayerSetup,
) -> Result<(Player, Player), EngineError> {
    let first = first.into_player(Seat::One)?;
    let second = second.into_player(Seat::Two)?;
    if first.marker() == second.marker() {
        warn!(marker = %first.marker(), "Setup rejected: duplicate marker");
        return Err(EngineError::DuplicateMarker {
            marker: first.marker(),
        });
    }
    Ok((first, second))
}

/// Inbound requests from a presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Install the two contestants and start a fresh game.
    SetPlayers {
        /// Seat-one form.
        first: PlayerSetup,
        /// Seat-two form.
        second: PlayerSetup,
    },
    /// Play the current player's marker.
    PlayTurn {
        /// Row, 0-2.
        row: usize,
        /// Column, 0-2.
        column: usize,
    },
    /// Clear the board for a new game, keeping scores.
    Reset,
    /// Zero both win counters.
    ResetScores,
}

/// Outbound notifications, one per command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Event {
    /// Players were installed and a game is waiting for seat one.
    PlayersReady(TurnReport),
    /// A move request was resolved (check `valid`).
    TurnPlayed(TurnReport),
    /// The board was cleared for a new game.
    GameReset(TurnReport),
    /// Both win counters were zeroed.
    ScoresReset(TurnReport),
}

impl Event {
    /// The report carried by any event.
    pub fn report(&self) -> &TurnReport {
        match self {
            Event::PlayersReady(report)
            | Event::TurnPlayed(report)
            | Event::GameReset(report)
            | Event::ScoresReset(report) => report,
        }
    }

    /// Unwraps the carried report.
    pub fn into_report(self) -> TurnReport {
        match self {
            Event::PlayersReady(report)
            | Event::TurnPlayed(report)
            | Event::GameReset(report)
            | Event::ScoresReset(report) => report,
        }
    }
}

/// One play session: players are set once, then any number of games follow.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: Option<Game>,
}

impl Session {
    /// Creates a session that still needs its players.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session");
        Self::default()
    }

    /// Creates a session and installs the players in one step.
    pub fn with_players(first: &PlayerSetup, second: &PlayerSetup) -> Result<Self, EngineError> {
        let mut session = Self::new();
        session.dispatch(Command::SetPlayers {
            first: first.clone(),
            second: second.clone(),
        })?;
        Ok(session)
    }

    /// The running game, once players are set.
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Resolves one command.
    ///
    /// # Errors
    ///
    /// Setup validation errors for `SetPlayers`, `NotSetUp` for anything
    /// else sent before players exist, and `OutOfRange` for moves off the
    /// board. A failed command leaves the session unchanged.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) -> Result<Event, EngineError> {
        let event = match command {
            Command::SetPlayers { first, second } => {
                let (first, second) = validate_setup(&first, &second)?;
                let report = if let Some(game) = self.game.as_mut() {
                    game.set_players(first, second)?
                } else {
                    let game = self.game.insert(Game::new(Roster::new(first, second)?));
                    game.report(true, None)
                };
                Event::PlayersReady(report)
            }
            Command::PlayTurn { row, column } => {
                Event::TurnPlayed(self.game_mut()?.play_turn(row, column)?)
            }
            Command::Reset => Event::GameReset(self.game_mut()?.reset()),
            Command::ResetScores => Event::ScoresReset(self.game_mut()?.reset_scores()),
        };
        debug!(
            valid = event.report().valid,
            phase = %event.report().phase,
            "Command resolved"
        );
        Ok(event)
    }

    fn game_mut(&mut self) -> Result<&mut Game, EngineError> {
        self.game.as_mut().ok_or_else(|| {
            warn!("Command rejected: players not set up");
            EngineError::NotSetUp
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setups() -> (PlayerSetup, PlayerSetup) {
        (PlayerSetup::new("Xena", "X"), PlayerSetup::new("Otto", "O"))
    }

    #[test]
    fn test_move_before_setup_is_rejected() {
        let mut session = Session::new();
        assert_eq!(
            session.dispatch(Command::PlayTurn { row: 0, column: 0 }),
            Err(EngineError::NotSetUp)
        );
        assert_eq!(session.dispatch(Command::Reset), Err(EngineError::NotSetUp));
    }

    #[test]
    fn test_setup_trims_names() {
        let player = PlayerSetup::new("  Ann ", "A").into_player(Seat::One).unwrap();
        assert_eq!(player.name(), "Ann");
    }

    #[test]
    fn test_setup_rejects_blank_name() {
        assert_eq!(
            PlayerSetup::new("   ", "A").into_player(Seat::Two),
            Err(EngineError::EmptyName { seat: Seat::Two })
        );
    }

    #[test]
    fn test_setup_rejects_duplicate_markers() {
        let first = PlayerSetup::new("Ann", "X");
        let second = PlayerSetup::new("Bob", " X");
        assert!(matches!(
            validate_setup(&first, &second),
            Err(EngineError::DuplicateMarker { .. })
        ));
        let mut session = Session::new();
        assert!(session.dispatch(Command::SetPlayers { first, second }).is_err());
        assert!(session.game().is_none());
    }

    #[test]
    fn test_players_ready_then_play() {
        let (first, second) = setups();
        let mut session = Session::with_players(&first, &second).unwrap();

        let event = session.dispatch(Command::PlayTurn { row: 2, column: 2 }).unwrap();

        assert!(matches!(event, Event::TurnPlayed(ref report) if report.valid));
        assert_eq!(event.report().current_player.name(), "Otto");
    }

    #[test]
    fn test_resetting_players_keeps_nothing_from_old_game() {
        let (first, second) = setups();
        let mut session = Session::with_players(&first, &second).unwrap();
        session.dispatch(Command::PlayTurn { row: 0, column: 0 }).unwrap();

        let event = session
            .dispatch(Command::SetPlayers {
                first: PlayerSetup::new("Ann", "A"),
                second: PlayerSetup::new("Bob", "B"),
            })
            .unwrap();

        let report = event.into_report();
        assert!(report.board.iter().all(|cell| cell.is_empty()));
        assert_eq!(report.current_player.name(), "Ann");
    }
}
