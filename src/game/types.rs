//! Core domain types for tic-tac-toe.

use super::action::EngineError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The symbol a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(transparent)]
pub struct Marker(char);

impl Marker {
    /// Creates a marker from a single non-whitespace character.
    pub fn new(symbol: char) -> Result<Self, EngineError> {
        if symbol.is_whitespace() || symbol.is_control() {
            return Err(EngineError::InvalidMarker {
                input: symbol.to_string(),
            });
        }
        Ok(Self(symbol))
    }

    /// Parses a marker from form input.
    ///
    /// Surrounding whitespace is ignored; what remains must be exactly one
    /// character.
    pub fn parse(input: &str) -> Result<Self, EngineError> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::new(symbol),
            _ => Err(EngineError::InvalidMarker {
                input: input.to_string(),
            }),
        }
    }

    /// Returns the underlying character.
    pub fn symbol(self) -> char {
        self.0
    }
}

/// A player's fixed position in the turn order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Seat {
    /// Moves first after every reset.
    #[strum(to_string = "seat 1")]
    One,
    /// Moves second.
    #[strum(to_string = "seat 2")]
    Two,
}

impl Seat {
    /// Index of this seat in a two-element roster.
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }

    /// Seat to move for the given turn index.
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 { Seat::One } else { Seat::Two }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Cell {
    /// No marker yet.
    #[default]
    Empty,
    /// Holds a player's marker.
    Marked(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A contestant: fixed identity plus a running win count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    marker: Marker,
    seat: Seat,
    wins: u32,
}

impl Player {
    /// Creates a player with no wins.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, marker: Marker, seat: Seat) -> Self {
        Self {
            name: name.as_ref().to_string(),
            marker,
            seat,
            wins: 0,
        }
    }

    /// Player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Player's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Player's seat.
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Games won this session.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub(super) fn add_win(&mut self) {
        self.wins += 1;
        debug!(player = %self.name, wins = self.wins, "Win recorded");
    }

    pub(super) fn clear_wins(&mut self) {
        self.wins = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

/// The two contestants of a session, indexed by seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    players: [Player; 2],
}

impl Roster {
    /// Builds a roster from the seat-one and seat-two players.
    ///
    /// # Errors
    ///
    /// Returns `SeatOrder` if the players are not seated one then two, and
    /// `DuplicateMarker` if both use the same marker.
    #[instrument(skip_all, fields(first = %first, second = %second))]
    pub fn new(first: Player, second: Player) -> Result<Self, EngineError> {
        if first.seat != Seat::One || second.seat != Seat::Two {
            return Err(EngineError::SeatOrder);
        }
        if first.marker == second.marker {
            return Err(EngineError::DuplicateMarker {
                marker: first.marker,
            });
        }
        Ok(Self {
            players: [first, second],
        })
    }

    /// Player sitting in `seat`.
    pub fn get(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub(super) fn get_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// Finds the player owning `marker`.
    pub fn seat_of(&self, marker: Marker) -> Option<Seat> {
        self.players
            .iter()
            .find(|p| p.marker == marker)
            .map(|p| p.seat)
    }

    /// Both players in seat order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub(super) fn clear_wins(&mut self) {
        self.players.iter_mut().for_each(Player::clear_wins);
    }
}
