//! Fixture model.
//!
//! A fixture is one leg of a pairing, before it has been given a date,
//! time, and field.

use serde::{Deserialize, Serialize};

/// Which leg of a pairing a fixture is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leg {
    /// The only leg (single round robin) or the first of two.
    First,
    /// The reversed leg of a home-and-away pairing.
    Return,
}

/// An ordered (home, away) pairing produced by the round-robin generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    /// Home team ID.
    pub home: String,
    /// Away team ID.
    pub away: String,
    /// Circle-method round that produced the pairing (0-based).
    pub round: u32,
    /// Leg of the pairing.
    pub leg: Leg,
}

impl Fixture {
    /// Creates a first-leg fixture.
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            round: 0,
            leg: Leg::First,
        }
    }

    /// Sets the round number.
    pub fn with_round(mut self, round: u32) -> Self {
        self.round = round;
        self
    }

    /// Returns the return leg (home and away swapped).
    pub fn reversed(&self) -> Self {
        Self {
            home: self.away.clone(),
            away: self.home.clone(),
            round: self.round,
            leg: Leg::Return,
        }
    }

    /// Whether the team plays in this fixture.
    pub fn involves(&self, team_id: &str) -> bool {
        self.home == team_id || self.away == team_id
    }

    /// Both team IDs, home first.
    pub fn teams(&self) -> [&str; 2] {
        [&self.home, &self.away]
    }
}
