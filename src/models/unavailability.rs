//! Unavailability records for teams and fields.
//!
//! A record is either declared by the caller before the run or
//! synthesized by the engine when it places a match (an auto-block).
//! [`BlockSource`] keeps the two apart.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Interval, MatchId};

/// Where an unavailability record comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockSource {
    /// Supplied by the caller (holidays, maintenance, ...).
    Declared,
    /// Synthesized when the given match was placed.
    Match(MatchId),
}

/// A period during which a team cannot play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamUnavailability {
    /// Team ID.
    pub team_id: String,
    /// Blocked period.
    pub interval: Interval,
    /// Origin of the record.
    pub source: BlockSource,
}

/// A period during which a field cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUnavailability {
    /// Field ID.
    pub field_id: String,
    /// Blocked period.
    pub interval: Interval,
    /// Origin of the record.
    pub source: BlockSource,
}

impl BlockSource {
    /// The causing match, for synthesized records.
    pub fn match_id(&self) -> Option<MatchId> {
        match self {
            BlockSource::Declared => None,
            BlockSource::Match(id) => Some(*id),
        }
    }
}

impl TeamUnavailability {
    /// Creates a caller-declared record.
    pub fn declared(
        team_id: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            team_id: team_id.into(),
            interval: Interval::new(start, end),
            source: BlockSource::Declared,
        }
    }

    /// Creates an auto-block caused by a placed match.
    pub fn for_match(team_id: impl Into<String>, interval: Interval, match_id: MatchId) -> Self {
        Self {
            team_id: team_id.into(),
            interval,
            source: BlockSource::Match(match_id),
        }
    }

    /// Whether the record was declared by the caller.
    pub fn is_declared(&self) -> bool {
        self.source == BlockSource::Declared
    }
}

impl FieldUnavailability {
    /// Creates a caller-declared record.
    pub fn declared(
        field_id: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            interval: Interval::new(start, end),
            source: BlockSource::Declared,
        }
    }

    /// Creates an auto-block caused by a placed match.
    pub fn for_match(field_id: impl Into<String>, interval: Interval, match_id: MatchId) -> Self {
        Self {
            field_id: field_id.into(),
            interval,
            source: BlockSource::Match(match_id),
        }
    }

    /// Whether the record was declared by the caller.
    pub fn is_declared(&self) -> bool {
        self.source == BlockSource::Declared
    }
}
