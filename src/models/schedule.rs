//! Schedule (solution) model.
//!
//! A schedule result holds the matches the engine managed to place,
//! every unavailability record (declared by the caller and synthesized
//! from placements), and the fixtures that could not be placed inside
//! the planning window.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{FieldUnavailability, Fixture, Interval, TeamUnavailability};

/// Run-local match identifier: the match's index in
/// [`ScheduleResult::matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(pub usize);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

/// A fixture placed on a field at a given time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Identifier within the result.
    pub id: MatchId,
    /// The pairing being played.
    pub fixture: Fixture,
    /// Assigned field ID.
    pub field_id: String,
    /// Slot occupied by the match (playing time plus break).
    pub interval: Interval,
}

/// What happened to one generated fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureOutcome<'a> {
    /// The fixture was placed as this match.
    Placed(&'a Match),
    /// The window ran out before the fixture could be placed.
    Unplaced(&'a Fixture),
}

/// Output of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Placed matches, in placement order.
    pub matches: Vec<Match>,
    /// Declared team unavailabilities followed by synthesized ones.
    pub team_unavailabilities: Vec<TeamUnavailability>,
    /// Declared field unavailabilities followed by synthesized ones.
    pub field_unavailabilities: Vec<FieldUnavailability>,
    /// Fixtures left unplaced, in pairing order.
    pub unplaced: Vec<Fixture>,
}

impl Match {
    /// Creates a new match.
    pub fn new(
        id: MatchId,
        fixture: Fixture,
        field_id: impl Into<String>,
        interval: Interval,
    ) -> Self {
        Self {
            id,
            fixture,
            field_id: field_id.into(),
            interval,
        }
    }

    /// Kickoff date-time.
    #[inline]
    pub fn kickoff(&self) -> NaiveDateTime {
        self.interval.start
    }

    /// Calendar day of the match.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.interval.start.date()
    }

    /// Home team ID.
    pub fn home(&self) -> &str {
        &self.fixture.home
    }

    /// Away team ID.
    pub fn away(&self) -> &str {
        &self.fixture.away
    }

    /// Whether the team plays in this match.
    pub fn involves(&self, team_id: &str) -> bool {
        self.fixture.involves(team_id)
    }
}

impl ScheduleResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a result seeded with the caller's declared records.
    pub fn with_declared(
        team_unavailabilities: Vec<TeamUnavailability>,
        field_unavailabilities: Vec<FieldUnavailability>,
    ) -> Self {
        Self {
            team_unavailabilities,
            field_unavailabilities,
            ..Self::default()
        }
    }

    /// Identifier the next added match will receive.
    #[inline]
    pub fn next_match_id(&self) -> MatchId {
        MatchId(self.matches.len())
    }

    /// Adds a match.
    pub fn add_match(&mut self, m: Match) {
        self.matches.push(m);
    }

    /// Adds a team unavailability record.
    pub fn add_team_unavailability(&mut self, record: TeamUnavailability) {
        self.team_unavailabilities.push(record);
    }

    /// Adds a field unavailability record.
    pub fn add_field_unavailability(&mut self, record: FieldUnavailability) {
        self.field_unavailabilities.push(record);
    }

    /// Number of placed matches.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Number of fixtures the run started with (placed + unplaced).
    pub fn expected_fixtures(&self) -> usize {
        self.matches.len() + self.unplaced.len()
    }

    /// Whether every generated fixture was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Looks up a match by ID.
    pub fn get(&self, id: MatchId) -> Option<&Match> {
        self.matches.get(id.0)
    }

    /// Finds the match that plays a given fixture.
    pub fn match_for_fixture(&self, fixture: &Fixture) -> Option<&Match> {
        self.matches.iter().find(|m| &m.fixture == fixture)
    }

    /// Returns all matches a team plays in.
    pub fn matches_for_team(&self, team_id: &str) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.involves(team_id)).collect()
    }

    /// Returns all matches played on a field.
    pub fn matches_for_field(&self, field_id: &str) -> Vec<&Match> {
        self.matches
            .iter()
            .filter(|m| m.field_id == field_id)
            .collect()
    }

    /// Returns all matches played on a given day.
    pub fn matches_on(&self, date: NaiveDate) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.date() == date).collect()
    }

    /// Outcome of every generated fixture, in pairing order.
    ///
    /// The engine never skips ahead in the pairing sequence, so the
    /// placed fixtures always precede the unplaced ones.
    pub fn fixture_outcomes(&self) -> Vec<FixtureOutcome<'_>> {
        self.matches
            .iter()
            .map(FixtureOutcome::Placed)
            .chain(self.unplaced.iter().map(FixtureOutcome::Unplaced))
            .collect()
    }

    /// Synthesized team records caused by a match.
    pub fn team_blocks_for_match(&self, id: MatchId) -> Vec<&TeamUnavailability> {
        self.team_unavailabilities
            .iter()
            .filter(|u| u.source.match_id() == Some(id))
            .collect()
    }

    /// Latest end across all matches.
    pub fn last_match_end(&self) -> Option<NaiveDateTime> {
        self.matches.iter().map(|m| m.interval.end).max()
    }
}
