//! Scheduling request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Field, FieldUnavailability, Team, TeamUnavailability};

/// Competition formats known to the calling services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetitionFormat {
    /// Every pairing is played twice, once at each team's home.
    Tournament,
    /// Every pairing is played once.
    Championship,
}

impl CompetitionFormat {
    /// Whether the format plays a return leg.
    pub fn home_and_away(&self) -> bool {
        match self {
            CompetitionFormat::Tournament => true,
            CompetitionFormat::Championship => false,
        }
    }
}

/// Input container for one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Participating teams, in seeding order.
    pub teams: Vec<Team>,
    /// Available fields, in preference order.
    pub fields: Vec<Field>,
    /// First day of the planning window (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the planning window (inclusive).
    pub end_date: NaiveDate,
    /// Whether every pairing is played home and away.
    pub home_and_away: bool,
    /// Caller-declared team unavailability.
    pub team_unavailabilities: Vec<TeamUnavailability>,
    /// Caller-declared field unavailability.
    pub field_unavailabilities: Vec<FieldUnavailability>,
}

impl ScheduleRequest {
    /// Creates a single-leg request with no declared unavailability.
    pub fn new(
        teams: Vec<Team>,
        fields: Vec<Field>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            teams,
            fields,
            start_date,
            end_date,
            home_and_away: false,
            team_unavailabilities: Vec::new(),
            field_unavailabilities: Vec::new(),
        }
    }

    /// Sets the leg mode.
    pub fn with_home_and_away(mut self, home_and_away: bool) -> Self {
        self.home_and_away = home_and_away;
        self
    }

    /// Sets the leg mode from a competition format.
    pub fn with_format(self, format: CompetitionFormat) -> Self {
        self.with_home_and_away(format.home_and_away())
    }

    /// Sets declared team unavailability.
    pub fn with_team_unavailabilities(mut self, records: Vec<TeamUnavailability>) -> Self {
        self.team_unavailabilities = records;
        self
    }

    /// Sets declared field unavailability.
    pub fn with_field_unavailabilities(mut self, records: Vec<FieldUnavailability>) -> Self {
        self.field_unavailabilities = records;
        self
    }

    /// Number of days in the planning window (0 if `end_date < start_date`).
    pub fn total_days(&self) -> usize {
        let days = (self.end_date - self.start_date).num_days() + 1;
        usize::try_from(days).unwrap_or(0)
    }
}
