//! Greedy fixture placement.
//!
//! # Algorithm
//!
//! 1. Validate the request and generate the round-robin fixture sequence.
//! 2. Build the daily slot grid and reject the request if there are more
//!    fixtures than day × slot × field combinations.
//! 3. Walk days, then slots, then fields (caller order). At each
//!    candidate, place the *next* fixture if the field and both teams are
//!    free, then block all three for the slot.
//! 4. Stop when every fixture is placed or the window is exhausted.
//!
//! The walk never reorders fixtures: a fixture that cannot be placed is
//! retried at the next candidate, and later fixtures wait behind it.
//! Whatever is left when the window runs out is reported in
//! [`ScheduleResult::unplaced`], not as an error.
//!
//! # Complexity
//! O(d * s * f * b) where d=days, s=slots/day, f=fields, b=blocking
//! entries per subject.

use log::{info, trace, warn};

use crate::availability::AvailabilityChecker;
use crate::config::SchedulerConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{Fixture, Interval, Match, ScheduleResult};
use crate::pairing::generate_pairings;
use crate::slots::SlotGrid;
use crate::validation::validate_request;

use super::ScheduleRequest;

/// Round-robin fixture scheduler.
///
/// Holds only configuration. All blocking state is allocated per call
/// to [`schedule`](Self::schedule), so a scheduler can be shared freely
/// between threads and reused across runs.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_fixture::models::{Field, Team};
/// use u_fixture::scheduler::{FixtureScheduler, ScheduleRequest};
///
/// let teams = vec![Team::new("A"), Team::new("B"), Team::new("C"), Team::new("D")];
/// let fields = vec![Field::new("F1")];
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
///
/// let request = ScheduleRequest::new(teams, fields, start, end);
/// let result = FixtureScheduler::new().schedule(&request).unwrap();
/// assert_eq!(result.match_count(), 6);
/// assert!(result.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureScheduler {
    config: SchedulerConfig,
}

impl FixtureScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Number of day × slot × field combinations in the request's window.
    pub fn capacity(&self, request: &ScheduleRequest) -> usize {
        slot_capacity(&SlotGrid::from_config(&self.config), request)
    }

    /// Schedules the round robin described by `request`.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidInput`] if the request fails validation.
    /// - [`ScheduleError::Config`] if the configuration is invalid.
    /// - [`ScheduleError::InsufficientCapacity`] if the window cannot hold
    ///   every fixture even without any unavailability.
    pub fn schedule(&self, request: &ScheduleRequest) -> Result<ScheduleResult> {
        validate_request(request).map_err(|errors| {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            ScheduleError::InvalidInput(messages.join("; "))
        })?;
        self.config.validate()?;

        let mut fixtures = generate_pairings(&request.teams, request.home_and_away)?;
        let grid = SlotGrid::from_config(&self.config);

        let capacity = slot_capacity(&grid, request);
        if fixtures.len() > capacity {
            return Err(ScheduleError::InsufficientCapacity {
                required: fixtures.len(),
                available: capacity,
            });
        }

        info!(
            "scheduling {} fixtures for {} teams on {} fields from {} to {} ({} slots)",
            fixtures.len(),
            request.teams.len(),
            request.fields.len(),
            request.start_date,
            request.end_date,
            capacity
        );

        let mut checker = AvailabilityChecker::from_declared(
            &request.team_unavailabilities,
            &request.field_unavailabilities,
        );
        let mut result = ScheduleResult::with_declared(
            request.team_unavailabilities.clone(),
            request.field_unavailabilities.clone(),
        );

        let placed = place_fixtures(&fixtures, request, &grid, &mut checker, &mut result);
        result.unplaced = fixtures.split_off(placed);

        if !result.unplaced.is_empty() {
            warn!(
                "window exhausted with {} of {} fixtures unplaced (first: {} v {})",
                result.unplaced.len(),
                result.expected_fixtures(),
                result.unplaced[0].home,
                result.unplaced[0].away
            );
        }
        info!(
            "placed {}/{} fixtures, {} auto-blocks",
            result.match_count(),
            result.expected_fixtures(),
            checker.auto_block_count()
        );

        Ok(result)
    }
}

fn slot_capacity(grid: &SlotGrid, request: &ScheduleRequest) -> usize {
    grid.len()
        .saturating_mul(request.fields.len())
        .saturating_mul(request.total_days())
}

/// Runs the day × slot × field walk. Returns the number of fixtures placed.
fn place_fixtures(
    fixtures: &[Fixture],
    request: &ScheduleRequest,
    grid: &SlotGrid,
    checker: &mut AvailabilityChecker,
    result: &mut ScheduleResult,
) -> usize {
    let mut next = 0;
    let mut day = request.start_date;

    'days: while next < fixtures.len() && day <= request.end_date {
        for &time in grid.times() {
            for field in &request.fields {
                if next >= fixtures.len() {
                    break 'days;
                }

                let candidate = Interval::on_day(day, time, grid.slot_duration());
                if !checker.is_field_free(&field.id, &candidate) {
                    continue;
                }

                let fixture = &fixtures[next];
                if !checker.is_team_free(&fixture.home, &candidate)
                    || !checker.is_team_free(&fixture.away, &candidate)
                {
                    continue;
                }

                let id = result.next_match_id();
                trace!(
                    "{id}: {} v {} on {} at {}",
                    fixture.home,
                    fixture.away,
                    field.id,
                    candidate.start
                );

                result.add_match(Match::new(id, fixture.clone(), field.id.as_str(), candidate));
                let home = checker.block_team(&fixture.home, candidate, id);
                let away = checker.block_team(&fixture.away, candidate, id);
                let pitch = checker.block_field(&field.id, candidate, id);
                result.add_team_unavailability(home);
                result.add_team_unavailability(away);
                result.add_field_unavailability(pitch);

                next += 1;
            }
        }

        match day.succ_opt() {
            Some(following) => day = following,
            None => break,
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockSource, Field, FieldUnavailability, MatchId, Team, TeamUnavailability};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, m, 0).unwrap()
    }

    fn teams(names: &[&str]) -> Vec<Team> {
        names.iter().map(|n| Team::new(*n)).collect()
    }

    fn fields(n: usize) -> Vec<Field> {
        (1..=n).map(|i| Field::new(format!("F{i}"))).collect()
    }

    #[test]
    fn test_back_to_back_on_one_field() {
        let req = ScheduleRequest::new(teams(&["A", "B", "C", "D"]), fields(1), day(1), day(2));
        let r = FixtureScheduler::new().schedule(&req).unwrap();

        // Slot grid 09:00, 10:50, 12:40, 14:30: four fixtures on day 1, two on day 2.
        let kickoffs: Vec<NaiveDateTime> = r.matches_on(day(1)).iter().map(|m| m.kickoff()).collect();
        assert_eq!(
            kickoffs,
            vec![at(1, 9, 0), at(1, 10, 50), at(1, 12, 40), at(1, 14, 30)]
        );
        assert_eq!(r.matches_on(day(2)).len(), 2);
        assert!(r.is_complete());
    }

    #[test]
    fn test_fields_used_in_caller_order() {
        let req = ScheduleRequest::new(teams(&["A", "B", "C", "D"]), fields(2), day(1), day(1));
        let r = FixtureScheduler::new().schedule(&req).unwrap();

        // A-D and B-C are disjoint: both go at 09:00, on F1 then F2.
        assert_eq!(r.matches[0].field_id, "F1");
        assert_eq!(r.matches[1].field_id, "F2");
        assert_eq!(r.matches[0].kickoff(), at(1, 9, 0));
        assert_eq!(r.matches[1].kickoff(), at(1, 9, 0));
        assert!(r.is_complete());
    }

    #[test]
    fn test_blocked_team_waits_for_next_slot() {
        let req = ScheduleRequest::new(teams(&["A", "B", "C", "D"]), fields(3), day(1), day(1));
        let r = FixtureScheduler::new().schedule(&req).unwrap();

        assert_eq!(r.matches[0].kickoff(), at(1, 9, 0)); // A-D on F1
        assert_eq!(r.matches[1].kickoff(), at(1, 9, 0)); // B-C on F2
        // A-C cannot use F3 at 09:00: both teams are busy.
        assert_eq!(r.matches[2].fixture.home, "A");
        assert_eq!(r.matches[2].fixture.away, "C");
        assert_eq!(r.matches[2].kickoff(), at(1, 10, 50));
        assert_eq!(r.matches[2].field_id, "F1");
    }

    #[test]
    fn test_blocked_fixture_stalls_sequence() {
        // A is unavailable all of day 1, so A-D (the first fixture) stalls
        // everything behind it, including B-C which could have been played.
        let req = ScheduleRequest::new(teams(&["A", "B", "C", "D"]), fields(1), day(1), day(2))
            .with_team_unavailabilities(vec![TeamUnavailability::declared(
                "A",
                at(1, 0, 0),
                at(2, 0, 0),
            )]);
        let r = FixtureScheduler::new().schedule(&req).unwrap();

        assert!(r.matches_on(day(1)).is_empty());
        assert_eq!(r.match_count(), 4);
        assert_eq!(r.matches[0].kickoff(), at(2, 9, 0));
        assert_eq!(r.matches[0].home(), "A");
    }

    #[test]
    fn test_inverted_declared_record_blocks_slot() {
        // B is busy at 09:00, A's inverted record [12:00, 11:00) overlaps 10:50-12:40.
        let req = ScheduleRequest::new(teams(&["A", "B"]), fields(1), day(1), day(1))
            .with_team_unavailabilities(vec![
                TeamUnavailability::declared("B", at(1, 9, 0), at(1, 10, 50)),
                TeamUnavailability::declared("A", at(1, 12, 0), at(1, 11, 0)),
            ]);
        let r = FixtureScheduler::new().schedule(&req).unwrap();
        assert_eq!(r.matches[0].kickoff(), at(1, 12, 40));
    }

    #[test]
    fn test_declared_field_block_skips_field() {
        let req = ScheduleRequest::new(teams(&["A", "B"]), fields(2), day(1), day(1))
            .with_field_unavailabilities(vec![FieldUnavailability::declared(
                "F1",
                at(1, 8, 0),
                at(1, 12, 0),
            )]);
        let r = FixtureScheduler::new().schedule(&req).unwrap();
        assert_eq!(r.matches[0].field_id, "F2");
        assert_eq!(r.matches[0].kickoff(), at(1, 9, 0));
    }

    #[test]
    fn test_unavailability_records() {
        let declared = TeamUnavailability::declared("Z", at(1, 9, 0), at(1, 10, 0));
        let req = ScheduleRequest::new(teams(&["A", "B"]), fields(1), day(1), day(1))
            .with_home_and_away(true)
            .with_team_unavailabilities(vec![declared.clone()]);
        let r = FixtureScheduler::new().schedule(&req).unwrap();

        assert_eq!(r.match_count(), 2);
        // Declared first and verbatim, then two per match.
        assert_eq!(r.team_unavailabilities.len(), 5);
        assert_eq!(r.team_unavailabilities[0], declared);
        assert_eq!(r.team_unavailabilities[1].source, BlockSource::Match(MatchId(0)));
        assert_eq!(r.team_unavailabilities[1].team_id, "A");
        assert_eq!(r.team_unavailabilities[2].team_id, "B");
        assert_eq!(r.team_unavailabilities[3].source, BlockSource::Match(MatchId(1)));

        assert_eq!(r.field_unavailabilities.len(), 2);
        assert_eq!(r.field_unavailabilities[1].interval, r.matches[1].interval);
        assert_eq!(r.team_blocks_for_match(MatchId(1)).len(), 2);
    }

    #[test]
    fn test_insufficient_capacity() {
        let names: Vec<String> = (0..10).map(|i| format!("T{i}")).collect();
        let req = ScheduleRequest::new(
            names.iter().map(Team::new).collect(),
            fields(1),
            day(1),
            day(1),
        );
        let err = FixtureScheduler::new().schedule(&req).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InsufficientCapacity {
                required: 45,
                available: 4
            }
        );
        assert_eq!(FixtureScheduler::new().capacity(&req), 4);
    }

    #[test]
    fn test_no_fields_has_no_capacity() {
        let req = ScheduleRequest::new(teams(&["A", "B"]), vec![], day(1), day(30));
        let err = FixtureScheduler::new().schedule(&req).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::InsufficientCapacity { required: 1, available: 0 }
        ));
    }

    #[test]
    fn test_inverted_window_has_no_capacity() {
        let req = ScheduleRequest::new(teams(&["A", "B"]), fields(1), day(5), day(1));
        assert!(matches!(
            FixtureScheduler::new().schedule(&req),
            Err(ScheduleError::InsufficientCapacity { available: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_input() {
        let req = ScheduleRequest::new(teams(&["A"]), fields(1), day(1), day(1));
        assert!(matches!(
            FixtureScheduler::new().schedule(&req),
            Err(ScheduleError::InvalidInput(_))
        ));

        let req = ScheduleRequest::new(teams(&["A", "A"]), fields(1), day(1), day(1));
        let err = FixtureScheduler::new().schedule(&req).unwrap_err();
        assert!(err.to_string().contains("duplicate team ID"));
    }

    #[test]
    fn test_invalid_config() {
        let config = SchedulerConfig::new().with_business_hours(
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        );
        let req = ScheduleRequest::new(teams(&["A", "B"]), fields(1), day(1), day(1));
        assert!(matches!(
            FixtureScheduler::new().with_config(config).schedule(&req),
            Err(ScheduleError::Config(_))
        ));
    }

    #[test]
    fn test_request_checked_before_config() {
        let config = SchedulerConfig::new().with_match_duration(0).with_break_duration(0);
        let req = ScheduleRequest::new(teams(&["A"]), fields(1), day(1), day(1));
        assert!(matches!(
            FixtureScheduler::new().with_config(config).schedule(&req),
            Err(ScheduleError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_custom_config() {
        let config = SchedulerConfig::new()
            .with_match_duration(50)
            .with_break_duration(10);
        let req = ScheduleRequest::new(teams(&["A", "B", "C", "D"]), fields(1), day(1), day(1));
        let r = FixtureScheduler::new()
            .with_config(config)
            .schedule(&req)
            .unwrap();
        // Nine one-hour slots: all six fixtures fit on one day.
        assert!(r.is_complete());
        assert_eq!(r.matches[5].kickoff(), at(1, 14, 0));
    }

    #[test]
    fn test_reuse_does_not_leak_blocks() {
        let scheduler = FixtureScheduler::new();
        let req = ScheduleRequest::new(teams(&["A", "B", "C"]), fields(1), day(1), day(1));
        let first = scheduler.schedule(&req).unwrap();
        let second = scheduler.schedule(&req).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.matches[0].kickoff(), at(1, 9, 0));
    }

    #[test]
    fn test_scheduler_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FixtureScheduler>();
    }
}
