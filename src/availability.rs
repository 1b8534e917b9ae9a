//! Team and field availability.
//!
//! Availability is decided from two sources:
//! - declared unavailability supplied by the caller,
//! - auto-blocks registered by the engine as it places matches.
//!
//! A subject is free over an interval iff no entry from either source
//! overlaps it ([`Interval::overlaps`], half-open, touching is free).
//!
//! An [`AvailabilityChecker`] lives for exactly one scheduling run. It is
//! built from the request, mutated only by that run, and dropped when the
//! run returns, so auto-blocks never leak between runs.

use std::collections::HashMap;

use log::warn;

use crate::models::{FieldUnavailability, Interval, MatchId, TeamUnavailability};

/// Blocking intervals per subject ID.
#[derive(Debug, Clone, Default)]
struct BlockMap {
    declared: HashMap<String, Vec<Interval>>,
    auto: HashMap<String, Vec<Interval>>,
}

impl BlockMap {
    fn declare(&mut self, id: &str, interval: Interval) {
        self.declared.entry(id.to_string()).or_default().push(interval);
    }

    fn block(&mut self, id: &str, interval: Interval) {
        self.auto.entry(id.to_string()).or_default().push(interval);
    }

    fn is_free(&self, id: &str, interval: &Interval) -> bool {
        let declared = self.declared.get(id).map(Vec::as_slice).unwrap_or(&[]);
        let auto = self.auto.get(id).map(Vec::as_slice).unwrap_or(&[]);
        !declared
            .iter()
            .chain(auto.iter())
            .any(|b| b.overlaps(interval))
    }

    fn auto_count(&self) -> usize {
        self.auto.values().map(Vec::len).sum()
    }
}

/// Run-scoped availability state for teams and fields.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityChecker {
    teams: BlockMap,
    fields: BlockMap,
}

impl AvailabilityChecker {
    /// Creates a checker with no blocking entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a checker seeded with declared unavailability.
    ///
    /// Records for teams or fields that never appear in the run are kept
    /// but have no effect. Empty or inverted intervals are logged but still
    /// take part in overlap checks.
    pub fn from_declared(
        team_unavailabilities: &[TeamUnavailability],
        field_unavailabilities: &[FieldUnavailability],
    ) -> Self {
        let mut checker = Self::new();
        for u in team_unavailabilities {
            if u.interval.is_empty() {
                warn!(
                    "declared unavailability for team {} is empty ({} -> {})",
                    u.team_id, u.interval.start, u.interval.end
                );
            }
            checker.teams.declare(&u.team_id, u.interval);
        }
        for u in field_unavailabilities {
            if u.interval.is_empty() {
                warn!(
                    "declared unavailability for field {} is empty ({} -> {})",
                    u.field_id, u.interval.start, u.interval.end
                );
            }
            checker.fields.declare(&u.field_id, u.interval);
        }
        checker
    }

    /// Whether the team is free over `interval`.
    pub fn is_team_free(&self, team_id: &str, interval: &Interval) -> bool {
        self.teams.is_free(team_id, interval)
    }

    /// Whether the field is free over `interval`.
    pub fn is_field_free(&self, field_id: &str, interval: &Interval) -> bool {
        self.fields.is_free(field_id, interval)
    }

    /// Registers an auto-block for a team and returns the matching record.
    pub fn block_team(
        &mut self,
        team_id: &str,
        interval: Interval,
        cause: MatchId,
    ) -> TeamUnavailability {
        self.teams.block(team_id, interval);
        TeamUnavailability::for_match(team_id, interval, cause)
    }

    /// Registers an auto-block for a field and returns the matching record.
    pub fn block_field(
        &mut self,
        field_id: &str,
        interval: Interval,
        cause: MatchId,
    ) -> FieldUnavailability {
        self.fields.block(field_id, interval);
        FieldUnavailability::for_match(field_id, interval, cause)
    }

    /// Number of auto-blocks registered so far (teams and fields).
    pub fn auto_block_count(&self) -> usize {
        self.teams.auto_count() + self.fields.auto_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlockSource;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn slot(h: u32, m: u32) -> Interval {
        Interval::starting_at(at(h, m), chrono::Duration::minutes(110))
    }

    #[test]
    fn test_empty_checker_is_free() {
        let c = AvailabilityChecker::new();
        assert!(c.is_team_free("A", &slot(9, 0)));
        assert!(c.is_field_free("F1", &slot(9, 0)));
        assert_eq!(c.auto_block_count(), 0);
    }

    #[test]
    fn test_declared_team_block() {
        let declared = vec![TeamUnavailability::declared("B", at(14, 30), at(15, 30))];
        let c = AvailabilityChecker::from_declared(&declared, &[]);

        assert!(!c.is_team_free("B", &slot(14, 30)));
        assert!(!c.is_team_free("B", &slot(13, 0)));
        assert!(c.is_team_free("B", &slot(12, 40))); // ends at 14:30
        assert!(c.is_team_free("A", &slot(14, 30)));
    }

    #[test]
    fn test_touching_is_free() {
        let declared = vec![TeamUnavailability::declared("B", at(9, 0), at(10, 50))];
        let c = AvailabilityChecker::from_declared(&declared, &[]);
        assert!(!c.is_team_free("B", &slot(9, 0)));
        assert!(c.is_team_free("B", &slot(10, 50)));
    }

    #[test]
    fn test_declared_field_block() {
        let declared = vec![FieldUnavailability::declared("F1", at(0, 0), at(23, 59))];
        let c = AvailabilityChecker::from_declared(&[], &declared);
        assert!(!c.is_field_free("F1", &slot(9, 0)));
        assert!(c.is_field_free("F2", &slot(9, 0)));
    }

    #[test]
    fn test_inverted_declared_interval_still_checked() {
        // [12:00, 11:00) satisfies the overlap test against [10:50, 12:40).
        let declared = vec![TeamUnavailability::declared("A", at(12, 0), at(11, 0))];
        let c = AvailabilityChecker::from_declared(&declared, &[]);
        assert!(!c.is_team_free("A", &slot(10, 50)));
        assert!(c.is_team_free("A", &slot(14, 30)));
    }

    #[test]
    fn test_unknown_subject_is_inert() {
        let declared = vec![FieldUnavailability::declared("ghost", at(0, 0), at(23, 0))];
        let c = AvailabilityChecker::from_declared(&[], &declared);
        assert!(c.is_field_free("F1", &slot(9, 0)));
    }

    #[test]
    fn test_auto_blocks_visible_immediately() {
        let mut c = AvailabilityChecker::new();
        let s = slot(9, 0);

        let t = c.block_team("A", s, MatchId(0));
        assert_eq!(t.source, BlockSource::Match(MatchId(0)));
        assert_eq!(t.interval, s);
        assert!(!c.is_team_free("A", &s));
        assert!(c.is_team_free("B", &s));
        assert!(c.is_team_free("A", &slot(10, 50)));

        let f = c.block_field("F1", s, MatchId(0));
        assert_eq!(f.field_id, "F1");
        assert!(!c.is_field_free("F1", &s));
        assert_eq!(c.auto_block_count(), 2);
    }

    #[test]
    fn test_team_and_field_namespaces_are_separate() {
        let mut c = AvailabilityChecker::new();
        c.block_team("X", slot(9, 0), MatchId(0));
        assert!(c.is_field_free("X", &slot(9, 0)));
    }
}
