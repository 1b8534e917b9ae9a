//! Input validation and schedule verification.
//!
//! [`validate_request`] checks structural integrity of a request before
//! scheduling. Detects:
//! - Fewer than two teams
//! - Duplicate team IDs
//! - Duplicate field IDs
//!
//! [`check_schedule`] verifies a produced schedule against the request it
//! answers. Detects:
//! - Two matches overlapping on one field
//! - A team playing two overlapping matches
//! - Matches outside the business hours or the planning window
//! - Matches overlapping a declared unavailability
//! - A fixture placed twice

use std::collections::HashSet;

use crate::config::SchedulerConfig;
use crate::models::{Match, ScheduleResult};
use crate::scheduler::ScheduleRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Fewer than two teams.
    TooFewTeams,
    /// Two teams share the same ID.
    DuplicateTeamId,
    /// Two fields share the same ID.
    DuplicateFieldId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A property a produced schedule fails to satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity ID (team, field, or match).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// Two matches overlap on the same field.
    FieldDoubleBooked,
    /// A team plays two overlapping matches.
    TeamDoubleBooked,
    /// A match starts before or ends after the business hours of its day.
    OutsideBusinessHours,
    /// A match falls on a day outside the planning window.
    OutsidePlanningWindow,
    /// A match overlaps a declared team or field unavailability.
    DeclaredConflict,
    /// The same fixture was placed more than once.
    DuplicateFixture,
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

/// Validates a scheduling request.
///
/// Checks:
/// 1. At least two teams
/// 2. No duplicate team IDs
/// 3. No duplicate field IDs
///
/// Declared unavailabilities referring to unknown teams or fields are
/// not errors; they simply never match anything.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &ScheduleRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.teams.len() < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewTeams,
            format!("at least 2 teams are required, got {}", request.teams.len()),
        ));
    }

    let mut team_ids = HashSet::new();
    for t in &request.teams {
        if !team_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTeamId,
                format!("duplicate team ID: {}", t.id),
            ));
        }
    }

    let mut field_ids = HashSet::new();
    for f in &request.fields {
        if !field_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateFieldId,
                format!("duplicate field ID: {}", f.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Verifies a schedule against the request and configuration that
/// produced it. Returns every violation found; empty means valid.
pub fn check_schedule(
    result: &ScheduleResult,
    request: &ScheduleRequest,
    config: &SchedulerConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for m in &result.matches {
        check_bounds(m, request, config, &mut violations);
        check_declared(m, request, &mut violations);
    }

    for (i, a) in result.matches.iter().enumerate() {
        for b in &result.matches[i + 1..] {
            if !a.interval.overlaps(&b.interval) {
                continue;
            }
            if a.field_id == b.field_id {
                violations.push(Violation::new(
                    ViolationType::FieldDoubleBooked,
                    &a.field_id,
                    format!("{} and {} overlap on field {}", a.id, b.id, a.field_id),
                ));
            }
            for team in a.fixture.teams() {
                if b.involves(team) {
                    violations.push(Violation::new(
                        ViolationType::TeamDoubleBooked,
                        team,
                        format!("team {team} plays both {} and {}", a.id, b.id),
                    ));
                }
            }
        }
    }

    let mut placed = HashSet::new();
    for m in &result.matches {
        if !placed.insert(&m.fixture) {
            violations.push(Violation::new(
                ViolationType::DuplicateFixture,
                m.id.to_string(),
                format!(
                    "fixture {} v {} (round {}) placed twice",
                    m.home(),
                    m.away(),
                    m.fixture.round
                ),
            ));
        }
    }

    violations
}

fn check_bounds(
    m: &Match,
    request: &ScheduleRequest,
    config: &SchedulerConfig,
    violations: &mut Vec<Violation>,
) {
    let day = m.date();
    if day < request.start_date || day > request.end_date {
        violations.push(Violation::new(
            ViolationType::OutsidePlanningWindow,
            m.id.to_string(),
            format!(
                "{} is on {day}, outside {} - {}",
                m.id, request.start_date, request.end_date
            ),
        ));
    }

    let opens = day.and_time(config.day_start);
    let closes = day.and_time(config.day_end);
    if m.interval.start < opens || m.interval.end > closes {
        violations.push(Violation::new(
            ViolationType::OutsideBusinessHours,
            m.id.to_string(),
            format!(
                "{} runs {} - {}, outside {} - {}",
                m.id, m.interval.start, m.interval.end, config.day_start, config.day_end
            ),
        ));
    }
}

fn check_declared(m: &Match, request: &ScheduleRequest, violations: &mut Vec<Violation>) {
    for u in &request.team_unavailabilities {
        if m.involves(&u.team_id) && u.interval.overlaps(&m.interval) {
            violations.push(Violation::new(
                ViolationType::DeclaredConflict,
                &u.team_id,
                format!("{} overlaps declared unavailability of team {}", m.id, u.team_id),
            ));
        }
    }
    for u in &request.field_unavailabilities {
        if m.field_id == u.field_id && u.interval.overlaps(&m.interval) {
            violations.push(Violation::new(
                ViolationType::DeclaredConflict,
                &u.field_id,
                format!("{} overlaps declared unavailability of field {}", m.id, u.field_id),
            ));
        }
    }
}
