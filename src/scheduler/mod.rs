//! Greedy fixture scheduler.
//!
//! Turns a round-robin request into dated matches on fields.
//!
//! # Algorithm
//!
//! `FixtureScheduler` walks days × slots × fields in order and places the
//! next fixture of the circle-method sequence wherever its field and both
//! teams are free. It is a non-backtracking greedy heuristic: fast and
//! deterministic, but it can leave fixtures unplaced when unavailability
//! blocks the head of the sequence.
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in Sports"
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

mod placement;
mod request;

pub use placement::FixtureScheduler;
pub use request::{CompetitionFormat, ScheduleRequest};
