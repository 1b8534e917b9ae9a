//! Fixture scheduling domain models.
//!
//! Provides the value types consumed and produced by the engine. The
//! engine only reads and returns these values; persistence and identity
//! assignment belong to the caller.
//!
//! # Domain Mappings
//!
//! | u-fixture | Competition service | Scheduling theory |
//! |-----------|---------------------|-------------------|
//! | Team | Participant / Club | Job owner |
//! | Field | Pitch / Court | Machine |
//! | Fixture | Pairing | Job |
//! | Match | Scheduled game | Assignment |
//! | Unavailability | Blackout / Booking | Blocked period |

mod fixture;
mod interval;
mod participant;
mod schedule;
mod unavailability;

pub use fixture::{Fixture, Leg};
pub use interval::Interval;
pub use participant::{Field, Team};
pub use schedule::{FixtureOutcome, Match, MatchId, ScheduleResult};
pub use unavailability::{BlockSource, FieldUnavailability, TeamUnavailability};
