//! Round-robin fixture scheduling for the U-Engine ecosystem.
//!
//! Assigns round-robin fixtures to concrete (date, time, field) slots
//! inside a planning window, honouring per-team and per-field
//! unavailability.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Team`, `Field`, `Fixture`, `Match`,
//!   `Interval`, `TeamUnavailability`, `FieldUnavailability`, `ScheduleResult`
//! - **`pairing`**: Circle-method pairing sequence
//! - **`slots`**: Daily slot grid
//! - **`availability`**: Declared and auto-generated blocking per run
//! - **`scheduler`**: Greedy placement engine and request type
//! - **`validation`**: Request checks and schedule verification
//! - **`config`**: Business hours and slot length, loadable from TOML
//!
//! # Architecture
//!
//! The engine is a pure function of its request and configuration: no
//! I/O, no shared mutable state. Persistence of teams, fields, and the
//! returned matches belongs to the calling competition service.
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in Sports"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod availability;
pub mod config;
pub mod error;
pub mod models;
pub mod pairing;
pub mod scheduler;
pub mod slots;
pub mod validation;

pub use config::SchedulerConfig;
pub use error::{Result, ScheduleError};
pub use scheduler::{CompetitionFormat, FixtureScheduler, ScheduleRequest};
