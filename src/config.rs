//! Scheduler configuration.
//!
//! Controls the daily business window and the length of a slot.
//! A slot is one match plus the mandatory break that follows it.
//!
//! # File format
//!
//! ```toml
//! day_start = "09:00:00"
//! day_end = "18:00:00"
//! match_duration_min = 100
//! break_duration_min = 10
//! ```
//!
//! Missing keys take their default value.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, ScheduleError};

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// First possible kickoff of the day.
    #[serde(default = "default_day_start")]
    pub day_start: NaiveTime,
    /// Time by which every slot of the day must have ended.
    #[serde(default = "default_day_end")]
    pub day_end: NaiveTime,
    /// Playing time of one match (minutes).
    #[serde(default = "default_match_duration")]
    pub match_duration_min: u32,
    /// Break after each match before the field is reused (minutes).
    #[serde(default = "default_break_duration")]
    pub break_duration_min: u32,
}

/// Default first kickoff, 09:00.
pub const DEFAULT_DAY_START: NaiveTime = clock(9, 0);
/// Default end of the business day, 18:00.
pub const DEFAULT_DAY_END: NaiveTime = clock(18, 0);

// Evaluated at compile time: an out-of-range constant fails the build.
const fn clock(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(t) => t,
        None => panic!("invalid clock time"),
    }
}

fn default_day_start() -> NaiveTime {
    DEFAULT_DAY_START
}

fn default_day_end() -> NaiveTime {
    DEFAULT_DAY_END
}

fn default_match_duration() -> u32 {
    100
}

fn default_break_duration() -> u32 {
    10
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            day_start: default_day_start(),
            day_end: default_day_end(),
            match_duration_min: default_match_duration(),
            break_duration_min: default_break_duration(),
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration (09:00–18:00, 100 + 10 minutes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the business window.
    pub fn with_business_hours(mut self, day_start: NaiveTime, day_end: NaiveTime) -> Self {
        self.day_start = day_start;
        self.day_end = day_end;
        self
    }

    /// Sets the match duration (minutes).
    pub fn with_match_duration(mut self, minutes: u32) -> Self {
        self.match_duration_min = minutes;
        self
    }

    /// Sets the break duration (minutes).
    pub fn with_break_duration(mut self, minutes: u32) -> Self {
        self.break_duration_min = minutes;
        self
    }

    /// Slot length: match plus break.
    #[inline]
    pub fn slot_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.match_duration_min) + i64::from(self.break_duration_min))
    }

    /// Match length without the trailing break.
    #[inline]
    pub fn match_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.match_duration_min))
    }

    /// Checks that the configuration can produce a slot grid.
    pub fn validate(&self) -> Result<()> {
        if self.day_end <= self.day_start {
            return Err(ScheduleError::Config(format!(
                "day_end ({}) must be after day_start ({})",
                self.day_end, self.day_start
            )));
        }
        if self.slot_duration() <= Duration::zero() {
            return Err(ScheduleError::Config(
                "match and break durations must not both be zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SchedulerConfig = toml::from_str(content)
            .map_err(|e| ScheduleError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ScheduleError::Config(format!(
                "failed to read config file {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&content)
    }
}
