//! Daily slot grid.
//!
//! A slot is a fixed-length candidate window (match plus break) inside
//! the business hours of a day. The grid holds the kickoff times of all
//! slots that finish by the end of the day.

use chrono::{Duration, NaiveTime};
use log::debug;

use crate::config::SchedulerConfig;

/// Generates slot kickoff times between `day_start` and `day_end`.
///
/// Slot `k` starts at `day_start + k * slot_duration` and is kept only if
/// it ends no later than `day_end`, so the grid has
/// `floor((day_end - day_start) / slot_duration)` entries. Returns an empty
/// grid when the window is empty or the duration is not positive.
pub fn generate_slots(
    day_start: NaiveTime,
    day_end: NaiveTime,
    slot_duration: Duration,
) -> Vec<NaiveTime> {
    let slot_secs = slot_duration.num_seconds();
    if slot_secs <= 0 || day_end <= day_start {
        return Vec::new();
    }

    let window_secs = (day_end - day_start).num_seconds();
    let count = window_secs / slot_secs;

    // The whole grid lies inside [day_start, day_end), so no slot wraps past midnight.
    (0..count)
        .map(|k| day_start + Duration::seconds(k * slot_secs))
        .collect()
}

/// The slot grid of one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    times: Vec<NaiveTime>,
    slot_duration: Duration,
}

impl SlotGrid {
    /// Builds the grid described by a configuration.
    pub fn from_config(config: &SchedulerConfig) -> Self {
        let slot_duration = config.slot_duration();
        let times = generate_slots(config.day_start, config.day_end, slot_duration);
        debug!(
            "slot grid {}-{} every {} min: {} slots",
            config.day_start,
            config.day_end,
            slot_duration.num_minutes(),
            times.len()
        );
        Self {
            times,
            slot_duration,
        }
    }

    /// Kickoff times, earliest first.
    pub fn times(&self) -> &[NaiveTime] {
        &self.times
    }

    /// Length of each slot.
    pub fn slot_duration(&self) -> Duration {
        self.slot_duration
    }

    /// Number of slots per day.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether no slot fits in a day.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
