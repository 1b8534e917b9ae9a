//! Half-open time intervals.
//!
//! # Time Model
//! Intervals are expressed in local calendar date-times (no time zone).
//! The consumer decides which zone the planning window lives in.
//!
//! # Overlap convention
//! `[start, end)` includes `start` and excludes `end`. Two intervals
//! overlap iff `a.start < b.end && b.start < a.end`, so back-to-back
//! intervals (`a.end == b.start`) do not overlap. Every availability
//! check in this crate goes through [`Interval::overlaps`].

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A time interval [start, end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
    /// Interval start (inclusive).
    pub start: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Creates an interval of `duration` starting at `start`.
    pub fn starting_at(start: NaiveDateTime, duration: Duration) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    /// Creates the interval starting on `day` at `time`.
    pub fn on_day(day: NaiveDate, time: NaiveTime, duration: Duration) -> Self {
        Self::starting_at(day.and_time(time), duration)
    }

    /// Creates an interval covering whole days `[first 00:00, last + 1 day 00:00)`.
    pub fn whole_days(first: NaiveDate, last: NaiveDate) -> Self {
        let start = first.and_time(NaiveTime::default());
        Self {
            start,
            end: last.and_time(NaiveTime::default()) + Duration::days(1),
        }
    }

    /// Length of the interval. Negative for inverted intervals.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether the interval contains no instant (`end <= start`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether a timestamp falls within this interval.
    #[inline]
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at < self.end
    }

    /// Whether `other` lies entirely within this interval.
    pub fn encloses(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Whether two intervals overlap (strict; touching does not count).
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}
