//! Error types for fixture scheduling.

/// Result type for scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors that abort a scheduling run.
///
/// Every variant is fatal to the call: no partial schedule is produced.
/// A schedule that places fewer matches than fixtures is *not* an error;
/// see [`ScheduleResult::is_complete`](crate::models::ScheduleResult::is_complete).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Malformed input (too few teams, duplicate identifiers).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// More fixtures than day × slot × field combinations in the window.
    #[error("insufficient capacity: {required} matches to play but only {available} slots available")]
    InsufficientCapacity {
        /// Number of fixtures generated.
        required: usize,
        /// Number of candidate slots in the planning window.
        available: usize,
    },

    /// Invalid scheduler configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
