//! Error types for weekcal.

use thiserror::Error;

/// Errors that can occur while turning a timetable into calendar events.
#[derive(Error, Debug)]
pub enum WeekcalError {
    /// A schedule block references a period code with no entry in the
    /// period time table. Fatal to the whole generation run: a missing
    /// time anchor would silently corrupt the schedule.
    #[error("Unknown period code: {0}")]
    UnknownPeriod(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for weekcal operations.
pub type WeekcalResult<T> = Result<T, WeekcalError>;
