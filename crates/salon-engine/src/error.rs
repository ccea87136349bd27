//! Error types for engine operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors surfaced by the engine. All of them are input-validation
/// failures detected synchronously; nothing is retried internally.
///
/// An empty slot-search result is NOT an error; it signals limited or no
/// availability and is returned as an empty list.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The requested service duration is zero or negative.
    #[error("Invalid service duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),

    /// A date or timestamp string did not parse. Carries the offending text.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A supplied busy interval has `end <= start`. Rejected rather than
    /// skipped: silently ignoring bad data could mask a scheduling conflict.
    #[error("Invalid busy interval: end {end} is not after start {start}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Convenience alias used throughout salon-engine.
pub type Result<T> = std::result::Result<T, EngineError>;
