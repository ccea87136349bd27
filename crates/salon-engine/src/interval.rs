//! Busy intervals and the overlap predicate.
//!
//! All interval comparisons in the engine are half-open: an interval covers
//! `[start, end)`. Boundary-touching intervals do NOT overlap, so a candidate
//! appointment may start exactly when a buffered busy window ends, and vice
//! versa.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// One existing commitment on a technician's calendar.
///
/// Supplied fresh by the caller on each query; the engine never mutates or
/// retains it. `end` must be strictly after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    /// Start of the commitment.
    pub start: DateTime<Utc>,
    /// End of the commitment, exclusive.
    pub end: DateTime<Utc>,
}

impl BusyInterval {
    /// Reject malformed intervals (`end <= start`).
    pub fn validate(&self) -> Result<()> {
        if self.end <= self.start {
            return Err(EngineError::InvalidInterval {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// The interval widened by `buffer_minutes` on both ends.
    ///
    /// This is the window no new appointment may touch: the mandatory idle
    /// gap before and after every existing booking.
    pub fn buffered(&self, buffer_minutes: i64) -> (DateTime<Utc>, DateTime<Utc>) {
        let buffer = Duration::minutes(buffer_minutes);
        (self.start - buffer, self.end + buffer)
    }
}

/// Half-open interval overlap: `[a_start, a_end)` intersects `[b_start, b_end)`.
///
/// Two intervals overlap iff `a_start < b_end && b_start < a_end`. This
/// excludes the adjacent case where one interval ends exactly when the other
/// starts. Off-by-one here would either lose availability (false conflicts)
/// or double-book (missed conflicts), so the rule lives in one place.
pub fn intervals_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}
