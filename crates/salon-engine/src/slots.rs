//! Candidate appointment start times for a technician.
//!
//! Scans the preferred day, then the day before, then the day after, probing
//! the working window at a fixed step. A candidate is accepted when the full
//! service interval clears every existing booking widened by the buffer.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::error::{EngineError, Result};
use crate::interval::{intervals_overlap, BusyInterval};

/// Scheduling policy: working window, buffer, probe step, and result cap.
///
/// [`SlotPolicy::default`] carries today's fixed business rules; a future
/// per-tenant configuration can construct its own values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPolicy {
    /// Opening of the working window, in minutes after midnight.
    pub work_day_start_minute: i64,
    /// Close of the working window, in minutes after midnight. No
    /// appointment may end after this instant.
    pub work_day_end_minute: i64,
    /// Mandatory idle gap before and after every existing booking.
    pub buffer_minutes: i64,
    /// Granularity at which candidate start times are probed.
    pub step_minutes: i64,
    /// Maximum number of candidates returned.
    pub max_results: usize,
}

impl Default for SlotPolicy {
    /// 09:00–17:00 working window, 15-minute buffer, 30-minute step, cap 5.
    fn default() -> Self {
        Self {
            work_day_start_minute: 9 * 60,
            work_day_end_minute: 17 * 60,
            buffer_minutes: 15,
            step_minutes: 30,
            max_results: 5,
        }
    }
}

/// Input aggregate for a slot search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRequest {
    /// Carried for traceability only; the engine does not look anything up
    /// by it. `busy_intervals` is assumed pre-filtered to this technician.
    pub technician_id: String,
    /// The technician's existing commitments. Order is irrelevant.
    pub busy_intervals: Vec<BusyInterval>,
    /// Requested service length in whole minutes. Must be positive.
    pub service_duration_minutes: i64,
    /// Calendar date anchoring the search; any time-of-day was stripped by
    /// the wire layer.
    pub preferred_date: NaiveDate,
}

/// Find bookable start times under the default policy.
///
/// See [`find_slots_with_policy`] for the search semantics.
pub fn find_slots(request: &SlotRequest) -> Result<Vec<DateTime<Utc>>> {
    find_slots_with_policy(request, &SlotPolicy::default())
}

/// Find bookable start times for one technician under an explicit policy.
///
/// Days are visited in a fixed order: the preferred date, the day before,
/// the day after. Preferring the earlier adjacent day is product policy,
/// not an accident of list construction. Within each day the working window
/// is probed from its opening instant in `step_minutes` increments; a
/// candidate is accepted when `[start, start + duration)` does not intersect
/// any busy interval widened by `buffer_minutes` on both ends. The search
/// stops as soon as `max_results` candidates are collected.
///
/// Fewer than `max_results` candidates, or none at all, is a valid result
/// meaning limited availability, not an error.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDuration`] if the duration is not positive,
/// and [`EngineError::InvalidInterval`] if any busy interval has
/// `end <= start`.
pub fn find_slots_with_policy(
    request: &SlotRequest,
    policy: &SlotPolicy,
) -> Result<Vec<DateTime<Utc>>> {
    if request.service_duration_minutes <= 0 {
        return Err(EngineError::InvalidDuration(request.service_duration_minutes));
    }
    for interval in &request.busy_intervals {
        interval.validate()?;
    }

    let duration = Duration::minutes(request.service_duration_minutes);
    let step = Duration::minutes(policy.step_minutes);

    // Widen every booking by the buffer once, up front. With no bookings
    // this is empty and the scan below degenerates to pure stepping.
    let buffered: Vec<(DateTime<Utc>, DateTime<Utc>)> = request
        .busy_intervals
        .iter()
        .map(|b| b.buffered(policy.buffer_minutes))
        .collect();

    // Fixed day-visit order: preferred, day before, day after.
    let days: Vec<NaiveDate> = [
        Some(request.preferred_date),
        request.preferred_date.pred_opt(),
        request.preferred_date.succ_opt(),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut slots = Vec::new();
    'days: for day in days {
        // Each scanned day gets its own working window.
        let midnight = day.and_time(NaiveTime::MIN).and_utc();
        let open = midnight + Duration::minutes(policy.work_day_start_minute);
        let close = midnight + Duration::minutes(policy.work_day_end_minute);

        let mut candidate = open;
        loop {
            let candidate_end = candidate + duration;
            if candidate_end > close {
                // No later start on this day can fit either.
                break;
            }

            let blocked = buffered.iter().any(|&(busy_start, busy_end)| {
                intervals_overlap(candidate, candidate_end, busy_start, busy_end)
            });

            if !blocked {
                slots.push(candidate);
                if slots.len() == policy.max_results {
                    break 'days;
                }
            }

            candidate += step;
        }
    }

    Ok(slots)
}
