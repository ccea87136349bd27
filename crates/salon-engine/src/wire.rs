//! JSON-facing request/response types.
//!
//! Field names follow the host application's camelCase contract. All
//! string-to-time parsing lives here; the domain types in [`crate::slots`]
//! only ever see parsed values.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, Result};
use crate::interval::BusyInterval;
use crate::prioritize::Task;
use crate::segment::CustomerRecord;
use crate::slots::{self, SlotRequest};

/// One existing appointment, as the booking UI sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentWindow {
    /// Start time in RFC 3339 format.
    pub start_time: String,
    /// End time in RFC 3339 format.
    pub end_time: String,
}

/// Slot-search request, mirroring the conceptual JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindSlotsRequest {
    pub technician_id: String,
    /// May be empty: a fully free technician is the common case.
    #[serde(default)]
    pub existing_appointments: Vec<AppointmentWindow>,
    /// Service duration in minutes.
    pub service_duration: i64,
    /// Either a bare `YYYY-MM-DD` date or a full RFC 3339 timestamp;
    /// only the date portion anchors the search.
    pub preferred_date: String,
}

/// Slot-search response: suggested start times as RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindSlotsResponse {
    pub suggested_slots: Vec<String>,
}

/// Task-prioritization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritizeRequest {
    pub tasks: Vec<Task>,
    /// Technician id → open slot start times.
    #[serde(default)]
    pub technician_availability: BTreeMap<String, Vec<DateTime<Utc>>>,
}

/// Customer-segmentation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRequest {
    pub customers: Vec<CustomerRecord>,
}

/// Parse an RFC 3339 timestamp, normalizing to UTC.
fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| EngineError::InvalidDate(raw.to_string()))
}

/// Parse a preferred date: a bare calendar date, or a full timestamp whose
/// date portion is taken.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] when the text is neither.
pub fn parse_preferred_date(raw: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    parse_instant(raw).map(|instant| instant.date_naive())
}

impl TryFrom<FindSlotsRequest> for SlotRequest {
    type Error = EngineError;

    fn try_from(request: FindSlotsRequest) -> Result<Self> {
        let busy_intervals = request
            .existing_appointments
            .iter()
            .map(|window| {
                Ok(BusyInterval {
                    start: parse_instant(&window.start_time)?,
                    end: parse_instant(&window.end_time)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SlotRequest {
            technician_id: request.technician_id,
            busy_intervals,
            service_duration_minutes: request.service_duration,
            preferred_date: parse_preferred_date(&request.preferred_date)?,
        })
    }
}

/// Run a slot search from a wire request and shape the wire response.
///
/// # Errors
///
/// Propagates [`EngineError::InvalidDate`] from timestamp parsing and the
/// validation errors of [`slots::find_slots`].
pub fn find_slots_response(request: FindSlotsRequest) -> Result<FindSlotsResponse> {
    let domain: SlotRequest = request.try_into()?;
    let slots = slots::find_slots(&domain)?;

    Ok(FindSlotsResponse {
        suggested_slots: slots
            .iter()
            .map(|slot| slot.to_rfc3339_opts(SecondsFormat::Secs, true))
            .collect(),
    })
}
