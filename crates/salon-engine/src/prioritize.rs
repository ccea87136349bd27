//! Rank open tasks by urgency, deadline pressure, and technician availability.
//!
//! Replaces the hosted-model prompt the booking UI used to call with a
//! deterministic additive rubric over the same contract: each task gets a
//! numeric score and a human-readable reason, ranked best-first.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Urgency level assigned to a task by the front office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    fn base_score(self) -> f64 {
        match self {
            Urgency::High => 50.0,
            Urgency::Medium => 30.0,
            Urgency::Low => 10.0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        }
    }
}

/// An open task awaiting scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier; also the deterministic sort tiebreak.
    pub task_id: String,
    pub description: String,
    pub urgency: Urgency,
    /// Technician the task is assigned to; scored against their open slots.
    pub technician_id: String,
    /// Free-form customer preferences or notes. Not scored.
    #[serde(default)]
    pub customer_preferences: String,
    /// Hard deadline for the task.
    pub deadline: DateTime<Utc>,
}

/// A scored task, ranked best-first in the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPriority {
    pub task_id: String,
    /// Higher is more urgent to schedule.
    pub priority_score: f64,
    /// The rubric components that produced the score, in plain words.
    pub reason: String,
}

/// Open-slot count contributes at most this much to a score.
const AVAILABILITY_BONUS_CAP: usize = 10;
/// Penalty applied when the assigned technician has no open slots at all.
const NO_AVAILABILITY_PENALTY: f64 = 5.0;

/// Score and rank tasks.
///
/// `availability` maps technician ids to their currently open slot start
/// times (as produced by the slot finder). `now` is the evaluation instant;
/// passing it in keeps results reproducible, since the engine never reads
/// the wall clock.
///
/// The rubric is additive:
/// - urgency: high 50, medium 30, low 10;
/// - deadline pressure relative to `now`: overdue +40, within 24h +30,
///   within 72h +20, within 7 days +10;
/// - one point per open slot for the assigned technician, capped at 10;
///   a technician with no open slots costs 5 points instead.
///
/// Output is sorted by descending score, then ascending task id, so equal
/// inputs always rank identically.
pub fn prioritize_tasks(
    tasks: &[Task],
    availability: &BTreeMap<String, Vec<DateTime<Utc>>>,
    now: DateTime<Utc>,
) -> Vec<TaskPriority> {
    let mut ranked: Vec<TaskPriority> = tasks
        .iter()
        .map(|task| score_task(task, availability, now))
        .collect();

    ranked.sort_by(|a, b| {
        b.priority_score
            .total_cmp(&a.priority_score)
            .then_with(|| a.task_id.cmp(&b.task_id))
    });
    ranked
}

fn score_task(
    task: &Task,
    availability: &BTreeMap<String, Vec<DateTime<Utc>>>,
    now: DateTime<Utc>,
) -> TaskPriority {
    let base = task.urgency.base_score();
    let (pressure, pressure_label) = deadline_pressure(task.deadline, now);

    let open_slots = availability
        .get(&task.technician_id)
        .map(|slots| slots.len())
        .unwrap_or(0);
    let availability_adjustment = if open_slots == 0 {
        -NO_AVAILABILITY_PENALTY
    } else {
        open_slots.min(AVAILABILITY_BONUS_CAP) as f64
    };

    let reason = format!(
        "{} urgency; {}; technician {} has {} open slot(s)",
        task.urgency.label(),
        pressure_label,
        task.technician_id,
        open_slots
    );

    TaskPriority {
        task_id: task.task_id.clone(),
        priority_score: base + pressure + availability_adjustment,
        reason,
    }
}

/// Deadline proximity component, banded by time remaining.
fn deadline_pressure(deadline: DateTime<Utc>, now: DateTime<Utc>) -> (f64, &'static str) {
    let remaining = deadline - now;
    if remaining <= Duration::zero() {
        (40.0, "deadline has passed")
    } else if remaining <= Duration::hours(24) {
        (30.0, "due within 24 hours")
    } else if remaining <= Duration::hours(72) {
        (20.0, "due within 72 hours")
    } else if remaining <= Duration::days(7) {
        (10.0, "due within a week")
    } else {
        (0.0, "no near-term deadline")
    }
}
