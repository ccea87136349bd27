//! Tests for deterministic task prioritization.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use salon_engine::{prioritize_tasks, Task, TaskPriority, Urgency};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 22, 8, 0, 0).unwrap()
}

fn task(id: &str, urgency: Urgency, technician: &str, deadline: DateTime<Utc>) -> Task {
    Task {
        task_id: id.to_string(),
        description: format!("task {id}"),
        urgency,
        technician_id: technician.to_string(),
        customer_preferences: String::new(),
        deadline,
    }
}

fn scores(ranked: &[TaskPriority]) -> Vec<(&str, f64)> {
    ranked
        .iter()
        .map(|t| (t.task_id.as_str(), t.priority_score))
        .collect()
}

#[test]
fn higher_urgency_outranks_lower() {
    // Same distant deadline, same (absent) availability: only urgency
    // separates the three.
    let far = now() + Duration::days(30);
    let tasks = vec![
        task("low", Urgency::Low, "tech-1", far),
        task("high", Urgency::High, "tech-1", far),
        task("medium", Urgency::Medium, "tech-1", far),
    ];

    let ranked = prioritize_tasks(&tasks, &BTreeMap::new(), now());

    let ids: Vec<&str> = ranked.iter().map(|t| t.task_id.as_str()).collect();
    assert_eq!(ids, vec!["high", "medium", "low"]);
}

#[test]
fn overdue_task_outranks_distant_deadline() {
    let tasks = vec![
        task("distant", Urgency::Medium, "tech-1", now() + Duration::days(30)),
        task("overdue", Urgency::Medium, "tech-1", now() - Duration::hours(2)),
    ];

    let ranked = prioritize_tasks(&tasks, &BTreeMap::new(), now());

    assert_eq!(ranked[0].task_id, "overdue");
    // Overdue adds 40 on top of the shared medium base.
    assert_eq!(
        ranked[0].priority_score - ranked[1].priority_score,
        40.0
    );
}

#[test]
fn open_slots_raise_the_score() {
    let far = now() + Duration::days(30);
    let tasks = vec![
        task("free-tech", Urgency::High, "tech-free", far),
        task("busy-tech", Urgency::High, "tech-busy", far),
    ];
    let mut availability = BTreeMap::new();
    availability.insert(
        "tech-free".to_string(),
        vec![
            now() + Duration::hours(1),
            now() + Duration::hours(2),
            now() + Duration::hours(3),
        ],
    );
    // tech-busy is absent from the map: zero open slots.

    let ranked = prioritize_tasks(&tasks, &availability, now());

    // +3 for three open slots vs -5 for none.
    assert_eq!(
        scores(&ranked),
        vec![("free-tech", 53.0), ("busy-tech", 45.0)]
    );
}

#[test]
fn availability_bonus_is_capped() {
    let far = now() + Duration::days(30);
    let tasks = vec![task("t", Urgency::Low, "tech-1", far)];
    let mut availability = BTreeMap::new();
    availability.insert(
        "tech-1".to_string(),
        (0..25).map(|i| now() + Duration::hours(i)).collect(),
    );

    let ranked = prioritize_tasks(&tasks, &availability, now());

    // 10 low urgency + 0 pressure + capped 10.
    assert_eq!(ranked[0].priority_score, 20.0);
}

#[test]
fn score_components_add_up() {
    let tasks = vec![task(
        "t",
        Urgency::High,
        "tech-1",
        now() + Duration::hours(12),
    )];
    let mut availability = BTreeMap::new();
    availability.insert(
        "tech-1".to_string(),
        vec![now() + Duration::hours(1), now() + Duration::hours(2)],
    );

    let ranked = prioritize_tasks(&tasks, &availability, now());

    // 50 high urgency + 30 due within 24h + 2 open slots.
    assert_eq!(ranked[0].priority_score, 82.0);
}

#[test]
fn equal_scores_break_ties_on_task_id() {
    let far = now() + Duration::days(30);
    let tasks = vec![
        task("beta", Urgency::Medium, "tech-1", far),
        task("alpha", Urgency::Medium, "tech-1", far),
    ];

    let ranked = prioritize_tasks(&tasks, &BTreeMap::new(), now());

    let ids: Vec<&str> = ranked.iter().map(|t| t.task_id.as_str()).collect();
    assert_eq!(ids, vec!["alpha", "beta"]);
}

#[test]
fn reason_names_the_components() {
    let tasks = vec![task(
        "t",
        Urgency::High,
        "tech-1",
        now() + Duration::hours(12),
    )];
    let mut availability = BTreeMap::new();
    availability.insert("tech-1".to_string(), vec![now() + Duration::hours(1)]);

    let ranked = prioritize_tasks(&tasks, &availability, now());

    assert!(ranked[0].reason.contains("high urgency"));
    assert!(ranked[0].reason.contains("due within 24 hours"));
    assert!(ranked[0].reason.contains("1 open slot(s)"));
}

#[test]
fn empty_task_list_yields_empty_ranking() {
    let ranked = prioritize_tasks(&[], &BTreeMap::new(), now());

    assert!(ranked.is_empty());
}
