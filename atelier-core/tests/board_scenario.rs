//! End-to-end walk through a realistic shop day: grouping, classification and
//! the notification digest computed from the same task list must agree.

use chrono::NaiveDate;

use atelier_core::{
    DueStatus, RepairTask, TaskPriority, TaskStatus, aggregate_notifications, classify_task,
    group_tasks, top_notification,
};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn shop_day() -> (NaiveDate, Vec<RepairTask>) {
    let today = day("2024-01-19");
    let tasks = vec![
        // Promised two days ago, still open.
        RepairTask::new("t-alder", "Rehair Alder bow")
            .with_type("rehair")
            .with_priority(TaskPriority::High)
            .with_due("2024-01-17"),
        // Same deadline, but the work is done.
        RepairTask::new("t-baker", "Rehair Baker bow")
            .with_type("rehair")
            .with_due("2024-01-17")
            .with_status(TaskStatus::Completed),
        // On the bench next week, promised two days ago.
        RepairTask::new("t-cole", "Cole cello crack")
            .with_type("crack repair")
            .with_priority(TaskPriority::Urgent)
            .with_scheduled("2024-01-29")
            .with_due("2024-01-17"),
        // Walk-in with no dates at all.
        RepairTask::new("t-drift", "Drifter estimate"),
        // Due this morning.
        RepairTask::new("t-enns", "Enns viola setup")
            .with_type("setup")
            .with_due("2024-01-19"),
    ];
    (today, tasks)
}

#[test]
fn classification_follows_promised_dates() {
    let (today, tasks) = shop_day();
    let window = 3;

    let a = classify_task(&tasks[0], today, window).unwrap();
    assert_eq!(a.status, DueStatus::Overdue);
    assert_eq!(a.days_offset, -2);

    let b = classify_task(&tasks[1], today, window).unwrap();
    assert_eq!(b.status, DueStatus::Normal);
    assert_eq!(b.days_offset, -2);

    let c = classify_task(&tasks[2], today, window).unwrap();
    assert_eq!(c.status, DueStatus::Overdue);

    assert!(classify_task(&tasks[3], today, window).is_none());
}

#[test]
fn board_and_classifier_use_independent_date_chains() {
    let (today, tasks) = shop_day();
    let groups = group_tasks(&tasks, today, 3);

    // The Cole cello groups under its bench slot, ten days out, not under
    // the promised date it is overdue on.
    let cole_group = groups
        .iter()
        .find(|g| g.tasks.iter().any(|t| t.id == "t-cole"))
        .unwrap();
    assert_eq!(cole_group.date_key(), "2024-01-29");
    assert!(cole_group.has_overdue);

    // The dateless walk-in appears nowhere.
    for g in &groups {
        assert!(g.tasks.iter().all(|t| t.id != "t-drift"));
    }

    // Both 01-17 (overdue rehair) and 01-29 (overdue cello) lead the board
    // ascending; the clean 01-19 setup group trails.
    let keys: Vec<String> = groups.iter().map(|g| g.date_key()).collect();
    assert_eq!(keys, ["2024-01-17", "2024-01-29", "2024-01-19"]);
}

#[test]
fn digest_agrees_with_the_board() {
    let (today, tasks) = shop_day();
    let digest = aggregate_notifications(&tasks, today, 3);

    assert_eq!(digest.counts.overdue, 2);
    assert_eq!(digest.counts.today, 1);
    assert_eq!(digest.counts.upcoming, 0);
    assert_eq!(digest.counts.total, 3);

    let ids: Vec<&str> = digest
        .notifications
        .iter()
        .map(|n| n.task_id.as_str())
        .collect();
    assert_eq!(ids, ["t-alder", "t-cole", "t-enns"]);

    // Both overdue entries sit at -2; the lexicographically smaller id wins.
    assert_eq!(top_notification(&digest).unwrap().task_id, "t-alder");
}

#[test]
fn results_are_stable_across_recomputation() {
    let (today, tasks) = shop_day();
    assert_eq!(
        group_tasks(&tasks, today, 3),
        group_tasks(&tasks, today, 3)
    );
    assert_eq!(
        aggregate_notifications(&tasks, today, 3),
        aggregate_notifications(&tasks, today, 3)
    );
}
