//! Date-grouped task board.
//!
//! Board placement uses its own field chain, distinct from the classifier's:
//! `scheduled_date` -> `due_date` -> `personal_due_date` -> `received_date`.
//! A job scheduled for next week but promised yesterday sits in next week's
//! group and still flags overdue; the two views must never be conflated.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::{DueStatus, classify_task};
use crate::dates::{date_key, parse_calendar_date};
use crate::task::RepairTask;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskGroup {
    pub date: NaiveDate,
    /// Whether any member classifies overdue as of the grouping call's `today`.
    /// Computed per task; a future-dated group can still carry overdue work.
    pub has_overdue: bool,
    pub tasks: Vec<RepairTask>,
}

impl TaskGroup {
    /// Canonical `YYYY-MM-DD` key for rendering and lookups.
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Board grouping date for one task, or `None` if no field in the chain
/// yields a parseable date (such tasks are dropped from the board).
pub fn grouping_date(task: &RepairTask) -> Option<NaiveDate> {
    [
        task.scheduled_date.as_deref(),
        task.due_date.as_deref(),
        task.personal_due_date.as_deref(),
        task.received_date.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find_map(parse_calendar_date)
}

/// Bucket tasks into ordered date groups.
///
/// Within a group: priority rank descending, ties broken by task_type
/// ascending. Group order: overdue-carrying groups first, then ascending
/// date within each tier.
pub fn group_tasks(
    tasks: &[RepairTask],
    today: NaiveDate,
    upcoming_window_days: i64,
) -> Vec<TaskGroup> {
    let mut buckets: BTreeMap<NaiveDate, Vec<RepairTask>> = BTreeMap::new();
    for task in tasks {
        if let Some(date) = grouping_date(task) {
            buckets.entry(date).or_default().push(task.clone());
        }
    }

    let mut groups: Vec<TaskGroup> = buckets
        .into_iter()
        .map(|(date, mut members)| {
            members.sort_by(|a, b| {
                b.priority
                    .rank()
                    .cmp(&a.priority.rank())
                    .then_with(|| a.task_type.cmp(&b.task_type))
            });
            let has_overdue = members.iter().any(|t| {
                classify_task(t, today, upcoming_window_days)
                    .is_some_and(|c| c.status == DueStatus::Overdue)
            });
            TaskGroup {
                date,
                has_overdue,
                tasks: members,
            }
        })
        .collect();

    // BTreeMap already yields ascending dates; a stable sort on the overdue
    // flag keeps that order within each tier.
    groups.sort_by_key(|g| !g.has_overdue);
    groups
}
