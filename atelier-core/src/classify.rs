//! Due-status classification for a single task.
//!
//! A task's governing date is the first usable field of
//! `due_date` -> `personal_due_date` -> `scheduled_date`. Note this chain is
//! NOT the one the board grouper uses; the two orders are independent on
//! purpose (a job is displayed under its workshop slot but alarms on its
//! promised-to-client date).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::{days_between, parse_calendar_date};
use crate::task::RepairTask;

/// Days ahead within which a task counts as "upcoming" rather than "normal".
pub const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    Overdue,
    Today,
    Upcoming,
    Normal,
}

impl DueStatus {
    /// Notification tier: lower surfaces first.
    pub fn tier(self) -> u8 {
        match self {
            DueStatus::Overdue => 0,
            DueStatus::Today => 1,
            DueStatus::Upcoming => 2,
            DueStatus::Normal => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueClassification {
    pub status: DueStatus,
    /// Calendar-day offset of the governing date from today; negative = past.
    pub days_offset: i64,
}

/// Governing date for classification, or `None` if no field in the chain
/// is present and parseable.
pub fn classification_date(task: &RepairTask) -> Option<NaiveDate> {
    [
        task.due_date.as_deref(),
        task.personal_due_date.as_deref(),
        task.scheduled_date.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find_map(parse_calendar_date)
}

/// Classify one task against `today`.
///
/// Pure: same (task, today, window) always gives the same answer. Tasks with
/// no usable date in the chain return `None` and produce no notification.
/// Closed (completed/cancelled) tasks always come back `Normal`, with the
/// real offset kept so "finished 2 days late" can still be rendered.
pub fn classify_task(
    task: &RepairTask,
    today: NaiveDate,
    upcoming_window_days: i64,
) -> Option<DueClassification> {
    let governing = classification_date(task)?;
    let days_offset = days_between(today, governing);

    if task.status.is_closed() {
        return Some(DueClassification {
            status: DueStatus::Normal,
            days_offset,
        });
    }

    let status = if days_offset < 0 {
        DueStatus::Overdue
    } else if days_offset == 0 {
        DueStatus::Today
    } else if days_offset <= upcoming_window_days {
        DueStatus::Upcoming
    } else {
        DueStatus::Normal
    };

    Some(DueClassification { status, days_offset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{TaskPriority, TaskStatus};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn overdue_two_days() {
        let t = RepairTask::new("a", "rehair").with_due("2024-01-17");
        let c = classify_task(&t, day("2024-01-19"), DEFAULT_UPCOMING_WINDOW_DAYS).unwrap();
        assert_eq!(c.status, DueStatus::Overdue);
        assert_eq!(c.days_offset, -2);
    }

    #[test]
    fn completed_is_always_normal() {
        let t = RepairTask::new("b", "rehair")
            .with_due("2024-01-17")
            .with_status(TaskStatus::Completed);
        let c = classify_task(&t, day("2024-01-19"), DEFAULT_UPCOMING_WINDOW_DAYS).unwrap();
        assert_eq!(c.status, DueStatus::Normal);
        assert_eq!(c.days_offset, -2);

        let t = t.with_status(TaskStatus::Cancelled);
        let c = classify_task(&t, day("2024-01-19"), DEFAULT_UPCOMING_WINDOW_DAYS).unwrap();
        assert_eq!(c.status, DueStatus::Normal);
    }

    #[test]
    fn due_today_and_upcoming_window() {
        let base = RepairTask::new("c", "setup");

        let c = classify_task(
            &base.clone().with_due("2024-01-19"),
            day("2024-01-19"),
            3,
        )
        .unwrap();
        assert_eq!(c.status, DueStatus::Today);
        assert_eq!(c.days_offset, 0);

        let c = classify_task(&base.clone().with_due("2024-01-22"), day("2024-01-19"), 3).unwrap();
        assert_eq!(c.status, DueStatus::Upcoming);
        assert_eq!(c.days_offset, 3);

        let c = classify_task(&base.clone().with_due("2024-01-23"), day("2024-01-19"), 3).unwrap();
        assert_eq!(c.status, DueStatus::Normal);

        // Window is caller-configurable.
        let c = classify_task(&base.with_due("2024-01-23"), day("2024-01-19"), 7).unwrap();
        assert_eq!(c.status, DueStatus::Upcoming);
    }

    #[test]
    fn governing_date_priority_chain() {
        // due_date wins over the rest.
        let t = RepairTask::new("d", "crack repair")
            .with_due("2024-01-17")
            .with_personal_due("2024-01-25")
            .with_scheduled("2024-01-29");
        let c = classify_task(&t, day("2024-01-19"), 3).unwrap();
        assert_eq!(c.status, DueStatus::Overdue);

        // Without due_date, personal_due_date governs.
        let t = RepairTask::new("e", "crack repair")
            .with_personal_due("2024-01-19")
            .with_scheduled("2024-01-29");
        let c = classify_task(&t, day("2024-01-19"), 3).unwrap();
        assert_eq!(c.status, DueStatus::Today);

        // received_date never participates in classification.
        let t = RepairTask::new("f", "crack repair").with_received("2024-01-01");
        assert!(classify_task(&t, day("2024-01-19"), 3).is_none());
    }

    #[test]
    fn malformed_due_falls_through_to_next_field() {
        let t = RepairTask::new("g", "rehair")
            .with_due("ASAP")
            .with_personal_due("2024-01-17");
        let c = classify_task(&t, day("2024-01-19"), 3).unwrap();
        assert_eq!(c.status, DueStatus::Overdue);
        assert_eq!(c.days_offset, -2);
    }

    #[test]
    fn no_usable_date_returns_none() {
        let t = RepairTask::new("h", "rehair").with_priority(TaskPriority::Urgent);
        assert!(classify_task(&t, day("2024-01-19"), 3).is_none());
    }

    #[test]
    fn timestamp_suffix_does_not_shift_the_day() {
        let t = RepairTask::new("i", "rehair").with_due("2024-01-19T00:00:00Z");
        let c = classify_task(&t, day("2024-01-19"), 3).unwrap();
        assert_eq!(c.status, DueStatus::Today);
    }
}
