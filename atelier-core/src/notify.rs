//! Notification digest: counts, ordered alert list, banner payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::{DueStatus, classify_task};
use crate::task::RepairTask;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueCounts {
    pub overdue: usize,
    pub today: usize,
    pub upcoming: usize,
    /// overdue + today + upcoming; normal tasks are never counted.
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueNotification {
    pub task_id: String,
    pub title: String,
    pub task_type: String,
    pub status: DueStatus,
    pub days_offset: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationDigest {
    pub counts: DueCounts,
    /// All overdue entries, then all today, then all upcoming; stable in
    /// input order within each tier.
    pub notifications: Vec<DueNotification>,
}

/// What the platform notification surface receives for one task.
///
/// `tag` is the task id: platforms replace a banner bearing the same tag, so
/// re-surfacing the same task never stacks duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerPayload {
    pub title: String,
    pub body: String,
    pub tag: String,
    pub on_click_url: String,
}

/// Classify every task and fold the alarming ones into a digest.
///
/// Stateless and deterministic; dedup against previously surfaced banners is
/// the caller's job (see `ledger`).
pub fn aggregate_notifications(
    tasks: &[RepairTask],
    today: NaiveDate,
    upcoming_window_days: i64,
) -> NotificationDigest {
    let mut counts = DueCounts::default();
    let mut tiers: [Vec<DueNotification>; 3] = Default::default();

    for task in tasks {
        let Some(c) = classify_task(task, today, upcoming_window_days) else {
            continue;
        };
        let slot = match c.status {
            DueStatus::Overdue => {
                counts.overdue += 1;
                0
            }
            DueStatus::Today => {
                counts.today += 1;
                1
            }
            DueStatus::Upcoming => {
                counts.upcoming += 1;
                2
            }
            DueStatus::Normal => continue,
        };
        tiers[slot].push(DueNotification {
            task_id: task.id.clone(),
            title: task.title.clone(),
            task_type: task.task_type.clone(),
            status: c.status,
            days_offset: c.days_offset,
        });
    }

    counts.total = counts.overdue + counts.today + counts.upcoming;
    let [overdue, today_tier, upcoming] = tiers;
    let mut notifications = overdue;
    notifications.extend(today_tier);
    notifications.extend(upcoming);

    NotificationDigest {
        counts,
        notifications,
    }
}

/// The single notification worth a summary banner, if any.
///
/// Total order: tier (overdue < today < upcoming), then |days_offset|, then
/// task id. Repeated calls on identical input pick the same entry.
pub fn top_notification(digest: &NotificationDigest) -> Option<&DueNotification> {
    digest.notifications.iter().min_by(|a, b| {
        a.status
            .tier()
            .cmp(&b.status.tier())
            .then_with(|| a.days_offset.abs().cmp(&b.days_offset.abs()))
            .then_with(|| a.task_id.cmp(&b.task_id))
    })
}

/// Render one notification as a platform banner payload.
pub fn banner_payload(n: &DueNotification) -> BannerPayload {
    let body = match n.status {
        DueStatus::Overdue => {
            let days = -n.days_offset;
            if days == 1 {
                format!("{} ({}) is 1 day overdue", n.title, n.task_type)
            } else {
                format!("{} ({}) is {} days overdue", n.title, n.task_type, days)
            }
        }
        DueStatus::Today => format!("{} ({}) is due today", n.title, n.task_type),
        DueStatus::Upcoming => {
            if n.days_offset == 1 {
                format!("{} ({}) is due tomorrow", n.title, n.task_type)
            } else {
                format!("{} ({}) is due in {} days", n.title, n.task_type, n.days_offset)
            }
        }
        DueStatus::Normal => format!("{} ({})", n.title, n.task_type),
    };

    BannerPayload {
        title: match n.status {
            DueStatus::Overdue => "Overdue repair".to_string(),
            DueStatus::Today => "Due today".to_string(),
            _ => "Coming up".to_string(),
        },
        body,
        tag: n.task_id.clone(),
        on_click_url: format!("/tasks/{}", n.task_id),
    }
}
