//! atelier-core: rule engine and record types for the Atelier shop desk.
//!
//! Everything here is pure and synchronous: the engine is recomputed from
//! (tasks, today) on every call and owns no clock, no I/O and no state
//! except the caller-injected notification ledger.

pub mod checker;
pub mod classify;
pub mod crm;
pub mod dates;
pub mod grouping;
pub mod ledger;
pub mod notify;
pub mod task;

pub use checker::NotificationChecker;
pub use classify::{
    DEFAULT_UPCOMING_WINDOW_DAYS, DueClassification, DueStatus, classification_date, classify_task,
};
pub use crm::{Client, Connection, ContactLog, Instrument, SaleRecord, due_follow_ups};
pub use dates::{date_key, days_between, parse_calendar_date, today_in};
pub use grouping::{TaskGroup, group_tasks, grouping_date};
pub use ledger::{BoundedLedger, DEFAULT_LEDGER_CAP, NotificationLedger};
pub use notify::{
    BannerPayload, DueCounts, DueNotification, NotificationDigest, aggregate_notifications,
    banner_payload, top_notification,
};
pub use task::{RepairTask, TaskPriority, TaskStatus};
