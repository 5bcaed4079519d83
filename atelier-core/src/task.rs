//! Repair task model: the record the board, classifier and notifier all read.
//!
//! Tasks are owned by the shop backend; this engine consumes them read-only.
//! Date fields arrive as raw strings (`YYYY-MM-DD`, sometimes with a time
//! suffix appended by the backend) and are normalized lazily in `dates`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    /// Completed and cancelled tasks never alarm, whatever their dates say.
    pub fn is_closed(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    /// Board sort rank: urgent=4 down to low=1.
    pub fn rank(self) -> u8 {
        match self {
            TaskPriority::Urgent => 4,
            TaskPriority::High => 3,
            TaskPriority::Medium => 2,
            TaskPriority::Low => 1,
        }
    }
}

/// A repair/rehair job as stored by the backend.
///
/// Wire field names are fixed by the backend schema; do not rename them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairTask {
    pub id: String,
    pub title: String,

    /// Job kind, e.g. "rehair", "crack repair", "setup".
    pub task_type: String,

    pub status: TaskStatus,
    pub priority: TaskPriority,

    /// Raw calendar-date strings; any may be absent or malformed.
    pub received_date: Option<String>,
    pub scheduled_date: Option<String>,
    pub personal_due_date: Option<String>,
    pub due_date: Option<String>,

    // Opaque payload: carried through, never interpreted by the engine.
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub instrument_id: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RepairTask {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            task_type: "repair".to_string(),
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            received_date: None,
            scheduled_date: None,
            personal_due_date: None,
            due_date: None,
            client_id: None,
            instrument_id: None,
            cost: None,
            hours: None,
            notes: None,
        }
    }

    pub fn with_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = task_type.into();
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_received(mut self, date: impl Into<String>) -> Self {
        self.received_date = Some(date.into());
        self
    }

    pub fn with_scheduled(mut self, date: impl Into<String>) -> Self {
        self.scheduled_date = Some(date.into());
        self
    }

    pub fn with_personal_due(mut self, date: impl Into<String>) -> Self {
        self.personal_due_date = Some(date.into());
        self
    }

    pub fn with_due(mut self, date: impl Into<String>) -> Self {
        self.due_date = Some(date.into());
        self
    }
}
