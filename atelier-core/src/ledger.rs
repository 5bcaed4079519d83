//! Dedup ledger for surfaced notifications.
//!
//! The aggregator is stateless; whoever delivers banners tracks which task
//! ids have already fired so a poll loop doesn't re-notify every tick. The
//! store is an injected trait so tests can swap in a fake and the CLI can
//! persist it.

use std::collections::HashSet;
use std::collections::VecDeque;

pub trait NotificationLedger {
    fn already_sent(&self, task_id: &str) -> bool;
    fn mark_sent(&mut self, task_id: &str);
}

pub const DEFAULT_LEDGER_CAP: usize = 100;

/// Bounded FIFO ledger: remembers the most recent `cap` task ids, evicting
/// oldest first. Persistence goes through `ids()`/`from_ids`, keeping the
/// stored form a plain id list.
#[derive(Debug, Clone)]
pub struct BoundedLedger {
    cap: usize,
    /// Insertion order, oldest first.
    ids: VecDeque<String>,
    seen: HashSet<String>,
}

impl Default for BoundedLedger {
    fn default() -> Self {
        Self::new(DEFAULT_LEDGER_CAP)
    }
}

impl BoundedLedger {
    pub fn new(cap: usize) -> Self {
        Self {
            cap: cap.max(1),
            ids: VecDeque::new(),
            seen: HashSet::new(),
        }
    }

    /// Rebuild from a persisted id list (oldest first), re-enforcing the cap.
    pub fn from_ids(cap: usize, ids: Vec<String>) -> Self {
        let mut ledger = Self::new(cap);
        for id in ids {
            ledger.mark_sent(&id);
        }
        ledger
    }

    /// Ids in insertion order, for persistence.
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl NotificationLedger for BoundedLedger {
    fn already_sent(&self, task_id: &str) -> bool {
        self.seen.contains(task_id)
    }

    fn mark_sent(&mut self, task_id: &str) {
        if self.seen.contains(task_id) {
            return;
        }
        if self.ids.len() == self.cap {
            if let Some(evicted) = self.ids.pop_front() {
                self.seen.remove(&evicted);
            }
        }
        self.ids.push_back(task_id.to_string());
        self.seen.insert(task_id.to_string());
    }
}
