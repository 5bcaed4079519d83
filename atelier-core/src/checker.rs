//! Deterministic core of the periodic notification check.
//!
//! The caller owns the timer (the CLI uses a tokio interval); each tick hands
//! in fresh tasks plus an explicit `today`, so tests drive the clock by hand.

use chrono::NaiveDate;

use crate::ledger::NotificationLedger;
use crate::notify::{BannerPayload, aggregate_notifications, banner_payload};
use crate::task::RepairTask;

pub struct NotificationChecker<L: NotificationLedger> {
    upcoming_window_days: i64,
    ledger: L,
}

impl<L: NotificationLedger> NotificationChecker<L> {
    pub fn new(upcoming_window_days: i64, ledger: L) -> Self {
        Self {
            upcoming_window_days,
            ledger,
        }
    }

    /// One poll cycle: aggregate, drop anything already surfaced, mark and
    /// return the rest as banner payloads (digest tier order preserved).
    pub fn tick(&mut self, tasks: &[RepairTask], today: NaiveDate) -> Vec<BannerPayload> {
        let digest = aggregate_notifications(tasks, today, self.upcoming_window_days);

        let mut fresh = Vec::new();
        for n in &digest.notifications {
            if self.ledger.already_sent(&n.task_id) {
                continue;
            }
            self.ledger.mark_sent(&n.task_id);
            fresh.push(banner_payload(n));
        }
        fresh
    }

    /// Hand the ledger back, e.g. for persisting after a tick.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn into_ledger(self) -> L {
        self.ledger
    }
}
