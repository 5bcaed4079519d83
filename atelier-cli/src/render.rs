//! Terminal rendering for the board, digest and follow-up views.

use chrono::NaiveDate;

use atelier_core::{
    Client, Connection, ContactLog, DueStatus, NotificationDigest, SaleRecord, TaskGroup,
    classify_task,
};

fn offset_label(status: DueStatus, days_offset: i64) -> String {
    match status {
        DueStatus::Overdue => {
            let d = -days_offset;
            if d == 1 {
                "1 day overdue".to_string()
            } else {
                format!("{d} days overdue")
            }
        }
        DueStatus::Today => "due today".to_string(),
        DueStatus::Upcoming => {
            if days_offset == 1 {
                "due tomorrow".to_string()
            } else {
                format!("due in {days_offset} days")
            }
        }
        DueStatus::Normal => String::new(),
    }
}

pub fn print_board(groups: &[TaskGroup], today: NaiveDate, window: i64) {
    if groups.is_empty() {
        println!("No dated tasks on the board.");
        return;
    }

    for g in groups {
        let flag = if g.has_overdue { "  !! overdue" } else { "" };
        println!("{} ({} tasks){}", g.date_key(), g.len(), flag);

        for t in &g.tasks {
            let due = classify_task(t, today, window)
                .map(|c| offset_label(c.status, c.days_offset))
                .unwrap_or_default();
            let due = if due.is_empty() {
                String::new()
            } else {
                format!(" [{due}]")
            };
            println!(
                "  [{:?}] {} | {}{}",
                t.priority, t.task_type, t.title, due
            );
        }
        println!();
    }
}

pub fn print_digest(digest: &NotificationDigest) {
    let c = &digest.counts;
    println!(
        "Notifications: {} total ({} overdue, {} due today, {} upcoming)\n",
        c.total, c.overdue, c.today, c.upcoming
    );

    for n in &digest.notifications {
        println!(
            "  {} | {} ({}) | {}",
            n.task_id,
            n.title,
            n.task_type,
            offset_label(n.status, n.days_offset)
        );
    }
}

pub fn print_follow_ups(due: &[&ContactLog]) {
    if due.is_empty() {
        println!("No follow-ups due.");
        return;
    }
    println!("{} follow-ups due:\n", due.len());
    for l in due {
        println!(
            "  {} | client {} | via {} | {}",
            l.follow_up_date.as_deref().unwrap_or("-"),
            l.client_id,
            l.method,
            l.summary.as_deref().unwrap_or("(no summary)")
        );
    }
}

pub fn print_clients(clients: &[Client], connections: &[Connection], sales: &[SaleRecord]) {
    for c in clients {
        println!("{} | {}", c.id, c.name);

        let owned: Vec<&Connection> = connections
            .iter()
            .filter(|con| con.client_id == c.id)
            .collect();
        for con in owned {
            println!("    {} of instrument {}", con.relationship, con.instrument_id);
        }

        // Most recent sale by calendar date; ties broken by record order.
        let last_sale = sales
            .iter()
            .filter(|s| s.client_id == c.id)
            .max_by_key(|s| atelier_core::parse_calendar_date(&s.sold_on));
        if let Some(s) = last_sale {
            println!("    last sale: {} (${:.2}) on {}", s.item, s.amount, s.sold_on);
        }
    }
}
