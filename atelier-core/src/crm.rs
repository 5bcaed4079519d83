//! Shop CRM records: clients, instruments, their connections, sales and
//! contact logs. All backend-owned; the engine only interprets the follow-up
//! fields on `ContactLog`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::parse_calendar_date;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub id: String,
    /// "violin", "viola", "cello", "bow", ...
    pub kind: String,
    #[serde(default)]
    pub maker: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Client-instrument relationship. A client may play an instrument they do
/// not own, and an instrument passes between clients over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub client_id: String,
    pub instrument_id: String,
    /// "owner", "player", "borrower", ...
    pub relationship: String,
    #[serde(default)]
    pub since: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: String,
    pub client_id: String,
    pub item: String,
    pub amount: f64,
    /// Calendar date string, same format as task dates.
    pub sold_on: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLog {
    pub id: String,
    pub client_id: String,
    pub contacted_on: String,
    /// "phone", "email", "in_person", ...
    pub method: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub follow_up_required: bool,
    #[serde(default)]
    pub follow_up_date: Option<String>,
    #[serde(default)]
    pub follow_up_done: bool,
}

impl ContactLog {
    /// Parsed follow-up date, if one is set and well-formed.
    pub fn follow_up_on(&self) -> Option<NaiveDate> {
        self.follow_up_date
            .as_deref()
            .and_then(parse_calendar_date)
    }
}

/// Contact logs whose follow-up is open and due on or before `today`,
/// ordered by follow-up date then client id.
///
/// Logs flagged for follow-up but with a missing or malformed date are
/// skipped, same policy as dateless tasks on the board.
pub fn due_follow_ups<'a>(logs: &'a [ContactLog], today: NaiveDate) -> Vec<&'a ContactLog> {
    let mut due: Vec<(NaiveDate, &ContactLog)> = logs
        .iter()
        .filter(|l| l.follow_up_required && !l.follow_up_done)
        .filter_map(|l| l.follow_up_on().map(|d| (d, l)))
        .filter(|(d, _)| *d <= today)
        .collect();

    due.sort_by(|(da, la), (db, lb)| da.cmp(db).then_with(|| la.client_id.cmp(&lb.client_id)));
    due.into_iter().map(|(_, l)| l).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn log(id: &str, client: &str, date: Option<&str>, required: bool, done: bool) -> ContactLog {
        ContactLog {
            id: id.to_string(),
            client_id: client.to_string(),
            contacted_on: "2024-01-05".to_string(),
            method: "phone".to_string(),
            summary: None,
            follow_up_required: required,
            follow_up_date: date.map(str::to_string),
            follow_up_done: done,
        }
    }

    #[test]
    fn only_open_due_follow_ups() {
        let logs = vec![
            log("l1", "c1", Some("2024-01-15"), true, false),
            log("l2", "c2", Some("2024-01-19"), true, false),
            log("l3", "c3", Some("2024-01-25"), true, false), // future
            log("l4", "c4", Some("2024-01-10"), true, true),  // done
            log("l5", "c5", Some("2024-01-10"), false, false), // not required
            log("l6", "c6", None, true, false),               // no date
            log("l7", "c7", Some("whenever"), true, false),   // bad date
        ];
        let due = due_follow_ups(&logs, day("2024-01-19"));
        let ids: Vec<&str> = due.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["l1", "l2"]);
    }

    #[test]
    fn ordered_by_date_then_client() {
        let logs = vec![
            log("l1", "cb", Some("2024-01-10"), true, false),
            log("l2", "ca", Some("2024-01-10"), true, false),
            log("l3", "cz", Some("2024-01-02"), true, false),
        ];
        let due = due_follow_ups(&logs, day("2024-01-19"));
        let ids: Vec<&str> = due.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["l3", "l2", "l1"]);
    }

    #[test]
    fn contact_log_decodes_with_defaults() {
        let json = r#"{
            "id": "l1",
            "client_id": "c1",
            "contacted_on": "2024-01-05",
            "method": "email"
        }"#;
        let l: ContactLog = serde_json::from_str(json).unwrap();
        assert!(!l.follow_up_required);
        assert!(l.follow_up_on().is_none());
    }
}
