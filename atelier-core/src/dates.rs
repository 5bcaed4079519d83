//! Calendar-day normalization.
//!
//! The backend stores dates as strings: sometimes bare `YYYY-MM-DD`, sometimes
//! with a time or zone suffix tacked on (`2024-01-19T00:00:00Z`). Everything
//! here works on the date portion only, as a `NaiveDate`, so a task due
//! "2024-01-19" is due on the 19th for every user regardless of timezone.
//! Parsing the full string as UTC and converting back is exactly the bug this
//! module exists to prevent.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Parse the calendar-day portion of a raw date string.
///
/// Accepts `YYYY-MM-DD` optionally followed by anything (time, zone offset);
/// only the first 10 characters are inspected. Returns `None` for malformed
/// input; callers treat `None` as "no usable date", never as an error.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10)?;
    // Anything after the date must be a separator, not more date digits.
    if let Some(next) = raw.as_bytes().get(10) {
        if next.is_ascii_digit() {
            return None;
        }
    }
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Canonical `YYYY-MM-DD` key for a calendar day.
pub fn date_key(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Today's calendar date in the shop's timezone.
///
/// The only clock read in the workspace; the engine functions all take
/// `today` as an explicit parameter.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Whole-day difference `to - from`. Negative means `to` is in the past.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
