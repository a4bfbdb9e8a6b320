//! Timestamp parsing helpers for analytics bucketing.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, Datelike};

/// Day labels indexed by `weekday_index`, Sunday first.
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Parse an RFC 3339 timestamp and return its day-of-week index (0 = Sunday).
/// Returns `None` for unparseable input.
pub fn weekday_index(timestamp: &str) -> Option<usize> {
    let parsed = DateTime::parse_from_rfc3339(timestamp).ok()?;
    Some(parsed.weekday().num_days_from_sunday() as usize)
}

/// Day-of-month for a timestamp, used for coarse week-of-month bucketing.
pub fn day_of_month(timestamp: &str) -> Option<u32> {
    let parsed = DateTime::parse_from_rfc3339(timestamp).ok()?;
    Some(parsed.day())
}

/// Render a timestamp as a short `YYYY-MM-DD` date, or `"N/A"`.
pub fn short_date(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map_or_else(|| "N/A".to_owned(), |dt| dt.format("%Y-%m-%d").to_string())
}

/// True when `timestamp` falls on or after the start of `date` (`YYYY-MM-DD`).
pub fn on_or_after(timestamp: &str, date: &str) -> bool {
    compare_to_date(timestamp, date).is_some_and(|ordering| ordering != std::cmp::Ordering::Less)
}

/// True when `timestamp` falls on or before the end of `date` (`YYYY-MM-DD`).
pub fn on_or_before(timestamp: &str, date: &str) -> bool {
    compare_to_date(timestamp, date).is_some_and(|ordering| ordering != std::cmp::Ordering::Greater)
}

fn compare_to_date(timestamp: &str, date: &str) -> Option<std::cmp::Ordering> {
    let parsed = DateTime::parse_from_rfc3339(timestamp).ok()?;
    let bound = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some(parsed.date_naive().cmp(&bound))
}
