//! Utilities for date formatting
//!
//! Order timestamps come from the API as unix seconds; the shop shows them
//! in Taiwan time.

use chrono::{DateTime, FixedOffset};

const TAIPEI_OFFSET_SECS: i32 = 8 * 3600;

fn to_local(unix_secs: i64) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(TAIPEI_OFFSET_SECS)?;
    DateTime::from_timestamp(unix_secs, 0).map(|dt| dt.with_timezone(&offset))
}

/// Format unix seconds as YYYY/MM/DD
/// Example: 1710511346 -> "2024/03/15"
pub fn format_unix_date(unix_secs: i64) -> String {
    to_local(unix_secs)
        .map(|dt| dt.format("%Y/%m/%d").to_string())
        .unwrap_or_else(|| unix_secs.to_string())
}

/// Format unix seconds as YYYY/MM/DD HH:MM:SS
pub fn format_unix_datetime(unix_secs: i64) -> String {
    to_local(unix_secs)
        .map(|dt| dt.format("%Y/%m/%d %H:%M:%S").to_string())
        .unwrap_or_else(|| unix_secs.to_string())
}
