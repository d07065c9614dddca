//! Time helpers.
//!
//! Timestamps are Unix milliseconds. Human readable renderings use JST.

use chrono::{DateTime, FixedOffset, Offset, Utc};

const JST_OFFSET_SECONDS: i32 = 9 * 3600;

fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

fn to_jst(timestamp_millis: i64) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp_millis(timestamp_millis).map(|dt| dt.with_timezone(&jst()))
}

/// Get current Unix timestamp (milliseconds)
pub fn get_jst_timestamp() -> i64 {
    Utc::now().with_timezone(&jst()).timestamp_millis()
}

/// Render a Unix millisecond timestamp as a `HH:MM:SS` wall clock in JST.
///
/// Out of range values render as an empty string.
pub fn timestamp_to_jst_clock(timestamp_millis: i64) -> String {
    to_jst(timestamp_millis)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}
