//! Timestamp helpers
//!
//! Persisted timestamps arrive as epoch numbers in either seconds or
//! milliseconds depending on which client wrote them.

use chrono::{DateTime, Utc};

/// Epoch values below this are taken to be seconds
const SECONDS_THRESHOLD: i64 = 10_000_000_000;

/// Normalize an epoch value to milliseconds
pub fn normalize_timestamp(raw: i64) -> i64 {
    if raw < SECONDS_THRESHOLD {
        raw.saturating_mul(1000)
    } else {
        raw
    }
}

/// Convert a persisted epoch value (seconds or millis) to a UTC timestamp
///
/// Returns `None` when the value is outside chrono's representable range.
pub fn timestamp_from_epoch(raw: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(normalize_timestamp(raw))
}

/// `now`, clamped so that it never goes before `previous`
pub(crate) fn touch(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous)
}
