//! Feed timestamp decoding.
//!
//! The feed stamps each ticker with an ISO-8601 UTC time such as
//! `2024-03-01T12:30:45.123456Z`. This module turns it into microseconds
//! since the Unix epoch.

use chrono::NaiveDateTime;

/// Returned by [`parse_epoch_us`] on any failure. The epoch itself is
/// therefore not a representable timestamp.
pub const TIMESTAMP_PARSE_FAILED: u64 = 0;

const FEED_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse a feed timestamp into microseconds since the Unix epoch.
///
/// Only the `Z` zone designator is accepted. Returns
/// [`TIMESTAMP_PARSE_FAILED`] for malformed input, other zone markers,
/// out-of-range fields and instants at or before the epoch.
/// Sub-microsecond digits are truncated.
pub fn parse_epoch_us(raw: &str) -> u64 {
    let Some(body) = raw.strip_suffix('Z') else {
        return TIMESTAMP_PARSE_FAILED;
    };

    let Ok(naive) = NaiveDateTime::parse_from_str(body, FEED_TIME_FORMAT) else {
        return TIMESTAMP_PARSE_FAILED;
    };

    u64::try_from(naive.and_utc().timestamp_micros()).unwrap_or(TIMESTAMP_PARSE_FAILED)
}
