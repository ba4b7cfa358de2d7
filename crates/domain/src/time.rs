//! Time and timestamp helpers.

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC timestamp used for the server clock.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a timestamp as ISO-8601 with millisecond precision and a `Z` suffix,
/// e.g. `2024-05-01T12:30:00.000Z`.
#[must_use]
pub fn to_iso8601(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
