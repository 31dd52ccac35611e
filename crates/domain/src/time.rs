//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for the poll clock (`last_update`).
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Wall-clock time elapsed between two timestamps, clamped to zero when
/// `later` precedes `earlier` (clock stepped backwards).
#[must_use]
pub fn elapsed_between(earlier: Timestamp, later: Timestamp) -> std::time::Duration {
    (later - earlier).to_std().unwrap_or_default()
}

/// Wall-clock time elapsed since `earlier`, clamped to zero.
#[must_use]
pub fn elapsed_since(earlier: Timestamp) -> std::time::Duration {
    elapsed_between(earlier, now())
}
