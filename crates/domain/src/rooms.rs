//! Room catalog — the static, ordered list of cleanable rooms.

use serde::{Deserialize, Serialize};

/// The no-op option shown first in the room-select control. Selecting it
/// must not trigger any assistant exchange.
pub const NONE_SENTINEL: &str = "(none)";

/// Ordered room names offered in the room-select control.
///
/// Configuration, not runtime state: built once at startup and never
/// mutated. The catalog is presentation only — a room name arriving on the
/// bus is forwarded to the assistant whether it is listed here or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCatalog(Vec<String>);

impl RoomCatalog {
    #[must_use]
    pub fn new(rooms: Vec<String>) -> Self {
        Self(rooms)
    }

    /// The configured room names, in catalog order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// The room-select option list: the `(none)` sentinel followed by every
    /// room in catalog order.
    #[must_use]
    pub fn options(&self) -> Vec<String> {
        let mut options = Vec::with_capacity(self.0.len() + 1);
        options.push(NONE_SENTINEL.to_string());
        options.extend(self.0.iter().cloned());
        options
    }

    /// Whether a room-select payload is the `(none)` sentinel
    /// (case-insensitive).
    #[must_use]
    pub fn is_none_sentinel(value: &str) -> bool {
        value.eq_ignore_ascii_case(NONE_SENTINEL)
    }
}

impl From<Vec<String>> for RoomCatalog {
    fn from(rooms: Vec<String>) -> Self {
        Self::new(rooms)
    }
}
