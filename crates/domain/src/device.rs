//! Device identity — the configured ids and display name the bridge
//! advertises on the bus.

use serde::{Deserialize, Serialize};

/// Identity of the bridged vacuum as seen by the bus.
///
/// `unique_id` doubles as the base of every bus topic, so it must stay
/// stable across restarts; `name` is display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    pub unique_id: String,
    pub name: String,
}

impl DeviceIdentity {
    #[must_use]
    pub fn new(unique_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            name: name.into(),
        }
    }

    /// Unique id of the auxiliary room-select control.
    #[must_use]
    pub fn rooms_unique_id(&self) -> String {
        format!("{}-rooms", self.unique_id)
    }

    /// Display name of the auxiliary room-select control.
    #[must_use]
    pub fn rooms_name(&self) -> String {
        format!("{} Rooms", self.name)
    }
}
