//! Canonical vacuum state — the small fixed set of statuses the bridge tracks.

use serde::{Deserialize, Serialize};

/// Discrete operational state of the vacuum, as believed by the bridge.
///
/// There is no authoritative feedback channel from the device itself; this
/// is the state inferred from assistant replies and command acks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VacuumState {
    #[default]
    Idle,
    Cleaning,
    Paused,
    Returning,
    Docked,
}

impl VacuumState {
    /// The lowercase wire name, as published in state snapshots.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Cleaning => "cleaning",
            Self::Paused => "paused",
            Self::Returning => "returning",
            Self::Docked => "docked",
        }
    }

    /// Whether the vacuum is believed to be actively moving (cleaning or
    /// on its way back to the dock).
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Cleaning | Self::Returning)
    }
}

impl std::fmt::Display for VacuumState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
