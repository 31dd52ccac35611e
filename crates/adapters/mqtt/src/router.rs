//! Inbound message routing.
//!
//! Pure classification of incoming publishes, kept separate from the event
//! loop so the routing table is testable without a broker.

use vacbridge_domain::command::VacuumCommand;
use vacbridge_domain::rooms::RoomCatalog;

use crate::topics::TopicSet;

/// A bus message the bridge acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// A device or room command, to be forwarded to the single command
    /// consumer.
    Command(VacuumCommand),
    /// The automation platform came back online and lost its dynamic
    /// entities; discovery must be republished.
    RepublishDiscovery,
}

/// Classify an incoming publish into an action, if any.
///
/// Unknown topics and unrecognized command payloads yield `None`; the
/// bridge never reports errors back onto the bus. The room-select sentinel
/// is filtered case-insensitively because the platform echoes it back with
/// varying capitalization. Any other room payload is forwarded as free text
/// without catalog validation.
#[must_use]
pub fn classify_inbound(topics: &TopicSet, topic: &str, payload: &str) -> Option<Inbound> {
    if topic == topics.command {
        match VacuumCommand::from_bus_payload(payload) {
            Some(command) => Some(Inbound::Command(command)),
            None => {
                tracing::debug!(payload, "ignoring unknown device command");
                None
            }
        }
    } else if topic == topics.room_select_command {
        if RoomCatalog::is_none_sentinel(payload) {
            None
        } else {
            Some(Inbound::Command(VacuumCommand::CleanRoom(
                payload.to_string(),
            )))
        }
    } else if topic == topics.status {
        payload
            .eq_ignore_ascii_case("online")
            .then_some(Inbound::RepublishDiscovery)
    } else {
        None
    }
}
