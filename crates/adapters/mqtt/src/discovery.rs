//! Discovery announcements advertised to the automation platform.
//!
//! The platform auto-creates a vacuum entity and a room-select entity from
//! JSON config documents published under its discovery prefix. Topics inside
//! the payloads use the platform's `~` base-topic abbreviation.

use serde::Serialize;

use vacbridge_domain::device::DeviceIdentity;
use vacbridge_domain::rooms::RoomCatalog;

use crate::error::MqttError;
use crate::topics::TopicSet;

/// Availability payload marking an announced entity as reachable.
pub const AVAILABLE: &str = "online";

/// Feature set advertised for the vacuum, in the order the platform lists
/// them.
const SUPPORTED_FEATURES: [&str; 6] = [
    "start",
    "stop",
    "return_home",
    "pause",
    "status",
    "locate",
];

/// One discovery announcement, rendered once.
///
/// The payload is serialized at construction so every republish after a
/// platform restart is byte-identical to the first announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryDoc {
    /// Config topic the document is published on.
    pub topic: String,
    /// Rendered JSON payload.
    pub payload: String,
    /// Availability topic named inside the payload; the bridge marks it
    /// [`AVAILABLE`] right after publishing the document.
    pub availability_topic: String,
}

#[derive(Debug, Serialize)]
struct VacuumDoc<'a> {
    #[serde(rename = "~")]
    base: &'a str,
    availability_topic: &'a str,
    name: &'a str,
    unique_id: &'a str,
    command_topic: &'a str,
    schema: &'a str,
    state_topic: &'a str,
    supported_features: [&'a str; 6],
}

#[derive(Debug, Serialize)]
struct SelectDoc<'a> {
    #[serde(rename = "~")]
    base: &'a str,
    availability_topic: &'a str,
    name: &'a str,
    unique_id: &'a str,
    command_topic: &'a str,
    options: Vec<String>,
}

impl DiscoveryDoc {
    /// Build the vacuum announcement.
    ///
    /// # Errors
    ///
    /// Returns [`MqttError::Encode`] when the payload cannot be serialized.
    pub fn vacuum(identity: &DeviceIdentity, topics: &TopicSet) -> Result<Self, MqttError> {
        let doc = VacuumDoc {
            base: &identity.unique_id,
            availability_topic: "~",
            name: &identity.name,
            unique_id: &identity.unique_id,
            command_topic: "~/cmd",
            schema: "state",
            state_topic: "~/state",
            supported_features: SUPPORTED_FEATURES,
        };
        Ok(Self {
            topic: topics.vacuum_discovery.clone(),
            payload: serde_json::to_string(&doc).map_err(MqttError::Encode)?,
            availability_topic: topics.availability.clone(),
        })
    }

    /// Build the room-select announcement.
    ///
    /// # Errors
    ///
    /// Returns [`MqttError::Encode`] when the payload cannot be serialized.
    pub fn room_select(
        identity: &DeviceIdentity,
        rooms: &RoomCatalog,
        topics: &TopicSet,
    ) -> Result<Self, MqttError> {
        let name = identity.rooms_name();
        let unique_id = identity.rooms_unique_id();
        let doc = SelectDoc {
            base: &topics.room_select_base,
            availability_topic: "~",
            name: &name,
            unique_id: &unique_id,
            command_topic: "~/cmd",
            options: rooms.options(),
        };
        Ok(Self {
            topic: topics.select_discovery.clone(),
            payload: serde_json::to_string(&doc).map_err(MqttError::Encode)?,
            availability_topic: topics.room_select_base.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::DEFAULT_DISCOVERY_PREFIX;

    fn identity() -> DeviceIdentity {
        DeviceIdentity::new("ha-vacuum", "Robo")
    }

    fn topics() -> TopicSet {
        TopicSet::new(&identity(), DEFAULT_DISCOVERY_PREFIX)
    }

    #[test]
    fn should_render_the_vacuum_announcement() {
        let doc = DiscoveryDoc::vacuum(&identity(), &topics()).unwrap();
        assert_eq!(doc.topic, "homeassistant/vacuum/ha-vacuum/config");
        assert_eq!(doc.availability_topic, "ha-vacuum");
        assert_eq!(
            doc.payload,
            r#"{"~":"ha-vacuum","availability_topic":"~","name":"Robo","unique_id":"ha-vacuum","command_topic":"~/cmd","schema":"state","state_topic":"~/state","supported_features":["start","stop","return_home","pause","status","locate"]}"#
        );
    }

    #[test]
    fn should_render_the_room_select_announcement() {
        let rooms = RoomCatalog::new(vec!["Livingroom".to_string(), "Kitchen".to_string()]);
        let doc = DiscoveryDoc::room_select(&identity(), &rooms, &topics()).unwrap();
        assert_eq!(doc.topic, "homeassistant/select/ha-vacuum-rooms/config");
        assert_eq!(doc.availability_topic, "ha-vacuum/roomselect");
        assert_eq!(
            doc.payload,
            r#"{"~":"ha-vacuum/roomselect","availability_topic":"~","name":"Robo Rooms","unique_id":"ha-vacuum-rooms","command_topic":"~/cmd","options":["(none)","Livingroom","Kitchen"]}"#
        );
    }

    #[test]
    fn should_render_byte_identical_payloads_on_rebuild() {
        let rooms = RoomCatalog::new(vec!["Office".to_string()]);
        let first = DiscoveryDoc::room_select(&identity(), &rooms, &topics()).unwrap();
        let second = DiscoveryDoc::room_select(&identity(), &rooms, &topics()).unwrap();
        assert_eq!(first, second);

        let first = DiscoveryDoc::vacuum(&identity(), &topics()).unwrap();
        let second = DiscoveryDoc::vacuum(&identity(), &topics()).unwrap();
        assert_eq!(first.payload, second.payload);
    }
}
