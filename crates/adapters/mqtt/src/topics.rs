//! Bus topic layout.
//!
//! Every topic derives from the configured unique id and discovery prefix,
//! so two bridges on one broker never collide and nothing is hard-coded.

use vacbridge_domain::device::DeviceIdentity;

/// Discovery prefix used by Home-Assistant-style buses.
pub const DEFAULT_DISCOVERY_PREFIX: &str = "homeassistant";

/// The full set of topics one bridged vacuum occupies on the bus.
///
/// Built once at startup; the strings are reused for subscribing, routing
/// and publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSet {
    /// Device command topic the bus writes to.
    pub command: String,
    /// Base topic of the room-select control, doubling as its availability
    /// topic.
    pub room_select_base: String,
    /// Room-select command topic the bus writes to.
    pub room_select_command: String,
    /// State snapshot topic the bridge publishes to.
    pub state: String,
    /// Availability topic of the vacuum itself.
    pub availability: String,
    /// Discovery config topic of the vacuum.
    pub vacuum_discovery: String,
    /// Discovery config topic of the room-select control.
    pub select_discovery: String,
    /// Status topic on which the automation platform announces restarts.
    pub status: String,
}

impl TopicSet {
    #[must_use]
    pub fn new(identity: &DeviceIdentity, discovery_prefix: &str) -> Self {
        let unique_id = &identity.unique_id;
        Self {
            command: format!("{unique_id}/cmd"),
            room_select_base: format!("{unique_id}/roomselect"),
            room_select_command: format!("{unique_id}/roomselect/cmd"),
            state: format!("{unique_id}/state"),
            availability: unique_id.clone(),
            vacuum_discovery: format!("{discovery_prefix}/vacuum/{unique_id}/config"),
            select_discovery: format!(
                "{discovery_prefix}/select/{}/config",
                identity.rooms_unique_id()
            ),
            status: format!("{discovery_prefix}/status"),
        }
    }
}
