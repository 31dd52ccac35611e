//! MQTT bus configuration.

use serde::Deserialize;

use crate::topics::DEFAULT_DISCOVERY_PREFIX;

/// Configuration for the bus connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MqttConfig {
    /// Broker hostname or IP address.
    pub broker_host: String,
    /// Broker port.
    pub broker_port: u16,
    /// Client identifier announced to the broker.
    pub client_id: String,
    /// Keep-alive interval in seconds.
    pub keep_alive_secs: u16,
    /// Discovery topic prefix of the automation platform.
    pub discovery_prefix: String,
    /// Capacity of the request queue towards the broker.
    pub channel_capacity: usize,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            broker_host: "homeassistant.local".to_string(),
            broker_port: 1883,
            client_id: "vacbridge".to_string(),
            keep_alive_secs: 30,
            discovery_prefix: DEFAULT_DISCOVERY_PREFIX.to_string(),
            channel_capacity: 16,
        }
    }
}
