//! MQTT adapter error types.
//!
//! Bus failures never cross into the domain error type: a failed publish is
//! logged and the next scheduler tick publishes again, matching how the bus
//! treats the bridge as just another flaky device.

/// Errors specific to the MQTT adapter.
#[derive(Debug, thiserror::Error)]
pub enum MqttError {
    /// The rumqttc client rejected a request (full queue, shutdown).
    #[error("MQTT client error")]
    Client(#[source] rumqttc::ClientError),

    /// A bus payload could not be serialized.
    #[error("failed to encode bus payload")]
    Encode(#[source] serde_json::Error),
}
