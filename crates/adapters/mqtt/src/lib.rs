//! # vacbridge-adapter-mqtt
//!
//! MQTT adapter — exposes the vacuum on the home-automation bus.
//!
//! ## How it works
//!
//! One background task drives the rumqttc event loop. On every broker
//! session (first connect and every reconnect) it subscribes to the command
//! topics and announces the discovery documents; incoming publishes are
//! classified and forwarded through a bounded channel to the single task
//! owning the vacuum state machine. The bridge never touches that state
//! itself, it only publishes the snapshots handed to it.
//!
//! ## Dependency rule
//! Depends on `vacbridge-domain` only; commands cross into the application
//! layer through the channel, not through calls.

pub mod config;
pub mod discovery;
pub mod error;
pub mod router;
pub mod topics;

pub use config::MqttConfig;
pub use error::MqttError;

use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet, QoS};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use vacbridge_domain::command::VacuumCommand;
use vacbridge_domain::device::DeviceIdentity;
use vacbridge_domain::rooms::RoomCatalog;
use vacbridge_domain::state::VacuumState;

use discovery::{AVAILABLE, DiscoveryDoc};
use router::Inbound;
use topics::TopicSet;

/// Wait between reconnect attempts after a connection error.
const RECONNECT_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Serialize)]
struct StateSnapshot {
    state: VacuumState,
}

/// Render the snapshot payload published on the state topic.
///
/// # Errors
///
/// Returns [`MqttError::Encode`] when serialization fails.
pub fn state_payload(state: VacuumState) -> Result<String, MqttError> {
    serde_json::to_string(&StateSnapshot { state }).map_err(MqttError::Encode)
}

/// Bus-facing half of the bridge.
pub struct MqttBridge {
    client: AsyncClient,
    topics: TopicSet,
    event_loop_handle: Option<JoinHandle<()>>,
}

impl MqttBridge {
    /// Spawn the event-loop task talking to the broker.
    ///
    /// Commands received on the bus are forwarded through `commands`; the
    /// returned bridge is used to publish state snapshots and to shut the
    /// task down.
    ///
    /// # Errors
    ///
    /// Returns [`MqttError::Encode`] when a discovery document cannot be
    /// rendered. An unreachable broker is not an error here: the connection
    /// is established lazily by the event loop and retried forever.
    pub fn start(
        config: &MqttConfig,
        identity: &DeviceIdentity,
        rooms: &RoomCatalog,
        commands: mpsc::Sender<VacuumCommand>,
    ) -> Result<Self, MqttError> {
        let topics = TopicSet::new(identity, &config.discovery_prefix);
        let docs = vec![
            DiscoveryDoc::vacuum(identity, &topics)?,
            DiscoveryDoc::room_select(identity, rooms, &topics)?,
        ];

        let mut options = MqttOptions::new(
            config.client_id.clone(),
            config.broker_host.clone(),
            config.broker_port,
        );
        options.set_keep_alive(Duration::from_secs(u64::from(config.keep_alive_secs)));

        let (client, event_loop) = AsyncClient::new(options, config.channel_capacity);
        tracing::info!(
            host = config.broker_host,
            port = config.broker_port,
            "MQTT event loop started"
        );
        let handle = tokio::spawn(run_event_loop(
            event_loop,
            client.clone(),
            topics.clone(),
            docs,
            commands,
        ));

        Ok(Self {
            client,
            topics,
            event_loop_handle: Some(handle),
        })
    }

    /// Publish a state snapshot on the state topic.
    ///
    /// # Errors
    ///
    /// Returns [`MqttError`] when the payload cannot be rendered or the
    /// request queue towards the broker rejects the publish.
    pub async fn publish_state(&self, state: VacuumState) -> Result<(), MqttError> {
        let payload = state_payload(state)?;
        self.client
            .publish(self.topics.state.clone(), QoS::AtMostOnce, false, payload)
            .await
            .map_err(MqttError::Client)
    }

    /// Abort the event-loop task.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.event_loop_handle.take() {
            handle.abort();
            tracing::debug!("MQTT event loop task aborted");
        }
    }
}

async fn run_event_loop(
    mut event_loop: EventLoop,
    client: AsyncClient,
    topics: TopicSet,
    docs: Vec<DiscoveryDoc>,
    commands: mpsc::Sender<VacuumCommand>,
) {
    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                tracing::info!("broker session established");
                if let Err(err) = on_connected(&client, &topics, &docs).await {
                    tracing::warn!(error = %err, "failed to announce on new session");
                }
            }
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                let payload = String::from_utf8_lossy(&publish.payload);
                match router::classify_inbound(&topics, &publish.topic, &payload) {
                    Some(Inbound::Command(command)) => {
                        tracing::info!(command = %command, "bus command received");
                        if commands.send(command).await.is_err() {
                            tracing::warn!("command consumer gone, stopping event loop");
                            return;
                        }
                    }
                    Some(Inbound::RepublishDiscovery) => {
                        tracing::info!("automation platform online, republishing discovery");
                        if let Err(err) = announce(&client, &docs).await {
                            tracing::warn!(error = %err, "failed to republish discovery");
                        }
                    }
                    None => {}
                }
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(error = %err, "broker connection lost, retrying");
                tokio::time::sleep(RECONNECT_DELAY).await;
            }
        }
    }
}

/// Subscribe to the inbound topics and announce the discovery documents.
///
/// Runs on every new broker session; subscriptions do not survive one.
async fn on_connected(
    client: &AsyncClient,
    topics: &TopicSet,
    docs: &[DiscoveryDoc],
) -> Result<(), MqttError> {
    for topic in [&topics.command, &topics.room_select_command, &topics.status] {
        client
            .subscribe(topic.clone(), QoS::AtMostOnce)
            .await
            .map_err(MqttError::Client)?;
    }
    announce(client, docs).await
}

/// Publish the discovery documents and mark their entities available.
async fn announce(client: &AsyncClient, docs: &[DiscoveryDoc]) -> Result<(), MqttError> {
    for doc in docs {
        tracing::info!(topic = %doc.topic, "publishing discovery config");
        client
            .publish(
                doc.topic.clone(),
                QoS::AtMostOnce,
                false,
                doc.payload.clone(),
            )
            .await
            .map_err(MqttError::Client)?;
        client
            .publish(
                doc.availability_topic.clone(),
                QoS::AtMostOnce,
                false,
                AVAILABLE,
            )
            .await
            .map_err(MqttError::Client)?;
    }
    Ok(())
}
