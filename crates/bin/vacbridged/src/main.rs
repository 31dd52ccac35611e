//! # vacbridged — vacuum bridge daemon
//!
//! Composition root that wires the assistant relay and the MQTT bridge
//! together and drives the polling loop.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars, CLI flags)
//! - Construct the assistant relay adapter
//! - Construct the vacuum commander, injecting the relay via the port trait
//! - Announce the device over MQTT discovery and forward bus commands
//! - Poll the vacuum state on a fixed tick and publish it
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};
use vacbridge_adapter_assistant::RelayAssistant;
use vacbridge_adapter_mqtt::MqttBridge;
use vacbridge_app::commander::VacuumCommander;
use vacbridge_domain::error::BridgeError;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli_mode = args.iter().any(|arg| arg == "--cli" || arg == "-c");
    let verbose = args.iter().any(|arg| arg == "--verbose" || arg == "-v");

    let config = Config::load()?;

    // Logging
    let filter = if verbose {
        "debug"
    } else {
        config.logging.filter.as_str()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Assistant channel
    let assistant = RelayAssistant::new(config.assistant.clone())?;

    if cli_mode {
        return cli::run(assistant).await;
    }

    // Commander
    let mut commander = VacuumCommander::new(assistant, config.cooldown());

    // MQTT
    let (command_tx, mut command_rx) = mpsc::channel(config.mqtt.channel_capacity);
    let mut bridge = MqttBridge::start(
        &config.mqtt,
        &config.identity(),
        &config.rooms(),
        command_tx,
    )?;

    let mut tick = tokio::time::interval(config.tick());
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(
        vacuum = %config.vacuum.name,
        unique_id = %config.vacuum.unique_id,
        "vacuum bridge running"
    );

    loop {
        tokio::select! {
            _ = tick.tick() => {
                match commander.update_state().await {
                    Ok(_) => {}
                    Err(BridgeError::Classification { response }) => {
                        warn!(%response, "could not classify vacuum activity");
                    }
                    Err(err) => warn!(error = %err, "state poll failed"),
                }
                if let Err(err) = bridge.publish_state(commander.state()).await {
                    warn!(error = %err, "state publish failed");
                }
            }
            Some(command) = command_rx.recv() => {
                if let Err(err) = commander.execute(&command).await {
                    warn!(command = command.name(), error = %err, "command failed");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    bridge.shutdown();
    Ok(())
}
