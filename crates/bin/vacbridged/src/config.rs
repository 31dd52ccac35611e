//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `vacbridge.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

use vacbridge_adapter_assistant::AssistantConfig;
use vacbridge_adapter_mqtt::MqttConfig;
use vacbridge_domain::device::DeviceIdentity;
use vacbridge_domain::rooms::RoomCatalog;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bridged vacuum identity and rooms.
    pub vacuum: VacuumConfig,
    /// Bus connection settings.
    pub mqtt: MqttConfig,
    /// Assistant channel settings.
    pub assistant: AssistantConfig,
    /// Poll cadence settings.
    pub poll: PollConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Identity of the bridged vacuum.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct VacuumConfig {
    /// Display name shown by the automation platform.
    pub name: String,
    /// Unique device id, doubling as the base of every bus topic.
    pub unique_id: String,
    /// Rooms offered in the room-select control, in display order.
    pub rooms: Vec<String>,
}

/// Poll cadence.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Minimum seconds between assistant state polls.
    pub cooldown_secs: u64,
    /// Seconds between scheduler ticks (poll attempt + state publish).
    pub tick_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `vacbridge.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("vacbridge.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("VACBRIDGE_MQTT_HOST") {
            self.mqtt.broker_host = val;
        }
        if let Ok(val) = std::env::var("VACBRIDGE_MQTT_PORT") {
            if let Ok(port) = val.parse() {
                self.mqtt.broker_port = port;
            }
        }
        if let Ok(val) = std::env::var("VACBRIDGE_ASSISTANT_URL") {
            self.assistant.endpoint = val;
        }
        if let Ok(val) = std::env::var("VACBRIDGE_ASSISTANT_TOKEN") {
            self.assistant.token = Some(val);
        }
        if let Ok(val) = std::env::var("VACBRIDGE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.mqtt.broker_port == 0 {
            return Err(ConfigError::Validation(
                "mqtt broker port must be non-zero".to_string(),
            ));
        }
        if self.vacuum.unique_id.is_empty() {
            return Err(ConfigError::Validation(
                "vacuum unique_id must not be empty".to_string(),
            ));
        }
        if self.poll.tick_secs == 0 {
            return Err(ConfigError::Validation(
                "poll tick_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Bus identity of the bridged vacuum.
    #[must_use]
    pub fn identity(&self) -> DeviceIdentity {
        DeviceIdentity::new(&self.vacuum.unique_id, &self.vacuum.name)
    }

    /// Room catalog offered on the room-select control.
    #[must_use]
    pub fn rooms(&self) -> RoomCatalog {
        RoomCatalog::new(self.vacuum.rooms.clone())
    }

    /// Minimum wait between assistant state polls.
    #[must_use]
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.poll.cooldown_secs)
    }

    /// Wait between scheduler ticks.
    #[must_use]
    pub fn tick(&self) -> Duration {
        Duration::from_secs(self.poll.tick_secs)
    }
}

impl Default for VacuumConfig {
    fn default() -> Self {
        Self {
            name: "Robo".to_string(),
            unique_id: "ha-vacuum".to_string(),
            rooms: vec![
                "Livingroom".to_string(),
                "Office".to_string(),
                "Bathroom".to_string(),
                "Toilet".to_string(),
                "Kitchen".to_string(),
                "Bedroom".to_string(),
            ],
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: 180,
            tick_secs: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "vacbridged=info,vacbridge=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
