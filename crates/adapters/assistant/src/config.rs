//! Assistant channel configuration.

use serde::Deserialize;

/// Configuration for the assistant relay channel.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Base URL of the assistant relay service.
    pub endpoint: String,
    /// Optional bearer token sent with every exchange.
    pub token: Option<String>,
    /// Device model identifier announced to the assistant.
    pub device_model_id: String,
    /// Device instance identifier announced to the assistant.
    pub device_id: String,
    /// Conversation language code.
    pub language: String,
    /// Per-exchange deadline in seconds. Replies can take minutes when the
    /// assistant waits on the vacuum, so this defaults high.
    pub timeout_secs: u16,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        let device_model_id = "googleassistantbridge".to_string();
        Self {
            endpoint: "http://localhost:8085".to_string(),
            token: None,
            device_id: format!("{device_model_id}-1"),
            device_model_id,
            language: "en-US".to_string(),
            timeout_secs: 185,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = AssistantConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8085");
        assert_eq!(config.token, None);
        assert_eq!(config.device_model_id, "googleassistantbridge");
        assert_eq!(config.device_id, "googleassistantbridge-1");
        assert_eq!(config.language, "en-US");
        assert_eq!(config.timeout_secs, 185);
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            endpoint = "http://assistant-relay.local:9000"
            token = "secret"
            device_model_id = "vacuum-bridge"
            device_id = "vacuum-bridge-7"
            language = "de-DE"
            timeout_secs = 60
        "#;
        let config: AssistantConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.endpoint, "http://assistant-relay.local:9000");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.device_model_id, "vacuum-bridge");
        assert_eq!(config.device_id, "vacuum-bridge-7");
        assert_eq!(config.language, "de-DE");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let toml = r#"endpoint = "http://10.0.0.4:8085""#;
        let config: AssistantConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.endpoint, "http://10.0.0.4:8085");
        assert_eq!(config.device_id, "googleassistantbridge-1");
        assert_eq!(config.timeout_secs, 185);
    }
}
