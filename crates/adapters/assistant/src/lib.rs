//! # vacbridge-adapter-assistant
//!
//! Assistant channel adapter — relays text queries to the conversational
//! assistant over HTTP and normalizes the replies.
//!
//! ## How it works
//!
//! The bridge speaks to the assistant through a small relay service wrapping
//! the vendor conversation API: one `POST {endpoint}/assist` per exchange,
//! carrying the query text and the device identity. The reply holds display
//! text and, for rich answers, the rendered HTML fragment. When the relay
//! returns no display text the text is recovered from the HTML fragment.
//!
//! ## Dependency rule
//! Same as other adapters: depends on `vacbridge-app` and `vacbridge-domain`.

mod config;
mod error;
pub mod scrape;

pub use config::AssistantConfig;
pub use error::AssistantError;

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use vacbridge_app::ports::{Assistant, Exchange};
use vacbridge_domain::error::BridgeError;

/// Assistant channel backed by an HTTP relay service.
pub struct RelayAssistant {
    client: reqwest::Client,
    config: AssistantConfig,
}

#[derive(Debug, Serialize)]
struct AssistRequest<'a> {
    query: &'a str,
    device_model_id: &'a str,
    device_id: &'a str,
    language: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct AssistReply {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    html: Option<String>,
}

/// Turn a raw relay reply into a port-level exchange, recovering display
/// text from the HTML fragment when the reply carries none.
fn normalize(reply: AssistReply) -> Exchange {
    let text = reply
        .text
        .or_else(|| reply.html.as_deref().and_then(scrape::text_from_html));
    Exchange {
        text,
        html: reply.html,
    }
}

impl RelayAssistant {
    /// Create a channel from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::Http`] when the HTTP client cannot be
    /// built.
    pub fn new(config: AssistantConfig) -> Result<Self, AssistantError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_secs)))
            .build()
            .map_err(AssistantError::Http)?;
        Ok(Self { client, config })
    }

    async fn exchange(&self, query: &str) -> Result<Exchange, AssistantError> {
        let request = AssistRequest {
            query,
            device_model_id: &self.config.device_model_id,
            device_id: &self.config.device_id,
            language: &self.config.language,
        };

        let mut builder = self
            .client
            .post(format!("{}/assist", self.config.endpoint))
            .json(&request);
        if let Some(token) = &self.config.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(AssistantError::Http)?;
        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Status {
                status: status.as_u16(),
            });
        }

        let reply: AssistReply = response.json().await.map_err(AssistantError::Http)?;
        let exchange = normalize(reply);
        tracing::debug!(query, reply = exchange.text(), "assistant exchange complete");
        Ok(exchange)
    }
}

impl Assistant for RelayAssistant {
    fn assist(&self, query: &str) -> impl Future<Output = Result<Exchange, BridgeError>> + Send {
        async move {
            self.exchange(query)
                .await
                .map_err(AssistantError::into_domain)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_the_client_from_default_config() {
        assert!(RelayAssistant::new(AssistantConfig::default()).is_ok());
    }

    #[test]
    fn should_decode_a_full_reply() {
        let reply: AssistReply =
            serde_json::from_str(r#"{"text": "Ok, starting", "html": "<div/>"}"#).unwrap();
        assert_eq!(reply.text.as_deref(), Some("Ok, starting"));
        assert_eq!(reply.html.as_deref(), Some("<div/>"));
    }

    #[test]
    fn should_decode_an_empty_reply() {
        let reply: AssistReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.text, None);
        assert_eq!(reply.html, None);
    }

    #[test]
    fn should_keep_display_text_when_present() {
        let exchange = normalize(AssistReply {
            text: Some("The vacuum is docked".to_string()),
            html: Some("<div class=\"show_text_content\">other</div>".to_string()),
        });
        assert_eq!(exchange.text(), "The vacuum is docked");
    }

    #[test]
    fn should_recover_text_from_html_when_display_text_is_missing() {
        let exchange = normalize(AssistReply {
            text: None,
            html: Some("<div class=\"show_text_content\">The vacuum is docked</div>".to_string()),
        });
        assert_eq!(exchange.text(), "The vacuum is docked");
        assert!(exchange.html.is_some());
    }

    #[test]
    fn should_leave_text_empty_when_nothing_is_recoverable() {
        let exchange = normalize(AssistReply {
            text: None,
            html: Some("<p>no container here</p>".to_string()),
        });
        assert_eq!(exchange.text(), "");
    }

    #[test]
    fn should_serialize_the_request_shape() {
        let request = AssistRequest {
            query: "Start cleaning",
            device_model_id: "googleassistantbridge",
            device_id: "googleassistantbridge-1",
            language: "en-US",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["query"], "Start cleaning");
        assert_eq!(json["device_model_id"], "googleassistantbridge");
        assert_eq!(json["device_id"], "googleassistantbridge-1");
        assert_eq!(json["language"], "en-US");
    }
}
