//! Assistant port — the conversational channel the bridge speaks through.

use std::future::Future;

use vacbridge_domain::error::BridgeError;

/// One completed exchange with the assistant.
///
/// The assistant may answer with display text, an HTML fragment, or both.
/// Either part can be missing; a fully empty exchange is valid and simply
/// fails every marker check downstream.
#[derive(Debug, Clone, Default)]
pub struct Exchange {
    /// Plain display text of the reply, when the assistant produced any.
    pub text: Option<String>,
    /// Rich HTML fragment of the reply, when available.
    pub html: Option<String>,
}

impl Exchange {
    /// Build an exchange carrying only display text.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            html: None,
        }
    }

    /// The reply text, or `""` when the assistant stayed silent.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// Sends one query to the assistant and returns its reply.
///
/// Implementations are expected to complete one exchange per call with no
/// internal retries; callers serialize exchanges themselves.
pub trait Assistant {
    /// Perform a single query/reply exchange.
    fn assist(&self, query: &str) -> impl Future<Output = Result<Exchange, BridgeError>> + Send;
}

impl<T: Assistant + Send + Sync> Assistant for std::sync::Arc<T> {
    fn assist(&self, query: &str) -> impl Future<Output = Result<Exchange, BridgeError>> + Send {
        (**self).assist(query)
    }
}
