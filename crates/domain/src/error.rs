//! Common error types used across the workspace.
//!
//! Adapters keep their own transport-specific error enums and convert into
//! [`BridgeError`] at the port boundary. A rejected command (missing ack
//! marker) is *not* an error; operations report it as a plain `false`.

use std::error::Error as StdError;

/// Errors surfaced by the bridge core.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The conversational channel failed to complete an exchange
    /// (network, auth, transport). Fails that one exchange only; the core
    /// never retries internally.
    #[error("assistant exchange failed")]
    Channel(#[source] Box<dyn StdError + Send + Sync>),

    /// The channel replied, but the activity text matched none of the known
    /// markers. The previous state is kept; the reply is never coerced to a
    /// guessed state.
    #[error("unrecognized activity reply: {response:?}")]
    Classification { response: String },
}

impl BridgeError {
    /// Wrap a transport error from whatever client backs the channel.
    pub fn channel(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Channel(Box::new(err))
    }
}
