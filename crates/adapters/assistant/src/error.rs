//! Assistant adapter error types.

use vacbridge_domain::error::BridgeError;

/// Errors specific to the assistant relay channel.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// The HTTP exchange failed (connect, timeout, body decode).
    #[error("assistant relay request failed")]
    Http(#[source] reqwest::Error),

    /// The relay answered with a non-success status.
    #[error("assistant relay returned status {status}")]
    Status { status: u16 },
}

impl AssistantError {
    /// Convert into a [`BridgeError::Channel`] for propagation across the
    /// port boundary.
    #[must_use]
    pub fn into_domain(self) -> BridgeError {
        BridgeError::channel(self)
    }
}

impl From<AssistantError> for BridgeError {
    fn from(err: AssistantError) -> Self {
        err.into_domain()
    }
}
