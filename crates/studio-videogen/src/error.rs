//! Video generation error types.

use thiserror::Error;

use studio_store::StoreError;

/// Result type for video generation operations.
pub type VideoGenResult<T> = Result<T, VideoGenError>;

/// Errors from submission and reconciliation.
#[derive(Debug, Error)]
pub enum VideoGenError {
    /// Missing or malformed caller input. Raised before any network I/O.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-success response from the generation provider. Status and body
    /// are carried verbatim so callers can tell provider outages from
    /// local bugs.
    #[error("Provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    /// Transport-level failure (connect, timeout, TLS).
    #[error("Provider request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// 2xx response missing expected fields.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// Storage failure while persisting reconciled state.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl VideoGenError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
