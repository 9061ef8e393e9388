//! Prompt generation error types.

use thiserror::Error;

/// Result type for prompt generation operations.
pub type PromptResult<T> = Result<T, PromptError>;

/// Errors from the language-model boundary.
///
/// The client-scoped generation path recovers from all of these via the
/// composer fallback; the title-scoped path surfaces them to the caller.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Non-success HTTP status from the model endpoint. Status and body are
    /// carried verbatim so callers can tell provider outages from local bugs.
    #[error("Language model returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Transport-level failure (connect, timeout, TLS).
    #[error("Language model request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// 2xx response missing the expected completion field.
    #[error("Invalid language model response: {0}")]
    InvalidResponse(String),
}
