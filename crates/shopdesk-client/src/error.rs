//! Client error types.

use shopdesk_core::EnvelopeError;
use thiserror::Error;

/// Errors surfaced by the request pipeline.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport error: network unreachable, timeout, TLS failure. Timeouts
    /// are not retried.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the bearer token (401). By the time the caller
    /// sees this, stored credentials are already cleared and the
    /// unauthorized signal has fired.
    #[error("authentication rejected: {message}")]
    Unauthorized { message: String },

    /// Non-success status outside the 401 path. The message is the backend's
    /// structured `message`/`error` field when present, the raw body
    /// otherwise.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The backend flagged failure inside a success-status envelope. Passed
    /// through verbatim.
    #[error("{message}")]
    Backend { message: String },

    /// The response payload did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A request body could not be built (e.g. a non-object JSON payload).
    #[error("invalid request body: {reason}")]
    InvalidBody { reason: String },
}

impl From<EnvelopeError> for ApiError {
    fn from(error: EnvelopeError) -> Self {
        match error {
            EnvelopeError::Backend { message } => Self::Backend { message },
            other => Self::Decode(other.to_string()),
        }
    }
}
