//! REST backend error types.

use sl_core::backend::BackendError;
use thiserror::Error;

/// Errors that can occur when talking to the PostgREST endpoint.
#[derive(Debug, Error)]
pub enum RestError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// PostgREST `message` field, or the raw body.
        message: String,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// The endpoint returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The client could not be built from the given settings.
    #[error("invalid REST configuration: {0}")]
    InvalidConfig(String),
}

impl From<RestError> for BackendError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Http(e) => Self::Transport(e.to_string()),
            RestError::Api { message, .. } => Self::service(message),
            RestError::Parse(msg) => Self::Malformed(msg),
            other => Self::service(other.to_string()),
        }
    }
}
