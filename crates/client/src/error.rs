//! Error types for the overtime API client.

use jiaban_core::TaskError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types that can occur when talking to the overtime API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the configured token.
    #[error("Unauthorized (status {status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<ClientError> for TaskError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Unauthorized { message, .. } => TaskError::AuthExpired(message),
            other => TaskError::Upstream(other.to_string()),
        }
    }
}
