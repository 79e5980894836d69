//! Error types for API calls.

use thiserror::Error;

/// Result type for API calls.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by the article API client.
///
/// Cloneable so a failed fetch can sit in reactive state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The requested article does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request failed or the API answered with an error status.
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body was not what the API promises.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ClientError {
    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Transport error for a non-2xx response.
    pub fn status(status: u16, url: &str) -> Self {
        Self::Transport(format!("HTTP {status} from {url}"))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
