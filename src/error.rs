//! Error taxonomy for calls against the remote container API.

use reqwest::StatusCode;

/// Failure of a single remote API call.
///
/// Every variant is terminal for the request that produced it; nothing is
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, TLS, reset).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    /// The server answered successfully but the body had an unexpected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds a [`ApiError::Status`], dropping an empty message.
    pub fn status(status: StatusCode, message: Option<String>) -> Self {
        Self::Status {
            status,
            message: message.filter(|m| !m.is_empty()),
        }
    }

    /// Human-readable message sent by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
