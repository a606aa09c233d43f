//! Directory client error types.

use thiserror::Error;

/// Result type for directory API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur talking to the directory service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Returns true for 5xx responses and transport timeouts, the failures
    /// worth retrying later.
    pub fn is_server_error(&self) -> bool {
        match self {
            ApiError::Status { status, .. } => *status >= 500,
            ApiError::Http(e) => e.is_timeout() || e.status().is_some_and(|s| s.is_server_error()),
            _ => false,
        }
    }

    /// Returns the HTTP status code, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
