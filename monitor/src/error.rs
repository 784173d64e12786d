//! Monitor error types

use shared::SharedError;
use thiserror::Error;

/// Result type for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Monitor error types
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{endpoint} endpoint returned {status}")]
    ApiStatus {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode response body: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] SharedError),
}
