//! Platform API client
//!
//! Blocking HTTP client for the studio transformation endpoints, plus the
//! configuration layer and the drop-time cleanup guard. One synchronous
//! POST per operation: no retries, no backoff, failures propagate to the
//! caller as [`ClientError`].

pub mod api;
pub mod cleanup;
pub mod config;

use crate::validation::ValidationError;

pub use api::TransformationClient;
pub use cleanup::CleanupGuard;
pub use config::ClientConfig;

/// Error during a client operation
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration values failed validation
    #[error("Invalid configuration: {0}")]
    ValidationError(#[from] ValidationError),

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server responded with a non-success status
    #[error("Server returned {status} (trace-id {trace_id}): {body}")]
    StatusError {
        status: reqwest::StatusCode,
        trace_id: String,
        body: String,
    },

    /// Response body was not valid JSON
    #[error("Invalid response body: {0}")]
    ResponseError(#[from] serde_json::Error),
}
