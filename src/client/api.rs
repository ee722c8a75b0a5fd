//! Transformation API operations
//!
//! Each operation issues exactly one blocking POST to a fixed endpoint on
//! the region host, authorized with the `project:api_key` scheme, and logs
//! the response body together with the `x-trace-id` correlation header.

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::{Value, json};
use tracing::info;

use super::{ClientConfig, ClientError};
use crate::models::Transformation;

/// Endpoint for listing custom transformations
pub const LIST_ENDPOINT: &str = "/latest/studios/transformations/custom/list";

/// Endpoint for bulk create-or-update of custom transformations
pub const BULK_UPDATE_ENDPOINT: &str = "/latest/studios/transformations/custom/bulk_update";

/// Endpoint for bulk deletion of custom transformations
pub const BULK_DELETE_ENDPOINT: &str = "/latest/studios/transformations/custom/bulk_delete";

/// Response header carrying the request correlation identifier
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Page size used when listing transformations
const LIST_PAGE_SIZE: u32 = 10;

/// Blocking client for the studio transformation endpoints.
///
/// # Example
///
/// ```rust,no_run
/// use studio_sync_sdk::client::{ClientConfig, TransformationClient};
///
/// let client = TransformationClient::new(ClientConfig::from_env()?)?;
/// let listing = client.list_transformations()?;
/// println!("{listing}");
/// # Ok::<(), studio_sync_sdk::client::ClientError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TransformationClient {
    config: ClientConfig,
    http: Client,
}

impl TransformationClient {
    /// Create a client from a validated configuration
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        Ok(Self {
            config,
            http: Client::new(),
        })
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List the first page of custom transformations registered remotely
    pub fn list_transformations(&self) -> Result<Value, ClientError> {
        self.post(
            LIST_ENDPOINT,
            &json!({"page": 1, "page_size": LIST_PAGE_SIZE}),
        )
    }

    /// Create or update the given transformations remotely
    pub fn upload_transformations(
        &self,
        transformations: &[Transformation],
    ) -> Result<Value, ClientError> {
        self.post(BULK_UPDATE_ENDPOINT, &json!({"updates": transformations}))
    }

    /// Delete the transformations with the given identifiers
    pub fn cleanup_transformations(&self, ids: &[String]) -> Result<Value, ClientError> {
        self.post(BULK_DELETE_ENDPOINT, &json!({"ids": ids}))
    }

    /// Issue a single POST and return the parsed response body.
    ///
    /// Non-success statuses become [`ClientError::StatusError`] with the
    /// body and trace-id attached; no retry is attempted.
    fn post(&self, endpoint: &str, body: &Value) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.config.api_host(), endpoint);

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.config.authorization())
            .json(body)
            .send()?;

        let trace_id = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_string();
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            return Err(ClientError::StatusError {
                status,
                trace_id,
                body: text,
            });
        }

        info!(endpoint, %trace_id, response = %text, "transformation API call succeeded");
        Ok(serde_json::from_str(&text)?)
    }
}
