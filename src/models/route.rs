//! Route model for the SDK

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of route exposed by the web framework.
///
/// Only [`RouteKind::Api`] routes carry request/response schemas and are
/// eligible for conversion; everything else is skipped by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    /// JSON API endpoint with optional body/response schemas
    Api,
    /// Static file mount
    Static,
    /// Websocket endpoint
    Websocket,
    /// Sub-application mount
    Mount,
}

/// A web-framework route as seen by this SDK.
///
/// Frameworks own their route types; this struct is the neutral view the
/// converter consumes, either built programmatically or loaded from a route
/// manifest (see [`crate::import`]).
///
/// # Example
///
/// ```rust
/// use studio_sync_sdk::models::Route;
///
/// let route = Route::api("score_post", "/score", "Score");
/// assert_eq!(route.display_name(), "Score");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Route {
    /// Route kind (only `api` routes are converted)
    pub kind: RouteKind,
    /// Stable unique identifier assigned by the framework
    pub unique_id: String,
    /// HTTP path of the route (e.g., "/score")
    pub path: String,
    /// Route handler name
    pub name: String,
    /// Human-readable summary, preferred over `name` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Route description/documentation
    #[serde(default)]
    pub description: String,
    /// JSON Schema of the request body, if the route declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_schema: Option<Value>,
    /// JSON Schema of the response model, if the route declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
}

impl Route {
    /// Create a new API route with the given identifier, path and name
    ///
    /// # Arguments
    ///
    /// * `unique_id` - Stable unique identifier for the route
    /// * `path` - HTTP path (leading slash optional)
    /// * `name` - Route handler name
    ///
    /// # Returns
    ///
    /// A new `Route` of kind `Api` with no schemas attached.
    pub fn api(
        unique_id: impl Into<String>,
        path: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Route {
            kind: RouteKind::Api,
            unique_id: unique_id.into(),
            path: path.into(),
            name: name.into(),
            summary: None,
            description: String::new(),
            body_schema: None,
            response_schema: None,
        }
    }

    /// Attach a request body schema
    pub fn with_body_schema(mut self, schema: Value) -> Self {
        self.body_schema = Some(schema);
        self
    }

    /// Attach a response schema
    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    /// Attach a human-readable summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Display name for the transformation: `summary` when present and
    /// non-empty, otherwise the handler `name`.
    pub fn display_name(&self) -> &str {
        match &self.summary {
            Some(summary) if !summary.is_empty() => summary,
            _ => &self.name,
        }
    }
}
