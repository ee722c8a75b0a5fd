//! Transformation model for the SDK

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Execution type literal attached to every generated transformation.
pub const EXECUTION_TYPE: &str = "studio-api";

/// A studio transformation record as understood by the platform API.
///
/// Built fresh per route by the converter and never mutated afterwards;
/// uploaded via bulk update or written out by the JSON exporter.
///
/// Field names follow the platform wire format (note the `_id` rename).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transformation {
    /// Unmodified route unique identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Route unique identifier plus the optional deployment suffix
    pub transformation_id: String,
    /// Display name (route summary, or handler name as fallback)
    pub name: String,
    /// Route description
    #[serde(default)]
    pub description: String,
    /// Full URL the platform calls back into (base URL + route path)
    pub studio_api_path: String,
    /// Always [`EXECUTION_TYPE`]
    pub execution_type: String,
    /// Request body schema with property metadata migrated
    pub input_schema: Value,
    /// Response schema, passed through untouched
    pub output_schema: Value,
}
