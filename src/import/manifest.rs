//! Route manifest parser.
//!
//! Accepts either a bare array of routes or a document with a top-level
//! `routes` key, in JSON or YAML. JSON is detected by the leading character
//! so the two formats can share one entry point.

use std::path::Path;

use serde_json::Value;

use super::ImportError;
use crate::models::Route;

/// Parse a route manifest from JSON or YAML content.
///
/// # Arguments
///
/// * `content` - Manifest content: `[ ... ]`, `{"routes": [ ... ]}`, or the
///   YAML equivalents
///
/// # Returns
///
/// The routes in manifest order.
pub fn parse_manifest(content: &str) -> Result<Vec<Route>, ImportError> {
    let trimmed = content.trim_start();
    let value: Value = if trimmed.starts_with('{') || trimmed.starts_with('[') {
        serde_json::from_str(content)
            .map_err(|e| ImportError::ParseError(format!("Invalid JSON: {}", e)))?
    } else {
        serde_yaml::from_str(content)
            .map_err(|e| ImportError::ParseError(format!("Invalid YAML: {}", e)))?
    };

    let routes_value = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove("routes").ok_or_else(|| {
            ImportError::ParseError("expected a 'routes' key or a top-level array".to_string())
        })?,
        _ => {
            return Err(ImportError::ParseError(
                "expected an array of routes".to_string(),
            ));
        }
    };

    serde_json::from_value(routes_value)
        .map_err(|e| ImportError::ParseError(format!("Invalid route entry: {}", e)))
}

/// Load and parse a route manifest file.
pub fn load_manifest(path: &Path) -> Result<Vec<Route>, ImportError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ImportError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;
    parse_manifest(&content)
}
