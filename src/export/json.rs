//! JSON exporter for generated transformations.

use std::path::Path;

use serde_json::json;

use super::{ExportError, ExportResult};
use crate::models::Transformation;

/// Default export filename
pub const EXPORT_FILENAME: &str = "transformation_export.json";

/// Exporter for the transformation JSON export format.
pub struct JSONExporter;

impl JSONExporter {
    /// Export transformations as a JSON document.
    ///
    /// The document has a single top-level `"export"` key mapping to the
    /// transformation list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use studio_sync_sdk::convert::routes_to_transformations;
    /// use studio_sync_sdk::export::JSONExporter;
    /// use studio_sync_sdk::models::Route;
    ///
    /// let routes = vec![Route::api("a", "/a", "a")];
    /// let (tfs, _) = routes_to_transformations(&routes, "https://x", "");
    /// let result = JSONExporter.export(&tfs).unwrap();
    /// assert_eq!(result.format, "json");
    /// assert!(result.content.contains("\"export\""));
    /// ```
    pub fn export(&self, transformations: &[Transformation]) -> Result<ExportResult, ExportError> {
        let document = json!({"export": transformations});
        Ok(ExportResult {
            content: serde_json::to_string_pretty(&document)
                .map_err(|e| ExportError::SerializationError(e.to_string()))?,
            format: "json".to_string(),
        })
    }

    /// Export transformations and write the document to `path`.
    pub fn export_to_file(
        &self,
        transformations: &[Transformation],
        path: &Path,
    ) -> Result<ExportResult, ExportError> {
        let result = self.export(transformations)?;
        std::fs::write(path, &result.content)
            .map_err(|e| ExportError::IoError(format!("Failed to write {}: {}", path.display(), e)))?;
        Ok(result)
    }
}
