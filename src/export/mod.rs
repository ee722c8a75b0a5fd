//! Export functionality
//!
//! Writes generated transformations to a local JSON export instead of
//! uploading them. Export never touches the network.

pub mod json;

/// Result of an export operation.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[must_use = "export results contain the exported content and should be used"]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

// Re-export for convenience
pub use json::{EXPORT_FILENAME, JSONExporter};
