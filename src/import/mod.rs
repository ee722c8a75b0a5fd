//! Import functionality
//!
//! Parses route manifests: a JSON or YAML dump of an application's route
//! table, used by the CLI and by applications that export their routes
//! rather than building [`crate::models::Route`] values in code.

pub mod manifest;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

pub use manifest::{load_manifest, parse_manifest};
