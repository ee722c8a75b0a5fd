//! Studio Sync SDK - Publish API routes as studio transformations
//!
//! Provides:
//! - Route to transformation conversion (schema translation, URL joining,
//!   property metadata migration)
//! - A blocking client for the platform's transformation endpoints
//!   (list / bulk update / bulk delete)
//! - JSON export of generated transformations
//! - Drop-time cleanup of uploaded transformations

pub mod client;
pub mod convert;
pub mod export;
pub mod import;
pub mod models;
pub mod sync;
pub mod validation;

// Re-export commonly used types
pub use client::{CleanupGuard, ClientConfig, ClientError, TransformationClient};
pub use convert::routes_to_transformations;
pub use export::{ExportError, ExportResult, JSONExporter};
pub use import::{ImportError, load_manifest, parse_manifest};
pub use models::{Route, RouteKind, Transformation};
pub use sync::{
    SyncError, SyncOptions, SyncOutcome, create_transformations, create_transformations_with,
};
pub use validation::{ValidationError, ValidationResult};
