//! Sync orchestrator
//!
//! Drives the converter, then either uploads the generated transformations
//! or writes them to a local JSON export. When cleanup is requested the
//! uploaded identifiers come back wrapped in a [`CleanupGuard`] that deletes
//! them from the platform when dropped.

use std::path::PathBuf;

use tracing::info;

use crate::client::{CleanupGuard, ClientError, TransformationClient};
use crate::convert::routes_to_transformations;
use crate::export::{EXPORT_FILENAME, ExportError, JSONExporter};
use crate::models::{Route, Transformation};

/// Error during a sync run
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Options for [`create_transformations`].
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Suffix appended to each `transformation_id`
    pub id_suffix: String,
    /// Schedule deletion of the uploaded transformations at drop time
    pub cleanup: bool,
    /// Write a JSON export instead of uploading (no network call)
    pub export_json: bool,
    /// Export file path used in export mode
    pub export_path: PathBuf,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            id_suffix: String::new(),
            cleanup: true,
            export_json: false,
            export_path: PathBuf::from(EXPORT_FILENAME),
        }
    }
}

/// Result of a sync run.
#[derive(Debug)]
pub struct SyncOutcome {
    /// Generated transformation records
    pub transformations: Vec<Transformation>,
    /// Their `transformation_id`s, in route order
    pub transformation_ids: Vec<String>,
    /// Armed when cleanup was requested and an upload happened; hold it for
    /// the lifetime of the serving process
    pub cleanup: Option<CleanupGuard>,
}

/// Convert routes and upload (or export) the resulting transformations.
///
/// In export mode no network call is made and no client is constructed;
/// otherwise the client is built from the environment and the records are
/// uploaded via bulk update.
///
/// Cleanup is scheduled only when an upload actually happened: export-only
/// runs create nothing remotely, so they return no guard.
pub fn create_transformations(
    routes: &[Route],
    base_url: &str,
    options: SyncOptions,
) -> Result<SyncOutcome, SyncError> {
    run(None, routes, base_url, options)
}

/// Like [`create_transformations`], but with a pre-built client.
pub fn create_transformations_with(
    client: TransformationClient,
    routes: &[Route],
    base_url: &str,
    options: SyncOptions,
) -> Result<SyncOutcome, SyncError> {
    run(Some(client), routes, base_url, options)
}

fn run(
    client: Option<TransformationClient>,
    routes: &[Route],
    base_url: &str,
    options: SyncOptions,
) -> Result<SyncOutcome, SyncError> {
    let (transformations, transformation_ids) =
        routes_to_transformations(routes, base_url, &options.id_suffix);

    if options.export_json {
        let export = JSONExporter.export_to_file(&transformations, &options.export_path)?;
        info!(
            count = transformations.len(),
            format = %export.format,
            path = %options.export_path.display(),
            "exported transformations"
        );
        return Ok(SyncOutcome {
            transformations,
            transformation_ids,
            cleanup: None,
        });
    }

    let client = match client {
        Some(client) => client,
        None => TransformationClient::from_env()?,
    };
    client.upload_transformations(&transformations)?;
    info!(count = transformations.len(), "uploaded transformations");

    let cleanup = options
        .cleanup
        .then(|| CleanupGuard::new(client, transformation_ids.clone()));

    Ok(SyncOutcome {
        transformations,
        transformation_ids,
        cleanup,
    })
}
