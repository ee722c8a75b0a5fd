//! Drop-time cleanup of uploaded transformations
//!
//! The original tooling registered a process-exit hook that bulk-deleted
//! everything it had uploaded. Here that becomes an RAII guard: hold it for
//! the lifetime of the serving process and the delete fires when it drops.

use tracing::{error, info};

use super::{ClientError, TransformationClient};

/// Deletes a set of transformations from the platform when dropped.
///
/// Returned by the sync orchestrator when cleanup is requested. Call
/// [`disarm`] to keep the remote records, or [`run`] to delete them early
/// and observe the result.
///
/// Failures during drop are logged, never panicked on.
///
/// [`disarm`]: CleanupGuard::disarm
/// [`run`]: CleanupGuard::run
#[derive(Debug)]
pub struct CleanupGuard {
    client: TransformationClient,
    ids: Vec<String>,
    armed: bool,
}

impl CleanupGuard {
    /// Create a guard that will delete `ids` on drop
    pub fn new(client: TransformationClient, ids: Vec<String>) -> Self {
        Self {
            client,
            ids,
            armed: true,
        }
    }

    /// Identifiers scheduled for deletion
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Keep the remote transformations: dropping after this is a no-op
    pub fn disarm(mut self) {
        self.armed = false;
    }

    /// Delete now instead of at drop, returning the server response
    pub fn run(mut self) -> Result<serde_json::Value, ClientError> {
        self.armed = false;
        self.client.cleanup_transformations(&self.ids)
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if !self.armed || self.ids.is_empty() {
            return;
        }
        match self.client.cleanup_transformations(&self.ids) {
            Ok(_) => info!(count = self.ids.len(), "deleted transformations on exit"),
            Err(e) => error!(error = %e, "failed to delete transformations on exit"),
        }
    }
}
