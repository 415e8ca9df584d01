//! Outcome of a single cleanup pass.

use crate::internal;
use serde::Serialize;

/// What a cleanup pass did. A pass always reports its counts, even when it
/// ends early on a listing failure.
#[derive(Debug, Default, Serialize)]
pub struct CleanupResult {
    /// Names of deleted files, in scan order.
    pub deleted: Vec<String>,
    /// Set when the directory listing itself failed. Per-file failures only
    /// skip that file and are not recorded here.
    pub error: Option<String>,
}

impl CleanupResult {
    /// Number of files deleted in this pass.
    #[must_use]
    pub fn count(&self) -> usize {
        self.deleted.len()
    }

    pub(crate) fn from_error(message: String) -> Self {
        Self {
            deleted: Vec::new(),
            error: Some(message),
        }
    }

    /// Summarizes the pass through the internal logger.
    pub fn log(&self) {
        if let Some(ref error) = self.error {
            internal::error("CLEANUP", &format!("Cleanup failed: {error}"));
        } else if self.deleted.is_empty() {
            internal::info("CLEANUP", "Cleanup complete. No old files to delete.");
        } else {
            internal::info(
                "CLEANUP",
                &format!("Cleanup complete. Deleted {} old log file(s).", self.count()),
            );
        }
    }

    /// Machine-readable form for tooling and host dashboards.
    ///
    /// # Errors
    /// Serialization of this type does not fail in practice; the `Result` is
    /// `serde_json`'s signature.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
