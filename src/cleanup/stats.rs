//! Read-only aggregate view of a log directory.

use super::format_size;
use crate::internal;
use serde::Serialize;

/// Directory statistics. Counts every entry, not only recognized log files;
/// what the cleaner would not delete still occupies disk.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LogStats {
    /// Count of directory entries.
    pub total_files: usize,
    /// Combined byte size of all entries.
    pub total_size: u64,
    /// Name of the entry with the earliest modification time.
    pub oldest_file: Option<String>,
    /// Name of the entry with the latest modification time.
    pub newest_file: Option<String>,
    /// Modification time of the oldest entry, `%Y-%m-%d %H:%M:%S` local.
    pub oldest_date: Option<String>,
    /// Modification time of the newest entry, `%Y-%m-%d %H:%M:%S` local.
    pub newest_date: Option<String>,
    /// Directory the aggregate was taken over.
    pub directory: String,
    /// The cleaner's current rollover date, `YYYYMMDD`.
    pub current_date: String,
    /// Set when the directory could not be fully aggregated; counts cover
    /// whatever was read before the failure.
    pub error: Option<String>,
}

impl LogStats {
    /// Summarizes the aggregate through the internal logger.
    pub fn log(&self) {
        if let Some(ref error) = self.error {
            internal::error("STATS", &format!("Stats failed: {error}"));
            return;
        }
        internal::info("STATS", &format!("Total files: {}", self.total_files));
        internal::info(
            "STATS",
            &format!("Total size:  {}", format_size(self.total_size)),
        );
        if let Some(ref oldest) = self.oldest_file {
            internal::info("STATS", &format!("Oldest:      {oldest}"));
        }
        if let Some(ref newest) = self.newest_file {
            internal::info("STATS", &format!("Newest:      {newest}"));
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
