//! Without automated retention, log directories grow until the disk fills.
//! This module decides which files are old enough to delete and removes
//! them, leaving everything it does not positively recognize alone.

mod age;
mod classify;
mod result;
mod size;
mod stats;

pub use age::{DateParseError, age_from_mtime, age_from_stamp, is_expired};
pub use classify::{DATED_PREFIX, FileKind, ROTATED_SUFFIX, classify};
pub use result::CleanupResult;
pub use size::format_size;
pub use stats::LogStats;

use crate::internal;
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Deletes expired log files from `directory`, sparing `current_file`.
///
/// Never fails from the caller's perspective: a listing failure lands in the
/// result's `error` field, and a per-file failure skips that file only.
#[must_use]
pub fn sweep(directory: &Path, current_file: &Path, max_age_days: u32) -> CleanupResult {
    match sweep_pass(directory, current_file, max_age_days) {
        Ok(result) => result,
        Err(e) => {
            internal::error(
                "CLEANUP",
                &format!("Failed to list {}: {e}", directory.display()),
            );
            CleanupResult::from_error(e.to_string())
        }
    }
}

/// Fallible variant for the setup-time pass, where a listing failure must
/// reach the caller instead of degrading to a result field.
pub(crate) fn sweep_pass(
    directory: &Path,
    current_file: &Path,
    max_age_days: u32,
) -> io::Result<CleanupResult> {
    internal::info(
        "CLEANUP",
        &format!("Starting cleanup in {}", directory.display()),
    );
    let entries = fs::read_dir(directory)?;
    let today = Local::now().date_naive();
    let current_name = current_file
        .file_name()
        .and_then(|n| n.to_str())
        .map(ToOwned::to_owned);
    let mut result = CleanupResult::default();

    for entry in entries {
        // A vanished or unreadable entry must not end the pass early.
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                internal::warn("CLEANUP", &format!("Unreadable directory entry: {e}"));
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        internal::trace("CLEANUP", &format!("Scanning {name}"));

        match classify(&name, current_name.as_deref()) {
            FileKind::Current | FileKind::Unrecognized => {}
            FileKind::Rotated => match entry.metadata().and_then(|meta| meta.modified()) {
                Ok(mtime) => {
                    let file_age = age_from_mtime(mtime, today);
                    if is_expired(file_age, max_age_days) {
                        delete(&entry.path(), &name, file_age, &mut result);
                    }
                }
                Err(e) => {
                    internal::warn("CLEANUP", &format!("Failed to process {name}: {e}"));
                }
            },
            FileKind::Dated(stamp) => match age_from_stamp(&stamp, today) {
                Ok(file_age) => {
                    if is_expired(file_age, max_age_days) {
                        delete(&entry.path(), &name, file_age, &mut result);
                    }
                }
                Err(e) => {
                    internal::warn("CLEANUP", &format!("Failed to process {name}: {e}"));
                }
            },
        }
    }

    result.log();
    Ok(result)
}

/// A file that is already gone counts as clean; any other delete failure is
/// logged and the file is left for the next pass to retry.
fn delete(path: &Path, name: &str, file_age: i64, result: &mut CleanupResult) {
    match fs::remove_file(path) {
        Ok(()) => {
            internal::info(
                "CLEANUP",
                &format!("Deleted old log: {name} ({file_age} days old)"),
            );
            result.deleted.push(name.to_string());
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            internal::debug("CLEANUP", &format!("Already gone: {name}"));
        }
        Err(e) => {
            internal::warn("CLEANUP", &format!("Failed to delete {name}: {e}"));
        }
    }
}

/// Read-only aggregate of everything in `directory`: no classification, no
/// current-file exemption, nothing mutated.
#[must_use]
pub fn stats(directory: &Path) -> LogStats {
    let mut aggregate = LogStats {
        directory: directory.display().to_string(),
        current_date: Local::now().format("%Y%m%d").to_string(),
        ..LogStats::default()
    };

    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            internal::error(
                "STATS",
                &format!("Failed to list {}: {e}", directory.display()),
            );
            aggregate.error = Some(e.to_string());
            return aggregate;
        }
    };

    let mut oldest: Option<SystemTime> = None;
    let mut newest: Option<SystemTime> = None;

    for entry in entries {
        let described = entry.and_then(|entry| {
            let meta = entry.metadata()?;
            let modified = meta.modified()?;
            Ok((entry.file_name(), meta.len(), modified))
        });
        let (name_os, len, modified) = match described {
            Ok(described) => described,
            Err(e) => {
                // Counts so far still stand; the error field says they are partial.
                aggregate.error = Some(e.to_string());
                break;
            }
        };
        let name = name_os.to_string_lossy().into_owned();

        aggregate.total_files += 1;
        aggregate.total_size += len;

        // Strict comparisons: the first entry seen keeps the title on ties.
        if oldest.is_none_or(|t| modified < t) {
            oldest = Some(modified);
            aggregate.oldest_file = Some(name.clone());
            aggregate.oldest_date = Some(format_mtime(modified));
        }
        if newest.is_none_or(|t| modified > t) {
            newest = Some(modified);
            aggregate.newest_file = Some(name);
            aggregate.newest_date = Some(format_mtime(modified));
        }
    }

    aggregate
}

fn format_mtime(mtime: SystemTime) -> String {
    DateTime::<Local>::from(mtime)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
