//! The two fixed naming conventions the engine recognizes.

use regex::Regex;
use std::sync::LazyLock;

/// Prefix of daily dated log files (`app-YYYYMMDD.log`).
pub const DATED_PREFIX: &str = "app-";

/// Suffix the host gives files it rotates away.
pub const ROTATED_SUFFIX: &str = ".old.log";

static DATED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^app-(\d{8})\.log$").expect("Invalid dated-file regex"));

/// How a directory entry relates to the retention policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// The file the host is writing right now; never deleted.
    Current,
    /// `*.old.log`, aged by filesystem modification time.
    Rotated,
    /// `app-YYYYMMDD.log`, aged by the stamp embedded in the name.
    Dated(String),
    /// Anything else is left untouched.
    Unrecognized,
}

/// Classifies `name` against the current file and the two naming conventions.
///
/// Order matters: the current file wins over either pattern, and the rotated
/// suffix wins over the dated pattern (`app-20200101.old.log` is rotated).
#[must_use]
pub fn classify(name: &str, current_name: Option<&str>) -> FileKind {
    if Some(name) == current_name {
        return FileKind::Current;
    }
    if name.ends_with(ROTATED_SUFFIX) {
        return FileKind::Rotated;
    }
    if let Some(caps) = DATED_REGEX.captures(name) {
        return FileKind::Dated(caps[1].to_string());
    }
    FileKind::Unrecognized
}
