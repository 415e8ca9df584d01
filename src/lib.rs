#![forbid(unsafe_code)]

//! `logsweep` - Scheduled log retention for application log directories.
//!
//! Deletes log files older than a configured age from a single directory:
//! once at setup, once at every local midnight (together with a dated
//! filename rollover), and on demand. Two naming conventions are recognized:
//! dated daily files (`app-YYYYMMDD.log`, aged by the date in the name) and
//! rotated files (`*.old.log`, aged by modification time). Everything else
//! is left alone.
//!
//! # Example
//!
//! ```
//! use logsweep::{FileHost, LogCleaner};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut cleaner = LogCleaner::builder()
//!     .max_age_days(30)
//!     .host(FileHost::new(dir.path().to_string_lossy()))
//!     .build()
//!     .unwrap();
//!
//! cleaner.setup().unwrap();
//! let result = cleaner.cleanup();
//! assert!(result.error.is_none());
//! cleaner.shutdown();
//! ```

pub mod cleaner;
pub mod cleanup;
pub mod config;
pub mod host;
pub mod internal;
pub mod scheduler;

mod error;

// Re-exports for convenience
pub use cleaner::{ErrorHook, LogCleaner, LogCleanerBuilder};
pub use cleanup::{
    CleanupResult, DateParseError, FileKind, LogStats, age_from_mtime, age_from_stamp, classify,
    format_size, is_expired, stats, sweep,
};
pub use config::{CleanerConfig, ConfigError, TransportOverrides, validate};
pub use error::Error;
pub use host::{FileHost, LogHost};
pub use scheduler::{MidnightScheduler, delay_until_next_midnight};
