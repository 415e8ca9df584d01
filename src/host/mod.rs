//! Seam between the cleaner and the host logging system.
//!
//! The cleaner never probes for a host at runtime; one is injected at build
//! time, and its absence is a build error.

use crate::config::TransportOverrides;
use crate::internal;
use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Capabilities the cleaner needs from the host logging system.
pub trait LogHost: Send + Sync {
    /// Path of the file the host is currently writing. Re-read before every
    /// cleanup pass so the skip rule tracks rollover.
    fn current_file_path(&self) -> PathBuf;

    /// Points the host at a new file name within the same directory.
    fn set_file_name(&self, name: &str);

    /// Hands transport settings through to the host. Opaque to the cleaner.
    fn apply_transport(&self, overrides: &TransportOverrides);
}

/// File-backed host for applications without a richer logging framework.
///
/// Tracks the current file name under a fixed directory and records applied
/// transport overrides so callers can inspect them.
pub struct FileHost {
    directory: PathBuf,
    file_name: Mutex<String>,
    transport: Mutex<Option<TransportOverrides>>,
}

impl FileHost {
    /// Host rooted at `directory` (`~` is expanded). The initial file name is
    /// today's dated file; setup rolls it again anyway.
    #[must_use]
    pub fn new(directory: impl AsRef<str>) -> Self {
        let expanded = shellexpand::tilde(directory.as_ref());
        Self {
            directory: PathBuf::from(expanded.as_ref()),
            file_name: Mutex::new(format!("app-{}.log", Local::now().format("%Y%m%d"))),
            transport: Mutex::new(None),
        }
    }

    /// Host rooted at the platform state directory for `app`, the
    /// conventional place for log files when the application has no say.
    #[must_use]
    pub fn for_app(app: &str) -> Self {
        let directory = directories::ProjectDirs::from("", "", app).map_or_else(
            || PathBuf::from("logs"),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
            },
        );
        Self {
            directory,
            file_name: Mutex::new(format!("app-{}.log", Local::now().format("%Y%m%d"))),
            transport: Mutex::new(None),
        }
    }

    /// Directory this host writes into.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Overrides recorded by the last `apply_transport` call, if any.
    #[must_use]
    pub fn transport(&self) -> Option<TransportOverrides> {
        lock(&self.transport).clone()
    }
}

impl LogHost for FileHost {
    fn current_file_path(&self) -> PathBuf {
        self.directory.join(&*lock(&self.file_name))
    }

    fn set_file_name(&self, name: &str) {
        internal::debug("HOST", &format!("File name set to {name}"));
        *lock(&self.file_name) = name.to_string();
    }

    fn apply_transport(&self, overrides: &TransportOverrides) {
        if let Some(size) = overrides.max_size {
            internal::info("HOST", &format!("Transport max_size set to {size}"));
        }
        if let Some(ref template) = overrides.format {
            internal::info("HOST", &format!("Transport format set to {template}"));
        }
        if let Some(ref level) = overrides.level {
            internal::info("HOST", &format!("Transport level set to {level}"));
        }
        *lock(&self.transport) = Some(overrides.clone());
    }
}

// A poisoned lock only means another thread panicked mid-update; the stored
// string/overrides are still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
