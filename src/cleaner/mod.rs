//! Ties policy, engine, scheduler, and host together behind one owner-held
//! controller. There is no global instance; callers build and own theirs.

mod builder;

pub use builder::LogCleanerBuilder;

use crate::cleanup::{self, CleanupResult, LogStats};
use crate::config::CleanerConfig;
use crate::error::Error;
use crate::host::LogHost;
use crate::internal;
use crate::scheduler::MidnightScheduler;
use chrono::Local;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Called with every error the cleaner catches internally.
pub type ErrorHook = Arc<dyn Fn(&Error) + Send + Sync>;

/// State shared between the owning controller and the midnight worker.
struct Core {
    config: CleanerConfig,
    host: Arc<dyn LogHost>,
    directory: Mutex<Option<PathBuf>>,
    current_date: Mutex<String>,
    on_error: Option<ErrorHook>,
}

impl Core {
    /// Points the host at today's dated file and remembers the date for stats.
    fn roll_file_name(&self) {
        let date = Local::now().format("%Y%m%d").to_string();
        let name = format!("{}{date}.log", cleanup::DATED_PREFIX);
        self.host.set_file_name(&name);
        *lock(&self.current_date) = date;
        internal::info("CLEANER", &format!("Log file: {name}"));
    }

    /// Never fails; a listing error lands in the result and the error hook.
    fn run_cleanup(&self) -> CleanupResult {
        match self.try_cleanup() {
            Ok(result) => result,
            Err(e) => {
                let message = e.to_string();
                self.report(&e);
                CleanupResult::from_error(message)
            }
        }
    }

    fn try_cleanup(&self) -> Result<CleanupResult, Error> {
        let directory = lock(&self.directory).clone().ok_or_else(not_set_up)?;
        // The host's idea of "current" changes at every rollover; re-read it
        // for each pass so the skip rule tracks the live file.
        let current = self.host.current_file_path();
        cleanup::sweep_pass(&directory, &current, self.config.max_age_days).map_err(Error::Io)
    }

    fn collect_stats(&self) -> LogStats {
        let directory = lock(&self.directory).clone();
        let mut aggregate = directory.map_or_else(
            || LogStats {
                error: Some(not_set_up().to_string()),
                ..LogStats::default()
            },
            |directory| cleanup::stats(&directory),
        );
        aggregate.current_date = lock(&self.current_date).clone();
        aggregate
    }

    /// Routes an error to the caller's hook. A panicking hook is contained
    /// so the error channel itself cannot take the host process down.
    fn report(&self, error: &Error) {
        internal::error("CLEANER", &format!("{error}"));
        if let Some(ref hook) = self.on_error
            && panic::catch_unwind(AssertUnwindSafe(|| hook(error))).is_err()
        {
            internal::error("CLEANER", "Error hook panicked; ignoring");
        }
    }
}

fn not_set_up() -> Error {
    Error::Io(io::Error::new(
        io::ErrorKind::NotFound,
        "cleaner has not been set up",
    ))
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scheduled log-retention controller. See the crate docs for an example.
pub struct LogCleaner {
    core: Arc<Core>,
    scheduler: MidnightScheduler,
}

impl LogCleaner {
    /// Entry point for construction.
    #[must_use]
    pub fn builder() -> LogCleanerBuilder {
        LogCleanerBuilder::new()
    }

    fn from_parts(config: CleanerConfig, host: Arc<dyn LogHost>, on_error: Option<ErrorHook>) -> Self {
        Self {
            core: Arc::new(Core {
                config,
                host,
                directory: Mutex::new(None),
                current_date: Mutex::new(Local::now().format("%Y%m%d").to_string()),
                on_error,
            }),
            scheduler: MidnightScheduler::new(),
        }
    }

    /// Applies the configuration to the host, runs the initial cleanup pass,
    /// and arms the midnight timer.
    ///
    /// Calling `setup` again fully replaces the previous state: the pending
    /// timer is cancelled (exactly once) before everything is redone.
    ///
    /// # Errors
    /// The initial pass must be able to list the log directory. Failures are
    /// handed to the error hook, then returned.
    pub fn setup(&mut self) -> Result<(), Error> {
        match self.try_setup() {
            Ok(()) => Ok(()),
            Err(e) => {
                self.core.report(&e);
                Err(e)
            }
        }
    }

    fn try_setup(&mut self) -> Result<(), Error> {
        // Replace any previous schedule before touching shared state.
        self.scheduler.cancel();

        if let Some(ref transport) = self.core.config.transport {
            self.core.host.apply_transport(transport);
        }

        self.core.roll_file_name();

        // The directory is derived from the host's current file once;
        // rollover later changes the file name, never the directory.
        let current = self.core.host.current_file_path();
        let directory = current
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .ok_or_else(|| {
                Error::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("log path has no parent directory: {}", current.display()),
                ))
            })?;
        *lock(&self.core.directory) = Some(directory.to_path_buf());

        // The initial pass runs before the timer exists; its failure leaves
        // the scheduler unarmed.
        self.core.try_cleanup()?;

        let core = Arc::clone(&self.core);
        self.scheduler.arm(move || {
            internal::info("CLEANER", "Midnight reached - rotating log file");
            core.roll_file_name();
            core.run_cleanup();
        });

        internal::info(
            "CLEANER",
            &format!(
                "Setup complete. Max age: {} days, Log dir: {}",
                self.core.config.max_age_days,
                directory.display()
            ),
        );
        Ok(())
    }

    /// Deletes expired files now. Never fails; see [`CleanupResult::error`].
    pub fn cleanup(&self) -> CleanupResult {
        self.core.run_cleanup()
    }

    /// Aggregates the log directory without touching anything.
    #[must_use]
    pub fn stats(&self) -> LogStats {
        self.core.collect_stats()
    }

    /// Quit hook: one last synchronous pass, then the timer is released.
    pub fn shutdown(&mut self) {
        internal::info("CLEANER", "Shutting down - running final cleanup");
        self.core.run_cleanup();
        self.scheduler.cancel();
    }

    /// Whether the midnight timer is pending.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// The directory swept by this cleaner, once `setup` has derived it.
    #[must_use]
    pub fn directory(&self) -> Option<PathBuf> {
        lock(&self.core.directory).clone()
    }
}
