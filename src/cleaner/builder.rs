//! Stepwise construction. The controller has a required collaborator (the
//! log host) and optional ones (error hook, transport overrides), which a
//! plain constructor cannot express well.

use super::{ErrorHook, LogCleaner};
use crate::config::{CleanerConfig, TransportOverrides};
use crate::error::Error;
use crate::host::LogHost;
use std::sync::Arc;

/// Builder for [`LogCleaner`]. Obtain one via `LogCleaner::builder()`.
#[derive(Default)]
pub struct LogCleanerBuilder {
    config: CleanerConfig,
    host: Option<Arc<dyn LogHost>>,
    on_error: Option<ErrorHook>,
}

impl LogCleanerBuilder {
    /// Starts from the default policy (30 days) with no host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration, e.g. one loaded from TOML.
    #[must_use]
    pub fn config(mut self, config: CleanerConfig) -> Self {
        self.config = config;
        self
    }

    /// Files strictly older than this many days are deleted.
    #[must_use]
    pub const fn max_age_days(mut self, days: u32) -> Self {
        self.config.max_age_days = days;
        self
    }

    /// Transport overrides handed to the host at setup.
    #[must_use]
    pub fn transport(mut self, overrides: TransportOverrides) -> Self {
        self.config.transport = Some(overrides);
        self
    }

    /// The host logging system this cleaner manages. Required.
    #[must_use]
    pub fn host(mut self, host: impl LogHost + 'static) -> Self {
        self.host = Some(Arc::new(host));
        self
    }

    /// Shared host, for callers that keep their own handle to it.
    #[must_use]
    pub fn shared_host(mut self, host: Arc<dyn LogHost>) -> Self {
        self.host = Some(host);
        self
    }

    /// Invoked with every error the cleaner catches internally.
    #[must_use]
    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(hook));
        self
    }

    /// Validates the configuration and assembles the controller. No side
    /// effects: nothing is deleted or scheduled until `setup`.
    ///
    /// # Errors
    /// `Error::Config` for an invalid configuration, then
    /// `Error::CollaboratorMissing` when no host was supplied.
    pub fn build(self) -> Result<LogCleaner, Error> {
        self.config.validate()?;
        let host = self.host.ok_or(Error::CollaboratorMissing)?;
        Ok(LogCleaner::from_parts(self.config, host, self.on_error))
    }
}
