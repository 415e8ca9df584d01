//! Unified error type for all logsweep operations.

use crate::config::ConfigError;

/// Error type for logsweep operations.
#[derive(Debug)]
pub enum Error {
    /// Invalid cleaner configuration.
    Config(ConfigError),
    /// No log host was supplied at build time.
    CollaboratorMissing,
    /// I/O error.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::CollaboratorMissing => {
                write!(f, "no log host configured; supply one with `host()`")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::CollaboratorMissing => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
