//! Cleaner configuration: programmatic construction, TOML loading, validation.
//!
//! Separated from the validation rules so the serde schema stays independent
//! of the checks applied before a config is accepted.

mod error;
mod validate;

pub use error::ConfigError;
pub use validate::{VALID_LEVELS, validate};

use crate::internal;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Retention policy plus optional host transport overrides.
///
/// Immutable once accepted by a cleaner. Invalid configs are rejected whole,
/// never partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CleanerConfig {
    /// Files strictly older than this many days are deleted. Required in
    /// config files; must be greater than zero.
    pub max_age_days: u32,
    /// Settings handed through to the log host at setup, never interpreted here.
    #[serde(default)]
    pub transport: Option<TransportOverrides>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            max_age_days: 30,
            transport: None,
        }
    }
}

impl CleanerConfig {
    /// Policy-only configuration with no transport overrides.
    #[must_use]
    pub const fn new(max_age_days: u32) -> Self {
        Self {
            max_age_days,
            transport: None,
        }
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    /// Fails when the file cannot be read or parsed, or when the parsed
    /// values do not pass [`validate`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        internal::debug("CONFIG", &format!("Loading config from {}", path.display()));
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        validate(&config)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Same checks as [`load_from`](Self::load_from) applies, for configs
    /// built in code.
    ///
    /// # Errors
    /// First rule violation wins; see [`validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(self)
    }
}

/// Pass-through settings for the host's file transport.
///
/// The cleaner validates the ranges and hands the rest to the host untouched;
/// in particular `format` placeholders (`{y}{m}{d}{h}{i}{s}{ms}{level}{text}`)
/// are the host's business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransportOverrides {
    /// Maximum transport file size in bytes; must be greater than zero.
    pub max_size: Option<u64>,
    /// Line template for the host transport.
    pub format: Option<String>,
    /// Minimum level the transport records, or `"false"` to disable it.
    pub level: Option<String>,
}

impl TransportOverrides {
    /// Empty overrides; nothing is changed on the host until a field is set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the transport file size in bytes.
    #[must_use]
    pub const fn max_size(mut self, bytes: u64) -> Self {
        self.max_size = Some(bytes);
        self
    }

    /// Sets the transport line template.
    #[must_use]
    pub fn format(mut self, template: impl Into<String>) -> Self {
        self.format = Some(template.into());
        self
    }

    /// Sets the transport level (one of [`VALID_LEVELS`]).
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }
}
