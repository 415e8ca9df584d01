//! Schema checks applied before a configuration is accepted.

use super::{CleanerConfig, ConfigError};

/// Levels the host file transport understands; `"false"` disables it.
pub const VALID_LEVELS: &[&str] = &[
    "error", "warn", "info", "verbose", "debug", "silly", "false",
];

/// Checks `config` against the schema. The first rule violation wins; rules
/// are never aggregated. Structural rules (field presence and types) are
/// discharged by the type system and the serde layer before this runs.
///
/// # Errors
/// `MaxAgeOutOfRange` for a zero age, then `MaxSizeOutOfRange` and
/// `InvalidLevel` for the transport section, in that order.
pub fn validate(config: &CleanerConfig) -> Result<(), ConfigError> {
    if config.max_age_days == 0 {
        return Err(ConfigError::MaxAgeOutOfRange(config.max_age_days));
    }

    if let Some(ref transport) = config.transport {
        if let Some(size) = transport.max_size
            && size == 0
        {
            return Err(ConfigError::MaxSizeOutOfRange(size));
        }
        if let Some(ref level) = transport.level
            && !VALID_LEVELS.contains(&level.as_str())
        {
            return Err(ConfigError::InvalidLevel(level.clone()));
        }
    }

    Ok(())
}
