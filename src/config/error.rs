//! Configuration error types.

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a config file.
    Io(std::io::Error),
    /// TOML parsing error.
    Parse(toml::de::Error),
    /// `max_age_days` outside its valid range.
    MaxAgeOutOfRange(u32),
    /// Transport `max_size` outside its valid range.
    MaxSizeOutOfRange(u64),
    /// Transport level not in the accepted set.
    InvalidLevel(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::MaxAgeOutOfRange(v) => {
                write!(f, "max_age_days must be greater than 0 (got {v})")
            }
            Self::MaxSizeOutOfRange(v) => {
                write!(f, "transport max_size must be greater than 0 (got {v})")
            }
            Self::InvalidLevel(level) => write!(f, "invalid transport level: '{level}'"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::MaxAgeOutOfRange(_) | Self::MaxSizeOutOfRange(_) | Self::InvalidLevel(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}
