//! Tests for configuration loading and validation.

use logsweep::{CleanerConfig, ConfigError, TransportOverrides, validate};
use std::fs;
use tempfile::tempdir;

#[test]
fn defaults() {
    let config = CleanerConfig::default();
    assert_eq!(config.max_age_days, 30);
    assert!(config.transport.is_none());
    assert!(validate(&config).is_ok());
}

#[test]
fn minimal_accepted() {
    let config: CleanerConfig = toml::from_str("max_age_days = 1").unwrap();
    assert_eq!(config.max_age_days, 1);
    assert!(validate(&config).is_ok());
}

#[test]
fn fully_populated_accepted() {
    let config: CleanerConfig = toml::from_str(
        r#"
        max_age_days = 14

        [transport]
        max_size = 1048576
        format = "{h}:{i}:{s}.{ms} [{level}] {text}"
        level = "silly"
        "#,
    )
    .unwrap();
    assert!(validate(&config).is_ok());

    let transport = config.transport.unwrap();
    assert_eq!(transport.max_size, Some(1_048_576));
    assert_eq!(transport.level.as_deref(), Some("silly"));
}

#[test]
fn missing_max_age_rejected() {
    assert!(toml::from_str::<CleanerConfig>("").is_err());
}

#[test]
fn non_numeric_max_age_rejected() {
    assert!(toml::from_str::<CleanerConfig>(r#"max_age_days = "thirty""#).is_err());
}

#[test]
fn negative_max_age_rejected() {
    assert!(toml::from_str::<CleanerConfig>("max_age_days = -5").is_err());
}

#[test]
fn malformed_transport_rejected() {
    assert!(toml::from_str::<CleanerConfig>("max_age_days = 30\ntransport = 7").is_err());
}

#[test]
fn zero_max_age_rejected() {
    let config = CleanerConfig::new(0);
    assert!(matches!(
        validate(&config),
        Err(ConfigError::MaxAgeOutOfRange(0))
    ));
}

#[test]
fn zero_max_size_rejected() {
    let mut config = CleanerConfig::new(30);
    config.transport = Some(TransportOverrides::new().max_size(0));
    assert!(matches!(
        validate(&config),
        Err(ConfigError::MaxSizeOutOfRange(0))
    ));
}

#[test]
fn invalid_level_rejected() {
    let mut config = CleanerConfig::new(30);
    config.transport = Some(TransportOverrides::new().level("loud"));
    assert!(matches!(validate(&config), Err(ConfigError::InvalidLevel(_))));
}

#[test]
fn all_valid_levels_accepted() {
    for level in ["error", "warn", "info", "verbose", "debug", "silly", "false"] {
        let mut config = CleanerConfig::new(7);
        config.transport = Some(TransportOverrides::new().level(level));
        assert!(
            validate(&config).is_ok(),
            "level '{level}' should be accepted"
        );
    }
}

#[test]
fn first_failure_wins() {
    // Both the age and the level are invalid; the age is checked first.
    let mut config = CleanerConfig::new(0);
    config.transport = Some(TransportOverrides::new().level("loud"));
    assert!(matches!(
        validate(&config),
        Err(ConfigError::MaxAgeOutOfRange(0))
    ));
}

#[test]
fn load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logsweep.toml");
    fs::write(&path, "max_age_days = 7\n").unwrap();

    let config = CleanerConfig::load_from(&path).unwrap();
    assert_eq!(config.max_age_days, 7);
}

#[test]
fn load_from_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logsweep.toml");
    fs::write(&path, "max_age_days = 0\n").unwrap();

    assert!(matches!(
        CleanerConfig::load_from(&path),
        Err(ConfigError::MaxAgeOutOfRange(0))
    ));
}

#[test]
fn load_from_missing_file() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        CleanerConfig::load_from(&dir.path().join("none.toml")),
        Err(ConfigError::Io(_))
    ));
}
