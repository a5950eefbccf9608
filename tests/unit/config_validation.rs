//! Unit tests for configuration validation.

use shade_motion::config::{validate_config, SystemConfig};
use shade_motion::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[calibration]
seconds_to_open = 12
seconds_to_close = 8

[watchdog]
required = true
refresh_every_secs = 10
settle_ms = 50

[actuator]
opening_duty = 180
closing_duty = 0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a zero travel time.
#[test]
fn test_zero_travel_time_fails_validation() {
    let toml_str = r#"
[calibration]
seconds_to_open = 10
seconds_to_close = 0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidTravelTime { .. }))
    ));
}

/// Test validation fails when both direction commands coincide.
#[test]
fn test_duty_signal_conflict_fails_validation() {
    let toml_str = r#"
[actuator]
opening_duty = 90
closing_duty = 90
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::DutySignalConflict { .. }))
    ));
}

/// Test validation fails for a zero refresh period.
#[test]
fn test_zero_refresh_period_fails_validation() {
    let toml_str = r#"
[watchdog]
required = true
refresh_every_secs = 0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidRefreshPeriod(0)))
    ));
}

/// Test validation fails when the settle window swallows the refresh period.
#[test]
fn test_settle_exceeds_period_fails_validation() {
    let toml_str = r#"
[watchdog]
required = true
refresh_every_secs = 1
settle_ms = 2000
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::SettleExceedsPeriod { .. }))
    ));
}

/// Test the watchdog section is not checked when refresh is not required.
#[test]
fn test_disabled_watchdog_skips_period_check() {
    let toml_str = r#"
[watchdog]
required = false
refresh_every_secs = 0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test that empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = SystemConfig::default();
    assert!(validate_config(&config).is_ok());
}
