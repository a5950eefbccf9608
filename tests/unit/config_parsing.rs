//! Unit tests for TOML configuration parsing.

use shade_motion::config::SystemConfig;
use shade_motion::DutyCycle;

/// Test parsing a calibration section from TOML.
#[test]
fn test_parse_calibration() {
    let toml_str = r#"
[calibration]
seconds_to_open = 25
seconds_to_close = 18
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.calibration.seconds_to_open, 25);
    assert_eq!(config.calibration.seconds_to_close, 18);
}

/// Test that an empty document yields the built-in defaults.
#[test]
fn test_parse_empty_config_uses_defaults() {
    let config: SystemConfig = toml::from_str("").expect("Failed to parse TOML");

    assert_eq!(config.calibration.seconds_to_open, 10);
    assert_eq!(config.calibration.seconds_to_close, 10);
    assert!(config.watchdog.required);
    assert_eq!(config.watchdog.refresh_every_secs, 10);
    assert_eq!(config.watchdog.settle_ms, 50);
    assert!(!config.actuator.stop_pulse_required);
    assert_eq!(config.actuator.stop_pulse_ms, 200);
}

/// Test parsing a watchdog section.
#[test]
fn test_parse_watchdog_section() {
    let toml_str = r#"
[watchdog]
required = false
refresh_every_secs = 30
settle_ms = 120
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert!(!config.watchdog.required);
    assert_eq!(config.watchdog.refresh_every_secs, 30);
    assert_eq!(config.watchdog.settle_ms, 120);
    assert_eq!(config.watchdog.period_millis(), 30_000);
}

/// Test parsing actuator duty signals.
#[test]
fn test_parse_actuator_duties() {
    let toml_str = r#"
[actuator]
opening_duty = 170
closing_duty = 10
stop_duty = 88
stop_pulse_required = true
stop_pulse_ms = 350
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.actuator.opening_duty.value(), 170);
    assert_eq!(config.actuator.closing_duty.value(), 10);
    assert_eq!(config.actuator.stop_duty.value(), 88);
    assert!(config.actuator.stop_pulse_required);
    assert_eq!(config.actuator.stop_pulse_ms, 350);
}

/// Test that a duty value beyond the signal range fails to deserialize.
#[test]
fn test_parse_duty_out_of_range_rejected() {
    let toml_str = r#"
[actuator]
closing_duty = 200
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject duty values above 180");
}

/// Test that duty defaults survive a partially specified actuator section.
#[test]
fn test_parse_partial_actuator_section() {
    let toml_str = r#"
[actuator]
stop_pulse_required = true
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.actuator.opening_duty, DutyCycle::FULL_FORWARD);
    assert_eq!(config.actuator.closing_duty, DutyCycle::FULL_REVERSE);
    assert!(config.actuator.stop_pulse_required);
}
