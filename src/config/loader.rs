//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use shade_motion::load_config;
///
/// let config = load_config("shade.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.calibration.seconds_to_open, 10);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[calibration]
seconds_to_open = 12
seconds_to_close = 9

[watchdog]
required = true
refresh_every_secs = 8
settle_ms = 40

[actuator]
opening_duty = 180
closing_duty = 0
stop_duty = 90
stop_pulse_required = true
stop_pulse_ms = 150
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.calibration.seconds_to_close, 9);
        assert_eq!(config.watchdog.refresh_every_secs, 8);
        assert!(config.actuator.stop_pulse_required);
    }

    #[test]
    fn test_parse_rejects_invalid_duty() {
        let toml = r#"
[actuator]
opening_duty = 240
"#;

        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_parse_rejects_zero_travel_time() {
        let toml = r#"
[calibration]
seconds_to_open = 0
"#;

        assert!(parse_config(toml).is_err());
    }
}
