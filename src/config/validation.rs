//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::calibration::SpinRates;
use super::{ActuatorConfig, CalibrationConfig, SystemConfig, WatchdogConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Travel times are non-zero
/// - Opening and closing duty-cycle commands differ
/// - Watchdog refresh period is non-zero and longer than the settle delay
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_calibration(&config.calibration)?;
    validate_watchdog(&config.watchdog)?;
    validate_actuator(&config.actuator)?;

    Ok(())
}

fn validate_calibration(config: &CalibrationConfig) -> Result<()> {
    // Rate derivation performs the range checks; the rates are rebuilt later
    // from whatever the persistent store holds.
    SpinRates::from_travel_times(config.seconds_to_open, config.seconds_to_close)?;

    Ok(())
}

fn validate_watchdog(config: &WatchdogConfig) -> Result<()> {
    if !config.required {
        return Ok(());
    }

    if config.refresh_every_secs == 0 {
        return Err(Error::Config(ConfigError::InvalidRefreshPeriod(
            config.refresh_every_secs,
        )));
    }

    // The actuator must be re-engaged well before the next refresh is due
    if config.settle_ms as u64 >= config.period_millis() {
        return Err(Error::Config(ConfigError::SettleExceedsPeriod {
            settle_ms: config.settle_ms,
            period_ms: config.period_millis(),
        }));
    }

    Ok(())
}

fn validate_actuator(config: &ActuatorConfig) -> Result<()> {
    // Identical extremes would make the direction unobservable at the boundary
    if config.opening_duty == config.closing_duty {
        return Err(Error::Config(ConfigError::DutySignalConflict {
            opening: config.opening_duty.value(),
            closing: config.closing_duty.value(),
        }));
    }

    Ok(())
}
