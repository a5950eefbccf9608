//! Travel calibration from TOML.

use serde::Deserialize;

use super::units::MillisPerPercent;
use crate::error::ConfigError;

/// Travel-time calibration defaults from TOML.
///
/// These values seed the persistent store on first boot; on later boots the
/// stored calibration wins and this section is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CalibrationConfig {
    /// Seconds of spin needed to travel from fully closed to fully open.
    #[serde(default = "default_travel_seconds")]
    pub seconds_to_open: u32,

    /// Seconds of spin needed to travel from fully open to fully closed.
    #[serde(default = "default_travel_seconds")]
    pub seconds_to_close: u32,
}

fn default_travel_seconds() -> u32 {
    10
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            seconds_to_open: default_travel_seconds(),
            seconds_to_close: default_travel_seconds(),
        }
    }
}

/// Per-direction spin rates derived from travel times.
///
/// Computed once at initialization and immutable while the drive runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinRates {
    /// Milliseconds per 1% of travel toward fully open.
    pub opening: MillisPerPercent,

    /// Milliseconds per 1% of travel toward fully closed.
    pub closing: MillisPerPercent,
}

impl SpinRates {
    /// Derive spin rates from whole-range travel times.
    ///
    /// A full range is 100 percent, so the rate is `seconds × 1000 / 100`
    /// milliseconds per percent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTravelTime` if either travel time is
    /// zero.
    pub fn from_travel_times(
        seconds_to_open: u32,
        seconds_to_close: u32,
    ) -> Result<Self, ConfigError> {
        if seconds_to_open == 0 {
            return Err(ConfigError::InvalidTravelTime {
                field: "seconds_to_open",
                seconds: seconds_to_open,
            });
        }
        if seconds_to_close == 0 {
            return Err(ConfigError::InvalidTravelTime {
                field: "seconds_to_close",
                seconds: seconds_to_close,
            });
        }

        Ok(Self {
            opening: MillisPerPercent::new((seconds_to_open as u64 * 1000 / 100) as u32),
            closing: MillisPerPercent::new((seconds_to_close as u64 * 1000 / 100) as u32),
        })
    }
}
