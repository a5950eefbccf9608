//! System configuration - root configuration structure.

use serde::Deserialize;

use super::actuator::ActuatorConfig;
use super::calibration::CalibrationConfig;
use super::watchdog::WatchdogConfig;

/// Root configuration structure from TOML.
///
/// Every section is optional; an empty document yields the defaults the
/// drive shipped with.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// Travel-time calibration defaults (first boot only).
    #[serde(default)]
    pub calibration: CalibrationConfig,

    /// Periodic actuator-refresh behavior.
    #[serde(default)]
    pub watchdog: WatchdogConfig,

    /// Duty-cycle signal values and stop-pulse behavior.
    #[serde(default)]
    pub actuator: ActuatorConfig,
}
