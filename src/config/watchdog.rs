//! Actuator watchdog configuration from TOML.

use serde::Deserialize;

/// Periodic actuator-refresh configuration.
///
/// Long spins need the duty-cycle command re-asserted periodically or the
/// actuator drifts and stalls; this is an electrical requirement, unrelated
/// to position tracking.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchdogConfig {
    /// Whether the actuator needs periodic refreshes at all.
    #[serde(default = "default_required")]
    pub required: bool,

    /// Seconds of spinning between refreshes.
    #[serde(default = "default_refresh_every_secs")]
    pub refresh_every_secs: u32,

    /// Milliseconds the actuator is left released before the command is
    /// reissued.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u32,
}

fn default_required() -> bool {
    true
}

fn default_refresh_every_secs() -> u32 {
    10
}

fn default_settle_ms() -> u32 {
    50
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            required: default_required(),
            refresh_every_secs: default_refresh_every_secs(),
            settle_ms: default_settle_ms(),
        }
    }
}

impl WatchdogConfig {
    /// Refresh period in milliseconds.
    #[inline]
    pub fn period_millis(&self) -> u64 {
        self.refresh_every_secs as u64 * 1000
    }
}
