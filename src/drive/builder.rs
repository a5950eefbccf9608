//! Builder pattern for DriveController.

use embedded_hal::delay::DelayNs;

use crate::config::{validate_config, SpinRates, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::store::{Settings, SettingsStore};

use super::actuator::{Actuator, SignalMap};
use super::controller::DriveController;
use super::watchdog::RefreshPolicy;

/// Builder for creating [`DriveController`] instances.
///
/// The actuator, delay provider, and settings store are required; the
/// configuration falls back to [`SystemConfig::default`] when not supplied.
pub struct DriveControllerBuilder<ACT, DELAY, STORE>
where
    ACT: Actuator,
    DELAY: DelayNs,
    STORE: SettingsStore,
{
    actuator: Option<ACT>,
    delay: Option<DELAY>,
    store: Option<STORE>,
    config: SystemConfig,
}

impl<ACT, DELAY, STORE> Default for DriveControllerBuilder<ACT, DELAY, STORE>
where
    ACT: Actuator,
    DELAY: DelayNs,
    STORE: SettingsStore,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<ACT, DELAY, STORE> DriveControllerBuilder<ACT, DELAY, STORE>
where
    ACT: Actuator,
    DELAY: DelayNs,
    STORE: SettingsStore,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            actuator: None,
            delay: None,
            store: None,
            config: SystemConfig::default(),
        }
    }

    /// Set the actuator.
    pub fn actuator(mut self, actuator: ACT) -> Self {
        self.actuator = Some(actuator);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the settings store.
    pub fn store(mut self, store: STORE) -> Self {
        self.store = Some(store);
        self
    }

    /// Use the given configuration instead of the defaults.
    pub fn config(mut self, config: SystemConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the DriveController.
    ///
    /// Validates the configuration, loads the durable settings
    /// (initializing them from the configured defaults on first boot), and
    /// derives the spin rates from the stored travel times. After first
    /// boot the stored calibration wins over whatever the configuration
    /// says.
    ///
    /// # Errors
    ///
    /// Returns an error if a required component is missing, the
    /// configuration fails validation, the store is unusable, or the
    /// stored travel times are zero.
    pub fn build(self) -> Result<DriveController<ACT, DELAY, STORE>> {
        let actuator = self
            .actuator
            .ok_or(Error::Config(ConfigError::MissingComponent("actuator")))?;

        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingComponent("delay")))?;

        let mut store = self
            .store
            .ok_or(Error::Config(ConfigError::MissingComponent("store")))?;

        validate_config(&self.config)?;

        let settings = Settings::load_or_init(&mut store, &self.config.calibration)?;
        let rates =
            SpinRates::from_travel_times(settings.seconds_to_open, settings.seconds_to_close)?;

        let signals = SignalMap::from_config(&self.config.actuator);
        let watchdog = RefreshPolicy::from_config(&self.config.watchdog);
        let stop_pulse = if self.config.actuator.stop_pulse_required {
            Some(self.config.actuator.stop_pulse_ms)
        } else {
            None
        };

        Ok(DriveController::new(
            actuator,
            delay,
            store,
            rates,
            signals,
            watchdog,
            stop_pulse,
            settings.current_position,
        ))
    }
}
