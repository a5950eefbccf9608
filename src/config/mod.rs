//! Configuration module for shade-motion.
//!
//! Provides types for loading and validating drive configuration from TOML
//! files (with `std` feature) or pre-parsed data.

mod actuator;
mod calibration;
mod system;
mod watchdog;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use actuator::ActuatorConfig;
pub use calibration::{CalibrationConfig, SpinRates};
pub use system::SystemConfig;
pub use validation::validate_config;
pub use watchdog::WatchdogConfig;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{DutyCycle, Instant, MillisPerPercent, Percent};
