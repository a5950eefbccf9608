//! # shade-motion
//!
//! Open-loop spin control for motorized window coverings with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Open-loop positioning**: Position inferred from elapsed time and calibrated rates
//! - **embedded-hal 1.0**: Uses `SetDutyCycle` for the drive signal, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Durable settings**: Calibration and resting position persisted across reboots
//! - **Command refresh**: Non-blocking periodic reissue for drives that drop stale commands
//! - **Transport-agnostic commands**: position/set/state served from plain path strings
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shade_motion::{handle, DriveControllerBuilder, PwmActuator, SystemConfig};
//!
//! // Load configuration from TOML
//! let config: SystemConfig = shade_motion::load_config("shade.toml")?;
//!
//! // Create the controller over embedded-hal resources
//! let mut drive = DriveControllerBuilder::new()
//!     .actuator(PwmActuator::new(pwm_channel))
//!     .delay(delay)
//!     .store(flash_store)
//!     .config(config)
//!     .build()?;
//!
//! // Serve commands and keep the estimate moving
//! let response = handle(&mut drive, "/set?position=75", now());
//! loop {
//!     drive.tick(now())?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod command;
pub mod config;
pub mod drive;
pub mod error;
pub mod motion;
pub mod store;

// Re-exports for ergonomic API
pub use command::{handle, Command, Response};
pub use config::{
    ActuatorConfig, CalibrationConfig, SpinRates, SystemConfig, WatchdogConfig, validate_config,
};
pub use drive::{
    Actuator, DriveController, DriveControllerBuilder, DriveState, PwmActuator, SignalMap,
};
pub use error::{Error, Result};
pub use motion::{Direction, SpinSession};
pub use store::{MemoryStore, Settings, SettingsStore};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{DutyCycle, Instant, MillisPerPercent, Percent};
