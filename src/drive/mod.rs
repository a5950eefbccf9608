//! Drive module for shade-motion.
//!
//! Provides the open-loop controller together with its actuator boundary
//! and the periodic command-refresh policy.

mod actuator;
mod builder;
mod controller;
mod state;
mod watchdog;

pub use actuator::{Actuator, PwmActuator, SignalMap};
pub use builder::DriveControllerBuilder;
pub use controller::DriveController;
pub use state::DriveState;
pub use watchdog::RefreshPolicy;
