//! Motion module for shade-motion.
//!
//! Provides spin-session planning and open-loop position estimation.

mod estimator;
mod session;

pub use estimator::{estimate, Estimate};
pub use session::{Direction, RefreshPhase, SpinSession};
