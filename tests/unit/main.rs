//! Unit test harness for shade-motion.
//!
//! This target organizes unit tests for each component of the library.

mod config_parsing;
mod config_validation;
