//! Error types for shade-motion library.
//!
//! Provides unified error handling across configuration, drive control, and settings storage.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all shade-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Drive or actuator operation error
    Drive(DriveError),
    /// Settings storage error
    Store(StoreError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid travel time in seconds (must be > 0)
    InvalidTravelTime {
        /// Which calibration field was rejected
        field: &'static str,
        /// Offending value in seconds
        seconds: u32,
    },
    /// Invalid duty-cycle command value (must be 0-180)
    InvalidDutyCycle(u8),
    /// Opening and closing duty-cycle commands must differ
    DutySignalConflict {
        /// Configured opening command
        opening: u8,
        /// Configured closing command
        closing: u8,
    },
    /// Invalid watchdog refresh period (must be > 0 seconds)
    InvalidRefreshPeriod(u32),
    /// Watchdog settle delay must be shorter than the refresh period
    SettleExceedsPeriod {
        /// Configured settle delay in milliseconds
        settle_ms: u32,
        /// Configured refresh period in milliseconds
        period_ms: u64,
    },
    /// Required builder component not provided
    MissingComponent(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Drive operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum DriveError {
    /// Target position is non-finite or outside 0-100
    InvalidTarget(f64),
    /// Actuator signal operation failed
    ActuatorFault,
}

/// Settings storage errors.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Access beyond the end of the store
    OutOfBounds {
        /// Requested offset
        offset: u32,
        /// Requested length in bytes
        len: usize,
    },
    /// Store too small for the settings layout
    TooSmall {
        /// Bytes the layout requires
        required: u32,
        /// Bytes the store provides
        capacity: u32,
    },
    /// Underlying storage device reported a failure
    DeviceFault,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Drive(e) => write!(f, "Drive error: {}", e),
            Error::Store(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidTravelTime { field, seconds } => {
                write!(f, "Invalid {}: {} s. Must be > 0", field, seconds)
            }
            ConfigError::InvalidDutyCycle(v) => {
                write!(f, "Invalid duty-cycle command: {}. Must be 0-180", v)
            }
            ConfigError::DutySignalConflict { opening, closing } => {
                write!(
                    f,
                    "Opening ({}) and closing ({}) duty-cycle commands must differ",
                    opening, closing
                )
            }
            ConfigError::InvalidRefreshPeriod(v) => {
                write!(f, "Invalid refresh period: {} s. Must be > 0", v)
            }
            ConfigError::SettleExceedsPeriod { settle_ms, period_ms } => {
                write!(
                    f,
                    "Settle delay {} ms must be shorter than refresh period {} ms",
                    settle_ms, period_ms
                )
            }
            ConfigError::MissingComponent(what) => write!(f, "Missing component: {}", what),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for DriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveError::InvalidTarget(v) => {
                write!(f, "Invalid target position: {}. Must be finite and within 0-100", v)
            }
            DriveError::ActuatorFault => write!(f, "Actuator signal operation failed"),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::OutOfBounds { offset, len } => {
                write!(f, "Store access out of bounds: {} bytes at offset {}", len, offset)
            }
            StoreError::TooSmall { required, capacity } => {
                write!(f, "Store too small: {} bytes required, {} available", required, capacity)
            }
            StoreError::DeviceFault => write!(f, "Storage device failure"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DriveError> for Error {
    fn from(e: DriveError) -> Self {
        Error::Drive(e)
    }
}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Error::Store(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for DriveError {}

#[cfg(feature = "std")]
impl std::error::Error for StoreError {}
