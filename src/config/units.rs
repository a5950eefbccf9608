//! Unit types for physical quantities.
//!
//! Provides type-safe representations of travel position, calibration rates,
//! duty-cycle commands, and monotonic time to prevent unit confusion at
//! compile time.

use core::ops::Add;

use serde::Deserialize;

use crate::error::{ConfigError, DriveError};

/// Travel position as a percentage of the full range.
///
/// 0 is fully open, 100 is fully closed. Values are validated at
/// construction; see [`Percent::new`] for the fallible entry point used by
/// command boundaries and [`Percent::saturating`] for the clamping variant
/// used on internal estimates.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percent(f64);

impl Percent {
    /// Fully open position (0%).
    pub const FULLY_OPEN: Self = Self(0.0);
    /// Fully closed position (100%).
    pub const FULLY_CLOSED: Self = Self(100.0);

    /// Create a new Percent value with validation.
    ///
    /// # Errors
    ///
    /// Returns `DriveError::InvalidTarget` if the value is non-finite or
    /// outside `0..=100`.
    pub fn new(value: f64) -> Result<Self, DriveError> {
        if value.is_finite() && (0.0..=100.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DriveError::InvalidTarget(value))
        }
    }

    /// Create a Percent clamped into the valid range.
    ///
    /// Non-finite input saturates to fully open.
    #[inline]
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            Self::FULLY_OPEN
        } else {
            Self(value.clamp(0.0, 100.0))
        }
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Absolute travel distance to another position, in percent.
    #[inline]
    pub fn distance_to(self, other: Self) -> f64 {
        libm::fabs(other.0 - self.0)
    }
}

/// Calibrated spin rate: milliseconds required per 1% of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct MillisPerPercent(pub u32);

impl MillisPerPercent {
    /// Create a new MillisPerPercent value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Milliseconds needed to travel the given span, truncated to whole
    /// milliseconds.
    #[inline]
    pub fn travel_millis(self, span_percent: f64) -> u64 {
        (span_percent * self.0 as f64) as u64
    }
}

/// Duty-cycle command value for the actuator (0-180).
///
/// Only the configured extremes and the stop value are ever issued; the
/// range mirrors a hobby-servo angle command. Validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyCycle(u8);

impl DutyCycle {
    /// Largest permitted command value.
    pub const MAX: u8 = 180;

    /// Full-speed rotation toward one extreme (continuous-rotation convention).
    pub const FULL_REVERSE: Self = Self(0);
    /// Neutral command; a continuous-rotation actuator holds still.
    pub const NEUTRAL: Self = Self(90);
    /// Full-speed rotation toward the opposite extreme.
    pub const FULL_FORWARD: Self = Self(180);

    /// Create a new DutyCycle value with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDutyCycle` if the value exceeds 180.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        if value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidDutyCycle(value))
        }
    }

    /// Get the raw command value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DutyCycle {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for DutyCycle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u8::deserialize(deserializer)?;
        DutyCycle::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}

/// Monotonic timestamp in milliseconds.
///
/// The library owns no clock; callers pass the current instant into every
/// time-sensitive operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Instant(u64);

impl Instant {
    /// Create an instant from milliseconds since an arbitrary epoch.
    #[inline]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Get the raw millisecond count.
    #[inline]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed since an earlier instant, saturating at zero if
    /// time appears to run backwards.
    #[inline]
    pub fn duration_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<u64> for Instant {
    type Output = Self;

    fn add(self, millis: u64) -> Self::Output {
        Self(self.0 + millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_valid_range() {
        assert!(Percent::new(0.0).is_ok());
        assert!(Percent::new(50.5).is_ok());
        assert!(Percent::new(100.0).is_ok());
    }

    #[test]
    fn test_percent_invalid_values() {
        assert!(Percent::new(-0.1).is_err());
        assert!(Percent::new(100.1).is_err());
        assert!(Percent::new(f64::NAN).is_err());
        assert!(Percent::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_percent_saturating() {
        assert_eq!(Percent::saturating(-5.0), Percent::FULLY_OPEN);
        assert_eq!(Percent::saturating(123.0), Percent::FULLY_CLOSED);
        assert_eq!(Percent::saturating(f64::NAN), Percent::FULLY_OPEN);
        assert_eq!(Percent::saturating(42.0).value(), 42.0);
    }

    #[test]
    fn test_percent_distance() {
        let a = Percent::saturating(20.0);
        let b = Percent::saturating(30.0);
        assert_eq!(a.distance_to(b), 10.0);
        assert_eq!(b.distance_to(a), 10.0);
    }

    #[test]
    fn test_travel_millis() {
        let rate = MillisPerPercent::new(100);
        assert_eq!(rate.travel_millis(50.0), 5000);
        assert_eq!(rate.travel_millis(0.0), 0);
        // sub-millisecond spans truncate to zero
        assert_eq!(rate.travel_millis(0.001), 0);
    }

    #[test]
    fn test_duty_cycle_validation() {
        assert!(DutyCycle::new(0).is_ok());
        assert!(DutyCycle::new(90).is_ok());
        assert!(DutyCycle::new(180).is_ok());
        assert!(DutyCycle::new(181).is_err());
    }

    #[test]
    fn test_instant_arithmetic() {
        let t0 = Instant::from_millis(1000);
        let t1 = t0 + 5000;
        assert_eq!(t1.duration_since(t0), 5000);
        assert_eq!(t0.duration_since(t1), 0);
    }
}
