//! Externally visible drive state.

use crate::motion::Direction;

/// What the drive is doing right now.
///
/// This is the vocabulary the command surface reports; it collapses the
/// internal session bookkeeping down to the three states a caller can act
/// on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveState {
    /// Spinning toward fully open (0%).
    Opening,
    /// Spinning toward fully closed (100%).
    Closing,
    /// At rest at the last settled position.
    Idle,
}

impl DriveState {
    /// Get the state name as a static string.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            DriveState::Opening => "Opening",
            DriveState::Closing => "Closing",
            DriveState::Idle => "Idle",
        }
    }
}

impl From<Direction> for DriveState {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Opening => DriveState::Opening,
            Direction::Closing => DriveState::Closing,
        }
    }
}

impl core::fmt::Display for DriveState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
