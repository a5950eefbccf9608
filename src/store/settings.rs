//! Fixed-offset settings layout and first-boot initialization.
//!
//! # Store layout
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ initialized: u8 = 1                         │  Offset: 0
//! ├─────────────────────────────────────────────┤
//! │ seconds_to_close: u32 (little-endian)       │  Offset: 1
//! ├─────────────────────────────────────────────┤
//! │ seconds_to_open: u32 (little-endian)        │  Offset: 5
//! ├─────────────────────────────────────────────┤
//! │ current_position: f64 (little-endian)       │  Offset: 9
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Offsets accumulate by field size; 17 bytes total.

use crate::config::units::Percent;
use crate::config::CalibrationConfig;
use crate::error::{Error, Result, StoreError};

use super::SettingsStore;

/// Byte offsets of each persisted value.
pub struct SettingsLayout;

impl SettingsLayout {
    /// First-boot marker, one byte, 1 once initialized.
    pub const INITIALIZED: u32 = 0;
    /// Closing travel time in seconds.
    pub const SECONDS_TO_CLOSE: u32 = 1;
    /// Opening travel time in seconds.
    pub const SECONDS_TO_OPEN: u32 = 5;
    /// Last durable position in percent.
    pub const CURRENT_POSITION: u32 = 9;
    /// Bytes the layout occupies.
    pub const SIZE: u32 = 17;
}

/// Durable drive settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Seconds of spin for the full travel toward closed.
    pub seconds_to_close: u32,
    /// Seconds of spin for the full travel toward open.
    pub seconds_to_open: u32,
    /// Position the drive last came to rest at.
    pub current_position: Percent,
}

impl Settings {
    /// Load settings, initializing the store with the given defaults on
    /// first boot.
    ///
    /// First boot is detected through the `initialized` marker byte not
    /// holding exactly 1 (a blank device reads as 0x00 or 0xFF). Defaults
    /// and a fully-open position are then staged and committed once. On
    /// later boots stored values are loaded verbatim, except that a stored
    /// position outside `0..=100` is clamped back into range.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TooSmall` if the store cannot hold the layout,
    /// or any error the store itself reports.
    pub fn load_or_init<S: SettingsStore>(
        store: &mut S,
        defaults: &CalibrationConfig,
    ) -> Result<Self> {
        if store.capacity() < SettingsLayout::SIZE {
            return Err(Error::Store(StoreError::TooSmall {
                required: SettingsLayout::SIZE,
                capacity: store.capacity(),
            }));
        }

        let mut marker = [0u8; 1];
        store.read(SettingsLayout::INITIALIZED, &mut marker)?;

        if marker[0] == 1 {
            let settings = Self::load(store)?;
            #[cfg(feature = "defmt")]
            defmt::info!(
                "settings loaded: open {} s, close {} s, position {}",
                settings.seconds_to_open,
                settings.seconds_to_close,
                settings.current_position.value()
            );
            Ok(settings)
        } else {
            let settings = Self {
                seconds_to_close: defaults.seconds_to_close,
                seconds_to_open: defaults.seconds_to_open,
                current_position: Percent::FULLY_OPEN,
            };
            settings.write_all(store)?;
            store.commit()?;
            #[cfg(feature = "defmt")]
            defmt::info!(
                "first boot: settings initialized, open {} s, close {} s",
                settings.seconds_to_open,
                settings.seconds_to_close
            );
            Ok(settings)
        }
    }

    fn load<S: SettingsStore>(store: &mut S) -> Result<Self> {
        let mut word = [0u8; 4];
        store.read(SettingsLayout::SECONDS_TO_CLOSE, &mut word)?;
        let seconds_to_close = u32::from_le_bytes(word);
        store.read(SettingsLayout::SECONDS_TO_OPEN, &mut word)?;
        let seconds_to_open = u32::from_le_bytes(word);

        let mut wide = [0u8; 8];
        store.read(SettingsLayout::CURRENT_POSITION, &mut wide)?;
        let position = f64::from_le_bytes(wide);

        Ok(Self {
            seconds_to_close,
            seconds_to_open,
            current_position: Percent::saturating(position),
        })
    }

    fn write_all<S: SettingsStore>(&self, store: &mut S) -> Result<()> {
        store.write(SettingsLayout::INITIALIZED, &[1])?;
        store.write(
            SettingsLayout::SECONDS_TO_CLOSE,
            &self.seconds_to_close.to_le_bytes(),
        )?;
        store.write(
            SettingsLayout::SECONDS_TO_OPEN,
            &self.seconds_to_open.to_le_bytes(),
        )?;
        store.write(
            SettingsLayout::CURRENT_POSITION,
            &self.current_position.value().to_le_bytes(),
        )?;
        Ok(())
    }
}

/// Persist a final position: stage the value and flush in one step.
///
/// This is the only write the drive performs after initialization; it
/// happens exactly once per ended session.
pub fn store_position<S: SettingsStore>(store: &mut S, position: Percent) -> Result<()> {
    store.write(
        SettingsLayout::CURRENT_POSITION,
        &position.value().to_le_bytes(),
    )?;
    store.commit()?;
    Ok(())
}
