//! Durable settings storage.
//!
//! The drive persists its calibration and last-known position in a small
//! byte-addressed store with explicit durability: writes land in a staging
//! area and only become durable on `commit`, EEPROM-style. [`SettingsStore`]
//! is the narrow seam a platform implements; the fixed-offset layout on top
//! of it lives in [`Settings`] and [`SettingsLayout`].

mod memory;
mod settings;

pub use memory::MemoryStore;
pub use settings::{store_position, Settings, SettingsLayout};

use crate::error::StoreError;

/// Byte-addressed persistent store with explicit durability.
///
/// Implementations map this onto EEPROM, flash, a file, or plain RAM. Reads
/// observe staged writes; nothing is durable until [`commit`] returns `Ok`.
///
/// [`commit`]: SettingsStore::commit
pub trait SettingsStore {
    /// Read `buf.len()` bytes starting at `offset`.
    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<(), StoreError>;

    /// Stage `buf` starting at `offset`.
    fn write(&mut self, offset: u32, buf: &[u8]) -> Result<(), StoreError>;

    /// Flush staged writes to durable storage.
    fn commit(&mut self) -> Result<(), StoreError>;

    /// Usable size of the store in bytes.
    fn capacity(&self) -> u32;
}

impl<T: SettingsStore + ?Sized> SettingsStore for &mut T {
    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<(), StoreError> {
        (**self).read(offset, buf)
    }

    fn write(&mut self, offset: u32, buf: &[u8]) -> Result<(), StoreError> {
        (**self).write(offset, buf)
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        (**self).commit()
    }

    fn capacity(&self) -> u32 {
        (**self).capacity()
    }
}
