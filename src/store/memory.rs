//! In-memory settings store.
//!
//! Behaves like a small EEPROM: reads and writes hit a RAM staging area,
//! and an explicit commit copies the staged bytes to the "durable" side.
//! Useful for host demos and for tests that need to observe exactly when
//! data became durable.

use crate::error::StoreError;

use super::SettingsStore;

/// RAM-backed store with separate staged and committed copies.
///
/// `N` is the store size in bytes; the default fits the settings layout
/// with room to spare.
#[derive(Debug, Clone)]
pub struct MemoryStore<const N: usize = 64> {
    staged: [u8; N],
    committed: [u8; N],
    commits: u32,
}

impl<const N: usize> MemoryStore<N> {
    /// Create a store with every byte zeroed, as if never initialized.
    pub const fn new() -> Self {
        Self {
            staged: [0; N],
            committed: [0; N],
            commits: 0,
        }
    }

    /// Number of times [`commit`](SettingsStore::commit) has succeeded.
    #[inline]
    pub const fn commit_count(&self) -> u32 {
        self.commits
    }

    /// The durably committed bytes, staged writes excluded.
    #[inline]
    pub fn committed(&self) -> &[u8] {
        &self.committed
    }

    fn span(offset: u32, len: usize) -> Result<usize, StoreError> {
        let start = offset as usize;
        match start.checked_add(len) {
            Some(end) if end <= N => Ok(start),
            _ => Err(StoreError::OutOfBounds { offset, len }),
        }
    }
}

impl<const N: usize> Default for MemoryStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SettingsStore for MemoryStore<N> {
    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<(), StoreError> {
        let start = Self::span(offset, buf.len())?;
        buf.copy_from_slice(&self.staged[start..start + buf.len()]);
        Ok(())
    }

    fn write(&mut self, offset: u32, buf: &[u8]) -> Result<(), StoreError> {
        let start = Self::span(offset, buf.len())?;
        self.staged[start..start + buf.len()].copy_from_slice(buf);
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.committed = self.staged;
        self.commits += 1;
        Ok(())
    }

    fn capacity(&self) -> u32 {
        N as u32
    }
}
