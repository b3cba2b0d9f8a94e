// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Primary seed recovery
//!
//! The factory stores the endorsement primary seed in flash INFO masked with
//! FRK2 as a one-time pad. Recovery derives FRK2, reads the masked seed
//! through a short-lived INFO read window and XORs the two.
//!
//! # Security
//!
//! - Flash is not touched unless the key ladder succeeds
//! - The INFO window is closed on every path, including a failed word read
//! - FRK2 and any partially read seed are wiped before returning

use ek_common::config::EndorsementConfig;
use ek_common::constants::{FLASH_INFO_WORD_SIZE, PRIMARY_SEED_SIZE};
use ek_common::log::LogBuffer;
use ek_common::{log_error, log_info, Error, Result};
use ek_hal::{HalResult, KeyManagerInterface, ProtectedFlashInterface};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::key_ladder::KeyLadder;

/// Endorsement primary seed
///
/// Wiped on drop. `Debug` never prints the contents.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrimarySeed([u8; PRIMARY_SEED_SIZE]);

impl PrimarySeed {
    /// Wrap raw seed bytes
    #[must_use]
    pub const fn from_bytes(bytes: [u8; PRIMARY_SEED_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copy a seed out of `bytes` straight into wiped-on-drop storage
    ///
    /// Returns `None` unless `bytes` is exactly one seed long.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != PRIMARY_SEED_SIZE {
            return None;
        }
        let mut seed = Self([0u8; PRIMARY_SEED_SIZE]);
        seed.0.copy_from_slice(bytes);
        Some(seed)
    }

    /// Seed bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PRIMARY_SEED_SIZE] {
        &self.0
    }
}

impl core::fmt::Debug for PrimarySeed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("PrimarySeed([REDACTED])")
    }
}

/// Open INFO read window, closed on drop
pub struct InfoReadGuard<'a, F: ProtectedFlashInterface> {
    flash: &'a mut F,
}

impl<'a, F: ProtectedFlashInterface> InfoReadGuard<'a, F> {
    /// Open the INFO window over `size` bytes at `offset`
    ///
    /// # Errors
    ///
    /// Propagates the flash driver's refusal to open the window.
    pub fn open(flash: &'a mut F, offset: u32, size: u32) -> HalResult<Self> {
        flash.enable_info_read(offset, size)?;
        Ok(Self { flash })
    }

    /// Read one word through the open window
    ///
    /// # Errors
    ///
    /// Propagates the flash read error.
    pub fn read_word(&self, offset: u32) -> HalResult<u32> {
        self.flash.read_info_word(offset)
    }
}

impl<F: ProtectedFlashInterface> Drop for InfoReadGuard<'_, F> {
    fn drop(&mut self) {
        self.flash.disable_info_read();
    }
}

/// Recover the plaintext primary seed
///
/// # Errors
///
/// - [`Error::InvalidParameter`](ek_common::Error::InvalidParameter) if the
///   seed would end past the 32-bit offset range
/// - Key ladder fault or timeout, in which case flash is never opened
/// - [`Error::FlashAccessDenied`](ek_common::Error::FlashAccessDenied) or
///   [`Error::FlashReadFailed`](ek_common::Error::FlashReadFailed) from the
///   INFO read
pub fn recover_seed<K, F>(
    key_manager: &mut K,
    flash: &mut F,
    config: &EndorsementConfig,
    log: &mut LogBuffer,
) -> Result<PrimarySeed>
where
    K: KeyManagerInterface,
    F: ProtectedFlashInterface,
{
    log_info!(log, "seed", "getting eps");

    if config.flash.seed_offset.checked_add(PRIMARY_SEED_SIZE as u32).is_none() {
        return Err(Error::InvalidParameter);
    }

    let frk2 = KeyLadder::new(key_manager, config.key_ladder).compute_frk2(log)?;

    let mut seed = PrimarySeed([0u8; PRIMARY_SEED_SIZE]);
    {
        let window = InfoReadGuard::open(
            flash,
            config.flash.seed_offset,
            config.flash.info_window_size,
        )?;

        let mut offset = config.flash.seed_offset;
        for chunk in seed.0.chunks_exact_mut(FLASH_INFO_WORD_SIZE) {
            let word = window.read_word(offset).map_err(|e| {
                log_error!(log, "seed", "info read at 0x{:x} failed: {}", offset, e);
                e
            })?;
            chunk.copy_from_slice(&word.to_le_bytes());
            offset += FLASH_INFO_WORD_SIZE as u32;
        }
    }

    for (s, k) in seed.0.iter_mut().zip(frk2.as_bytes()) {
        *s ^= k;
    }

    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroize_clears_seed() {
        let mut seed = PrimarySeed::from_bytes([0x77; PRIMARY_SEED_SIZE]);
        seed.zeroize();
        assert_eq!(seed.as_bytes(), &[0u8; PRIMARY_SEED_SIZE]);
    }

    #[test]
    fn test_from_slice_requires_exact_length() {
        assert!(PrimarySeed::from_slice(&[0x42; PRIMARY_SEED_SIZE - 1]).is_none());
        assert!(PrimarySeed::from_slice(&[0x42; PRIMARY_SEED_SIZE + 1]).is_none());
        let seed = PrimarySeed::from_slice(&[0x42; PRIMARY_SEED_SIZE]);
        assert_eq!(seed.map(|s| *s.as_bytes()), Some([0x42; PRIMARY_SEED_SIZE]));
    }
}
