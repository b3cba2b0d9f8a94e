// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Key ladder driver
//!
//! Walks the key manager through its fixed certificate sequence to produce
//! FRK2, the 32-byte key that unmasks the encrypted primary seed.
//!
//! ```text
//! reset ─► 0 ─► 3 ─► 4 ─► 5 ─► 7 ─► 15 ─► 20 ─► 25 × (max - fw) ─► 26 ─► FRK2
//! ```
//!
//! Any step that raises an error flag or fails to complete within the poll
//! budget ends the walk. Steps are never retried.

use core::iter;

use ek_common::config::KeyLadderConfig;
use ek_common::constants::{keymgr_cert, UNWRAP_KEY_SIZE};
use ek_common::log::LogBuffer;
use ek_common::{log_debug, log_error, Error, Result};
use ek_hal::KeyManagerInterface;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Steps run before the version-bound repeats
const LEADING_STEPS: [u32; 7] = [
    keymgr_cert::CERT_0,
    keymgr_cert::CERT_3,
    keymgr_cert::CERT_4,
    keymgr_cert::CERT_5,
    keymgr_cert::CERT_7,
    keymgr_cert::CERT_15,
    keymgr_cert::CERT_20,
];

/// FRK2, the derived seed unwrap key
///
/// Wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct UnwrapKey([u8; UNWRAP_KEY_SIZE]);

impl UnwrapKey {
    /// Key bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; UNWRAP_KEY_SIZE] {
        &self.0
    }
}

impl core::fmt::Debug for UnwrapKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("UnwrapKey([REDACTED])")
    }
}

/// Full certificate sequence for `config`, excluding the engine reset
pub fn derivation_sequence(config: &KeyLadderConfig) -> impl Iterator<Item = u32> {
    LEADING_STEPS
        .into_iter()
        .chain(iter::repeat(keymgr_cert::CERT_25).take(config.version_steps() as usize))
        .chain(iter::once(keymgr_cert::CERT_26))
}

/// Key ladder driver over a borrowed key manager
pub struct KeyLadder<'a, K: KeyManagerInterface> {
    key_manager: &'a mut K,
    config: KeyLadderConfig,
}

impl<'a, K: KeyManagerInterface> KeyLadder<'a, K> {
    /// Create a driver
    pub fn new(key_manager: &'a mut K, config: KeyLadderConfig) -> Self {
        Self {
            key_manager,
            config,
        }
    }

    /// Run one derivation step
    ///
    /// Status is cleared before the step is armed and again after it
    /// completes, so a stale completion bit is never read as this step's.
    ///
    /// # Errors
    ///
    /// - [`Error::KeyLadderTimeout`] if completion is not signalled within
    ///   the poll budget
    /// - [`Error::KeyLadderFault`] if the hardware raised an error flag
    pub fn derive_step(&mut self, cert: u32) -> Result<()> {
        let km = &mut *self.key_manager;

        km.clear_status();
        km.select_certificate(cert);
        km.enable_done_interrupt();
        km.trigger();

        let mut polls: u32 = 0;
        while km.status() == 0 {
            polls += 1;
            if polls >= self.config.poll_timeout_iterations {
                km.clear_status();
                return Err(Error::KeyLadderTimeout);
            }
            core::hint::spin_loop();
        }

        km.clear_status();

        if km.error_flags() != 0 {
            return Err(Error::KeyLadderFault);
        }
        Ok(())
    }

    /// Reset the engine and run the full sequence, returning FRK2
    ///
    /// # Errors
    ///
    /// Returns the first step failure; later steps are not attempted.
    pub fn compute_frk2(&mut self, log: &mut LogBuffer) -> Result<UnwrapKey> {
        // The engine hangs on a second walk unless it is reset first
        self.key_manager.reset_sha_engine();

        let config = self.config;
        for cert in derivation_sequence(&config) {
            if let Err(e) = self.derive_step(cert) {
                log_error!(log, "keyladder", "step {} failed: {}", cert, e);
                return Err(e);
            }
        }

        let mut key = UnwrapKey([0u8; UNWRAP_KEY_SIZE]);
        self.key_manager.read_output_key(&mut key.0);
        log_debug!(log, "keyladder", "frk2 derived");
        Ok(key)
    }
}
