// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Endorsement configuration
//!
//! All values are fixed at build time or by the factory. Configuration is
//! passed into the orchestrator once and never mutated during an attempt.

use crate::constants::{
    FLASH_INFO_MANUFACTURE_STATE_OFFSET, FLASH_INFO_MANUFACTURE_STATE_SIZE,
    FW_MAJOR_VERSION, KEY_LADDER_POLL_TIMEOUT, MAX_FW_MAJOR_VERSION, MAX_NV_BUFFER_SIZE,
    PRIMARY_SEED_SIZE,
};
use crate::errors::{Error, Result};
use crate::types::NvIndex;

/// Top-level endorsement configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndorsementConfig {
    /// Key ladder sequencing
    pub key_ladder: KeyLadderConfig,
    /// Protected flash layout
    pub flash: FlashConfig,
    /// NV credential layout
    pub nv: NvConfig,
}

impl EndorsementConfig {
    /// Production configuration
    pub const DEFAULT: Self = Self {
        key_ladder: KeyLadderConfig::DEFAULT,
        flash: FlashConfig::DEFAULT,
        nv: NvConfig::DEFAULT,
    };

    /// Check every section for internal consistency
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for the first inconsistent section.
    pub const fn validate(&self) -> Result<()> {
        if let Err(e) = self.key_ladder.validate() {
            return Err(e);
        }
        if let Err(e) = self.flash.validate() {
            return Err(e);
        }
        self.nv.validate()
    }
}

impl Default for EndorsementConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Key ladder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLadderConfig {
    /// Firmware major version the derived key is bound to
    pub fw_major_version: u8,
    /// Ceiling of the version-bound step chain
    pub max_fw_major_version: u8,
    /// Status polls per step before reporting a timeout
    pub poll_timeout_iterations: u32,
}

impl KeyLadderConfig {
    /// Default key ladder configuration
    pub const DEFAULT: Self = Self {
        fw_major_version: FW_MAJOR_VERSION,
        max_fw_major_version: MAX_FW_MAJOR_VERSION,
        poll_timeout_iterations: KEY_LADDER_POLL_TIMEOUT,
    };

    /// Number of times the version-bound step is repeated
    #[must_use]
    pub const fn version_steps(&self) -> u32 {
        self.max_fw_major_version.saturating_sub(self.fw_major_version) as u32
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the firmware version exceeds
    /// its ceiling or the poll budget is zero.
    pub const fn validate(&self) -> Result<()> {
        if self.fw_major_version > self.max_fw_major_version || self.poll_timeout_iterations == 0 {
            return Err(Error::InvalidParameter);
        }
        Ok(())
    }
}

impl Default for KeyLadderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Protected flash configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashConfig {
    /// Offset of the encrypted seed inside flash INFO
    pub seed_offset: u32,
    /// Size of the INFO window opened for the seed read
    pub info_window_size: u32,
}

impl FlashConfig {
    /// Default flash configuration
    pub const DEFAULT: Self = Self {
        seed_offset: FLASH_INFO_MANUFACTURE_STATE_OFFSET,
        info_window_size: FLASH_INFO_MANUFACTURE_STATE_SIZE,
    };

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the seed is not word aligned,
    /// does not fit inside the INFO window, or ends past the 32-bit offset
    /// range.
    pub const fn validate(&self) -> Result<()> {
        if self.seed_offset % 4 != 0 || (PRIMARY_SEED_SIZE as u32) > self.info_window_size {
            return Err(Error::InvalidParameter);
        }
        if self.seed_offset.checked_add(PRIMARY_SEED_SIZE as u32).is_none() {
            return Err(Error::InvalidParameter);
        }
        Ok(())
    }
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// NV credential configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NvConfig {
    /// Index of the RSA certificate; the ECC certificate uses the next one
    pub ek_cert_base_index: NvIndex,
    /// Largest certificate accepted for storage
    pub max_nv_buffer_size: usize,
}

impl NvConfig {
    /// Default NV configuration
    pub const DEFAULT: Self = Self {
        ek_cert_base_index: NvIndex::EK_CERT_BASE,
        max_nv_buffer_size: MAX_NV_BUFFER_SIZE,
    };

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the buffer bound is zero or the
    /// ECC index would overflow.
    pub const fn validate(&self) -> Result<()> {
        if self.max_nv_buffer_size == 0 || self.ek_cert_base_index.0 == u32::MAX {
            return Err(Error::InvalidParameter);
        }
        Ok(())
    }
}

impl Default for NvConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
