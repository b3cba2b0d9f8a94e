// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! HAL trait definitions
//!
//! Register-level capabilities consumed by the endorsement flow. Each
//! platform supplies implementations; the `sim` module supplies host ones.

use ek_common::NvIndex;

use crate::error::HalResult;

/// Key manager (SHA engine) register interface
///
/// One derivation step is driven as: clear status, select certificate,
/// enable the done interrupt, trigger, poll [`status`](Self::status) until
/// non-zero, clear status, then read [`error_flags`](Self::error_flags).
/// Sequencing lives in the key ladder driver; implementations only expose
/// the registers.
pub trait KeyManagerInterface {
    /// Reset the SHA engine before a new ladder walk
    fn reset_sha_engine(&mut self);

    /// Clear the interrupt/status register
    fn clear_status(&mut self);

    /// Program the certificate index with the enable bit set
    fn select_certificate(&mut self, cert: u32);

    /// Enable the done interrupt
    fn enable_done_interrupt(&mut self);

    /// Start the selected step
    fn trigger(&mut self);

    /// Read the interrupt/status register; non-zero once the step completes
    fn status(&mut self) -> u32;

    /// Read the hardware key error flags
    fn error_flags(&self) -> u32;

    /// Copy the derived key out of the output registers
    fn read_output_key(&self, out: &mut [u8; 32]);
}

/// Protected flash access interface
///
/// Both regions are unreadable until their window is opened. The INFO
/// window must be closed again as soon as the read completes.
pub trait ProtectedFlashInterface {
    /// Open a read window over flash INFO
    fn enable_info_read(&mut self, offset: u32, size: u32) -> HalResult<()>;

    /// Close the flash INFO read window
    fn disable_info_read(&mut self);

    /// Check whether the flash INFO window is open
    fn info_read_enabled(&self) -> bool;

    /// Read one 32-bit word at `offset` inside flash INFO
    fn read_info_word(&self, offset: u32) -> HalResult<u32>;

    /// Map the RO certificate region readable
    fn enable_cert_region_read(&mut self) -> HalResult<()>;

    /// Read from the RO certificate region starting at `offset`
    fn read_cert_region(&self, offset: usize, buffer: &mut [u8]) -> HalResult<()>;
}

bitflags::bitflags! {
    /// NV index attributes (TPMA_NV bit layout)
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct NvAttributes: u32 {
        /// Writable with platform authorization
        const PPWRITE = 1 << 0;
        /// Writable with owner authorization
        const OWNERWRITE = 1 << 1;
        /// Writable with the index auth value
        const AUTHWRITE = 1 << 2;
        /// Writable with the index policy
        const POLICYWRITE = 1 << 3;
        /// Index is write locked
        const WRITELOCKED = 1 << 11;
        /// Partial writes not allowed
        const WRITEALL = 1 << 12;
        /// Write-once: the index must be deleted before rewriting
        const WRITEDEFINE = 1 << 13;
        /// Readable with platform authorization
        const PPREAD = 1 << 16;
        /// Readable with owner authorization
        const OWNERREAD = 1 << 17;
        /// Readable with the (empty) index auth value
        const AUTHREAD = 1 << 18;
        /// Readable with the index policy
        const POLICYREAD = 1 << 19;
        /// Exempt from dictionary attack lockout
        const NO_DA = 1 << 25;
        /// Data has been written
        const WRITTEN = 1 << 29;
        /// Created under platform authorization
        const PLATFORMCREATE = 1 << 30;
    }
}

impl NvAttributes {
    /// Attributes of an endorsement credential object
    ///
    /// Platform-writable once, created by the platform, readable without a
    /// password and exempt from dictionary attack lockout.
    #[must_use]
    pub const fn endorsement_credential() -> Self {
        Self::PPWRITE
            .union(Self::WRITEDEFINE)
            .union(Self::PLATFORMCREATE)
            .union(Self::AUTHREAD)
            .union(Self::NO_DA)
    }
}

/// Name algorithm of an NV object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum NameAlg {
    /// SHA-256
    Sha256 = 0x000B,
}

/// Public area of an NV object definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NvPublic {
    /// Index handle
    pub index: NvIndex,
    /// Name algorithm
    pub name_alg: NameAlg,
    /// Attributes
    pub attributes: NvAttributes,
    /// Size of the authorization policy digest (zero for none)
    pub auth_policy_size: u16,
    /// Object data size in bytes
    pub data_size: u16,
}

/// Reserved persistent slots outside the NV index range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedSlot {
    /// Endorsement primary seed
    EndorsementSeed,
}

/// Persistent NV object store
pub trait NvStoreInterface {
    /// Mark a platform-authorized session as active for the following defines
    fn begin_platform_session(&mut self);

    /// Define a new NV object
    ///
    /// Fails with [`HalError::NvIndexExists`](crate::HalError::NvIndexExists)
    /// if the index is already defined.
    fn define_space(&mut self, public: &NvPublic) -> HalResult<()>;

    /// Write `data` into a defined object at `offset`
    fn write(&mut self, index: NvIndex, offset: u16, data: &[u8]) -> HalResult<()>;

    /// Write a reserved slot
    fn write_reserved(&mut self, slot: ReservedSlot, data: &[u8]) -> HalResult<()>;

    /// Flush pending writes to persistent media
    fn commit(&mut self) -> HalResult<()>;
}
