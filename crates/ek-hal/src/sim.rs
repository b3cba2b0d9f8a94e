// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Host simulators
//!
//! In-memory stand-ins for the key manager, protected flash and NV store,
//! with switches for injecting the faults the endorsement flow must survive.
//! Erased flash reads as `0xFF`, as on silicon.

use ek_common::constants::{keymgr_cert, RO_CERTS_REGION_SIZE, UNWRAP_KEY_SIZE};
use ek_common::NvIndex;
use heapless::Vec;

use crate::error::{HalError, HalResult};
use crate::traits::{
    KeyManagerInterface, NvAttributes, NvPublic, NvStoreInterface, ProtectedFlashInterface,
    ReservedSlot,
};

/// Steps retained by [`SimKeyManager`]
pub const SIM_MAX_RECORDED_STEPS: usize = 512;

/// Size of the simulated flash INFO page
pub const SIM_INFO_SIZE: usize = 0x800;

/// Largest object [`SimNvStore`] can hold
pub const SIM_NV_OBJECT_CAPACITY: usize = 2048;

/// Objects [`SimNvStore`] can hold
pub const SIM_NV_MAX_OBJECTS: usize = 8;

// =============================================================================
// Key manager
// =============================================================================

/// Simulated key manager
///
/// Records every triggered step. The output registers only hold the
/// configured key once step 26 completes without error.
#[derive(Debug)]
pub struct SimKeyManager {
    frk2: [u8; UNWRAP_KEY_SIZE],
    steps: Vec<u32, SIM_MAX_RECORDED_STEPS>,
    selected: Option<u32>,
    interrupt_enabled: bool,
    status: u32,
    error: u32,
    output_ready: bool,
    fault_on: Option<u32>,
    stuck_on: Option<u32>,
    resets: u32,
    status_clears: u32,
}

impl SimKeyManager {
    /// Create a key manager that derives `frk2`
    #[must_use]
    pub const fn new(frk2: [u8; UNWRAP_KEY_SIZE]) -> Self {
        Self {
            frk2,
            steps: Vec::new(),
            selected: None,
            interrupt_enabled: false,
            status: 0,
            error: 0,
            output_ready: false,
            fault_on: None,
            stuck_on: None,
            resets: 0,
            status_clears: 0,
        }
    }

    /// Raise the error flag when step `cert` runs
    pub fn fault_on_step(&mut self, cert: u32) {
        self.fault_on = Some(cert);
    }

    /// Never signal completion for step `cert`
    pub fn hang_on_step(&mut self, cert: u32) {
        self.stuck_on = Some(cert);
    }

    /// Steps triggered so far, in order
    #[must_use]
    pub fn steps(&self) -> &[u32] {
        &self.steps
    }

    /// Number of engine resets
    #[must_use]
    pub const fn resets(&self) -> u32 {
        self.resets
    }

    /// Number of status register clears
    #[must_use]
    pub const fn status_clears(&self) -> u32 {
        self.status_clears
    }
}

impl KeyManagerInterface for SimKeyManager {
    fn reset_sha_engine(&mut self) {
        self.resets += 1;
        self.selected = None;
        self.interrupt_enabled = false;
        self.status = 0;
        self.error = 0;
        self.output_ready = false;
    }

    fn clear_status(&mut self) {
        self.status_clears += 1;
        self.status = 0;
    }

    fn select_certificate(&mut self, cert: u32) {
        self.selected = Some(cert);
    }

    fn enable_done_interrupt(&mut self) {
        self.interrupt_enabled = true;
    }

    fn trigger(&mut self) {
        let Some(cert) = self.selected else {
            return;
        };
        let _ = self.steps.push(cert);

        if self.stuck_on == Some(cert) {
            return;
        }
        if self.fault_on == Some(cert) {
            self.error = 1;
        }
        if self.interrupt_enabled {
            self.status = 1;
        }
        self.output_ready = cert == keymgr_cert::CERT_26 && self.error == 0;
    }

    fn status(&mut self) -> u32 {
        self.status
    }

    fn error_flags(&self) -> u32 {
        self.error
    }

    fn read_output_key(&self, out: &mut [u8; 32]) {
        if self.output_ready {
            out.copy_from_slice(&self.frk2);
        } else {
            out.fill(0);
        }
    }
}

// =============================================================================
// Protected flash
// =============================================================================

/// Simulated protected flash (INFO page plus RO certificate region)
#[derive(Debug)]
pub struct SimProtectedFlash {
    info: [u8; SIM_INFO_SIZE],
    cert_region: [u8; RO_CERTS_REGION_SIZE],
    info_window: Option<(u32, u32)>,
    cert_window_open: bool,
    fail_info_read_at: Option<u32>,
    info_window_opens: u32,
    info_words_read: core::cell::Cell<u32>,
}

impl SimProtectedFlash {
    /// Create fully erased flash
    #[must_use]
    pub const fn new() -> Self {
        Self {
            info: [0xFF; SIM_INFO_SIZE],
            cert_region: [0xFF; RO_CERTS_REGION_SIZE],
            info_window: None,
            cert_window_open: false,
            fail_info_read_at: None,
            info_window_opens: 0,
            info_words_read: core::cell::Cell::new(0),
        }
    }

    /// Program bytes into flash INFO
    ///
    /// # Errors
    ///
    /// Returns [`HalError::FlashOutOfBounds`] if the data runs past the page.
    pub fn program_info(&mut self, offset: usize, data: &[u8]) -> HalResult<()> {
        let end = offset
            .checked_add(data.len())
            .filter(|&end| end <= SIM_INFO_SIZE)
            .ok_or(HalError::FlashOutOfBounds)?;
        self.info[offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Program the whole RO certificate region
    pub fn program_cert_region(&mut self, region: &[u8; RO_CERTS_REGION_SIZE]) {
        self.cert_region.copy_from_slice(region);
    }

    /// Fail the INFO word read at `offset`
    pub fn fail_info_read_at(&mut self, offset: u32) {
        self.fail_info_read_at = Some(offset);
    }

    /// Number of times the INFO window was opened
    #[must_use]
    pub const fn info_window_opens(&self) -> u32 {
        self.info_window_opens
    }

    /// Number of INFO words read
    #[must_use]
    pub fn info_words_read(&self) -> u32 {
        self.info_words_read.get()
    }
}

impl Default for SimProtectedFlash {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtectedFlashInterface for SimProtectedFlash {
    fn enable_info_read(&mut self, offset: u32, size: u32) -> HalResult<()> {
        let end = offset.checked_add(size).ok_or(HalError::FlashOutOfBounds)?;
        if size == 0 || end as usize > SIM_INFO_SIZE {
            return Err(HalError::FlashOutOfBounds);
        }
        self.info_window = Some((offset, end));
        self.info_window_opens += 1;
        Ok(())
    }

    fn disable_info_read(&mut self) {
        self.info_window = None;
    }

    fn info_read_enabled(&self) -> bool {
        self.info_window.is_some()
    }

    fn read_info_word(&self, offset: u32) -> HalResult<u32> {
        let (start, end) = self.info_window.ok_or(HalError::FlashWindowClosed)?;
        if offset % 4 != 0 || offset < start || offset.saturating_add(4) > end {
            return Err(HalError::FlashOutOfBounds);
        }
        if self.fail_info_read_at == Some(offset) {
            return Err(HalError::FlashReadFailed);
        }
        self.info_words_read.set(self.info_words_read.get() + 1);

        let at = offset as usize;
        Ok(u32::from_le_bytes([
            self.info[at],
            self.info[at + 1],
            self.info[at + 2],
            self.info[at + 3],
        ]))
    }

    fn enable_cert_region_read(&mut self) -> HalResult<()> {
        self.cert_window_open = true;
        Ok(())
    }

    fn read_cert_region(&self, offset: usize, buffer: &mut [u8]) -> HalResult<()> {
        if !self.cert_window_open {
            return Err(HalError::FlashWindowClosed);
        }
        let end = offset
            .checked_add(buffer.len())
            .filter(|&end| end <= RO_CERTS_REGION_SIZE)
            .ok_or(HalError::FlashOutOfBounds)?;
        buffer.copy_from_slice(&self.cert_region[offset..end]);
        Ok(())
    }
}

// =============================================================================
// NV store
// =============================================================================

/// One defined object in [`SimNvStore`]
#[derive(Debug, Clone)]
pub struct SimNvObject {
    /// Public area supplied at definition
    pub public: NvPublic,
    /// Object contents
    pub data: Vec<u8, SIM_NV_OBJECT_CAPACITY>,
    /// Whether the object has been written
    pub written: bool,
}

/// Simulated NV object store
#[derive(Debug, Default)]
pub struct SimNvStore {
    objects: Vec<SimNvObject, SIM_NV_MAX_OBJECTS>,
    reserved_seed: Option<[u8; 32]>,
    platform_session: bool,
    pending: bool,
    writes: u32,
    commits: u32,
    fail_define_for: Option<NvIndex>,
    fail_write_for: Option<NvIndex>,
    fail_reserved_write: bool,
    fail_commit_at: Option<u32>,
    commit_attempts: u32,
}

impl SimNvStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the definition of `index`
    pub fn fail_define_for(&mut self, index: NvIndex) {
        self.fail_define_for = Some(index);
    }

    /// Reject writes to `index`
    pub fn fail_write_for(&mut self, index: NvIndex) {
        self.fail_write_for = Some(index);
    }

    /// Reject writes to reserved slots
    pub fn fail_reserved_write(&mut self) {
        self.fail_reserved_write = true;
    }

    /// Fail the `n`th commit (1-based)
    pub fn fail_commit_at(&mut self, n: u32) {
        self.fail_commit_at = Some(n);
    }

    /// Contents of a defined object
    #[must_use]
    pub fn object(&self, index: NvIndex) -> Option<&SimNvObject> {
        self.objects.iter().find(|o| o.public.index == index)
    }

    /// Number of defined objects
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Contents of the reserved seed slot
    #[must_use]
    pub const fn reserved_seed(&self) -> Option<&[u8; 32]> {
        self.reserved_seed.as_ref()
    }

    /// Successful writes, reserved slots included
    #[must_use]
    pub const fn writes(&self) -> u32 {
        self.writes
    }

    /// Successful commits
    #[must_use]
    pub const fn commits(&self) -> u32 {
        self.commits
    }

    /// Whether uncommitted writes are outstanding
    #[must_use]
    pub const fn has_pending_writes(&self) -> bool {
        self.pending
    }
}

impl NvStoreInterface for SimNvStore {
    fn begin_platform_session(&mut self) {
        self.platform_session = true;
    }

    fn define_space(&mut self, public: &NvPublic) -> HalResult<()> {
        if !self.platform_session || !public.attributes.contains(NvAttributes::PLATFORMCREATE) {
            return Err(HalError::NvNotAuthorized);
        }
        if self.object(public.index).is_some() {
            return Err(HalError::NvIndexExists);
        }
        if self.fail_define_for == Some(public.index) {
            return Err(HalError::NvDefineRejected);
        }
        if usize::from(public.data_size) > SIM_NV_OBJECT_CAPACITY {
            return Err(HalError::NvPayloadTooLarge);
        }

        let mut data = Vec::new();
        data.resize(usize::from(public.data_size), 0xFF)
            .map_err(|()| HalError::NvPayloadTooLarge)?;
        self.objects
            .push(SimNvObject {
                public: *public,
                data,
                written: false,
            })
            .map_err(|_| HalError::NvStoreFull)
    }

    fn write(&mut self, index: NvIndex, offset: u16, data: &[u8]) -> HalResult<()> {
        let fail = self.fail_write_for == Some(index);
        let object = self
            .objects
            .iter_mut()
            .find(|o| o.public.index == index)
            .ok_or(HalError::NvIndexNotDefined)?;

        if !object.public.attributes.contains(NvAttributes::PPWRITE) {
            return Err(HalError::NvWriteRejected);
        }
        if object.written && object.public.attributes.contains(NvAttributes::WRITEDEFINE) {
            return Err(HalError::NvWriteLocked);
        }
        let start = usize::from(offset);
        let end = start
            .checked_add(data.len())
            .filter(|&end| end <= object.data.len())
            .ok_or(HalError::NvPayloadTooLarge)?;
        if fail {
            return Err(HalError::NvWriteRejected);
        }

        object.data[start..end].copy_from_slice(data);
        object.written = true;
        self.writes += 1;
        self.pending = true;
        Ok(())
    }

    fn write_reserved(&mut self, slot: ReservedSlot, data: &[u8]) -> HalResult<()> {
        match slot {
            ReservedSlot::EndorsementSeed => {
                let seed: [u8; 32] = data.try_into().map_err(|_| HalError::InvalidParameter)?;
                if self.fail_reserved_write {
                    return Err(HalError::NvWriteRejected);
                }
                self.reserved_seed = Some(seed);
            }
        }
        self.writes += 1;
        self.pending = true;
        Ok(())
    }

    fn commit(&mut self) -> HalResult<()> {
        self.commit_attempts += 1;
        if self.fail_commit_at == Some(self.commit_attempts) {
            return Err(HalError::NvCommitFailed);
        }
        self.commits += 1;
        self.pending = false;
        Ok(())
    }
}
