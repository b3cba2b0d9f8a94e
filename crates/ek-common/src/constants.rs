// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Endorsement-wide constants
//!
//! Sizes, NV indices and key ladder step numbers fixed by the chip's
//! manufacturing process. None of these may change without a matching
//! change to the factory personalization tooling.

// =============================================================================
// Secret Material
// =============================================================================

/// Primary (endorsement) seed size in bytes
pub const PRIMARY_SEED_SIZE: usize = 32;

/// FRK2 unwrap key size in bytes (AES-256 block cipher key)
pub const UNWRAP_KEY_SIZE: usize = 32;

/// HMAC-SHA256 tag size in bytes
pub const HMAC_SHA256_SIZE: usize = 32;

/// Label mixed with the seed to derive the region HMAC key.
///
/// Four bytes including the trailing NUL, as fed by the factory tooling.
pub const REGION_HMAC_KEY_LABEL: &[u8; 4] = b"RSA\0";

// =============================================================================
// RO Certificate Region
// =============================================================================

/// Flash address of the RO certificate region
pub const RO_CERTS_START_ADDR: u32 = 0x0004_3800;

/// RO certificate region size in bytes
pub const RO_CERTS_REGION_SIZE: usize = 0x0800;

/// Bytes covered by the trailing region tag
pub const RO_CERTS_TAGGED_SIZE: usize = RO_CERTS_REGION_SIZE - HMAC_SHA256_SIZE;

/// Component-info descriptor size in bytes
pub const COMPONENT_INFO_SIZE: usize = 8;

/// Certificate response header size (key id + cert length)
pub const CERT_RESPONSE_HEADER_SIZE: usize = 8;

/// Full record header size preceding each certificate
pub const RO_CERT_HEADER_SIZE: usize = COMPONENT_INFO_SIZE + CERT_RESPONSE_HEADER_SIZE;

/// Value of an erased flash word
pub const FLASH_ERASED_WORD: u32 = 0xFFFF_FFFF;

// =============================================================================
// Flash INFO Region
// =============================================================================

/// Offset of the manufacture-state window inside flash INFO1
pub const FLASH_INFO_MANUFACTURE_STATE_OFFSET: u32 = 0x0000_0000;

/// Size of the manufacture-state window in bytes
pub const FLASH_INFO_MANUFACTURE_STATE_SIZE: u32 = 0x0000_0200;

/// Flash INFO word size in bytes
pub const FLASH_INFO_WORD_SIZE: usize = 4;

// =============================================================================
// NV Credential Indices
// =============================================================================

/// First endorsement certificate NV index (RSA); ECC uses the next index
pub const EK_CERT_NV_START_INDEX: u32 = 0x01C0_0000;

/// Largest payload a single NV write accepts
pub const MAX_NV_BUFFER_SIZE: usize = 1024;

// =============================================================================
// Key Ladder
// =============================================================================

/// Key manager certificate (derivation step) numbers
pub mod keymgr_cert {
    /// Initial step after engine reset
    pub const CERT_0: u32 = 0;
    /// Derive HC_PHIK into ISR0
    pub const CERT_3: u32 = 3;
    /// Mix OBS-FBS into ISR1
    pub const CERT_4: u32 = 4;
    /// Derive HIK_RT into ISR0
    pub const CERT_5: u32 = 5;
    /// Derive BL_HIK into ISR0
    pub const CERT_7: u32 = 7;
    /// First FRK2 generation step
    pub const CERT_15: u32 = 15;
    /// Second FRK2 generation step
    pub const CERT_20: u32 = 20;
    /// Version-bound step, repeated once per firmware major version headroom
    pub const CERT_25: u32 = 25;
    /// Final FRK2 step
    pub const CERT_26: u32 = 26;
}

/// Firmware major version the ladder is bound to
pub const FW_MAJOR_VERSION: u8 = 0;

/// Highest firmware major version the ladder can ever be bound to
pub const MAX_FW_MAJOR_VERSION: u8 = 254;

/// Default number of status polls before a step is declared hung
pub const KEY_LADDER_POLL_TIMEOUT: u32 = 1_000_000;
