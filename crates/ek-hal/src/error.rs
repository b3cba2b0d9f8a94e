// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! HAL error types

use core::fmt;

/// HAL error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalError {
    /// Flash read returned an error
    FlashReadFailed,
    /// Flash read attempted while the access window is closed
    FlashWindowClosed,
    /// Flash address outside the open window or region
    FlashOutOfBounds,
    /// NV define attempted without a platform-authorized session
    NvNotAuthorized,
    /// NV index already defined
    NvIndexExists,
    /// NV index not defined
    NvIndexNotDefined,
    /// NV store rejected the space definition
    NvDefineRejected,
    /// NV store rejected the write
    NvWriteRejected,
    /// Write-once NV object has already been written
    NvWriteLocked,
    /// Data does not fit the defined NV object
    NvPayloadTooLarge,
    /// NV store has no room for another object
    NvStoreFull,
    /// Flushing NV state failed
    NvCommitFailed,
    /// Invalid parameter
    InvalidParameter,
    /// Hardware fault detected
    HardwareFault,
}

impl HalError {
    /// Get error code
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::FlashReadFailed => 0x0810,
            Self::FlashWindowClosed => 0x0811,
            Self::FlashOutOfBounds => 0x0812,
            Self::NvNotAuthorized => 0x0890,
            Self::NvIndexExists => 0x0891,
            Self::NvIndexNotDefined => 0x0892,
            Self::NvDefineRejected => 0x0893,
            Self::NvWriteRejected => 0x0894,
            Self::NvWriteLocked => 0x0895,
            Self::NvPayloadTooLarge => 0x0896,
            Self::NvStoreFull => 0x0897,
            Self::NvCommitFailed => 0x0898,
            Self::InvalidParameter => 0x08F0,
            Self::HardwareFault => 0x08D0,
        }
    }

    /// Get error description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::FlashReadFailed => "flash read failed",
            Self::FlashWindowClosed => "flash read window closed",
            Self::FlashOutOfBounds => "flash address out of bounds",
            Self::NvNotAuthorized => "nv define without platform auth",
            Self::NvIndexExists => "nv index already defined",
            Self::NvIndexNotDefined => "nv index not defined",
            Self::NvDefineRejected => "nv define rejected",
            Self::NvWriteRejected => "nv write rejected",
            Self::NvWriteLocked => "nv object is write-once",
            Self::NvPayloadTooLarge => "nv payload too large",
            Self::NvStoreFull => "nv store full",
            Self::NvCommitFailed => "nv commit failed",
            Self::InvalidParameter => "invalid parameter",
            Self::HardwareFault => "hardware fault detected",
        }
    }
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0x{:04X}] {}", self.code(), self.description())
    }
}

impl From<HalError> for ek_common::Error {
    fn from(e: HalError) -> Self {
        match e {
            HalError::FlashReadFailed | HalError::FlashOutOfBounds => Self::FlashReadFailed,
            HalError::FlashWindowClosed => Self::FlashAccessDenied,
            HalError::NvIndexExists => Self::NvIndexExists,
            HalError::NvNotAuthorized
            | HalError::NvDefineRejected
            | HalError::NvStoreFull => Self::NvDefineFailed,
            HalError::NvIndexNotDefined
            | HalError::NvWriteRejected
            | HalError::NvWriteLocked => Self::NvWriteFailed,
            HalError::NvPayloadTooLarge => Self::NvPayloadTooLarge,
            HalError::NvCommitFailed => Self::NvCommitFailed,
            HalError::InvalidParameter => Self::InvalidParameter,
            HalError::HardwareFault => Self::KeyLadderFault,
        }
    }
}

/// HAL Result type
pub type HalResult<T> = Result<T, HalError>;
