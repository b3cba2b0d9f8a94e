// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Error types for endorsement provisioning
//!
//! This module defines the unified error type used by every endorsement
//! component. Errors are `Copy`, allocation-free, and carry a stable 16-bit
//! code so that a failed attempt can be diagnosed from the log ring alone.

use core::fmt;

/// Result type alias for endorsement operations
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for endorsement provisioning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    // =========================================================================
    // Key Ladder Errors (0x01xx)
    // =========================================================================
    /// The key manager raised a hardware error flag during a derivation step
    KeyLadderFault,
    /// The key manager never signalled completion within the poll budget
    KeyLadderTimeout,

    // =========================================================================
    // Flash Errors (0x02xx)
    // =========================================================================
    /// Reading the protected flash INFO region failed
    FlashReadFailed,
    /// A flash access window could not be opened
    FlashAccessDenied,

    // =========================================================================
    // Region Format Errors (0x03xx)
    // =========================================================================
    /// Record headers in the RO certificate region point outside the region
    RegionMalformed,

    // =========================================================================
    // Certificate Validation Errors (0x04xx)
    // =========================================================================
    /// Component type is not an RSA or ECC certificate (or is in the wrong slot)
    InvalidComponentType,
    /// Certificate is larger than the largest NV buffer
    CertificateTooLarge,
    /// Certificate does not chain to either embedded root
    UntrustedCertificate,

    // =========================================================================
    // NV Storage Errors (0x05xx)
    // =========================================================================
    /// NV space definition was rejected
    NvDefineFailed,
    /// NV index is already defined
    NvIndexExists,
    /// NV write was rejected
    NvWriteFailed,
    /// Payload does not fit the defined NV space
    NvPayloadTooLarge,
    /// Flushing NV state to persistent media failed
    NvCommitFailed,

    // =========================================================================
    // General Errors (0xFFxx)
    // =========================================================================
    /// Buffer is too small for operation
    BufferTooSmall,
    /// Invalid parameter provided
    InvalidParameter,
    /// Crypto engine failure unrelated to verification outcome
    CryptoError,
    /// Internal error (should not occur)
    InternalError,
}

/// Fault taxonomy of an endorsement attempt
///
/// Every [`Error`] maps onto exactly one kind. A region HMAC mismatch is not
/// an error: it is reported as a fallback outcome whose kind is
/// [`FaultKind::IntegrityFault`]. Every other kind ends the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Key ladder error flag raised
    HardwareFault,
    /// Key ladder completion poll exhausted its budget
    HardwareTimeout,
    /// Protected flash could not be read
    FlashReadFault,
    /// Region HMAC mismatch
    IntegrityFault,
    /// Bad component type, oversize certificate or untrusted signature
    ValidationFault,
    /// NV define, write or commit failure
    StorageFault,
    /// Programming or parameter error
    Internal,
}

impl Error {
    /// Get the error code for this error
    ///
    /// Error codes are organized by category:
    /// - 0x01xx: Key ladder errors
    /// - 0x02xx: Flash errors
    /// - 0x03xx: Integrity errors
    /// - 0x04xx: Certificate validation errors
    /// - 0x05xx: NV storage errors
    /// - 0xFFxx: General errors
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::KeyLadderFault => 0x0101,
            Self::KeyLadderTimeout => 0x0102,

            Self::FlashReadFailed => 0x0201,
            Self::FlashAccessDenied => 0x0202,

            Self::RegionMalformed => 0x0302,

            Self::InvalidComponentType => 0x0401,
            Self::CertificateTooLarge => 0x0402,
            Self::UntrustedCertificate => 0x0403,

            Self::NvDefineFailed => 0x0501,
            Self::NvIndexExists => 0x0502,
            Self::NvWriteFailed => 0x0503,
            Self::NvPayloadTooLarge => 0x0504,
            Self::NvCommitFailed => 0x0505,

            Self::BufferTooSmall => 0xFF01,
            Self::InvalidParameter => 0xFF02,
            Self::CryptoError => 0xFF03,
            Self::InternalError => 0xFFFF,
        }
    }

    /// Classify this error within the endorsement fault taxonomy
    #[must_use]
    pub const fn fault_kind(&self) -> FaultKind {
        match self {
            Self::KeyLadderFault => FaultKind::HardwareFault,
            Self::KeyLadderTimeout => FaultKind::HardwareTimeout,
            Self::FlashReadFailed | Self::FlashAccessDenied => FaultKind::FlashReadFault,
            Self::RegionMalformed
            | Self::InvalidComponentType
            | Self::CertificateTooLarge
            | Self::UntrustedCertificate => FaultKind::ValidationFault,
            Self::NvDefineFailed
            | Self::NvIndexExists
            | Self::NvWriteFailed
            | Self::NvPayloadTooLarge
            | Self::NvCommitFailed => FaultKind::StorageFault,
            Self::BufferTooSmall
            | Self::InvalidParameter
            | Self::CryptoError
            | Self::InternalError => FaultKind::Internal,
        }
    }

    /// Check if this is a security-critical error
    #[must_use]
    pub const fn is_security_error(&self) -> bool {
        matches!(
            self,
            Self::KeyLadderFault
                | Self::RegionMalformed
                | Self::InvalidComponentType
                | Self::UntrustedCertificate
        )
    }

    /// Get a short description of the error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::KeyLadderFault => "key ladder hardware fault",
            Self::KeyLadderTimeout => "key ladder step timed out",
            Self::FlashReadFailed => "protected flash read failed",
            Self::FlashAccessDenied => "flash access window unavailable",
            Self::RegionMalformed => "certificate region malformed",
            Self::InvalidComponentType => "invalid component type",
            Self::CertificateTooLarge => "certificate exceeds nv buffer",
            Self::UntrustedCertificate => "certificate not signed by a known root",
            Self::NvDefineFailed => "nv define failed",
            Self::NvIndexExists => "nv index already defined",
            Self::NvWriteFailed => "nv write failed",
            Self::NvPayloadTooLarge => "nv payload too large",
            Self::NvCommitFailed => "nv commit failed",
            Self::BufferTooSmall => "buffer too small",
            Self::InvalidParameter => "invalid parameter",
            Self::CryptoError => "crypto engine error",
            Self::InternalError => "internal error",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0x{:04X}] {}", self.code(), self.description())
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HardwareFault => "hardware fault",
            Self::HardwareTimeout => "hardware timeout",
            Self::FlashReadFault => "flash read fault",
            Self::IntegrityFault => "integrity fault",
            Self::ValidationFault => "validation fault",
            Self::StorageFault => "storage fault",
            Self::Internal => "internal",
        };
        f.write_str(name)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "[0x{:04X}] {}", self.code(), self.description());
    }
}
