// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Common types for endorsement provisioning
//!
//! Component identifiers, credential kinds and NV indices shared between
//! the region parser, the certificate validator and the NV credential store.

use core::fmt;

use crate::constants::EK_CERT_NV_START_INDEX;

/// Personalization component type, as written by the factory tooling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ComponentType {
    /// Encrypted primary seed
    Eps = 128,
    /// RSA endorsement certificate
    RsaCert = 129,
    /// P-256 endorsement certificate
    EccCert = 130,
    /// Anything else
    Unknown = 0xFF,
}

impl ComponentType {
    /// Decode a raw component type byte
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            128 => Self::Eps,
            129 => Self::RsaCert,
            130 => Self::EccCert,
            _ => Self::Unknown,
        }
    }

    /// Check if this component carries an endorsement certificate
    #[must_use]
    pub const fn is_certificate(&self) -> bool {
        matches!(self, Self::RsaCert | Self::EccCert)
    }
}

/// Kind of credential persisted by the NV credential store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    /// RSA endorsement certificate
    RsaCertificate,
    /// ECC endorsement certificate
    EccCertificate,
    /// Primary endorsement seed (reserved persistent slot)
    PrimarySeed,
}

impl CredentialKind {
    /// Certificate kind for a component type, if it is one
    #[must_use]
    pub const fn for_component(component: ComponentType) -> Option<Self> {
        match component {
            ComponentType::RsaCert => Some(Self::RsaCertificate),
            ComponentType::EccCert => Some(Self::EccCertificate),
            ComponentType::Eps | ComponentType::Unknown => None,
        }
    }

    /// NV index for this credential relative to `base`
    ///
    /// Returns `None` for the seed, which lives in a reserved slot outside
    /// the certificate index range, and for an ECC index past `u32::MAX`.
    #[must_use]
    pub const fn nv_index(&self, base: NvIndex) -> Option<NvIndex> {
        match self {
            Self::RsaCertificate => Some(base),
            Self::EccCertificate => match base.0.checked_add(1) {
                Some(index) => Some(NvIndex(index)),
                None => None,
            },
            Self::PrimarySeed => None,
        }
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RsaCertificate => "RSA cert",
            Self::EccCertificate => "ECC cert",
            Self::PrimarySeed => "EPS",
        };
        f.write_str(name)
    }
}

/// NV space handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NvIndex(pub u32);

impl NvIndex {
    /// Base index for endorsement certificates
    pub const EK_CERT_BASE: Self = Self(EK_CERT_NV_START_INDEX);

    /// Raw handle value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for NvIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// Key identifier attached to each certificate record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId(pub [u8; 4]);

impl KeyId {
    /// Raw bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}
