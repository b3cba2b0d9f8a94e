// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! RO certificate region
//!
//! The 2 KiB region written at manufacture:
//!
//! ```text
//! ┌──────────────┬────────┬──────────┬──────────┬──────────────┬─────┬─────────────┐
//! │ component    │ key_id │ cert_len │ RSA cert │ component    │ ... │ HMAC tag    │
//! │ info (8B)    │ (4B)   │ (4B LE)  │          │ info (ECC)   │     │ (last 32B)  │
//! └──────────────┴────────┴──────────┴──────────┴──────────────┴─────┴─────────────┘
//! ```
//!
//! The tag is `HMAC-SHA256(HMAC-SHA256(seed, "RSA\0"), region[..2016])`.

use ek_common::constants::{
    COMPONENT_INFO_SIZE, FLASH_ERASED_WORD, HMAC_SHA256_SIZE, REGION_HMAC_KEY_LABEL,
    RO_CERTS_REGION_SIZE, RO_CERTS_TAGGED_SIZE, RO_CERT_HEADER_SIZE,
};
use ek_common::{ComponentType, Error, KeyId, Result};
use ek_crypto::{constant_time_eq, MacEngine, SecureBuffer};
use ek_hal::ProtectedFlashInterface;

use crate::seed::PrimarySeed;

/// Component-info descriptor preceding each record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentInfo {
    /// Declared component size
    pub component_size: u16,
    /// Decoded component type
    pub component_type: ComponentType,
    /// Raw type byte as written by the factory
    pub raw_type: u8,
}

impl ComponentInfo {
    /// Decode from the 8-byte wire form
    #[must_use]
    pub fn from_bytes(bytes: &[u8; COMPONENT_INFO_SIZE]) -> Self {
        Self {
            component_size: u16::from_le_bytes([bytes[0], bytes[1]]),
            component_type: ComponentType::from_u8(bytes[2]),
            raw_type: bytes[2],
        }
    }
}

/// One certificate record from the region
#[derive(Debug, Clone, Copy)]
pub struct CertificateRecord<'a> {
    /// Component-info descriptor
    pub info: ComponentInfo,
    /// Key the certificate is for
    pub key_id: KeyId,
    /// DER certificate, exactly the declared length
    pub cert: &'a [u8],
}

impl CertificateRecord<'_> {
    /// Certificate length in bytes
    #[must_use]
    pub const fn cert_len(&self) -> usize {
        self.cert.len()
    }
}

/// Both records of a parsed region
#[derive(Debug, Clone, Copy)]
pub struct ParsedRegion<'a> {
    /// First record, expected to be the RSA certificate
    pub rsa: CertificateRecord<'a>,
    /// Second record, expected to be the ECC certificate
    pub ecc: CertificateRecord<'a>,
}

impl ParsedRegion<'_> {
    /// Check that each record sits in its expected slot
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponentType`] if the first record is not an
    /// RSA certificate or the second is not an ECC certificate.
    pub fn check_component_types(&self) -> Result<()> {
        if self.rsa.info.component_type != ComponentType::RsaCert
            || self.ecc.info.component_type != ComponentType::EccCert
        {
            return Err(Error::InvalidComponentType);
        }
        Ok(())
    }
}

/// In-memory copy of the RO certificate region
pub struct RoCertRegion {
    bytes: [u8; RO_CERTS_REGION_SIZE],
}

impl RoCertRegion {
    /// Wrap raw region bytes
    #[must_use]
    pub const fn from_bytes(bytes: [u8; RO_CERTS_REGION_SIZE]) -> Self {
        Self { bytes }
    }

    /// Copy the region out of flash
    ///
    /// The region must already be mapped readable.
    ///
    /// # Errors
    ///
    /// Propagates the flash read error.
    pub fn read<F: ProtectedFlashInterface>(flash: &F) -> Result<Self> {
        let mut bytes = [0u8; RO_CERTS_REGION_SIZE];
        flash.read_cert_region(0, &mut bytes)?;
        Ok(Self { bytes })
    }

    /// Raw region bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; RO_CERTS_REGION_SIZE] {
        &self.bytes
    }

    /// Whether the first word still reads as erased flash
    #[must_use]
    pub fn is_erased(&self) -> bool {
        let first = [self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]];
        u32::from_le_bytes(first) == FLASH_ERASED_WORD
    }

    /// Bytes covered by the tag
    #[must_use]
    pub fn tagged_bytes(&self) -> &[u8] {
        &self.bytes[..RO_CERTS_TAGGED_SIZE]
    }

    /// Stored tag
    #[must_use]
    pub fn tag(&self) -> &[u8] {
        &self.bytes[RO_CERTS_TAGGED_SIZE..]
    }

    /// Split the region into its two records
    ///
    /// Both headers and both declared certificate lengths must fit inside
    /// the tag-covered span before any offset derived from them is used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionMalformed`] if the declared lengths overrun
    /// the tag-covered span.
    pub fn parse(&self) -> Result<ParsedRegion<'_>> {
        let tagged = self.tagged_bytes();

        let rsa_len = declared_cert_len(tagged, 0)?;
        let ecc_start = RO_CERT_HEADER_SIZE
            .checked_add(rsa_len)
            .filter(|&end| end.saturating_add(RO_CERT_HEADER_SIZE) <= tagged.len())
            .ok_or(Error::RegionMalformed)?;

        let ecc_len = declared_cert_len(tagged, ecc_start)?;
        (2 * RO_CERT_HEADER_SIZE)
            .checked_add(rsa_len)
            .and_then(|n| n.checked_add(ecc_len))
            .filter(|&total| total <= tagged.len())
            .ok_or(Error::RegionMalformed)?;

        Ok(ParsedRegion {
            rsa: record_at(tagged, 0, rsa_len),
            ecc: record_at(tagged, ecc_start, ecc_len),
        })
    }
}

fn declared_cert_len(tagged: &[u8], start: usize) -> Result<usize> {
    let at = start + COMPONENT_INFO_SIZE + 4;
    let raw = tagged
        .get(at..at + 4)
        .ok_or(Error::RegionMalformed)?;
    let len = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);
    usize::try_from(len).map_err(|_| Error::RegionMalformed)
}

/// Caller has bounds-checked `start + header + cert_len`.
fn record_at(tagged: &[u8], start: usize, cert_len: usize) -> CertificateRecord<'_> {
    let mut info = [0u8; COMPONENT_INFO_SIZE];
    info.copy_from_slice(&tagged[start..start + COMPONENT_INFO_SIZE]);
    let key_at = start + COMPONENT_INFO_SIZE;
    let cert_at = start + RO_CERT_HEADER_SIZE;

    CertificateRecord {
        info: ComponentInfo::from_bytes(&info),
        key_id: KeyId([
            tagged[key_at],
            tagged[key_at + 1],
            tagged[key_at + 2],
            tagged[key_at + 3],
        ]),
        cert: &tagged[cert_at..cert_at + cert_len],
    }
}

/// Compute the region tag for `seed` over `tagged`
///
/// # Errors
///
/// Propagates MAC engine failures.
pub fn compute_region_tag<M: MacEngine>(
    mac: &mut M,
    seed: &PrimarySeed,
    tagged: &[u8],
) -> Result<[u8; HMAC_SHA256_SIZE]> {
    let mut region_key = SecureBuffer::<HMAC_SHA256_SIZE>::new();
    mac.hmac_sha256(seed.as_bytes(), REGION_HMAC_KEY_LABEL, region_key.as_mut_array())?;

    let mut tag = [0u8; HMAC_SHA256_SIZE];
    mac.hmac_sha256(region_key.as_array(), tagged, &mut tag)?;
    Ok(tag)
}

/// Check the region tag against `seed`
///
/// Returns `Ok(false)` on a tag mismatch. The comparison covers all 32
/// bytes regardless of where they differ.
///
/// # Errors
///
/// Propagates MAC engine failures.
pub fn validate_region<M: MacEngine>(
    mac: &mut M,
    seed: &PrimarySeed,
    region: &RoCertRegion,
) -> Result<bool> {
    let expected = compute_region_tag(mac, seed, region.tagged_bytes())?;
    Ok(constant_time_eq(&expected, region.tag()))
}
