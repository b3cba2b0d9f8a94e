// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Endorsement certificate validation
//!
//! Establishes chain of trust to one of the two embedded roots. No expiry or
//! revocation checking happens here.

use ek_common::{Error, Result};
use ek_crypto::SignatureVerifier;

use crate::region::CertificateRecord;
use crate::roots::RootAuthority;

/// Validate one certificate record
///
/// Checks, in order: the component type is a certificate type, the
/// certificate fits in `max_cert_len`, and the signature verifies under the
/// production root or, failing that, the test root.
///
/// # Errors
///
/// - [`Error::InvalidComponentType`] for a non-certificate component
/// - [`Error::CertificateTooLarge`] if the certificate exceeds `max_cert_len`
/// - [`Error::UntrustedCertificate`] if neither root verifies it
pub fn validate_certificate<V: SignatureVerifier>(
    verifier: &V,
    record: &CertificateRecord<'_>,
    max_cert_len: usize,
) -> Result<RootAuthority> {
    if !record.info.component_type.is_certificate() {
        return Err(Error::InvalidComponentType);
    }

    // TODO: bind key_id to the chip's HIK once the key manager exposes it
    if record.cert_len() > max_cert_len {
        return Err(Error::CertificateTooLarge);
    }

    RootAuthority::ALL
        .into_iter()
        .find(|root| verifier.verify_certificate(record.cert, root.public_key()))
        .ok_or(Error::UntrustedCertificate)
}
