// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Crypto engine traits
//!
//! The endorsement flow consumes two engine capabilities: a keyed MAC and
//! certificate signature verification. Both are traits so a platform can
//! route them to its crypto accelerator.

use crate::error::CryptoResult;
use crate::rsa::RsaPublicKey;

/// HMAC-SHA256 output size in bytes
pub const MAC_OUTPUT_SIZE: usize = 32;

/// Keyed MAC engine
pub trait MacEngine {
    /// Compute HMAC-SHA256 of `data` under `key` into `out`
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKey` if the engine rejects the key.
    fn hmac_sha256(
        &mut self,
        key: &[u8],
        data: &[u8],
        out: &mut [u8; MAC_OUTPUT_SIZE],
    ) -> CryptoResult<()>;
}

/// X.509 certificate signature verification
///
/// Implementations parse `cert_der`, and check its signature over the
/// to-be-signed portion against `root`. Any parse failure is a rejection.
pub trait SignatureVerifier {
    /// Check that `cert_der` is signed by `root`
    fn verify_certificate(&self, cert_der: &[u8], root: &RsaPublicKey) -> bool;
}

/// Constant-time comparison
///
/// Compares two byte slices in constant time to prevent timing attacks.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    use subtle::ConstantTimeEq;
    a.ct_eq(b).into()
}
