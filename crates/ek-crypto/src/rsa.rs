// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! RSA public keys
//!
//! Only the key shape lives here. The modular arithmetic belongs to the
//! platform's [`SignatureVerifier`](crate::SignatureVerifier).

use sha2::{Digest, Sha256};

/// 32-bit words in a 2048-bit modulus
pub const RSA2048_MODULUS_WORDS: usize = 64;

/// Bytes in a 2048-bit modulus
pub const RSA2048_MODULUS_BYTES: usize = RSA2048_MODULUS_WORDS * 4;

/// Public exponent F4 (65537)
pub const RSA_F4: u32 = 65_537;

/// 2048-bit RSA public key
///
/// The modulus is stored as little-endian 32-bit words, least significant
/// word first.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RsaPublicKey {
    modulus: [u32; RSA2048_MODULUS_WORDS],
    exponent: u32,
}

impl RsaPublicKey {
    /// Create a key from modulus words and exponent
    #[must_use]
    pub const fn new(modulus: [u32; RSA2048_MODULUS_WORDS], exponent: u32) -> Self {
        Self { modulus, exponent }
    }

    /// Modulus words, least significant first
    #[must_use]
    pub const fn modulus_words(&self) -> &[u32; RSA2048_MODULUS_WORDS] {
        &self.modulus
    }

    /// Public exponent
    #[must_use]
    pub const fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Modulus as big-endian bytes
    #[must_use]
    pub fn modulus_be_bytes(&self) -> [u8; RSA2048_MODULUS_BYTES] {
        let mut out = [0u8; RSA2048_MODULUS_BYTES];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.modulus.iter().rev()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// SHA-256 over the big-endian modulus
    #[must_use]
    pub fn fingerprint(&self) -> [u8; 32] {
        Sha256::digest(self.modulus_be_bytes()).into()
    }
}

impl core::fmt::Debug for RsaPublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let fp = self.fingerprint();
        write!(
            f,
            "RsaPublicKey {{ e: {}, fp: {:02x}{:02x}{:02x}{:02x}.. }}",
            self.exponent, fp[0], fp[1], fp[2], fp[3]
        )
    }
}
