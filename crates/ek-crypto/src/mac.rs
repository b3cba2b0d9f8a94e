// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Software HMAC-SHA256

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{CryptoError, CryptoResult};
use crate::traits::{MacEngine, MAC_OUTPUT_SIZE};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 computed in software
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftwareMac;

impl SoftwareMac {
    /// Create a software MAC engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MacEngine for SoftwareMac {
    fn hmac_sha256(
        &mut self,
        key: &[u8],
        data: &[u8],
        out: &mut [u8; MAC_OUTPUT_SIZE],
    ) -> CryptoResult<()> {
        let mut mac = HmacSha256::new_from_slice(key).map_err(|_| CryptoError::InvalidKey)?;
        mac.update(data);
        out.copy_from_slice(&mac.finalize().into_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231 test case 2
    #[test]
    fn test_rfc4231_case_2() {
        let expected: [u8; 32] = [
            0x5b, 0xdc, 0xc1, 0x46, 0xbf, 0x60, 0x75, 0x4e, 0x6a, 0x04, 0x24, 0x26, 0x08, 0x95,
            0x75, 0xc7, 0x5a, 0x00, 0x3f, 0x08, 0x9d, 0x27, 0x39, 0x83, 0x9d, 0xec, 0x58, 0xb9,
            0x64, 0xec, 0x38, 0x43,
        ];
        let mut out = [0u8; 32];
        SoftwareMac::new()
            .hmac_sha256(b"Jefe", b"what do ya want for nothing?", &mut out)
            .unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_key_changes_output() {
        let mut engine = SoftwareMac::new();
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        engine.hmac_sha256(&[1; 32], b"data", &mut a).unwrap();
        engine.hmac_sha256(&[2; 32], b"data", &mut b).unwrap();
        assert_ne!(a, b);
    }
}
