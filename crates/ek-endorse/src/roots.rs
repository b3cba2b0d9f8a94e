// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Endorsement CA roots
//!
//! Endorsement certificates must chain to one of these two 2048-bit keys.
//! Accepting the test root keeps development-signed parts provisionable.

use ek_crypto::rsa::{RSA2048_MODULUS_WORDS, RSA_F4};
use ek_crypto::RsaPublicKey;

/// Production endorsement CA modulus, least significant word first
const PROD_ENDORSEMENT_CA_RSA_N: [u32; RSA2048_MODULUS_WORDS] = [
        0xeb6a07bf, 0x6cf8eca6, 0x4756e85e, 0x2fc3874c,
        0xa4c23e87, 0xc364dffe, 0x2a2ddb95, 0x2f7f0e1e,
        0xdb485bd8, 0xce8aa808, 0xe062001b, 0x187811c3,
        0x0e400462, 0xb7097a01, 0xb988152b, 0xba9d058a,
        0x814b6691, 0xc70a694f, 0x8108c7f0, 0x4c7a1f33,
        0x5cfda48e, 0xef303dbc, 0x84f5a3ea, 0x14607435,
        0xc72f1e60, 0x345d0b38, 0x0ac16927, 0xbdf903c7,
        0x11b660ed, 0x21ebfe0e, 0x8c8b303c, 0xd6eff6cb,
        0x76156bf7, 0x57735ce4, 0x8b7a87ed, 0x7a757188,
        0xd4fb3eb0, 0xc67fa05d, 0x163f0cf5, 0x69d8abf3,
        0xec105749, 0x1de78f37, 0xb885a62f, 0x81344a82,
        0x390df2b7, 0x58a7c56a, 0xa938f471, 0x506ee7d4,
        0x2ca0f2a3, 0x2aa5392c, 0x39052797, 0x199e837c,
        0x0d367b81, 0xb7bbff6f, 0x0ea99f5f, 0xfbac0d2a,
        0x7bbe018d, 0x265fc995, 0x34f73008, 0x5e2cd747,
        0x42096e33, 0x0c15f816, 0xffa7f7d2, 0xbd6f0198,
];

/// Test endorsement CA modulus, least significant word first
const TEST_ENDORSEMENT_CA_RSA_N: [u32; RSA2048_MODULUS_WORDS] = [
        0xfa3b34ed, 0x3c59ad05, 0x912d6623, 0x83302402,
        0xd43b6755, 0x5777021a, 0xaf37e9a1, 0x45c0e8ad,
        0x9728f946, 0x4391523d, 0xdf7a9164, 0x88f1a9ae,
        0x036c557e, 0x5d9df43e, 0x3e65de68, 0xe172008a,
        0x709dc81f, 0x27a75fe0, 0x3e77f89e, 0x4f400ecc,
        0x51a17dae, 0x2ff9c652, 0xd1d83cdb, 0x20d26349,
        0xbbad71dd, 0x30051b2b, 0x276b2459, 0x809bb8e1,
        0xb8737049, 0xdbe94466, 0x8287072b, 0x070ef311,
        0x6e2a26de, 0x29d69f11, 0x96463d95, 0xb4dc6950,
        0x097d4dfe, 0x1b4a88cc, 0xbd6b50c8, 0x9f7a5b34,
        0xda22c199, 0x9d1ac04b, 0x136af5e5, 0xb1a0e824,
        0x4a065b34, 0x1f67fb46, 0xa1f91ab1, 0x27bb769f,
        0xb704c992, 0xb669cbf4, 0x9299bb6c, 0xcb1b2208,
        0x2dc0d9db, 0xe1513e13, 0xc7f24923, 0xa74c6bcc,
        0xca1a9a69, 0x1b994244, 0x4f64b0d9, 0x78607fd6,
        0x486fb315, 0xa1098c31, 0x5dc50dd6, 0xcdc10874,
];

/// Production endorsement CA
pub const PROD_ENDORSEMENT_CA: RsaPublicKey = RsaPublicKey::new(PROD_ENDORSEMENT_CA_RSA_N, RSA_F4);

/// Test (development) endorsement CA
pub const TEST_ENDORSEMENT_CA: RsaPublicKey = RsaPublicKey::new(TEST_ENDORSEMENT_CA_RSA_N, RSA_F4);

/// Which embedded root a certificate chained to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootAuthority {
    /// Production endorsement CA
    Production,
    /// Test endorsement CA
    Test,
}

impl RootAuthority {
    /// Roots in the order they are tried
    pub const ALL: [Self; 2] = [Self::Production, Self::Test];

    /// Public key of this root
    #[must_use]
    pub const fn public_key(&self) -> &'static RsaPublicKey {
        match self {
            Self::Production => &PROD_ENDORSEMENT_CA,
            Self::Test => &TEST_ENDORSEMENT_CA,
        }
    }

    /// Short name for log output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "prod",
            Self::Test => "test",
        }
    }
}
