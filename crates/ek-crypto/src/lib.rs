// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Cryptographic support for endorsement provisioning
//!
//! - **MAC**: HMAC-SHA256 behind the [`MacEngine`] trait, with a software
//!   engine built on the `hmac` and `sha2` crates
//! - **Signatures**: certificate verification is a platform capability,
//!   consumed through [`SignatureVerifier`]; this crate only defines the
//!   RSA public key shape it is handed
//! - **Secret hygiene**: volatile zeroization, zeroizing buffers and
//!   constant-time comparison
//!
//! # Security Requirements
//!
//! - Tag comparisons are constant time
//! - Intermediate keys are zeroized before their buffers go out of scope
//! - Nothing here logs or formats key material

#![no_std]
#![allow(unsafe_code)] // Volatile writes in zeroize_utils
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod mac;
pub mod rsa;
pub mod traits;
pub mod zeroize_utils;

pub use error::{CryptoError, CryptoResult};
pub use mac::SoftwareMac;
pub use rsa::RsaPublicKey;
pub use traits::{constant_time_eq, MacEngine, SignatureVerifier};
pub use zeroize_utils::SecureBuffer;
