// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Chip endorsement for Qbitel secure elements
//!
//! Provisions the endorsement identity of a chip exactly once, at first boot
//! after manufacture:
//!
//! - **Key ladder**: drives the key manager to derive FRK2
//! - **Seed recovery**: unmasks the primary seed stored in flash INFO
//! - **Region integrity**: checks the HMAC over the RO certificate region
//! - **Certificate validation**: chains each certificate to an embedded root
//! - **NV credential store**: persists certificates and seed
//! - **Orchestrator**: sequences the above, with a fixed fallback identity
//!   when the region fails its integrity check
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      Endorser                        │
//! └──────┬─────────────┬───────────────┬─────────────┬───┘
//!        │             │               │             │
//!        ▼             ▼               ▼             ▼
//! ┌────────────┐ ┌────────────┐ ┌────────────┐ ┌────────────┐
//! │ seed       │ │ region     │ │ certificate│ │ nv_store   │
//! │ recovery   │ │ HMAC check │ │ validation │ │ (+fallback)│
//! └─────┬──────┘ └─────┬──────┘ └─────┬──────┘ └─────┬──────┘
//!       ▼              ▼              ▼              ▼
//!  KeyManager +    MacEngine    SignatureVerifier  NvStore
//!  ProtectedFlash
//! ```
//!
//! All hardware and crypto engines are injected; nothing here touches a
//! register directly.

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod certificate;
pub mod endorsement;
pub mod fallback;
pub mod key_ladder;
pub mod nv_store;
pub mod region;
pub mod roots;
pub mod seed;

pub use certificate::validate_certificate;
pub use endorsement::{EndorsementOutcome, EndorsementState, Endorser};
pub use key_ladder::{KeyLadder, UnwrapKey};
pub use nv_store::CredentialStore;
pub use region::{validate_region, RoCertRegion};
pub use roots::RootAuthority;
pub use seed::{recover_seed, PrimarySeed};
