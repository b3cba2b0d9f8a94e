// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Hardware interfaces for endorsement provisioning
//!
//! The endorsement flow touches three pieces of hardware. Each is modeled as
//! a trait so the orchestrator receives it explicitly instead of poking
//! global registers:
//!
//! - **Key manager**: the SHA engine that walks the key ladder
//!   ([`KeyManagerInterface`])
//! - **Protected flash**: the INFO window holding the encrypted seed and the
//!   RO certificate region ([`ProtectedFlashInterface`])
//! - **NV store**: the persistent object store that receives credentials
//!   ([`NvStoreInterface`])
//!
//! # Features
//!
//! - `sim`: host simulators for all three interfaces, with fault injection

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod traits;

#[cfg(feature = "sim")]
pub mod sim;

pub use error::{HalError, HalResult};
pub use traits::*;

/// Hardware backend the crate was built against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Host simulators from the `sim` module
    Simulated,
    /// Platform-supplied implementations of the traits
    External,
}

impl Backend {
    /// Backend selected at build time
    #[must_use]
    pub const fn current() -> Self {
        cfg_if::cfg_if! {
            if #[cfg(feature = "sim")] {
                Self::Simulated
            } else {
                Self::External
            }
        }
    }

    /// Short name for log output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simulated => "sim",
            Self::External => "external",
        }
    }
}
