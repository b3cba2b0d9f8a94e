// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Common library for chip endorsement provisioning
//!
//! This crate provides the error taxonomy, wire constants, factory
//! configuration and the in-memory log ring shared by every endorsement
//! component.
//!
//! # Features
//!
//! - `std`: Enable standard library support (disabled by default for firmware)
//! - `defmt`: Enable defmt formatting of errors for on-target debugging
//!
//! # Security
//!
//! Secret-bearing types elsewhere in the workspace implement `Zeroize`.
//! Nothing in this crate allocates; all buffers are fixed-size arrays or
//! heapless collections.

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod constants;
pub mod errors;
pub mod log;
pub mod types;

// Re-export commonly used items
pub use config::EndorsementConfig;
pub use errors::{Error, FaultKind, Result};
pub use types::*;
