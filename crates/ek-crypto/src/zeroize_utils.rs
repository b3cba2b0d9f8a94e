// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Secure memory utilities
//!
//! Zeroization and zeroizing buffers for seeds, unwrap keys and
//! intermediate MAC keys.

use core::ptr;
use core::sync::atomic::{compiler_fence, Ordering};
use zeroize::Zeroize;

/// Securely zero memory, preventing compiler optimization
///
/// This function uses volatile writes to ensure the memory is actually
/// zeroed and not optimized away by the compiler.
#[inline(never)]
pub fn secure_zero(data: &mut [u8]) {
    for byte in data.iter_mut() {
        // SAFETY: We're writing to valid memory that we have mutable access to
        unsafe {
            ptr::write_volatile(byte, 0);
        }
    }

    compiler_fence(Ordering::SeqCst);
}

/// Fixed-size secret buffer that zeroizes on drop
pub struct SecureBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecureBuffer<N> {
    /// Create a new zeroed secure buffer
    #[must_use]
    pub const fn new() -> Self {
        Self { data: [0u8; N] }
    }

    /// Borrow the contents
    #[must_use]
    pub const fn as_array(&self) -> &[u8; N] {
        &self.data
    }

    /// Mutably borrow the contents
    pub fn as_mut_array(&mut self) -> &mut [u8; N] {
        &mut self.data
    }
}

impl<const N: usize> Default for SecureBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Zeroize for SecureBuffer<N> {
    fn zeroize(&mut self) {
        secure_zero(&mut self.data);
    }
}

impl<const N: usize> Drop for SecureBuffer<N> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<const N: usize> core::fmt::Debug for SecureBuffer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SecureBuffer<{N}>([REDACTED])")
    }
}
