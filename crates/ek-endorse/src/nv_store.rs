// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! NV credential store
//!
//! Persists endorsement certificates and the primary seed. Each credential
//! is committed on its own; there is no transaction spanning several
//! credentials, so a failure part way leaves earlier ones in place.
//!
//! | Credential      | Location                      |
//! |-----------------|-------------------------------|
//! | RSA certificate | `ek_cert_base_index`          |
//! | ECC certificate | `ek_cert_base_index + 1`      |
//! | Primary seed    | reserved endorsement-seed slot |

use ek_common::config::NvConfig;
use ek_common::{CredentialKind, Error, NvIndex, Result};
use ek_hal::{NameAlg, NvAttributes, NvPublic, NvStoreInterface, ReservedSlot};

use crate::seed::PrimarySeed;

/// Credential writer over a borrowed NV store
pub struct CredentialStore<'a, N: NvStoreInterface> {
    nv: &'a mut N,
    config: NvConfig,
}

impl<'a, N: NvStoreInterface> CredentialStore<'a, N> {
    /// Create a store
    pub fn new(nv: &'a mut N, config: NvConfig) -> Self {
        Self { nv, config }
    }

    /// NV index for a certificate kind
    #[must_use]
    pub const fn index_for(&self, kind: CredentialKind) -> Option<NvIndex> {
        kind.nv_index(self.config.ek_cert_base_index)
    }

    /// Store a credential of any kind
    ///
    /// # Errors
    ///
    /// See [`store_certificate`](Self::store_certificate) and
    /// [`store_seed`](Self::store_seed). A seed payload that is not exactly
    /// 32 bytes is [`Error::InvalidParameter`].
    pub fn store(&mut self, kind: CredentialKind, bytes: &[u8]) -> Result<()> {
        match kind {
            CredentialKind::PrimarySeed => {
                let seed = PrimarySeed::from_slice(bytes).ok_or(Error::InvalidParameter)?;
                self.store_seed(&seed)
            }
            CredentialKind::RsaCertificate | CredentialKind::EccCertificate => {
                self.store_certificate(kind, bytes).map(|_| ())
            }
        }
    }

    /// Define, write and commit a certificate object
    ///
    /// The object is created write-once under platform authorization, sized
    /// to the certificate.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if `kind` is not a certificate kind
    /// - [`Error::NvPayloadTooLarge`] if the certificate exceeds the NV buffer
    /// - [`Error::NvIndexExists`] if the index is already defined
    /// - [`Error::NvDefineFailed`], [`Error::NvWriteFailed`] or
    ///   [`Error::NvCommitFailed`] from the store
    pub fn store_certificate(&mut self, kind: CredentialKind, cert: &[u8]) -> Result<NvIndex> {
        let index = self.index_for(kind).ok_or(Error::InvalidParameter)?;
        if cert.len() > self.config.max_nv_buffer_size {
            return Err(Error::NvPayloadTooLarge);
        }
        let data_size = u16::try_from(cert.len()).map_err(|_| Error::NvPayloadTooLarge)?;

        self.nv.begin_platform_session();
        self.nv.define_space(&NvPublic {
            index,
            name_alg: NameAlg::Sha256,
            attributes: NvAttributes::endorsement_credential(),
            auth_policy_size: 0,
            data_size,
        })?;
        self.nv.write(index, 0, cert)?;
        self.nv.commit()?;
        Ok(index)
    }

    /// Write and commit the primary seed to its reserved slot
    ///
    /// # Errors
    ///
    /// [`Error::NvWriteFailed`] or [`Error::NvCommitFailed`] from the store.
    pub fn store_seed(&mut self, seed: &PrimarySeed) -> Result<()> {
        self.nv
            .write_reserved(ReservedSlot::EndorsementSeed, seed.as_bytes())?;
        self.nv.commit()?;
        Ok(())
    }
}
