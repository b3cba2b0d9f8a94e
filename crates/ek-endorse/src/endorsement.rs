// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Endorsement orchestrator
//!
//! Runs the one-shot endorsement of a chip:
//!
//! ```text
//! Unprovisioned ─► SeedRecovered ─► RegionValidated ─► CertsInstalled ─► Endorsed
//!       │                │                 │                  │
//!       │                └─ tag mismatch ─► FallbackInstalled │
//!       └───────────── any failure ──────► NotEndorsed ◄──────┘
//! ```
//!
//! Every failure reason is recorded in the event log; the returned outcome
//! only says how far the attempt got.

use ek_common::config::EndorsementConfig;
use ek_common::log::LogBuffer;
use ek_common::{log_error, log_info, log_warn, CredentialKind, Error, FaultKind, Result};
use ek_crypto::{MacEngine, SignatureVerifier};
use ek_hal::{Backend, KeyManagerInterface, NvStoreInterface, ProtectedFlashInterface};

use crate::certificate::validate_certificate;
use crate::fallback::install_fallback_identity;
use crate::nv_store::CredentialStore;
use crate::region::{validate_region, CertificateRecord, RoCertRegion};
use crate::seed::recover_seed;

/// Progress of an endorsement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndorsementState {
    /// Nothing done yet, or the region is still erased
    Unprovisioned,
    /// Primary seed recovered
    SeedRecovered,
    /// Region tag verified
    RegionValidated,
    /// Both certificates stored
    CertsInstalled,
    /// Seed stored; chip endorsed
    Endorsed,
    /// Fixed fallback identity stored
    FallbackInstalled,
    /// Attempt failed
    NotEndorsed,
}

/// Result of a completed endorsement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndorsementOutcome {
    /// Certificates and seed installed from factory data
    Endorsed,
    /// RO certificate region is erased; nothing attempted
    Unprovisioned,
    /// Factory data failed its integrity check; fallback identity installed
    FallbackInstalled,
    /// Factory data failed its integrity check and the fallback identity
    /// could not be fully installed
    FallbackFailed(Error),
}

impl EndorsementOutcome {
    /// Whether the chip now holds a trusted identity
    #[must_use]
    pub const fn is_endorsed(&self) -> bool {
        matches!(self, Self::Endorsed)
    }

    /// Whether the fallback identity was attempted
    #[must_use]
    pub const fn used_fallback(&self) -> bool {
        matches!(self, Self::FallbackInstalled | Self::FallbackFailed(_))
    }

    /// Fault that diverted the attempt, if any
    ///
    /// Both fallback outcomes stem from a region HMAC mismatch.
    #[must_use]
    pub const fn fault_kind(&self) -> Option<FaultKind> {
        match self {
            Self::Endorsed | Self::Unprovisioned => None,
            Self::FallbackInstalled | Self::FallbackFailed(_) => Some(FaultKind::IntegrityFault),
        }
    }
}

/// Endorsement orchestrator
///
/// Owns the hardware for the duration of the attempt. Not reentrant.
pub struct Endorser<K, F, N, M, V> {
    key_manager: K,
    flash: F,
    nv: N,
    mac: M,
    verifier: V,
    config: EndorsementConfig,
    state: EndorsementState,
    log: LogBuffer,
}

impl<K, F, N, M, V> Endorser<K, F, N, M, V>
where
    K: KeyManagerInterface,
    F: ProtectedFlashInterface,
    N: NvStoreInterface,
    M: MacEngine,
    V: SignatureVerifier,
{
    /// Create an orchestrator
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `config` is inconsistent.
    pub fn new(
        key_manager: K,
        flash: F,
        nv: N,
        mac: M,
        verifier: V,
        config: EndorsementConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            key_manager,
            flash,
            nv,
            mac,
            verifier,
            config,
            state: EndorsementState::Unprovisioned,
            log: LogBuffer::new(),
        })
    }

    /// Run one endorsement attempt
    ///
    /// `Ok` outcomes other than [`EndorsementOutcome::Endorsed`] and every
    /// `Err` leave the chip without a trusted identity. Earlier NV writes are
    /// not rolled back. Running again after success fails at the first NV
    /// define with [`Error::NvIndexExists`].
    ///
    /// # Errors
    ///
    /// Key ladder, flash, region format, certificate validation and NV
    /// storage failures, as classified by [`Error::fault_kind`].
    pub fn endorse(&mut self) -> Result<EndorsementOutcome> {
        self.state = EndorsementState::Unprovisioned;
        log_info!(
            self.log,
            "endorse",
            "attempt started ({} backend)",
            Backend::current().as_str()
        );

        let result = self.run();

        self.state = match result {
            Ok(EndorsementOutcome::Endorsed) => EndorsementState::Endorsed,
            Ok(EndorsementOutcome::Unprovisioned) => EndorsementState::Unprovisioned,
            Ok(EndorsementOutcome::FallbackInstalled) => EndorsementState::FallbackInstalled,
            Ok(EndorsementOutcome::FallbackFailed(_)) | Err(_) => EndorsementState::NotEndorsed,
        };
        if let Err(e) = result {
            log_error!(self.log, "endorse", "not endorsed: {} ({})", e, e.fault_kind());
        }
        result
    }

    fn run(&mut self) -> Result<EndorsementOutcome> {
        self.flash.enable_cert_region_read()?;
        let region = RoCertRegion::read(&self.flash)?;
        if region.is_erased() {
            log_info!(self.log, "endorse", "cert region erased; chip not personalized");
            return Ok(EndorsementOutcome::Unprovisioned);
        }

        let seed = recover_seed(
            &mut self.key_manager,
            &mut self.flash,
            &self.config,
            &mut self.log,
        )
        .map_err(|e| {
            log_error!(self.log, "endorse", "failed to read eps");
            e
        })?;
        self.state = EndorsementState::SeedRecovered;

        let records = region.parse().map_err(|e| {
            log_error!(self.log, "endorse", "cert region headers out of bounds");
            e
        })?;
        records.check_component_types().map_err(|e| {
            log_error!(
                self.log,
                "endorse",
                "unexpected component types {}/{}",
                records.rsa.info.raw_type,
                records.ecc.info.raw_type
            );
            e
        })?;

        let mut store = CredentialStore::new(&mut self.nv, self.config.nv);

        if !validate_region(&mut self.mac, &seed, &region)? {
            log_warn!(
                self.log,
                "endorse",
                "bad cert region hmac; falling back to fixed endorsement"
            );
            return Ok(match install_fallback_identity(&mut store, &mut self.log) {
                Ok(()) => EndorsementOutcome::FallbackInstalled,
                Err(e) => {
                    log_error!(
                        self.log,
                        "endorse",
                        "fallback install failed: {}; endorsement state unknown",
                        e
                    );
                    EndorsementOutcome::FallbackFailed(e)
                }
            });
        }
        self.state = EndorsementState::RegionValidated;

        for (kind, record) in [
            (CredentialKind::RsaCertificate, &records.rsa),
            (CredentialKind::EccCertificate, &records.ecc),
        ] {
            install_certificate(
                &mut store,
                &self.verifier,
                kind,
                record,
                self.config.nv.max_nv_buffer_size,
                &mut self.log,
            )?;
        }
        self.state = EndorsementState::CertsInstalled;

        store.store_seed(&seed).map_err(|e| {
            log_error!(self.log, "endorse", "eps storage failed");
            e
        })?;

        log_info!(self.log, "endorse", "endorsement complete");
        Ok(EndorsementOutcome::Endorsed)
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> EndorsementState {
        self.state
    }

    /// Event log
    #[must_use]
    pub const fn log(&self) -> &LogBuffer {
        &self.log
    }

    /// Mutable event log, e.g. to change the minimum level
    pub fn log_mut(&mut self) -> &mut LogBuffer {
        &mut self.log
    }

    /// Key manager
    #[must_use]
    pub const fn key_manager(&self) -> &K {
        &self.key_manager
    }

    /// Protected flash
    #[must_use]
    pub const fn flash(&self) -> &F {
        &self.flash
    }

    /// NV store
    #[must_use]
    pub const fn nv(&self) -> &N {
        &self.nv
    }

    /// Configuration
    #[must_use]
    pub const fn config(&self) -> &EndorsementConfig {
        &self.config
    }
}

fn install_certificate<N: NvStoreInterface, V: SignatureVerifier>(
    store: &mut CredentialStore<'_, N>,
    verifier: &V,
    kind: CredentialKind,
    record: &CertificateRecord<'_>,
    max_cert_len: usize,
    log: &mut LogBuffer,
) -> Result<()> {
    let root = validate_certificate(verifier, record, max_cert_len).map_err(|e| {
        log_error!(log, "endorse", "failed to process {}: {}", kind, e);
        e
    })?;

    let index = store.store_certificate(kind, record.cert).map_err(|e| {
        log_error!(
            log,
            "endorse",
            "{} storage failed, type {}: {}",
            kind,
            record.info.raw_type,
            e
        );
        e
    })?;

    log_info!(
        log,
        "endorse",
        "{} install success ({} root, index {})",
        kind,
        root.as_str(),
        index
    );
    Ok(())
}
