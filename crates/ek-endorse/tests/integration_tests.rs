// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Integration tests for ek-endorse
//!
//! Drive the full endorsement flow against the `ek-hal` simulators. Signature
//! verification is stood in for by a verifier that accepts a certificate iff
//! it ends with the first bytes of a root's fingerprint.

mod support {
    use ek_common::constants::{
        PRIMARY_SEED_SIZE, RO_CERTS_REGION_SIZE, RO_CERTS_TAGGED_SIZE, RO_CERT_HEADER_SIZE,
    };
    use ek_common::EndorsementConfig;
    use ek_crypto::{RsaPublicKey, SignatureVerifier, SoftwareMac};
    use ek_endorse::region::compute_region_tag;
    use ek_endorse::{Endorser, PrimarySeed, RootAuthority};
    use ek_hal::sim::{SimKeyManager, SimNvStore, SimProtectedFlash};

    pub const FRK2: [u8; 32] = [0xA5; 32];
    pub const SEED: [u8; PRIMARY_SEED_SIZE] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD,
        0xEE, 0xFF, 0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE, 0x01, 0x23, 0x45, 0x67,
        0x89, 0xAB, 0xCD, 0xEF,
    ];
    pub const MARKER_LEN: usize = 8;

    pub const RSA_TYPE: u8 = 129;
    pub const ECC_TYPE: u8 = 130;

    /// Accepts certificates whose trailing bytes match the root fingerprint
    pub struct MarkerVerifier;

    impl SignatureVerifier for MarkerVerifier {
        fn verify_certificate(&self, cert_der: &[u8], root: &RsaPublicKey) -> bool {
            let fp = root.fingerprint();
            cert_der.len() >= MARKER_LEN && cert_der.ends_with(&fp[..MARKER_LEN])
        }
    }

    /// Certificate of `len` bytes "signed" by `root`, or by nobody
    pub fn cert(len: usize, fill: u8, root: Option<RootAuthority>) -> Vec<u8> {
        let mut out = vec![fill; len];
        out[0] = 0x30;
        let marker = match root {
            Some(r) => r.public_key().fingerprint(),
            None => [0xEE; 32],
        };
        out[len - MARKER_LEN..].copy_from_slice(&marker[..MARKER_LEN]);
        out
    }

    /// Lay out a region and tag it for `seed`
    pub fn region(
        rsa: (&[u8], u8),
        ecc: (&[u8], u8),
        seed: &[u8; PRIMARY_SEED_SIZE],
    ) -> [u8; RO_CERTS_REGION_SIZE] {
        let mut bytes = [0u8; RO_CERTS_REGION_SIZE];
        let mut at = 0;
        for (cert, ty) in [rsa, ecc] {
            bytes[at..at + 2].copy_from_slice(&(cert.len() as u16).to_le_bytes());
            bytes[at + 2] = ty;
            bytes[at + 8..at + 12].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
            bytes[at + 12..at + 16].copy_from_slice(&(cert.len() as u32).to_le_bytes());
            at += RO_CERT_HEADER_SIZE;
            bytes[at..at + cert.len()].copy_from_slice(cert);
            at += cert.len();
        }
        retag(&mut bytes, seed);
        bytes
    }

    pub fn retag(bytes: &mut [u8; RO_CERTS_REGION_SIZE], seed: &[u8; PRIMARY_SEED_SIZE]) {
        let tag = compute_region_tag(
            &mut SoftwareMac::new(),
            &PrimarySeed::from_bytes(*seed),
            &bytes[..RO_CERTS_TAGGED_SIZE],
        )
        .unwrap();
        bytes[RO_CERTS_TAGGED_SIZE..].copy_from_slice(&tag);
    }

    /// Flash holding `region` and the seed masked with [`FRK2`]
    pub fn flash(region: &[u8; RO_CERTS_REGION_SIZE]) -> SimProtectedFlash {
        let mut flash = SimProtectedFlash::new();
        let mut masked = SEED;
        for (m, k) in masked.iter_mut().zip(FRK2.iter()) {
            *m ^= k;
        }
        let offset = EndorsementConfig::DEFAULT.flash.seed_offset as usize;
        flash.program_info(offset, &masked).unwrap();
        flash.program_cert_region(region);
        flash
    }

    pub fn production_region() -> [u8; RO_CERTS_REGION_SIZE] {
        let rsa = cert(900, 0x11, Some(RootAuthority::Production));
        let ecc = cert(500, 0x22, Some(RootAuthority::Production));
        region((rsa.as_slice(), RSA_TYPE), (ecc.as_slice(), ECC_TYPE), &SEED)
    }

    pub type SimEndorser =
        Endorser<SimKeyManager, SimProtectedFlash, SimNvStore, SoftwareMac, MarkerVerifier>;

    pub fn endorser(flash: SimProtectedFlash, km: SimKeyManager, nv: SimNvStore) -> SimEndorser {
        endorser_with(flash, km, nv, EndorsementConfig::DEFAULT)
    }

    pub fn endorser_with(
        flash: SimProtectedFlash,
        km: SimKeyManager,
        nv: SimNvStore,
        config: EndorsementConfig,
    ) -> SimEndorser {
        Endorser::new(km, flash, nv, SoftwareMac::new(), MarkerVerifier, config).unwrap()
    }
}

mod scenario_tests {
    use super::support::*;
    use ek_common::constants::RO_CERTS_REGION_SIZE;
    use ek_common::{Error, FaultKind, NvIndex};
    use ek_endorse::fallback::{
        FIXED_ECC_ENDORSEMENT_CERT, FIXED_ENDORSEMENT_SEED, FIXED_RSA_ENDORSEMENT_CERT,
    };
    use ek_endorse::{EndorsementOutcome, EndorsementState, RootAuthority};
    use ek_hal::sim::{SimKeyManager, SimNvStore, SimProtectedFlash};

    const RSA_INDEX: NvIndex = NvIndex(0x01C0_0000);
    const ECC_INDEX: NvIndex = NvIndex(0x01C0_0001);

    #[test]
    fn test_unprovisioned_region_is_left_alone() {
        let mut e = endorser(SimProtectedFlash::new(), SimKeyManager::new(FRK2), SimNvStore::new());

        let outcome = e.endorse().unwrap();

        assert_eq!(outcome, EndorsementOutcome::Unprovisioned);
        assert!(!outcome.is_endorsed());
        assert_eq!(e.state(), EndorsementState::Unprovisioned);
        assert_eq!(e.nv().writes(), 0);
        assert_eq!(e.nv().object_count(), 0);
        assert!(e.key_manager().steps().is_empty());
        assert!(e.log().contains("not personalized"));
    }

    #[test]
    fn test_production_signed_region_endorses() {
        let region = production_region();
        let mut e = endorser(flash(&region), SimKeyManager::new(FRK2), SimNvStore::new());

        let outcome = e.endorse().unwrap();

        assert_eq!(outcome, EndorsementOutcome::Endorsed);
        assert!(outcome.is_endorsed());
        assert_eq!(outcome.fault_kind(), None);
        assert_eq!(e.state(), EndorsementState::Endorsed);

        let rsa = e.nv().object(RSA_INDEX).unwrap();
        assert_eq!(rsa.data.as_slice(), &region[16..916]);
        assert!(rsa.written);
        let ecc = e.nv().object(ECC_INDEX).unwrap();
        assert_eq!(ecc.data.as_slice(), &region[932..1432]);

        assert_eq!(e.nv().reserved_seed(), Some(&SEED));
        assert_eq!(e.nv().commits(), 3);
        assert!(!e.nv().has_pending_writes());
        assert!(e.log().contains("endorsement complete"));
    }

    #[test]
    fn test_test_root_is_also_trusted() {
        let rsa = cert(700, 0x11, Some(RootAuthority::Test));
        let ecc = cert(300, 0x22, Some(RootAuthority::Production));
        let region = region((rsa.as_slice(), RSA_TYPE), (ecc.as_slice(), ECC_TYPE), &SEED);
        let mut e = endorser(flash(&region), SimKeyManager::new(FRK2), SimNvStore::new());

        assert_eq!(e.endorse(), Ok(EndorsementOutcome::Endorsed));
        assert!(e.log().contains("test root"));
    }

    #[test]
    fn test_tampered_tag_installs_fallback_identity() {
        let mut region = production_region();
        region[RO_CERTS_REGION_SIZE - 1] ^= 0x01;
        let mut e = endorser(flash(&region), SimKeyManager::new(FRK2), SimNvStore::new());

        let outcome = e.endorse().unwrap();

        assert_eq!(outcome, EndorsementOutcome::FallbackInstalled);
        assert!(!outcome.is_endorsed());
        assert!(outcome.used_fallback());
        assert_eq!(outcome.fault_kind(), Some(FaultKind::IntegrityFault));
        assert_eq!(e.state(), EndorsementState::FallbackInstalled);
        assert_eq!(e.nv().reserved_seed(), Some(&FIXED_ENDORSEMENT_SEED));
        assert_eq!(
            e.nv().object(RSA_INDEX).unwrap().data.as_slice(),
            &FIXED_RSA_ENDORSEMENT_CERT[..]
        );
        assert_eq!(
            e.nv().object(ECC_INDEX).unwrap().data.as_slice(),
            &FIXED_ECC_ENDORSEMENT_CERT[..]
        );
        assert!(e.log().contains("bad cert region hmac"));
    }

    #[test]
    fn test_wrong_seed_installs_fallback_identity() {
        let rsa = cert(900, 0x11, Some(RootAuthority::Production));
        let ecc = cert(500, 0x22, Some(RootAuthority::Production));
        let region = region((rsa.as_slice(), RSA_TYPE), (ecc.as_slice(), ECC_TYPE), &[0x5A; 32]);
        let mut e = endorser(flash(&region), SimKeyManager::new(FRK2), SimNvStore::new());

        assert_eq!(e.endorse(), Ok(EndorsementOutcome::FallbackInstalled));
    }

    #[test]
    fn test_unknown_rsa_component_type_rejected_before_nv() {
        let rsa = cert(900, 0x11, Some(RootAuthority::Production));
        let ecc = cert(500, 0x22, Some(RootAuthority::Production));
        let region = region((rsa.as_slice(), 0x01), (ecc.as_slice(), ECC_TYPE), &SEED);
        let mut e = endorser(flash(&region), SimKeyManager::new(FRK2), SimNvStore::new());

        let err = e.endorse().unwrap_err();

        assert_eq!(err, Error::InvalidComponentType);
        assert_eq!(e.state(), EndorsementState::NotEndorsed);
        assert_eq!(e.nv().writes(), 0);
        assert_eq!(e.nv().object_count(), 0);
    }

    #[test]
    fn test_swapped_records_rejected() {
        let rsa = cert(900, 0x11, Some(RootAuthority::Production));
        let ecc = cert(500, 0x22, Some(RootAuthority::Production));
        let region = region((ecc.as_slice(), ECC_TYPE), (rsa.as_slice(), RSA_TYPE), &SEED);
        let mut e = endorser(flash(&region), SimKeyManager::new(FRK2), SimNvStore::new());

        assert_eq!(e.endorse(), Err(Error::InvalidComponentType));
        assert_eq!(e.nv().writes(), 0);
    }

    #[test]
    fn test_untrusted_ecc_keeps_rsa_without_rollback() {
        let rsa = cert(900, 0x11, Some(RootAuthority::Production));
        let ecc = cert(500, 0x22, None);
        let region = region((rsa.as_slice(), RSA_TYPE), (ecc.as_slice(), ECC_TYPE), &SEED);
        let mut e = endorser(flash(&region), SimKeyManager::new(FRK2), SimNvStore::new());

        assert_eq!(e.endorse(), Err(Error::UntrustedCertificate));
        assert!(e.nv().object(RSA_INDEX).is_some());
        assert!(e.nv().object(ECC_INDEX).is_none());
        assert_eq!(e.nv().reserved_seed(), None);
        assert_eq!(e.state(), EndorsementState::NotEndorsed);
    }

    #[test]
    fn test_oversize_certificate_rejected() {
        let rsa = cert(1025, 0x11, Some(RootAuthority::Production));
        let ecc = cert(500, 0x22, Some(RootAuthority::Production));
        let region = region((rsa.as_slice(), RSA_TYPE), (ecc.as_slice(), ECC_TYPE), &SEED);
        let mut e = endorser(flash(&region), SimKeyManager::new(FRK2), SimNvStore::new());

        assert_eq!(e.endorse(), Err(Error::CertificateTooLarge));
        assert_eq!(e.nv().object_count(), 0);
    }

    #[test]
    fn test_malformed_lengths_rejected() {
        let mut region = production_region();
        region[12..16].copy_from_slice(&2000u32.to_le_bytes());
        retag(&mut region, &SEED);
        let mut e = endorser(flash(&region), SimKeyManager::new(FRK2), SimNvStore::new());

        assert_eq!(e.endorse(), Err(Error::RegionMalformed));
        assert_eq!(e.nv().writes(), 0);
    }

    #[test]
    fn test_rerun_after_success_fails_at_define() {
        let region = production_region();
        let mut e = endorser(flash(&region), SimKeyManager::new(FRK2), SimNvStore::new());
        assert_eq!(e.endorse(), Ok(EndorsementOutcome::Endorsed));
        let writes = e.nv().writes();

        assert_eq!(e.endorse(), Err(Error::NvIndexExists));
        assert_eq!(e.nv().writes(), writes);
        assert_eq!(e.nv().reserved_seed(), Some(&SEED));
    }

    #[test]
    fn test_seed_commit_failure_is_not_endorsed() {
        let region = production_region();
        let mut nv = SimNvStore::new();
        nv.fail_commit_at(3);
        let mut e = endorser(flash(&region), SimKeyManager::new(FRK2), nv);

        assert_eq!(e.endorse(), Err(Error::NvCommitFailed));
        assert_eq!(e.state(), EndorsementState::NotEndorsed);
        assert!(e.nv().has_pending_writes());
        assert!(e.nv().object(RSA_INDEX).is_some());
        assert!(e.nv().object(ECC_INDEX).is_some());
        assert!(e.log().contains("eps storage failed"));
    }

    #[test]
    fn test_rsa_define_failure_stops_before_ecc() {
        let region = production_region();
        let mut nv = SimNvStore::new();
        nv.fail_define_for(RSA_INDEX);
        let mut e = endorser(flash(&region), SimKeyManager::new(FRK2), nv);

        assert_eq!(e.endorse(), Err(Error::NvDefineFailed));
        assert_eq!(e.nv().object_count(), 0);
    }

    #[test]
    fn test_fallback_failure_reported_distinctly() {
        let mut region = production_region();
        region[RO_CERTS_REGION_SIZE - 1] ^= 0x80;
        let mut nv = SimNvStore::new();
        nv.fail_reserved_write();
        let mut e = endorser(flash(&region), SimKeyManager::new(FRK2), nv);

        let outcome = e.endorse().unwrap();

        assert_eq!(outcome, EndorsementOutcome::FallbackFailed(Error::NvWriteFailed));
        assert!(outcome.used_fallback());
        assert_eq!(outcome.fault_kind(), Some(FaultKind::IntegrityFault));
        assert_eq!(e.state(), EndorsementState::NotEndorsed);
        // Seed goes first, so nothing else was attempted
        assert_eq!(e.nv().object_count(), 0);
    }
}

mod key_ladder_tests {
    use super::support::*;
    use ek_common::config::KeyLadderConfig;
    use ek_common::constants::keymgr_cert;
    use ek_common::{EndorsementConfig, Error, FaultKind};
    use ek_endorse::key_ladder::derivation_sequence;
    use ek_endorse::KeyLadder;
    use ek_common::log::LogBuffer;
    use ek_hal::sim::{SimKeyManager, SimNvStore};

    #[test]
    fn test_full_walk_order() {
        let mut km = SimKeyManager::new(FRK2);
        let mut log = LogBuffer::new();
        let key = KeyLadder::new(&mut km, KeyLadderConfig::DEFAULT)
            .compute_frk2(&mut log)
            .unwrap();

        assert_eq!(key.as_bytes(), &FRK2);
        assert_eq!(km.resets(), 1);
        let expected: Vec<u32> = derivation_sequence(&KeyLadderConfig::DEFAULT).collect();
        assert_eq!(km.steps(), expected.as_slice());
        assert_eq!(km.steps().len(), 262);
        // Cleared before arming and after completion
        assert_eq!(km.status_clears(), 2 * 262);
    }

    #[test]
    fn test_fault_aborts_immediately() {
        let mut km = SimKeyManager::new(FRK2);
        km.fault_on_step(keymgr_cert::CERT_5);
        let mut log = LogBuffer::new();

        let err = KeyLadder::new(&mut km, KeyLadderConfig::DEFAULT)
            .compute_frk2(&mut log)
            .unwrap_err();

        assert_eq!(err, Error::KeyLadderFault);
        assert_eq!(km.steps(), &[0, 3, 4, 5]);
        assert!(log.contains("step 5 failed"));
    }

    #[test]
    fn test_stuck_engine_times_out() {
        let mut km = SimKeyManager::new(FRK2);
        km.hang_on_step(keymgr_cert::CERT_15);
        let config = KeyLadderConfig {
            poll_timeout_iterations: 64,
            ..KeyLadderConfig::DEFAULT
        };
        let mut log = LogBuffer::new();

        let err = KeyLadder::new(&mut km, config).compute_frk2(&mut log).unwrap_err();

        assert_eq!(err, Error::KeyLadderTimeout);
        assert_eq!(err.fault_kind(), FaultKind::HardwareTimeout);
        assert_eq!(km.steps().last(), Some(&keymgr_cert::CERT_15));
    }

    #[test]
    fn test_ladder_fault_never_opens_flash() {
        let region = production_region();
        let mut km = SimKeyManager::new(FRK2);
        km.fault_on_step(keymgr_cert::CERT_26);
        let mut e = endorser(flash(&region), km, SimNvStore::new());

        assert_eq!(e.endorse(), Err(Error::KeyLadderFault));
        assert_eq!(e.flash().info_window_opens(), 0);
        assert_eq!(e.nv().writes(), 0);
        assert!(e.log().contains("failed to read eps"));
    }

    #[test]
    fn test_timeout_surfaces_from_orchestrator() {
        let region = production_region();
        let mut km = SimKeyManager::new(FRK2);
        km.hang_on_step(keymgr_cert::CERT_0);
        let mut config = EndorsementConfig::DEFAULT;
        config.key_ladder.poll_timeout_iterations = 16;
        let mut e = endorser_with(flash(&region), km, SimNvStore::new(), config);

        let err = e.endorse().unwrap_err();
        assert_eq!(err.fault_kind(), FaultKind::HardwareTimeout);
    }
}

mod seed_tests {
    use super::support::*;
    use ek_common::log::LogBuffer;
    use ek_common::{EndorsementConfig, Error};
    use ek_endorse::recover_seed;
    use ek_hal::sim::{SimKeyManager, SimNvStore};
    use ek_hal::ProtectedFlashInterface;

    #[test]
    fn test_recovers_plaintext_seed_and_closes_window() {
        let mut flash = flash(&production_region());
        let mut km = SimKeyManager::new(FRK2);
        let mut log = LogBuffer::new();

        let seed = recover_seed(&mut km, &mut flash, &EndorsementConfig::DEFAULT, &mut log).unwrap();

        assert_eq!(seed.as_bytes(), &SEED);
        assert!(!flash.info_read_enabled());
        assert_eq!(flash.info_window_opens(), 1);
        assert_eq!(flash.info_words_read(), 8);
    }

    #[test]
    fn test_partial_read_failure_closes_window() {
        let mut flash = flash(&production_region());
        let offset = EndorsementConfig::DEFAULT.flash.seed_offset;
        flash.fail_info_read_at(offset + 12);
        let mut km = SimKeyManager::new(FRK2);
        let mut log = LogBuffer::new();

        let err = recover_seed(&mut km, &mut flash, &EndorsementConfig::DEFAULT, &mut log)
            .unwrap_err();

        assert_eq!(err, Error::FlashReadFailed);
        assert!(!flash.info_read_enabled());
        assert_eq!(flash.info_words_read(), 3);
    }

    #[test]
    fn test_seed_past_offset_range_rejected_up_front() {
        let mut flash = flash(&production_region());
        let mut km = SimKeyManager::new(FRK2);
        let mut log = LogBuffer::new();
        let mut config = EndorsementConfig::DEFAULT;
        config.flash.seed_offset = u32::MAX - 3;

        let err = recover_seed(&mut km, &mut flash, &config, &mut log).unwrap_err();

        assert_eq!(err, Error::InvalidParameter);
        assert!(km.steps().is_empty());
        assert_eq!(flash.info_window_opens(), 0);
    }

    #[test]
    fn test_flash_fault_through_orchestrator() {
        let mut flash = flash(&production_region());
        flash.fail_info_read_at(EndorsementConfig::DEFAULT.flash.seed_offset);
        let mut e = endorser(flash, SimKeyManager::new(FRK2), SimNvStore::new());

        assert_eq!(e.endorse(), Err(Error::FlashReadFailed));
        assert!(!e.flash().info_read_enabled());
        assert_eq!(e.nv().writes(), 0);
    }
}

mod nv_store_tests {
    use ek_common::config::NvConfig;
    use ek_common::{CredentialKind, Error, NvIndex};
    use ek_endorse::CredentialStore;
    use ek_hal::sim::SimNvStore;
    use ek_hal::NvAttributes;

    const BASE: NvIndex = NvIndex(0x01C0_0000);

    #[test]
    fn test_short_seed_rejected_without_write() {
        let mut nv = SimNvStore::new();
        let mut store = CredentialStore::new(&mut nv, NvConfig::DEFAULT);

        assert_eq!(
            store.store(CredentialKind::PrimarySeed, &[0x5C; 31]),
            Err(Error::InvalidParameter)
        );
        assert_eq!(
            store.store(CredentialKind::PrimarySeed, &[0x5C; 33]),
            Err(Error::InvalidParameter)
        );

        assert_eq!(nv.writes(), 0);
        assert_eq!(nv.commits(), 0);
        assert_eq!(nv.reserved_seed(), None);
    }

    #[test]
    fn test_seed_lands_in_reserved_slot() {
        let mut nv = SimNvStore::new();
        let mut store = CredentialStore::new(&mut nv, NvConfig::DEFAULT);

        store.store(CredentialKind::PrimarySeed, &[0x5C; 32]).unwrap();

        assert_eq!(nv.reserved_seed(), Some(&[0x5C; 32]));
        assert_eq!(nv.object_count(), 0);
        assert_eq!(nv.commits(), 1);
        assert!(!nv.has_pending_writes());
    }

    #[test]
    fn test_certificates_routed_by_kind() {
        let rsa = [0x30, 0x82, 0x01, 0x11];
        let ecc = [0x30, 0x81, 0x7F];
        let mut nv = SimNvStore::new();
        let mut store = CredentialStore::new(&mut nv, NvConfig::DEFAULT);

        store.store(CredentialKind::EccCertificate, &ecc).unwrap();
        store.store(CredentialKind::RsaCertificate, &rsa).unwrap();

        let rsa_obj = nv.object(BASE).unwrap();
        assert_eq!(rsa_obj.data.as_slice(), &rsa);
        assert_eq!(rsa_obj.public.data_size, 4);
        assert_eq!(rsa_obj.public.attributes, NvAttributes::endorsement_credential());

        let ecc_obj = nv.object(NvIndex(BASE.0 + 1)).unwrap();
        assert_eq!(ecc_obj.data.as_slice(), &ecc);
        assert_eq!(ecc_obj.public.data_size, 3);

        assert_eq!(nv.reserved_seed(), None);
        assert_eq!(nv.commits(), 2);
    }

    #[test]
    fn test_ecc_index_past_range_rejected() {
        let config = NvConfig {
            ek_cert_base_index: NvIndex(u32::MAX),
            ..NvConfig::DEFAULT
        };
        let mut nv = SimNvStore::new();
        let mut store = CredentialStore::new(&mut nv, config);

        assert_eq!(store.index_for(CredentialKind::EccCertificate), None);
        assert_eq!(
            store.store_certificate(CredentialKind::EccCertificate, &[0x30; 10]),
            Err(Error::InvalidParameter)
        );
        assert_eq!(
            store.store(CredentialKind::EccCertificate, &[0x30; 10]),
            Err(Error::InvalidParameter)
        );

        assert_eq!(nv.object_count(), 0);
        assert_eq!(nv.object(NvIndex(0)).map(|o| o.written), None);
        assert_eq!(nv.writes(), 0);
    }
}

mod certificate_tests {
    use super::support::*;
    use ek_common::constants::MAX_NV_BUFFER_SIZE;
    use ek_common::{ComponentType, Error, KeyId};
    use ek_endorse::region::{CertificateRecord, ComponentInfo};
    use ek_endorse::{validate_certificate, RootAuthority};

    fn record(cert: &[u8], ty: u8) -> CertificateRecord<'_> {
        CertificateRecord {
            info: ComponentInfo {
                component_size: cert.len() as u16,
                component_type: ComponentType::from_u8(ty),
                raw_type: ty,
            },
            key_id: KeyId([0; 4]),
            cert,
        }
    }

    #[test]
    fn test_either_root_accepted_for_both_types() {
        for root in RootAuthority::ALL {
            for ty in [RSA_TYPE, ECC_TYPE] {
                let c = cert(MAX_NV_BUFFER_SIZE, 0x44, Some(root));
                assert_eq!(
                    validate_certificate(&MarkerVerifier, &record(&c, ty), MAX_NV_BUFFER_SIZE),
                    Ok(root)
                );
            }
        }
    }

    #[test]
    fn test_oversize_rejected_even_when_signed() {
        let c = cert(MAX_NV_BUFFER_SIZE + 1, 0x44, Some(RootAuthority::Production));
        assert_eq!(
            validate_certificate(&MarkerVerifier, &record(&c, RSA_TYPE), MAX_NV_BUFFER_SIZE),
            Err(Error::CertificateTooLarge)
        );
    }

    #[test]
    fn test_foreign_signer_rejected() {
        let c = cert(600, 0x44, None);
        assert_eq!(
            validate_certificate(&MarkerVerifier, &record(&c, ECC_TYPE), MAX_NV_BUFFER_SIZE),
            Err(Error::UntrustedCertificate)
        );
    }

    #[test]
    fn test_non_certificate_types_rejected() {
        let c = cert(600, 0x44, Some(RootAuthority::Production));
        for ty in [0u8, 128, 131, 0xFF] {
            assert_eq!(
                validate_certificate(&MarkerVerifier, &record(&c, ty), MAX_NV_BUFFER_SIZE),
                Err(Error::InvalidComponentType),
                "type {ty}"
            );
        }
    }
}

mod region_tests {
    use super::support::*;
    use ek_common::constants::RO_CERTS_REGION_SIZE;
    use ek_crypto::SoftwareMac;
    use ek_endorse::{validate_region, PrimarySeed, RoCertRegion};

    #[test]
    fn test_tag_round_trip() {
        let region = RoCertRegion::from_bytes(production_region());
        let seed = PrimarySeed::from_bytes(SEED);
        assert_eq!(validate_region(&mut SoftwareMac::new(), &seed, &region), Ok(true));
    }

    #[test]
    fn test_single_bit_flips_detected() {
        let good = production_region();
        let seed = PrimarySeed::from_bytes(SEED);
        let mut mac = SoftwareMac::new();

        // Every tag byte plus a stride through the covered span
        let positions = (0..RO_CERTS_REGION_SIZE - 32)
            .step_by(97)
            .chain(RO_CERTS_REGION_SIZE - 32..RO_CERTS_REGION_SIZE);
        for pos in positions {
            for bit in 0..8 {
                let mut bytes = good;
                bytes[pos] ^= 1 << bit;
                let region = RoCertRegion::from_bytes(bytes);
                assert_eq!(
                    validate_region(&mut mac, &seed, &region),
                    Ok(false),
                    "byte {pos} bit {bit}"
                );
            }
        }
    }
}

mod hygiene_tests {
    use super::support::*;
    use ek_common::config::KeyLadderConfig;
    use ek_common::log::LogBuffer;
    use ek_endorse::{KeyLadder, PrimarySeed, UnwrapKey};
    use ek_hal::sim::{SimKeyManager, SimNvStore};
    use zeroize::{Zeroize, ZeroizeOnDrop};

    fn wipes_on_drop<T: ZeroizeOnDrop>() {}

    #[test]
    fn test_secret_types_wipe_on_drop() {
        wipes_on_drop::<PrimarySeed>();
        wipes_on_drop::<UnwrapKey>();
    }

    #[test]
    fn test_unwrap_key_zeroize_clears_bytes() {
        let mut km = SimKeyManager::new(FRK2);
        let mut key = KeyLadder::new(&mut km, KeyLadderConfig::DEFAULT)
            .compute_frk2(&mut LogBuffer::new())
            .unwrap();
        assert_eq!(key.as_bytes(), &FRK2);

        key.zeroize();

        assert_eq!(key.as_bytes(), &[0u8; 32]);
    }

    #[test]
    fn test_debug_redacts_seed() {
        let seed = PrimarySeed::from_bytes(SEED);
        assert_eq!(format!("{seed:?}"), "PrimarySeed([REDACTED])");
    }

    #[test]
    fn test_log_never_contains_seed_bytes() {
        let region = production_region();
        let mut e = endorser(flash(&region), SimKeyManager::new(FRK2), SimNvStore::new());
        e.log_mut().set_min_level(ek_common::log::LogLevel::Trace);
        e.endorse().unwrap();

        for entry in e.log().iter() {
            assert!(!entry.message.contains("00112233"));
            assert!(!entry.message.contains("a5a5a5a5"));
        }
    }
}
