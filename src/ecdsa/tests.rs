//! Signing and recovery unit tests

use super::*;
use crate::identity;
use num_bigint::BigUint;
use rand::rngs::OsRng;

const REFERENCE_KEY_HEX: &str =
    "d6eb959e9aec2e6fdc44b5862b269e987b8a4d6f2baca542d8acaa97ee5e74f6";
const REFERENCE_IDENTITY: &str =
    "5d6568f883451ae2e407d1a0a7992e414f2a67b69d0e6e9176d353b98f06f696";

fn reference_key() -> PrivateKey {
    PrivateKey::from_hex(REFERENCE_KEY_HEX).unwrap()
}

#[test]
fn signing_is_deterministic() {
    let key = reference_key();
    let digest = identity::digest(b"hello");
    assert_eq!(sign_digest(&digest, &key), sign_digest(&digest, &key));
}

#[test]
fn signature_serializes_to_65_bytes() {
    let key = reference_key();
    let digest = identity::digest(b"hello");
    let signature = sign_digest(&digest, &key);
    assert_eq!(signature.to_bytes().len(), SIGNATURE_SIZE);
    assert_eq!(signature.to_hex().len(), 130);
    assert!(signature.recovery_bit() < 2);
}

#[test]
fn signature_s_is_always_canonical() {
    let key = reference_key();
    for i in 0u32..32 {
        let digest = identity::digest(format!("message-{}", i).as_bytes());
        let signature = sign_digest(&digest, &key);
        let two_s = BigUint::from(2u32) * signature.s();
        assert!(two_s < ec::curve().n);
    }
}

#[test]
fn signature_byte_round_trip() {
    let key = reference_key();
    let digest = identity::digest(b"round trip");
    let signature = sign_digest(&digest, &key);
    let parsed = RecoverableSignature::from_bytes(&signature.to_bytes()).unwrap();
    assert_eq!(parsed, signature);
    let parsed_hex = RecoverableSignature::from_hex(&signature.to_hex()).unwrap();
    assert_eq!(parsed_hex, signature);
}

#[test]
fn recover_matches_reference_identity() {
    let key = reference_key();
    let digest = identity::digest(b"hello");
    let signature = sign_digest(&digest, &key);
    let recovered = recover(&digest, &signature).unwrap();
    assert_eq!(identity::identity_of(&recovered), REFERENCE_IDENTITY);
}

#[test]
fn recover_round_trips_for_random_keys() {
    for i in 0u32..8 {
        let key = PrivateKey::generate(&mut OsRng);
        let digest = identity::digest(format!("payload-{}", i).as_bytes());
        let signature = sign_digest(&digest, &key);
        let recovered = recover(&digest, &signature).unwrap();
        assert_eq!(recovered, key.public_key());
    }
}

#[test]
fn recover_rejects_out_of_range_recovery_bit() {
    let key = reference_key();
    let digest = identity::digest(b"hello");
    let mut bytes = sign_digest(&digest, &key).to_bytes();
    bytes[SIGNATURE_SIZE - 1] = 4;
    let signature = RecoverableSignature::from_bytes(&bytes).unwrap();
    assert!(matches!(
        recover(&digest, &signature),
        Err(Error::BadSignature { .. })
    ));
}

#[test]
fn recover_rejects_zero_components() {
    let digest = identity::digest(b"hello");
    let mut zero_r = [0u8; SIGNATURE_SIZE];
    zero_r[FIELD_ELEMENT_SIZE..2 * FIELD_ELEMENT_SIZE].copy_from_slice(&[0x11; 32]);
    let signature = RecoverableSignature::from_bytes(&zero_r).unwrap();
    assert!(recover(&digest, &signature).is_err());

    let mut zero_s = [0u8; SIGNATURE_SIZE];
    zero_s[..FIELD_ELEMENT_SIZE].copy_from_slice(&ec::to_be32(&ec::curve().g.x));
    let signature = RecoverableSignature::from_bytes(&zero_s).unwrap();
    assert!(matches!(
        recover(&digest, &signature),
        Err(Error::BadSignature { .. })
    ));
}

#[test]
fn flipped_recovery_bit_changes_recovered_key() {
    let key = reference_key();
    let digest = identity::digest(b"hello");
    let mut bytes = sign_digest(&digest, &key).to_bytes();
    bytes[SIGNATURE_SIZE - 1] ^= 1;
    let signature = RecoverableSignature::from_bytes(&bytes).unwrap();
    match recover(&digest, &signature) {
        Ok(recovered) => assert_ne!(recovered, key.public_key()),
        Err(Error::BadSignature { .. }) => {}
        Err(other) => panic!("unexpected error: {}", other),
    }
}

#[test]
fn recover_rejects_wrong_length() {
    assert!(RecoverableSignature::from_bytes(&[0u8; 64]).is_err());
    assert!(RecoverableSignature::from_hex("abcd").is_err());
}

#[test]
fn verify_accepts_own_signatures() {
    let key = reference_key();
    let digest = identity::digest(b"verify me");
    let signature = sign_digest(&digest, &key);
    assert!(verify_digest(&digest, &signature, &key.public_key()));
}

#[test]
fn verify_rejects_tampered_digest() {
    let key = reference_key();
    let digest = identity::digest(b"verify me");
    let signature = sign_digest(&digest, &key);
    let other = identity::digest(b"verify me!");
    assert!(!verify_digest(&other, &signature, &key.public_key()));
}

#[test]
fn verify_rejects_foreign_public_key() {
    let key = reference_key();
    let digest = identity::digest(b"verify me");
    let signature = sign_digest(&digest, &key);
    let other = PrivateKey::generate(&mut OsRng).public_key();
    assert!(!verify_digest(&digest, &signature, &other));
}
