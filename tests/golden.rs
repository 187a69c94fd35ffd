//! Golden vectors through the public operation surface
//!
//! These values are pinned by the reference implementation; the pure core
//! must reproduce them byte for byte.

use colonies_crypto::Crypto;

const PRVKEY: &str = "d6eb959e9aec2e6fdc44b5862b269e987b8a4d6f2baca542d8acaa97ee5e74f6";

#[test]
fn hash_of_hello_world() {
    let crypto = Crypto::new();
    assert_eq!(
        crypto.hash("hello world").unwrap(),
        "644bcc7e564373040999aac89e7622f3ca71fba1d972fd94a31c3bfbf24e3938"
    );
}

#[test]
fn identity_of_reference_key() {
    let crypto = Crypto::new();
    assert_eq!(
        crypto
            .id("6d2fb6f546bacfd98c68769e61e0b44a697a30596c018a50e28200aa59b01c0a")
            .unwrap(),
        "4fef2b5a82d134d058c1883c72d6d9caf77cd59ca82d73105017590dea3dcb87"
    );
}

#[test]
fn signature_is_130_hex_chars() {
    let crypto = Crypto::new();
    let signature = crypto.sign("hello", PRVKEY).unwrap();
    assert_eq!(signature.len(), 130);
    assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn signing_twice_gives_identical_output() {
    let crypto = Crypto::new();
    assert_eq!(
        crypto.sign("hello", PRVKEY).unwrap(),
        crypto.sign("hello", PRVKEY).unwrap()
    );
}

#[test]
fn recovered_identity_matches_reference() {
    let crypto = Crypto::new();
    let signature = crypto.sign("hello", PRVKEY).unwrap();
    let digest = crypto.hash("hello").unwrap();
    assert_eq!(
        crypto.recoverid(&digest, &signature).unwrap(),
        "5d6568f883451ae2e407d1a0a7992e414f2a67b69d0e6e9176d353b98f06f696"
    );
}

#[test]
fn recovered_identity_matches_for_fresh_keys() {
    let crypto = Crypto::new();
    for _ in 0..4 {
        let prvkey = crypto.prvkey().unwrap();
        let signature = crypto.sign("some payload", &prvkey).unwrap();
        let digest = crypto.hash("some payload").unwrap();
        assert_eq!(
            crypto.recoverid(&digest, &signature).unwrap(),
            crypto.id(&prvkey).unwrap()
        );
    }
}
