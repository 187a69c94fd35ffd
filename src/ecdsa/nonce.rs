//! Deterministic per-signature nonce derivation
//!
//! A fixed two-round HMAC-SHA256 ladder keyed progressively by the private
//! key and the message digest. Identical (digest, key) inputs always yield
//! the identical nonce, so signing consults no external randomness.
//!
//! This is deliberately not the full iterative RFC 6979 procedure: there is
//! no rejection loop for out-of-range candidates. The Colonies reference
//! implementation stops after two rounds, and the historical signatures only
//! reproduce if we do the same.

use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use sha2::Sha256;

use crate::ec::FIELD_ELEMENT_SIZE;

type HmacSha256 = Hmac<Sha256>;

fn mac(key: &[u8], parts: &[&[u8]]) -> [u8; 32] {
    let mut mac =
        HmacSha256::new_from_slice(key).expect("HMAC-SHA256 accepts any key length");
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().into()
}

/// Derive the secret nonce k for signing `digest` under `key_bytes`
pub(crate) fn deterministic_k(
    digest: &[u8; FIELD_ELEMENT_SIZE],
    key_bytes: &[u8; FIELD_ELEMENT_SIZE],
) -> BigUint {
    let v0 = [0x01u8; 32];
    let k0 = [0x00u8; 32];

    let k1 = mac(&k0, &[&v0, &[0x00], key_bytes, digest]);
    let v1 = mac(&k1, &[&v0]);
    let k2 = mac(&k1, &[&v1, &[0x01], key_bytes, digest]);
    let v2 = mac(&k2, &[&v1]);

    let kb = mac(&k2, &[&v2]);
    BigUint::from_bytes_be(&kb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_yield_identical_nonces() {
        let digest = [0x42u8; 32];
        let key = [0x07u8; 32];
        assert_eq!(deterministic_k(&digest, &key), deterministic_k(&digest, &key));
    }

    #[test]
    fn nonce_depends_on_digest_and_key() {
        let digest = [0x42u8; 32];
        let key = [0x07u8; 32];
        let other_digest = [0x43u8; 32];
        let other_key = [0x08u8; 32];
        assert_ne!(
            deterministic_k(&digest, &key),
            deterministic_k(&other_digest, &key)
        );
        assert_ne!(
            deterministic_k(&digest, &key),
            deterministic_k(&digest, &other_key)
        );
    }
}
