//! SHA3-256 digests and public-key identities
//!
//! An identity is the SHA3-256 hash of the uncompressed public key's hex
//! text, `04` prefix included. It is the account/executor reference the
//! Colonies server uses in place of the public key itself.

use sha3::{Digest as _, Sha3_256};

use crate::keys::PublicKey;

/// A 32-byte SHA3-256 message digest
pub type Digest = [u8; 32];

/// SHA3-256 of an arbitrary byte buffer
pub fn digest(data: &[u8]) -> Digest {
    Sha3_256::digest(data).into()
}

/// SHA3-256 of a UTF-8 text, as 64 lowercase hex characters.
///
/// This is the digest the RPC layer computes over payloads before signing.
pub fn hash_hex(text: &str) -> String {
    hex::encode(digest(text.as_bytes()))
}

/// The identity of a public key: SHA3-256 over the UTF-8 text of its
/// uncompressed hex encoding, as 64 lowercase hex characters
pub fn identity_of(public_key: &PublicKey) -> String {
    hex::encode(digest(public_key.to_uncompressed_hex().as_bytes()))
}
