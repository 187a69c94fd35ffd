//! Deterministic ECDSA over secp256k1 with public-key recovery
//!
//! Signatures are canonical (low-s) and carry a 1-bit recovery indicator so
//! that the signer's public key, and hence their identity, can be
//! reconstructed from the signature alone.

mod nonce;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::ec::{self, to_be32, AffinePoint, FIELD_ELEMENT_SIZE};
use crate::error::{validate, Error, Result};
use crate::keys::{PrivateKey, PublicKey};

/// Serialized signature size: r(32) ‖ s(32) ‖ recovery(1)
pub const SIGNATURE_SIZE: usize = 65;

/// An ECDSA signature (r, s) with its recovery bit
///
/// `s` is always in the lower half of [1, n-1]; the recovery bit carries the
/// parity information needed to pick the signer's public key out of the
/// candidate set during recovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    r: BigUint,
    s: BigUint,
    v: u8,
}

impl RecoverableSignature {
    /// The r component
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The s component (canonical, 2·s < n)
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// The recovery bit
    pub fn recovery_bit(&self) -> u8 {
        self.v
    }

    /// Serialize as 65 bytes: r ‖ s ‖ recovery bit
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..FIELD_ELEMENT_SIZE].copy_from_slice(&to_be32(&self.r));
        out[FIELD_ELEMENT_SIZE..2 * FIELD_ELEMENT_SIZE].copy_from_slice(&to_be32(&self.s));
        out[SIGNATURE_SIZE - 1] = self.v;
        out
    }

    /// Serialize as 130 lowercase hex characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse a 65-byte serialized signature.
    ///
    /// Only the length is checked here; range validation of r, s and the
    /// recovery bit happens during recovery.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("signature", bytes.len(), SIGNATURE_SIZE)?;
        Ok(RecoverableSignature {
            r: BigUint::from_bytes_be(&bytes[..FIELD_ELEMENT_SIZE]),
            s: BigUint::from_bytes_be(&bytes[FIELD_ELEMENT_SIZE..2 * FIELD_ELEMENT_SIZE]),
            v: bytes[SIGNATURE_SIZE - 1],
        })
    }

    /// Parse a 130-character hex signature
    pub fn from_hex(text: &str) -> Result<Self> {
        let decoded = hex::decode(text).map_err(|e| Error::encoding("signature hex", e))?;
        Self::from_bytes(&decoded)
    }
}

/// Sign a 32-byte digest with a private key.
///
/// The nonce is derived deterministically from the digest and the key, so
/// identical inputs produce byte-identical signatures. The raw s is
/// canonicalized to the lower half of the group order, flipping the recovery
/// parity bit when it is negated.
pub fn sign_digest(
    digest: &[u8; FIELD_ELEMENT_SIZE],
    key: &PrivateKey,
) -> RecoverableSignature {
    let c = ec::curve();
    let z = BigUint::from_bytes_be(digest);
    let d = key.to_biguint();
    let k = nonce::deterministic_k(digest, key.as_bytes());

    let AffinePoint { x: r, y } = c.g.mul(&k);

    let s_raw = (ec::mod_inverse(&k, &c.n) * (&z + &r * &d)) % &c.n;

    let overflow = BigUint::from(2u32) * &s_raw >= c.n;
    let s = if overflow { &c.n - &s_raw } else { s_raw };
    let v = (y.bit(0) as u8) ^ (overflow as u8);

    RecoverableSignature { r, s, v }
}

/// Recover the signer's public key from a digest and a signature.
///
/// Rejects with `BadSignature` when the recovery bit is out of range, r or s
/// vanish mod n, r is not the x-coordinate of a curve point, or the
/// recovered point is the identity.
pub fn recover(
    digest: &[u8; FIELD_ELEMENT_SIZE],
    signature: &RecoverableSignature,
) -> Result<PublicKey> {
    // The historical wire encoding offsets the recovery value by 27; after
    // re-adding it, only 27..=30 are meaningful.
    validate::signature(signature.v < 4, "recovery bit out of range")?;

    let c = ec::curve();
    let x = &signature.r;

    let y_squared = (x * x * x + &c.a * x + &c.b) % &c.p;
    let beta = ec::mod_sqrt(&y_squared);
    let want_odd = signature.v & 1 == 1;
    let y = if beta.bit(0) == want_odd {
        beta.clone()
    } else {
        &c.p - &beta
    };

    // If x³ + a·x + b is not a quadratic residue, r cannot be the
    // x-coordinate of a curve point and the signature is invalid.
    validate::signature(
        (&y * &y) % &c.p == y_squared,
        "r is not a curve x-coordinate",
    )?;
    validate::signature(!(x % &c.n).is_zero(), "r vanishes mod the group order")?;
    validate::signature(
        !(&signature.s % &c.n).is_zero(),
        "s vanishes mod the group order",
    )?;

    // Q = (s·R - z·G) · r⁻¹
    let z = BigUint::from_bytes_be(digest);
    let minus_z = (&c.n - (&z % &c.n)) % &c.n;
    let gz = c.g.to_jacobian().mul(&minus_z);
    let sr = AffinePoint::new(x.clone(), y).to_jacobian().mul(&signature.s);
    let q = gz.add(&sr).mul(&ec::mod_inverse(x, &c.n));

    if q.is_identity() {
        return Err(Error::bad_signature("recovered point is the identity"));
    }
    Ok(PublicKey::from_point(q.to_affine()))
}

/// Verify a signature (r, s) against a digest and a known public key.
///
/// Recovery makes this redundant for the RPC protocol itself, but the
/// reference implementation exposes it and interoperability tests use it.
pub fn verify_digest(
    digest: &[u8; FIELD_ELEMENT_SIZE],
    signature: &RecoverableSignature,
    public_key: &PublicKey,
) -> bool {
    let c = ec::curve();
    let r = &signature.r;
    let s = &signature.s;
    if (r % &c.n).is_zero() || (s % &c.n).is_zero() {
        return false;
    }
    let z = BigUint::from_bytes_be(digest);
    let w = ec::mod_inverse(s, &c.n);
    let u1 = (&z * &w) % &c.n;
    let u2 = (r * &w) % &c.n;
    let point = c.g.mul(&u1).add(&public_key.point().mul(&u2));
    point.x == *r
}

#[cfg(test)]
mod tests;
