//! Private keys and derived public keys

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use sha3::{Digest, Sha3_256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ec::{self, AffinePoint, FIELD_ELEMENT_SIZE, POINT_RAW_SIZE};
use crate::error::{validate, Error, Result};

/// A secp256k1 private key: a 32-byte big-endian scalar d with 0 < d < n
///
/// The byte representation is zeroized on drop. A key is never serialized by
/// this crate except through the explicit hex accessors.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    bytes: [u8; FIELD_ELEMENT_SIZE],
}

impl PrivateKey {
    /// Create a private key from raw bytes.
    ///
    /// Rejects zero and anything not strictly below the group order.
    pub fn from_bytes(bytes: [u8; FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let value = BigUint::from_bytes_be(&bytes);
        if value.is_zero() {
            return Err(Error::InvalidPrivateKey {
                reason: "key is zero",
            });
        }
        if value >= ec::curve().n {
            return Err(Error::InvalidPrivateKey {
                reason: "key is not below the group order",
            });
        }
        Ok(PrivateKey { bytes })
    }

    /// Create a private key from a 64-character hex string
    pub fn from_hex(text: &str) -> Result<Self> {
        let decoded =
            hex::decode(text).map_err(|e| Error::encoding("private key hex", e))?;
        validate::length("private key", decoded.len(), FIELD_ELEMENT_SIZE)?;
        let mut bytes = [0u8; FIELD_ELEMENT_SIZE];
        bytes.copy_from_slice(&decoded);
        let key = Self::from_bytes(bytes);
        bytes.zeroize();
        key
    }

    /// Generate a fresh private key.
    ///
    /// Draws 32 bytes from the given secure random source and passes them
    /// through SHA3-256, retrying in the astronomically unlikely case the
    /// result falls outside [1, n-1].
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        loop {
            let mut seed = [0u8; FIELD_ELEMENT_SIZE];
            rng.fill_bytes(&mut seed);
            let hashed: [u8; FIELD_ELEMENT_SIZE] = Sha3_256::digest(seed).into();
            seed.zeroize();
            if let Ok(key) = Self::from_bytes(hashed) {
                return key;
            }
        }
    }

    /// The raw 32-byte big-endian representation
    pub fn as_bytes(&self) -> &[u8; FIELD_ELEMENT_SIZE] {
        &self.bytes
    }

    /// Serialize as 64 lowercase hex characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// The key as a big integer scalar
    pub(crate) fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// Derive the public key Q = d·G
    pub fn public_key(&self) -> PublicKey {
        let point = ec::curve().g.mul(&self.to_biguint());
        PublicKey { point }
    }
}

/// A secp256k1 public key in affine form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    point: AffinePoint,
}

impl PublicKey {
    pub(crate) fn from_point(point: AffinePoint) -> Self {
        PublicKey { point }
    }

    /// The underlying curve point
    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// Serialize as 64 raw bytes (x ‖ y, no prefix)
    pub fn to_raw_bytes(&self) -> [u8; POINT_RAW_SIZE] {
        self.point.to_raw_bytes()
    }

    /// Deserialize from 64 raw bytes, rejecting points off the curve
    pub fn from_raw_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(PublicKey {
            point: AffinePoint::from_raw_bytes(bytes)?,
        })
    }

    /// The uncompressed hex text: `04` followed by 128 hex characters.
    ///
    /// This is the exact string the identity hash is computed over.
    pub fn to_uncompressed_hex(&self) -> String {
        format!("04{}", hex::encode(self.to_raw_bytes()))
    }

    /// Serialize in compressed form (33 bytes, parity prefix + x)
    pub fn compress(&self) -> [u8; ec::POINT_COMPRESSED_SIZE] {
        self.point.compress()
    }

    /// Deserialize from compressed form
    pub fn decompress(bytes: &[u8]) -> Result<Self> {
        Ok(PublicKey {
            point: AffinePoint::decompress(bytes)?,
        })
    }
}
