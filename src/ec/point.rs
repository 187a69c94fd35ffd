//! Point arithmetic in affine and Jacobian coordinates

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::{curve, mod_inverse, mod_sqrt, to_be32};
use super::{FIELD_ELEMENT_SIZE, POINT_COMPRESSED_SIZE, POINT_RAW_SIZE};
use crate::error::{validate, Result};

/// A point on the secp256k1 curve in affine coordinates
///
/// The pair (0, 0) is used as the affine image of the group identity,
/// matching the Jacobian-to-affine conversion below.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    /// x-coordinate
    pub x: BigUint,
    /// y-coordinate
    pub y: BigUint,
}

/// A point in Jacobian projective coordinates (X, Y, Z), representing the
/// affine point (X/Z², Y/Z³)
///
/// Any representative with Y = 0 is the group identity. Values of this type
/// exist only transiently during computation and never cross the crate
/// boundary.
#[derive(Clone, Debug)]
pub(crate) struct JacobianPoint {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

/// (a - b) mod p for operands already reduced mod p
fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    ((a + p) - b) % p
}

impl AffinePoint {
    /// Create a point from coordinates without an on-curve check
    pub(crate) fn new(x: BigUint, y: BigUint) -> Self {
        AffinePoint { x, y }
    }

    /// Check whether the coordinates satisfy y² ≡ x³ + a·x + b (mod p)
    pub fn is_on_curve(&self) -> bool {
        let c = curve();
        let lhs = (&self.y * &self.y) % &c.p;
        let rhs = (&self.x * &self.x * &self.x + &c.a * &self.x + &c.b) % &c.p;
        lhs == rhs
    }

    /// Lift into Jacobian coordinates with Z = 1
    pub(crate) fn to_jacobian(&self) -> JacobianPoint {
        JacobianPoint {
            x: self.x.clone(),
            y: self.y.clone(),
            z: BigUint::one(),
        }
    }

    /// Add two affine points via Jacobian arithmetic
    pub fn add(&self, other: &Self) -> Self {
        self.to_jacobian().add(&other.to_jacobian()).to_affine()
    }

    /// Scalar multiplication via Jacobian double-and-add
    pub fn mul(&self, scalar: &BigUint) -> Self {
        self.to_jacobian().mul(scalar).to_affine()
    }

    /// Serialize as 64 raw bytes: x ‖ y, each 32-byte big-endian.
    ///
    /// The `04` uncompressed-format prefix is the caller's concern.
    pub fn to_raw_bytes(&self) -> [u8; POINT_RAW_SIZE] {
        let mut out = [0u8; POINT_RAW_SIZE];
        out[..FIELD_ELEMENT_SIZE].copy_from_slice(&to_be32(&self.x));
        out[FIELD_ELEMENT_SIZE..].copy_from_slice(&to_be32(&self.y));
        out
    }

    /// Deserialize from 64 raw bytes, rejecting points off the curve
    pub fn from_raw_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("raw point", bytes.len(), POINT_RAW_SIZE)?;
        let point = AffinePoint {
            x: BigUint::from_bytes_be(&bytes[..FIELD_ELEMENT_SIZE]),
            y: BigUint::from_bytes_be(&bytes[FIELD_ELEMENT_SIZE..]),
        };
        validate::public_key(point.is_on_curve(), "point is not on the curve")?;
        Ok(point)
    }

    /// Serialize in compressed form: a parity prefix (02 even, 03 odd)
    /// followed by the 32-byte x-coordinate
    pub fn compress(&self) -> [u8; POINT_COMPRESSED_SIZE] {
        let mut out = [0u8; POINT_COMPRESSED_SIZE];
        out[0] = if self.y.bit(0) { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&to_be32(&self.x));
        out
    }

    /// Deserialize from compressed form.
    ///
    /// Recovers y as (x³ + a·x + b)^((p+1)/4) mod p and selects the root
    /// matching the requested parity. Rejects bad prefixes and x-coordinates
    /// that are not on the curve.
    pub fn decompress(bytes: &[u8]) -> Result<Self> {
        validate::length("compressed point", bytes.len(), POINT_COMPRESSED_SIZE)?;
        let prefix = bytes[0];
        validate::public_key(
            prefix == 0x02 || prefix == 0x03,
            "invalid compressed point prefix",
        )?;
        let c = curve();
        let x = BigUint::from_bytes_be(&bytes[1..]);
        let y_squared = (&x * &x * &x + &c.a * &x + &c.b) % &c.p;
        let root = mod_sqrt(&y_squared);
        validate::public_key(
            (&root * &root) % &c.p == y_squared,
            "x-coordinate has no square root",
        )?;
        let want_odd = prefix == 0x03;
        let y = if root.bit(0) == want_odd {
            root
        } else {
            &c.p - root
        };
        Ok(AffinePoint { x, y })
    }
}

impl JacobianPoint {
    /// The group identity (point at infinity)
    pub fn identity() -> Self {
        JacobianPoint {
            x: BigUint::zero(),
            y: BigUint::zero(),
            z: BigUint::one(),
        }
    }

    /// Check whether this representative is the identity
    pub fn is_identity(&self) -> bool {
        self.y.is_zero()
    }

    /// Point doubling with the standard Jacobian formulas
    pub fn double(&self) -> Self {
        if self.y.is_zero() {
            return JacobianPoint {
                x: BigUint::zero(),
                y: BigUint::zero(),
                z: BigUint::zero(),
            };
        }
        let c = curve();
        let p = &c.p;
        let ysq = (&self.y * &self.y) % p;
        let s = (BigUint::from(4u32) * &self.x * &ysq) % p;
        let z4 = self.z.modpow(&BigUint::from(4u32), p);
        let m = (BigUint::from(3u32) * &self.x * &self.x + &c.a * z4) % p;
        let two_s = (BigUint::from(2u32) * &s) % p;
        let nx = sub_mod(&((&m * &m) % p), &two_s, p);
        let tail = (BigUint::from(8u32) * &ysq * &ysq) % p;
        let ny = sub_mod(&((&m * sub_mod(&s, &nx, p)) % p), &tail, p);
        let nz = (BigUint::from(2u32) * &self.y * &self.z) % p;
        JacobianPoint {
            x: nx,
            y: ny,
            z: nz,
        }
    }

    /// Point addition with the general Jacobian formulas.
    ///
    /// Identity operands pass through; inverse points collapse to the
    /// identity; equal points delegate to `double`.
    pub fn add(&self, other: &Self) -> Self {
        if self.y.is_zero() {
            return other.clone();
        }
        if other.y.is_zero() {
            return self.clone();
        }
        let p = &curve().p;
        let z1_sq = (&self.z * &self.z) % p;
        let z2_sq = (&other.z * &other.z) % p;
        let u1 = (&self.x * &z2_sq) % p;
        let u2 = (&other.x * &z1_sq) % p;
        let s1 = (&self.y * &z2_sq * &other.z) % p;
        let s2 = (&other.y * &z1_sq * &self.z) % p;
        if u1 == u2 {
            if s1 != s2 {
                return Self::identity();
            }
            return self.double();
        }
        let h = sub_mod(&u2, &u1, p);
        let r = sub_mod(&s2, &s1, p);
        let h2 = (&h * &h) % p;
        let h3 = (&h * &h2) % p;
        let u1h2 = (&u1 * &h2) % p;
        let two_u1h2 = (BigUint::from(2u32) * &u1h2) % p;
        let nx = sub_mod(&sub_mod(&((&r * &r) % p), &h3, p), &two_u1h2, p);
        let s1h3 = (&s1 * &h3) % p;
        let ny = sub_mod(&((&r * sub_mod(&u1h2, &nx, p)) % p), &s1h3, p);
        let nz = (&h * &self.z * &other.z) % p;
        JacobianPoint {
            x: nx,
            y: ny,
            z: nz,
        }
    }

    /// Recursive double-and-add scalar multiplication.
    ///
    /// The scalar is reduced mod the group order first; zero scalars and
    /// identity inputs yield the identity. Variable-time by the reference
    /// semantics.
    pub fn mul(&self, scalar: &BigUint) -> Self {
        let n = &curve().n;
        if self.y.is_zero() || scalar.is_zero() {
            return Self::identity();
        }
        if scalar.is_one() {
            return self.clone();
        }
        if scalar >= n {
            return self.mul(&(scalar % n));
        }
        let half = self.mul(&(scalar >> 1u32)).double();
        if scalar.bit(0) {
            half.add(self)
        } else {
            half
        }
    }

    /// Convert back to affine coordinates with one field inversion.
    ///
    /// Identity representatives map to the affine sentinel (0, 0), since
    /// `mod_inverse` returns 0 for a zero Z.
    pub fn to_affine(&self) -> AffinePoint {
        let p = &curve().p;
        let z_inv = mod_inverse(&self.z, p);
        let z_inv_sq = (&z_inv * &z_inv) % p;
        let z_inv_cu = (&z_inv_sq * &z_inv) % p;
        AffinePoint {
            x: (&self.x * &z_inv_sq) % p,
            y: (&self.y * &z_inv_cu) % p,
        }
    }
}
