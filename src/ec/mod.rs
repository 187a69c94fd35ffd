//! secp256k1 elliptic curve primitives
//!
//! The curve equation is y² = x³ + 7 over the prime field F_p where
//! p = 2^256 - 2^32 - 977. Arithmetic is carried out on big integers in
//! Jacobian projective coordinates, mirroring the reference implementation
//! used by the Colonies server. The scalar multiplication and the Euclidean
//! inversion here are variable-time; this core reproduces the reference
//! semantics and does not defend against timing side channels.

mod point;

pub use point::AffinePoint;

use lazy_static::lazy_static;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Size of a serialized field element or scalar in bytes
pub const FIELD_ELEMENT_SIZE: usize = 32;
/// Size of a raw public-key encoding (x ‖ y, no prefix) in bytes
pub const POINT_RAW_SIZE: usize = 64;
/// Size of a compressed point encoding in bytes
pub const POINT_COMPRESSED_SIZE: usize = 33;

/// The fixed secp256k1 domain parameters
///
/// Constructed once at process start and handed out by reference; all curve
/// operations borrow the same immutable value.
pub struct CurveParams {
    /// Field prime p = 2^256 - 2^32 - 977
    pub p: BigUint,
    /// Group order n
    pub n: BigUint,
    /// Curve coefficient a (zero for secp256k1)
    pub a: BigUint,
    /// Curve coefficient b (seven for secp256k1)
    pub b: BigUint,
    /// Base point G
    pub g: AffinePoint,
}

lazy_static! {
    static ref SECP256K1: CurveParams = {
        let p = (BigUint::one() << 256u32) - (BigUint::one() << 32u32) - BigUint::from(977u32);
        let n = BigUint::parse_bytes(
            b"115792089237316195423570985008687907852837564279074904382605163141518161494337",
            10,
        )
        .expect("group order constant parses");
        let gx = BigUint::parse_bytes(
            b"55066263022277343669578718895168534326250603453777594175500187360389116729240",
            10,
        )
        .expect("base point x constant parses");
        let gy = BigUint::parse_bytes(
            b"32670510020758816978083085130507043184471273380659243275938904335757337482424",
            10,
        )
        .expect("base point y constant parses");
        CurveParams {
            p,
            n,
            a: BigUint::zero(),
            b: BigUint::from(7u32),
            g: AffinePoint::new(gx, gy),
        }
    };
}

/// Get the secp256k1 domain parameters
pub fn curve() -> &'static CurveParams {
    &SECP256K1
}

/// Multiplicative inverse of `a` modulo `n` via the extended Euclidean
/// algorithm.
///
/// Returns 0 when `a ≡ 0 (mod n)`; the caller treats that as a sentinel,
/// never as a valid inverse. `n` must be prime (both the field prime and the
/// group order are).
pub fn mod_inverse(a: &BigUint, n: &BigUint) -> BigUint {
    let a = a % n;
    if a.is_zero() {
        return BigUint::zero();
    }
    let modulus = BigInt::from(n.clone());
    let mut lm = BigInt::one();
    let mut hm = BigInt::zero();
    let mut low = BigInt::from(a);
    let mut high = modulus.clone();
    while low > BigInt::one() {
        let r = &high / &low;
        let nm = &hm - &lm * &r;
        let new = &high - &low * &r;
        hm = lm;
        high = low;
        lm = nm;
        low = new;
    }
    let reduced = ((lm % &modulus) + &modulus) % &modulus;
    reduced
        .to_biguint()
        .expect("inverse is non-negative after reduction")
}

/// Square root of `a` modulo the field prime, computed as a^((p+1)/4).
///
/// Valid because p ≡ 3 (mod 4) for secp256k1. The result is a square root
/// only when `a` is a quadratic residue; callers must check y² ≡ a.
pub fn mod_sqrt(a: &BigUint) -> BigUint {
    let p = &curve().p;
    let exp = (p + BigUint::one()) >> 2u32;
    a.modpow(&exp, p)
}

/// Serialize a big integer as a 32-byte zero-padded big-endian value
pub(crate) fn to_be32(value: &BigUint) -> [u8; FIELD_ELEMENT_SIZE] {
    let bytes = value.to_bytes_be();
    let mut out = [0u8; FIELD_ELEMENT_SIZE];
    out[FIELD_ELEMENT_SIZE - bytes.len()..].copy_from_slice(&bytes);
    out
}
