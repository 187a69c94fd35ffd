//! Elliptic-curve identity and signing core for the Colonies
//! job-orchestration API
//!
//! Every message sent to a Colonies server is authenticated with a
//! deterministic secp256k1 ECDSA signature, and accounts are referenced by
//! an identity: the SHA3-256 hash of the uncompressed public key's hex text.
//! This crate is that core and nothing else — the RPC client, data models
//! and file transfer live elsewhere and call in through five hex-string
//! operations (see [`Crypto`]).
//!
//! Signing is deterministic: the per-signature nonce is derived from the
//! message digest and the private key with a fixed two-round HMAC-SHA256
//! ladder, so identical inputs always produce byte-identical signatures.
//! Signatures are canonical (low-s) and carry a recovery bit, letting the
//! server recover the signer's identity without ever seeing the public key.
//!
//! All operations are pure functions over immutable big-integer values; the
//! only shared state is the fixed curve constants. The arithmetic reproduces
//! the reference implementation's variable-time semantics and is not
//! hardened against timing side channels.
//!
//! # Example
//!
//! ```
//! use colonies_crypto::Crypto;
//!
//! let crypto = Crypto::new();
//! let prvkey = crypto.prvkey()?;
//! let payload = "{\"msgtype\":\"addcolonymsg\"}";
//! let signature = crypto.sign(payload, &prvkey)?;
//! let identity = crypto.recoverid(&crypto.hash(payload)?, &signature)?;
//! assert_eq!(identity, crypto.id(&prvkey)?);
//! # Ok::<(), colonies_crypto::Error>(())
//! ```

#![cfg_attr(not(feature = "native"), forbid(unsafe_code))]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Curve arithmetic
pub mod ec;
pub use ec::{AffinePoint, CurveParams};

// Keys and identities
pub mod identity;
pub mod keys;
pub use keys::{PrivateKey, PublicKey};

// Deterministic signing and recovery
pub mod ecdsa;
pub use ecdsa::{recover, sign_digest, verify_digest, RecoverableSignature};

// Operation surface for the RPC layer
pub mod backend;
pub use backend::{Backend, Crypto, SoftwareBackend};
