//! The hex-string operation surface consumed by the RPC layer
//!
//! The surrounding Colonies client only ever calls five operations: generate
//! a private key, derive an identity, hash a payload, sign, and recover an
//! identity from a signature. All inputs and outputs are hex text.
//!
//! The operations are a [`Backend`] trait with two implementations: the pure
//! computational core ([`SoftwareBackend`]) and, behind the `native` feature,
//! a delegate to a reference shared library. Which one a [`Crypto`] value
//! uses is a constructor-time decision.

#[cfg(feature = "native")]
mod native;

#[cfg(feature = "native")]
pub use native::NativeBackend;

use rand::rngs::OsRng;

use crate::ec::FIELD_ELEMENT_SIZE;
use crate::ecdsa::{self, RecoverableSignature};
use crate::error::{validate, Error, Result};
use crate::identity;
use crate::keys::PrivateKey;

/// The five operations the RPC layer consumes, over hex text
pub trait Backend {
    /// Generate a fresh private key (64 hex characters)
    fn prvkey(&self) -> Result<String>;

    /// Derive the identity of a private key (64 hex characters)
    fn id(&self, prvkey: &str) -> Result<String>;

    /// SHA3-256 of a UTF-8 text (64 hex characters)
    fn hash(&self, data: &str) -> Result<String>;

    /// Sign a message with a private key (130 hex characters).
    ///
    /// The message is hashed with SHA3-256 first; callers conventionally
    /// pass a digest's hex text here.
    fn sign(&self, msg: &str, prvkey: &str) -> Result<String>;

    /// Recover the signer's identity from a digest and a signature
    /// (64 hex characters)
    fn recoverid(&self, digest: &str, signature: &str) -> Result<String>;
}

/// The pure-Rust computational core
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftwareBackend;

impl Backend for SoftwareBackend {
    fn prvkey(&self) -> Result<String> {
        Ok(PrivateKey::generate(&mut OsRng).to_hex())
    }

    fn id(&self, prvkey: &str) -> Result<String> {
        let key = PrivateKey::from_hex(prvkey)?;
        Ok(identity::identity_of(&key.public_key()))
    }

    fn hash(&self, data: &str) -> Result<String> {
        Ok(identity::hash_hex(data))
    }

    fn sign(&self, msg: &str, prvkey: &str) -> Result<String> {
        let key = PrivateKey::from_hex(prvkey)?;
        let digest = identity::digest(msg.as_bytes());
        Ok(ecdsa::sign_digest(&digest, &key).to_hex())
    }

    fn recoverid(&self, digest: &str, signature: &str) -> Result<String> {
        let decoded = hex::decode(digest).map_err(|e| Error::encoding("digest hex", e))?;
        validate::length("digest", decoded.len(), FIELD_ELEMENT_SIZE)?;
        let mut digest_bytes = [0u8; FIELD_ELEMENT_SIZE];
        digest_bytes.copy_from_slice(&decoded);
        let signature = RecoverableSignature::from_hex(signature)?;
        let public_key = ecdsa::recover(&digest_bytes, &signature)?;
        Ok(identity::identity_of(&public_key))
    }
}

/// The signing-core entry point held by the RPC client
pub struct Crypto {
    backend: Box<dyn Backend + Send + Sync>,
}

impl Crypto {
    /// Create a core backed by the pure-Rust implementation
    pub fn new() -> Self {
        Crypto {
            backend: Box::new(SoftwareBackend),
        }
    }

    /// Create a core backed by the reference shared library.
    ///
    /// The library path comes from the `CRYPTOLIB` environment variable,
    /// falling back to `/usr/local/lib/libcryptolib.so`.
    #[cfg(feature = "native")]
    pub fn native() -> Result<Self> {
        Ok(Crypto {
            backend: Box::new(NativeBackend::load()?),
        })
    }

    /// Create a core backed by the shared library at an explicit path
    #[cfg(feature = "native")]
    pub fn native_from(path: &std::path::Path) -> Result<Self> {
        Ok(Crypto {
            backend: Box::new(NativeBackend::open(path)?),
        })
    }

    /// Generate a fresh private key (64 hex characters)
    pub fn prvkey(&self) -> Result<String> {
        self.backend.prvkey()
    }

    /// Derive the identity of a private key (64 hex characters)
    pub fn id(&self, prvkey: &str) -> Result<String> {
        self.backend.id(prvkey)
    }

    /// SHA3-256 of a UTF-8 text (64 hex characters)
    pub fn hash(&self, data: &str) -> Result<String> {
        self.backend.hash(data)
    }

    /// Sign a message with a private key (130 hex characters)
    pub fn sign(&self, msg: &str, prvkey: &str) -> Result<String> {
        self.backend.sign(msg, prvkey)
    }

    /// Recover the signer's identity from a digest and a signature
    pub fn recoverid(&self, digest: &str, signature: &str) -> Result<String> {
        self.backend.recoverid(digest, signature)
    }
}

impl Default for Crypto {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prvkey_is_64_hex_chars() {
        let crypto = Crypto::new();
        let prvkey = crypto.prvkey().unwrap();
        assert_eq!(prvkey.len(), 64);
        assert!(prvkey.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_keys_are_distinct() {
        let crypto = Crypto::new();
        assert_ne!(crypto.prvkey().unwrap(), crypto.prvkey().unwrap());
    }

    #[test]
    fn id_rejects_bad_keys() {
        let crypto = Crypto::new();
        assert!(crypto.id("zz").is_err());
        let zero = "0".repeat(64);
        assert!(matches!(
            crypto.id(&zero),
            Err(Error::InvalidPrivateKey { .. })
        ));
    }

    #[test]
    fn recoverid_rejects_short_digest() {
        let crypto = Crypto::new();
        let prvkey = crypto.prvkey().unwrap();
        let signature = crypto.sign("hello", &prvkey).unwrap();
        assert!(crypto.recoverid("abcd", &signature).is_err());
    }

    #[test]
    fn sign_then_recover_through_the_surface() {
        let crypto = Crypto::new();
        let prvkey = crypto.prvkey().unwrap();
        let payload = "{\"msgtype\":\"addcolonymsg\"}";
        let signature = crypto.sign(payload, &prvkey).unwrap();
        let digest = crypto.hash(payload).unwrap();
        let recovered = crypto.recoverid(&digest, &signature).unwrap();
        assert_eq!(recovered, crypto.id(&prvkey).unwrap());
    }
}
