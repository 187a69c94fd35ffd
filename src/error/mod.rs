//! Error handling for the signing core

use std::fmt;

/// The error type for the signing core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Private key is zero or not below the group order
    InvalidPrivateKey {
        /// Reason why the key is invalid
        reason: &'static str,
    },

    /// Public key encoding is malformed or the point is not on the curve
    InvalidPublicKey {
        /// Reason why the encoding is invalid
        reason: &'static str,
    },

    /// Signature is malformed or does not yield a recoverable public key
    BadSignature {
        /// Reason why the signature was rejected
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Text encoding error (hex decoding and the like)
    Encoding {
        /// Context where the encoding error occurred
        context: &'static str,
        /// Additional details about the failure
        details: String,
    },

    /// Error reported by the foreign-library delegate
    #[cfg(feature = "native")]
    Native {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: String,
    },
}

impl Error {
    /// Shorthand to create an Encoding error from a decode failure
    pub fn encoding<E: fmt::Display>(context: &'static str, err: E) -> Self {
        Error::Encoding {
            context,
            details: err.to_string(),
        }
    }

    /// Shorthand to create a BadSignature error
    pub fn bad_signature(reason: &'static str) -> Self {
        Error::BadSignature { reason }
    }
}

/// Result type for signing-core operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPrivateKey { reason } => {
                write!(f, "Invalid private key: {}", reason)
            }
            Error::InvalidPublicKey { reason } => {
                write!(f, "Invalid public key: {}", reason)
            }
            Error::BadSignature { reason } => {
                write!(f, "Bad signature: {}", reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Encoding { context, details } => {
                write!(f, "Encoding error in {}: {}", context, details)
            }
            #[cfg(feature = "native")]
            Error::Native { operation, details } => {
                write!(f, "Native library error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
