//! Validation utilities for the signing core

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a public-key encoding condition
#[inline(always)]
pub fn public_key(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPublicKey { reason });
    }
    Ok(())
}

/// Validate a signature condition
#[inline(always)]
pub fn signature(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::BadSignature { reason });
    }
    Ok(())
}
