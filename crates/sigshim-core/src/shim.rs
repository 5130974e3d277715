//! # Sign and Verify
//!
//! The two digest operations behind the foreign surface, expressed over
//! [`SignInput`] so that a missing foreign argument is an ordinary input
//! class with a defined answer instead of an error.
//!
//! - `sign(Absent)` is `None`, which the boundary renders as the empty string.
//! - `verify` with either side `Absent` is `false` and hashes nothing.

use crate::digest::{Digest, HexDigest};
use crate::error::ShimError;

/// A possibly-absent byte string received from a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInput<'a> {
    /// The caller supplied these bytes (possibly empty).
    Present(&'a [u8]),
    /// The caller supplied no reference at all.
    Absent,
}

impl<'a> SignInput<'a> {
    /// The bytes, if present.
    pub fn bytes(self) -> Option<&'a [u8]> {
        match self {
            Self::Present(bytes) => Some(bytes),
            Self::Absent => None,
        }
    }

    /// Whether the caller supplied a reference.
    pub fn is_present(self) -> bool {
        matches!(self, Self::Present(_))
    }
}

impl<'a> From<Option<&'a [u8]>> for SignInput<'a> {
    fn from(value: Option<&'a [u8]>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<'a> From<&'a [u8]> for SignInput<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Present(value)
    }
}

impl<'a> From<&'a str> for SignInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Present(value.as_bytes())
    }
}

/// Produce the signature of `data`: its lowercase hex SHA-256 digest.
///
/// Returns `Ok(None)` for absent input.
pub fn sign(data: SignInput<'_>) -> Result<Option<HexDigest>, ShimError> {
    match data {
        SignInput::Absent => Ok(None),
        SignInput::Present(bytes) => Ok(Some(Digest::compute(bytes).to_hex()?)),
    }
}

/// Check that `signature` is exactly the signature of `data`.
///
/// This is an unkeyed integrity check. Anyone can compute a matching
/// signature for any data, so a `true` result says nothing about who
/// produced it.
pub fn verify(data: SignInput<'_>, signature: SignInput<'_>) -> Result<bool, ShimError> {
    let (SignInput::Present(data), SignInput::Present(signature)) = (data, signature) else {
        return Ok(false);
    };
    let expected = Digest::compute(data).to_hex()?;
    Ok(expected.matches(signature))
}
