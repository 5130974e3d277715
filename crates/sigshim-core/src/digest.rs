//! # Content Digest — SHA-256 and its Hex Rendering
//!
//! Defines `Digest` (the raw 32-byte SHA-256 output) and `HexDigest` (its
//! canonical lowercase text form). The hex form is the externally observable
//! "signature" artifact returned to foreign callers.
//!
//! ## Invariants
//!
//! - A `Digest` is only produced by hashing, via [`Digest::compute`].
//! - A `HexDigest` is only produced by rendering a `Digest`, so its 64 bytes
//!   are always ASCII `[0-9a-f]`.
//! - Both are held inline. Computing or comparing a digest never touches the
//!   heap.

use sha2::{Digest as _, Sha256};
use subtle::ConstantTimeEq;

use crate::error::DigestError;

/// Length in bytes of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// Length in characters of a rendered [`HexDigest`].
pub const HEX_DIGEST_LEN: usize = DIGEST_LEN * 2;

/// Hex SHA-256 of zero input bytes.
pub const EMPTY_INPUT_HEX: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[cfg(test)]
thread_local! {
    static COMPUTE_CALLS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Number of [`Digest::compute`] calls made on the current thread.
#[cfg(test)]
pub(crate) fn compute_calls() -> usize {
    COMPUTE_CALLS.with(std::cell::Cell::get)
}

/// A SHA-256 digest. Has no identity beyond its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Hash `data` with SHA-256.
    pub fn compute(data: &[u8]) -> Self {
        #[cfg(test)]
        COMPUTE_CALLS.with(|c| c.set(c.get() + 1));
        let hash = Sha256::digest(data);
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&hash);
        Self(bytes)
    }

    /// Render the digest as lowercase hex.
    pub fn to_hex(&self) -> Result<HexDigest, DigestError> {
        let mut out = [0u8; HEX_DIGEST_LEN];
        hex::encode_to_slice(self.0, &mut out)?;
        Ok(HexDigest(out))
    }
}

/// Lowercase hex rendering of a [`Digest`], 64 ASCII characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexDigest([u8; HEX_DIGEST_LEN]);

impl HexDigest {
    /// The rendering as text.
    pub fn as_str(&self) -> &str {
        // Always ASCII hex; the fallback is unreachable.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// The rendering as raw ASCII bytes, without a terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Exact, case-sensitive, full-length comparison against a candidate
    /// signature.
    ///
    /// Equal-length candidates are compared in constant time. A candidate of
    /// any other length is unequal.
    pub fn matches(&self, candidate: &[u8]) -> bool {
        bool::from(self.0.as_slice().ct_eq(candidate))
    }
}

impl std::fmt::Display for HexDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for HexDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HexDigest").field(&self.as_str()).finish()
    }
}
