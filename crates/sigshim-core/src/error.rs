//! # Error Types
//!
//! Structured errors for the sigshim library, derived with `thiserror`.
//!
//! None of these cross the C boundary. The foreign surface has no error
//! channel: absent input is answered with sentinel values, and anything
//! reported here is logged by the shim and collapsed to the same sentinels.

use thiserror::Error;

/// Top-level error type for sigshim operations.
#[derive(Error, Debug)]
pub enum ShimError {
    /// Digest computation or rendering failed.
    #[error("digest error: {0}")]
    Digest(#[from] DigestError),

    /// A string destined for a foreign caller contained a nul byte and
    /// cannot be represented as a C string.
    #[error("interior nul byte in foreign string: {0}")]
    InteriorNul(#[from] std::ffi::NulError),
}

/// Error rendering a digest.
#[derive(Error, Debug)]
pub enum DigestError {
    /// Hex encoding into the fixed-size rendering buffer failed.
    #[error("hex encoding failed: {0}")]
    HexEncode(#[from] hex::FromHexError),
}
