//! # sigshim-core — Digest Signing Primitives
//!
//! The pure half of the sigshim library. Everything the C-ABI surface in
//! `sigshim-ffi` and the `sigshim` CLI expose is computed here:
//!
//! - **Digest**: SHA-256 over arbitrary bytes, rendered as a lowercase
//!   64-character [`HexDigest`].
//! - **sign / verify**: the "signature" of a byte string is its hex digest;
//!   verification is exact digest equality. This is an unkeyed integrity
//!   check: it proves content identity, not provenance.
//! - **BuildInfo**: immutable build metadata, built once and passed by
//!   reference to whatever reports it.
//!
//! ## Crate Policy
//!
//! - No shared mutable state. Every routine is a pure function of its inputs,
//!   so concurrent callers need no coordination.
//! - Absent input is a variant of [`SignInput`], not an error.
//! - No `unsafe` code. Raw pointers live in `sigshim-ffi` only.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod build_info;
pub mod digest;
pub mod error;
pub mod shim;

pub use build_info::{platform, BuildInfo, SHIM_VERSION};
pub use digest::{Digest, HexDigest, DIGEST_LEN, EMPTY_INPUT_HEX, HEX_DIGEST_LEN};
pub use error::{DigestError, ShimError};
pub use shim::{sign, verify, SignInput};
