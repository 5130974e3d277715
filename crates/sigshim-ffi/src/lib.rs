//! # sigshim — C-ABI Signing Shim
//!
//! Exposes the `sigshim-core` digest operations to foreign callers through
//! five unmangled C functions (declared in `include/sigshim.h`):
//!
//! | Symbol | Returns |
//! |---|---|
//! | `GetVersion` | owned string, the version literal |
//! | `GetPlatform` | owned string, `"<os>/<arch>"` |
//! | `Sign` | owned string, hex SHA-256 of the input, `""` for NULL input |
//! | `Verify` | `1` if the signature matches, else `0` (also for NULL input) |
//! | `FreeString` | releases an owned string |
//!
//! ## Ownership
//!
//! Every owned string is a fresh allocation whose ownership passes to the
//! caller on return. It must be released exactly once with `FreeString`,
//! never with the C runtime's `free()`. The library keeps no reference to it.
//!
//! ## Concurrency
//!
//! There is no shared state. All functions may be called concurrently from
//! any number of threads.
//!
//! ## Logging
//!
//! Calls emit `tracing` events at `trace` level and internal failures at
//! `error` level. The library never installs a subscriber.

#![deny(unsafe_op_in_unsafe_fn)]

use std::ffi::{c_char, c_int};

use sigshim_core::{platform, sign, verify, SHIM_VERSION};

pub mod foreign_string;

pub use foreign_string::ForeignString;

use foreign_string::{borrow_input, hand_over};

/// `Verify` result for a matching signature.
pub const VERIFY_MATCH: c_int = 1;

/// `Verify` result for a mismatch or absent input.
pub const VERIFY_MISMATCH: c_int = 0;

/// Return the library version as an owned string.
///
/// Never returns null. Release the result with [`FreeString`].
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn GetVersion() -> *mut c_char {
    tracing::trace!("GetVersion");
    hand_over("GetVersion", ForeignString::new(SHIM_VERSION))
}

/// Return the host platform as an owned `"<os>/<arch>"` string.
///
/// Never returns null. Release the result with [`FreeString`].
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn GetPlatform() -> *mut c_char {
    tracing::trace!("GetPlatform");
    hand_over("GetPlatform", ForeignString::new(platform()))
}

/// Sign `data`: return its lowercase hex SHA-256 digest as an owned string.
///
/// A null `data` yields an owned empty string, never null. Release the result
/// with [`FreeString`].
///
/// # Safety
///
/// `data` must be null or point to a nul-terminated buffer that stays valid
/// for the duration of the call.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn Sign(data: *const c_char) -> *mut c_char {
    // SAFETY: forwarded from this function's contract.
    let input = unsafe { borrow_input(data) };
    tracing::trace!(
        present = input.is_present(),
        len = input.bytes().map_or(0, <[u8]>::len),
        "Sign"
    );
    let result = sign(input).and_then(|sig| match sig {
        Some(hex) => ForeignString::new(hex.as_bytes()),
        None => Ok(ForeignString::empty()),
    });
    hand_over("Sign", result)
}

/// Check that `signature` is exactly the signature [`Sign`] produces for
/// `data`. Returns [`VERIFY_MATCH`] or [`VERIFY_MISMATCH`].
///
/// Either argument null yields [`VERIFY_MISMATCH`] without hashing anything.
/// The comparison is case-sensitive and full-length. This is an unkeyed
/// content check: it does not authenticate who produced the signature.
///
/// # Safety
///
/// Each argument must be null or point to a nul-terminated buffer that stays
/// valid for the duration of the call.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn Verify(data: *const c_char, signature: *const c_char) -> c_int {
    // SAFETY: forwarded from this function's contract.
    let (data, signature) = unsafe { (borrow_input(data), borrow_input(signature)) };
    tracing::trace!(
        data_present = data.is_present(),
        signature_present = signature.is_present(),
        "Verify"
    );
    match verify(data, signature) {
        Ok(true) => VERIFY_MATCH,
        Ok(false) => VERIFY_MISMATCH,
        Err(e) => {
            tracing::error!(error = %e, "Verify failed; reporting mismatch");
            VERIFY_MISMATCH
        }
    }
}

/// Release a string returned by this library. Null is ignored.
///
/// # Safety
///
/// `ptr` must be null or a pointer returned by [`GetVersion`],
/// [`GetPlatform`], or [`Sign`] that has not been released yet. Releasing a
/// pointer twice, releasing memory this library did not allocate, or using
/// the string after release is undefined behavior.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn FreeString(ptr: *mut c_char) {
    tracing::trace!(null = ptr.is_null(), "FreeString");
    // SAFETY: forwarded from this function's contract.
    unsafe { ForeignString::release(ptr) }
}
