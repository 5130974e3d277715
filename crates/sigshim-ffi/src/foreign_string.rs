//! # Foreign Strings — Ownership Across the C Boundary
//!
//! A [`ForeignString`] is a nul-terminated buffer this library allocates and
//! hands to a foreign caller. Ownership moves to the caller at the return
//! boundary and comes back exactly once, through `FreeString`.
//!
//! The buffer is allocated by Rust's global allocator. Releasing it with the
//! C runtime's `free()` is undefined behavior; so is releasing it twice or
//! using it after release. None of that can be detected from this side.

use std::ffi::{c_char, CStr, CString};

use sigshim_core::{ShimError, SignInput};

/// An owned C string awaiting transfer to a foreign caller.
#[derive(Debug, Default)]
pub struct ForeignString(CString);

impl ForeignString {
    /// Copy `text` into a fresh nul-terminated buffer.
    pub fn new(text: impl Into<Vec<u8>>) -> Result<Self, ShimError> {
        Ok(Self(CString::new(text)?))
    }

    /// A fresh empty string (a single nul byte).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Give up ownership. The caller must hand the pointer back to
    /// [`ForeignString::release`] exactly once.
    pub fn into_raw(self) -> *mut c_char {
        self.0.into_raw()
    }

    /// Reclaim and drop a buffer produced by [`ForeignString::into_raw`].
    /// Null is ignored.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a pointer obtained from `into_raw` that has not
    /// been released yet. After this call the pointer is dangling.
    pub unsafe fn release(ptr: *mut c_char) {
        if ptr.is_null() {
            return;
        }
        // SAFETY: the caller guarantees `ptr` came from `CString::into_raw`
        // and is released only once.
        drop(unsafe { CString::from_raw(ptr) });
    }
}

/// Transfer the outcome of a string-returning operation to the caller.
///
/// Failures are logged and replaced by the empty string so the boundary never
/// returns null.
pub(crate) fn hand_over(
    op: &'static str,
    result: Result<ForeignString, ShimError>,
) -> *mut c_char {
    match result {
        Ok(s) => s.into_raw(),
        Err(e) => {
            tracing::error!(op, error = %e, "returning empty string");
            ForeignString::empty().into_raw()
        }
    }
}

/// Borrow a nullable nul-terminated input as a [`SignInput`].
///
/// # Safety
///
/// `ptr` must be null or point to a nul-terminated buffer that stays valid
/// and unmodified for `'a`.
pub(crate) unsafe fn borrow_input<'a>(ptr: *const c_char) -> SignInput<'a> {
    if ptr.is_null() {
        return SignInput::Absent;
    }
    // SAFETY: non-null and nul-terminated per the caller's contract.
    SignInput::Present(unsafe { CStr::from_ptr(ptr) }.to_bytes())
}
