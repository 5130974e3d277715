//! # Allocation Balance
//!
//! Runs the exported functions under a counting global allocator to check
//! the ownership contract from the heap's point of view:
//!
//! - N `Sign` calls followed by N `FreeString` calls leave no live bytes.
//! - Outstanding strings hold memory until released.
//! - `Verify` with a null argument allocates nothing.
//!
//! Counters are thread-local so tests running in parallel do not observe each
//! other's allocations. Each test warms the call paths up first so one-time
//! `tracing` callsite registration is not counted.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::ffi::{c_char, CString};

use sigshim::{FreeString, GetPlatform, GetVersion, Sign, Verify, VERIFY_MISMATCH};

struct CountingAlloc;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

fn record(delta: isize, fresh: bool) {
    let _ = LIVE_BYTES.try_with(|c| c.set(c.get() + delta));
    if fresh {
        let _ = ALLOCATIONS.try_with(|c| c.set(c.get() + 1));
    }
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            record(layout.size() as isize, true);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            record(layout.size() as isize, true);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        record(-(layout.size() as isize), false);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            record(new_size as isize - layout.size() as isize, false);
        }
        new_ptr
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn live_bytes() -> isize {
    LIVE_BYTES.with(Cell::get)
}

fn allocations() -> usize {
    ALLOCATIONS.with(Cell::get)
}

fn warm_up(data: &CString) {
    unsafe {
        FreeString(GetVersion());
        FreeString(GetPlatform());
        let sig = Sign(data.as_ptr());
        Verify(data.as_ptr(), sig);
        Verify(std::ptr::null(), sig);
        FreeString(sig);
        FreeString(Sign(std::ptr::null()));
    }
}

#[test]
fn sign_release_cycles_leave_no_live_bytes() {
    const N: usize = 1_000;
    let data = CString::new("leak check payload").unwrap();
    let mut outstanding: Vec<*mut c_char> = Vec::with_capacity(N);
    warm_up(&data);

    let before = live_bytes();
    for _ in 0..N {
        outstanding.push(unsafe { Sign(data.as_ptr()) });
    }
    assert!(live_bytes() - before >= (N * 65) as isize);
    for ptr in outstanding.drain(..) {
        unsafe { FreeString(ptr) };
    }
    assert_eq!(live_bytes(), before);
}

#[test]
fn every_owned_string_kind_is_released() {
    let data = CString::new("mixed").unwrap();
    let mut outstanding: Vec<*mut c_char> = Vec::with_capacity(400);
    warm_up(&data);

    let before = live_bytes();
    for _ in 0..100 {
        outstanding.push(GetVersion());
        outstanding.push(GetPlatform());
        outstanding.push(unsafe { Sign(data.as_ptr()) });
        outstanding.push(unsafe { Sign(std::ptr::null()) });
    }
    assert!(live_bytes() > before);
    for ptr in outstanding.drain(..) {
        unsafe { FreeString(ptr) };
    }
    assert_eq!(live_bytes(), before);
}

#[test]
fn verify_with_null_argument_allocates_nothing() {
    let data = CString::new("no work for absent input").unwrap();
    warm_up(&data);
    let sig = unsafe { Sign(data.as_ptr()) };

    let before = allocations();
    let live = live_bytes();
    unsafe {
        assert_eq!(Verify(std::ptr::null(), sig), VERIFY_MISMATCH);
        assert_eq!(Verify(data.as_ptr(), std::ptr::null()), VERIFY_MISMATCH);
        assert_eq!(Verify(std::ptr::null(), std::ptr::null()), VERIFY_MISMATCH);
    }
    assert_eq!(allocations(), before);
    assert_eq!(live_bytes(), live);

    unsafe { FreeString(sig) };
}
