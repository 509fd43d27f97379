//! Superfície C: `DebugLog(const char*)`.

#![cfg(feature = "ffi")]

use std::ffi::CString;
use std::ptr;

use debuglog::core::c_abi::DebugLog;
use debuglog::drivers::CaptureSink;

static CAPTURE: CaptureSink<256> = CaptureSink::new();

fn captured() -> Vec<u8> {
    let mut out = vec![0u8; CAPTURE.capacity()];
    let n = CAPTURE.copy_to(&mut out);
    out.truncate(n);
    out
}

#[test]
fn c_strings_reach_the_active_sink() {
    let _ = debuglog::install(&CAPTURE);
    CAPTURE.clear();

    // Ponteiro nulo: no-op
    unsafe { DebugLog(ptr::null()) };
    assert!(captured().is_empty());

    let empty = CString::new("").unwrap();
    unsafe { DebugLog(empty.as_ptr()) };
    assert!(captured().is_empty());

    let first = CString::new("tensor arena ok\n").unwrap();
    let second = CString::new("invoke()").unwrap();
    unsafe {
        DebugLog(first.as_ptr());
        DebugLog(second.as_ptr());
    }
    assert_eq!(captured(), b"tensor arena ok\ninvoke()");

    // Bytes que não são UTF-8 passam como estão
    CAPTURE.clear();
    let raw = CString::new(vec![0xC3, 0x28]).unwrap();
    unsafe { DebugLog(raw.as_ptr()) };
    assert_eq!(captured(), &[0xC3u8, 0x28]);
}
