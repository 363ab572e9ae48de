use super::super::*;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::thread;

// JNI 导出需要真实 JVM 才能调用，这里只测 C 孪生面；
// jstring 路径与其共享同一个 ul_core::api::greeting()。
unsafe fn take_string(p: *const c_char) -> String {
    assert!(!p.is_null());
    let s = CStr::from_ptr(p).to_string_lossy().into_owned();
    ul_free_string(p);
    s
}

#[test]
fn ffi_string_matches_literal() {
    unsafe {
        assert_eq!(take_string(ul_string_from_native()), ul_core::api::GREETING);
    }
}

#[test]
fn ffi_string_is_stable_across_calls() {
    unsafe {
        for _ in 0..1000 {
            assert_eq!(take_string(ul_string_from_native()), "Hello from Rust");
        }
    }
}

#[test]
fn ffi_string_is_stable_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| unsafe {
                for _ in 0..100 {
                    assert_eq!(take_string(ul_string_from_native()), "Hello from Rust");
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn ffi_free_null_is_noop() {
    ul_free_string(std::ptr::null());
}

#[test]
fn ffi_version_reported() {
    let mut major = 0u32;
    let mut minor = u32::MAX;
    ul_get_ffi_version(&mut major, &mut minor);
    assert_eq!((major, minor), (1, 0));
}

#[test]
fn ffi_version_tolerates_null_out_params() {
    ul_get_ffi_version(std::ptr::null_mut(), std::ptr::null_mut());
}
