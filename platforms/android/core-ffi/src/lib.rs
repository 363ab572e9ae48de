mod bridge;
mod error;

use std::ffi::CString;
use std::os::raw::c_char;

pub use bridge::{
    Java_tech_userland_userland_MainActivity_bridgeVersion,
    Java_tech_userland_userland_MainActivity_stringFromJNI,
};

fn ret(s: &str) -> *const c_char {
    CString::new(s).unwrap().into_raw()
}

/// JNI 入口的 C 孪生函数，供宿主测试和非 JVM 壳调用。
/// 返回的字符串必须用 [`ul_free_string`] 释放。
#[no_mangle]
pub extern "C" fn ul_string_from_native() -> *const c_char {
    ret(ul_core::api::greeting())
}

/// 安全释放由本库分配并交给壳侧的 C 字符串。
///
/// - `s` 为空时直接返回，不做任何操作。
/// - 指针必须来自本库的导出函数，且释放后不得再使用。
#[no_mangle]
pub extern "C" fn ul_free_string(s: *const c_char) {
    if s.is_null() { return; }
    unsafe { drop(CString::from_raw(s as *mut c_char)); }
}

/// 查询 FFI 接口版本。空指针参数会被跳过。
#[no_mangle]
pub extern "C" fn ul_get_ffi_version(major: *mut u32, minor: *mut u32) {
    unsafe {
        if !major.is_null() { *major = ul_core::api::FFI_VERSION_MAJOR; }
        if !minor.is_null() { *minor = ul_core::api::FFI_VERSION_MINOR; }
    }
}

#[cfg(test)]
mod tests;
