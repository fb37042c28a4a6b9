//! String-length exports, narrow and wide, in both linkage conventions.
//!
//! Each length comes in a decorated variant (what a C++ compiler would
//! export for the plain declaration) and an `extern "C"` variant with
//! the `_C` suffix, so a harness can compare resolution across the two
//! conventions. Both variants of a pair share one implementation.
//!
//! As with the platform primitives these wrap, passing a pointer to a
//! sequence without a terminator is undefined behavior.

use std::ffi::{CStr, c_char};

/// `f_strlen`: bytes before the NUL of a narrow C string.
///
/// # Safety
///
/// `s` must point to a NUL-terminated byte sequence.
#[unsafe(export_name = "?f_strlen@@YAHPEBD@Z")]
pub unsafe extern "C" fn narrow_len(s: *const c_char) -> i32 {
    unsafe { CStr::from_ptr(s) }.to_bytes().len() as i32
}

/// C-linkage variant of [`narrow_len`].
///
/// # Safety
///
/// Same contract as [`narrow_len`].
#[unsafe(export_name = "f_strlen_C")]
pub unsafe extern "C" fn narrow_len_c(s: *const c_char) -> i32 {
    unsafe { narrow_len(s) }
}

/// `f_wcslen`: 16-bit units before the NUL of a wide string.
///
/// # Safety
///
/// `s` must point to a 0-terminated sequence of 16-bit units.
#[unsafe(export_name = "?f_wcslen@@YAHPEB_W@Z")]
pub unsafe extern "C" fn wide_len(s: *const u16) -> i32 {
    let mut len = 0;
    let mut cursor = s;
    while unsafe { *cursor } != 0 {
        cursor = unsafe { cursor.add(1) };
        len += 1;
    }
    len
}

/// C-linkage variant of [`wide_len`].
///
/// # Safety
///
/// Same contract as [`wide_len`].
#[unsafe(export_name = "f_wcslen_C")]
pub unsafe extern "C" fn wide_len_c(s: *const u16) -> i32 {
    unsafe { wide_len(s) }
}
