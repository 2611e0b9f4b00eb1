//! FFI bindings for ftracker
//!
//! This module provides C-compatible functions for calling ftracker from other languages.
//! All functions use C strings (null-terminated) and return allocated memory that
//! must be freed by the caller using `ftracker_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::report::{encode_summary_json, format_report};
use crate::types::TrainingSession;

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message
fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clear the last error message
fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

// ============================================================================
// Reports
// ============================================================================

/// Build the five-line training report for an activity label.
///
/// Negative counters are clamped to zero. An unrecognized label is not an
/// error: the returned string holds the unknown-activity message.
///
/// # Safety
/// - `activity_label` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `ftracker_free_string`.
/// - Returns NULL on error; call `ftracker_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn ftracker_format_report(
    action: i32,
    activity_label: *const c_char,
    duration_h: f64,
    weight_kg: f64,
    height_cm: f64,
    pool_length_m: i32,
    pool_laps: i32,
) -> *mut c_char {
    clear_last_error();

    let label = match cstr_to_string(activity_label) {
        Some(s) => s,
        None => {
            set_last_error("Invalid activity label string pointer");
            return ptr::null_mut();
        }
    };

    let report = format_report(
        clamp_count(action),
        &label,
        duration_h,
        weight_kg,
        height_cm,
        clamp_count(pool_length_m),
        clamp_count(pool_laps),
    );
    string_to_cstr(&report)
}

/// Compute the JSON summary envelope for a session given as JSON.
///
/// # Safety
/// - `session_json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `ftracker_free_string`.
/// - Returns NULL on error; call `ftracker_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn ftracker_summary_json(session_json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(session_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    let session: TrainingSession = match serde_json::from_str(&json_str) {
        Ok(session) => session,
        Err(e) => {
            set_last_error(&e.to_string());
            return ptr::null_mut();
        }
    };

    match encode_summary_json(&session.summary()) {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

fn clamp_count(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

/// Free a string returned by ftracker functions.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by an ftracker function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn ftracker_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The returned pointer is valid until the next ftracker function call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn ftracker_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

// ============================================================================
// Version Information
// ============================================================================

/// Get the ftracker library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn ftracker_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
