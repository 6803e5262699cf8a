//! objc2 aliases and runtime helpers.
//!
//! The UI code talks to AppKit through untyped `msg_send!` on raw object
//! pointers. This module gathers the aliases and small helpers that style
//! needs so call sites import a single path.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::{c_char, CStr, CString};

pub use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
pub use objc2::{msg_send, sel, ClassType};

pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

pub use objc2_app_kit::NSApplication;

pub use block2::RcBlock;

pub use objc2::rc::Retained;

/// Objective-C object pointer.
///
/// Prefer typed pointers when the class is known. Use `id` for the dynamic
/// `msg_send!` style used throughout the UI layer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES` (a `BOOL`, not a Rust `bool`).
pub const YES: Bool = Bool::YES;

/// Objective-C `NO`.
pub const NO: Bool = Bool::NO;

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString and return it as an autoreleased raw pointer.
///
/// The pointer stays valid until the enclosing autorelease pool drains,
/// which covers any `msg_send!` made in the same run loop pass.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::autorelease_ptr(ns) as id
}

/// Copy an NSString into a Rust `String`. `None` for nil.
///
/// # Safety
/// `s` must be nil or a valid NSString.
pub unsafe fn string_from_nsstring(s: id) -> Option<String> {
    if s == nil {
        return None;
    }
    let utf8: *const c_char = msg_send![s, UTF8String];
    if utf8.is_null() {
        return None;
    }
    Some(CStr::from_ptr(utf8).to_string_lossy().into_owned())
}

/// Get a class by name, panicking if not found.
///
/// Only used with AppKit/Foundation classes that always exist, or with
/// classes this crate registered at startup.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
