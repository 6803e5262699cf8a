//! macOS implementation using Cocoa/AppKit via objc2.
//!
//! This module contains all macOS-specific code:
//! - FFI bindings to Cocoa and Carbon
//! - UI components (overlay window, status menu, capture window, image chooser)
//! - Input handling (Carbon hotkey, NSEvent key monitor, termination observer)
//! - Storage (NSUserDefaults persistence)
//! - The event dispatcher that feeds the coordinator

pub mod app;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod storage;
pub mod ui;

pub use app::{MacPlatform, MacShell};
pub use ffi::bridge;
