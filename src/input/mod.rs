//! Input handling module.
//!
//! This module contains the platform-independent input logic:
//! - keys.rs: key code / modifier translation and labels
//! - registry.rs: the global hotkey registry
//! - capture.rs: the "record a new hotkey" state machine

pub mod capture;
pub mod keys;
pub mod registry;

pub use capture::{CaptureState, KeyCaptureSession, StatusMessage, StatusTone};
pub use keys::{label, modifiers_from_platform_flags};
pub use registry::{FireCallback, HotkeyBackend, HotkeyRegistry};
