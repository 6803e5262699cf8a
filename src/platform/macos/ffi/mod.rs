//! FFI bindings for macOS frameworks.
//!
//! - bridge.rs: objc2 aliases and runtime helpers
//! - carbon.rs: Carbon Event Manager (global hotkey)

pub mod bridge;
pub mod carbon;

pub use carbon::*;
