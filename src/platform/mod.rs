//! Platform-specific implementations.
//!
//! Each platform provides the concrete types behind the core's seams:
//! - FFI bindings
//! - UI components (overlay window, status menu, capture window)
//! - Input handling (global hotkey, key interceptor)
//! - Storage (preferences persistence)

#[cfg(target_os = "macos")]
pub mod macos;
