//! Sukasi: a see-through reference image floating above every window,
//! toggled by a global hotkey.
//!
//! Everything outside `platform` is pure Rust with no FFI, so the core
//! (hotkey registry, capture state machine, overlay presentation,
//! settings restore) builds and tests on any host.

pub mod app;
pub mod error;
pub mod events;
pub mod input;
pub mod logging;
pub mod model;
pub mod overlay;
pub mod storage;

#[cfg(target_os = "macos")]
pub mod platform;

pub use app::{Coordinator, Platform, PlatformParts, Shell};
pub use error::{CaptureError, HotkeyError, ImageLoadError};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{HotkeyBinding, Modifiers, OverlayConfig};

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
