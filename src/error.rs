//! Error types.
//!
//! None of these are fatal: each one ends up as transient status text in the
//! UI and leaves the previously persisted state intact.

use std::path::PathBuf;

use thiserror::Error;

/// Failures talking to the OS hotkey service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeyError {
    /// The OS declined the key reservation (usually already taken system-wide).
    #[error("Hotkey {label} could not be registered (status {status})")]
    RegistrationFailed { label: String, status: i32 },
    /// The process-wide hotkey event handler could not be installed.
    #[error("Failed to install hotkey event handler (status {0})")]
    HandlerInstallFailed(i32),
}

/// Recoverable capture-flow errors. The Display text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// Candidate binding lacks ⌘ and ⌃.
    #[error("Use ⌘ or ⌃ modifier")]
    Rejected,
    /// Save pressed with nothing captured.
    #[error("Please press a hotkey first")]
    Incomplete,
}

/// Overlay image could not be loaded. The prior image stays on screen.
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Failed to load image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Decoded fine, but the window could not take the bitmap.
    #[error("Overlay window rejected image {path}")]
    Display { path: PathBuf },
}
