//! Application events for inter-module communication.
//!
//! These events represent high-level application actions that can be
//! published by any module and handled by the coordinator on the main loop.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (Carbon hotkey handler, status menu, capture
/// window, key interceptor) through the EventBus to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Input Events ===
    /// The OS reported a press of the registered global hotkey.
    HotkeyPressed,

    /// Key-down seen by the capture window's interceptor.
    CaptureKeyDown { key_code: u32, flags: u64 },

    // === Menu Events ===
    /// Show or hide the overlay.
    ToggleOverlay,

    /// Set overlay opacity, in whole percent.
    SetOpacityPercent(u32),

    /// Set overlay width ratio, in whole percent.
    SetWidthPercent(u32),

    /// Run the image chooser.
    ChooseImage,

    /// Open the hotkey capture window.
    OpenHotkeyCapture,

    /// Quit the application.
    Quit,

    // === Capture Window Events ===
    /// Save button pressed.
    SaveHotkey,

    /// Cancel button pressed.
    CancelHotkey,
}

impl AppEvent {
    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::HotkeyPressed => "Global hotkey pressed",
            AppEvent::CaptureKeyDown { .. } => "Key pressed in capture window",
            AppEvent::ToggleOverlay => "Toggle overlay visibility",
            AppEvent::SetOpacityPercent(_) => "Set overlay opacity",
            AppEvent::SetWidthPercent(_) => "Set overlay width",
            AppEvent::ChooseImage => "Choose overlay image",
            AppEvent::OpenHotkeyCapture => "Open hotkey window",
            AppEvent::Quit => "Quit application",
            AppEvent::SaveHotkey => "Save captured hotkey",
            AppEvent::CancelHotkey => "Cancel hotkey capture",
        }
    }
}
