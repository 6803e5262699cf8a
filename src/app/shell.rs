//! Platform seams used by the coordinator.

use std::path::PathBuf;

use crate::input::{HotkeyBackend, StatusMessage};
use crate::model::MenuState;
use crate::overlay::{OverlayWindow, PrimaryDisplay};
use crate::storage::SettingsStore;

/// UI glue around the core: status menu, image chooser, capture window,
/// application lifecycle.
pub trait Shell {
    /// Installed key interceptor. Dropping it removes the interceptor.
    type KeyGuard;

    /// Rebuild titles and check-marks of the status menu.
    fn refresh_menu(&mut self, menu: &MenuState);

    /// Surface a transient error next to the status item. `None` clears it.
    fn show_status(&mut self, status: Option<&StatusMessage>);

    /// Run the image chooser. `None` when the user cancels.
    fn choose_image(&mut self) -> Option<PathBuf>;

    fn open_capture_window(&mut self);

    fn close_capture_window(&mut self);

    /// Update the hotkey field and the status line of the capture window.
    fn show_capture_feedback(&mut self, label: &str, status: Option<&StatusMessage>);

    /// Start consuming key-downs aimed at the capture window.
    fn intercept_keys(&mut self) -> Self::KeyGuard;

    /// Image shipped with the application, if present.
    fn bundled_image_path(&self) -> Option<PathBuf>;

    fn terminate(&mut self);
}

/// Concrete component types of one platform.
pub trait Platform {
    type Hotkeys: HotkeyBackend;
    type Window: OverlayWindow;
    type Display: PrimaryDisplay;
    type Settings: SettingsStore;
    type Shell: Shell;
}

/// Already-constructed platform objects handed to the coordinator.
pub struct PlatformParts<P: Platform> {
    pub hotkeys: P::Hotkeys,
    pub window: P::Window,
    pub display: P::Display,
    pub settings: P::Settings,
    pub shell: P::Shell,
}
