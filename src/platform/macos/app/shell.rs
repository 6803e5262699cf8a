//! AppKit implementation of the coordinator's `Shell` seam.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::app::{Platform, Shell};
use crate::input::StatusMessage;
use crate::model::{MenuState, BUNDLED_IMAGE_NAME};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, string_from_nsstring, NSApp,
};
use crate::platform::macos::input::{CarbonHotkeys, LocalKeyMonitor};
use crate::platform::macos::storage::UserDefaultsStore;
use crate::platform::macos::ui::{
    run_image_picker, CaptureWindow, MacOverlayWindow, MainDisplay, StatusMenu,
};

/// Component types used on macOS.
pub struct MacPlatform;

impl Platform for MacPlatform {
    type Hotkeys = CarbonHotkeys;
    type Window = MacOverlayWindow;
    type Display = MainDisplay;
    type Settings = UserDefaultsStore;
    type Shell = MacShell;
}

pub struct MacShell {
    target: id,
    status_menu: StatusMenu,
    capture_window: Option<CaptureWindow>,
}

impl MacShell {
    /// # Safety
    /// Must be called from main thread. `target` must be the action target.
    pub unsafe fn new(target: id) -> Self {
        Self {
            target,
            status_menu: StatusMenu::install(),
            capture_window: None,
        }
    }
}

impl Shell for MacShell {
    type KeyGuard = LocalKeyMonitor;

    fn refresh_menu(&mut self, menu: &MenuState) {
        unsafe { self.status_menu.rebuild(self.target, menu) }
    }

    fn show_status(&mut self, status: Option<&StatusMessage>) {
        unsafe {
            self.status_menu
                .set_notice(status.map(|status| status.text.as_str()))
        }
    }

    fn choose_image(&mut self) -> Option<PathBuf> {
        unsafe { run_image_picker() }
    }

    fn open_capture_window(&mut self) {
        let target = self.target;
        let window = self
            .capture_window
            .get_or_insert_with(|| unsafe { CaptureWindow::create(target) });
        unsafe { window.show() }
    }

    fn close_capture_window(&mut self) {
        if let Some(window) = &self.capture_window {
            unsafe { window.close() }
        }
    }

    fn show_capture_feedback(&mut self, label: &str, status: Option<&StatusMessage>) {
        if let Some(window) = &self.capture_window {
            unsafe {
                window.set_hotkey_text(label);
                window.set_status(status);
            }
        }
    }

    fn intercept_keys(&mut self) -> LocalKeyMonitor {
        let window = self
            .capture_window
            .as_ref()
            .map_or(nil, CaptureWindow::window);
        if window == nil {
            warn!("Key monitor installed without a capture window");
        }
        unsafe { LocalKeyMonitor::install(window) }
    }

    fn bundled_image_path(&self) -> Option<PathBuf> {
        let name = Path::new(BUNDLED_IMAGE_NAME);
        let stem = name.file_stem()?.to_str()?;
        let ext = name.extension()?.to_str()?;
        unsafe {
            let bundle: id = msg_send![get_class("NSBundle"), mainBundle];
            let path: id = msg_send![
                bundle,
                pathForResource: nsstring_id(stem),
                ofType: nsstring_id(ext)
            ];
            let path = string_from_nsstring(path).map(PathBuf::from);
            if path.is_none() {
                debug!("No bundled {} resource", BUNDLED_IMAGE_NAME);
            }
            path
        }
    }

    fn terminate(&mut self) {
        unsafe {
            let _: () = msg_send![NSApp(), terminate: nil];
        }
    }
}
