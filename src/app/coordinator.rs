//! Application coordinator.
//!
//! Owns every component and routes [`AppEvent`]s to them on the main thread.
//! Construction happens in one phase, in dependency order:
//!
//! ```text
//! settings → overlay (+ image) → hotkey registry (+ fire callback) → capture session → menu
//! ```

use tracing::{debug, info, warn};

use super::shell::{Platform, PlatformParts, Shell};
use crate::events::{AppEvent, EventPublisher};
use crate::input::{HotkeyRegistry, KeyCaptureSession, StatusMessage, StatusTone};
use crate::model::menu::fraction_from_tag;
use crate::model::MenuState;
use crate::overlay::OverlayPresentation;
use crate::storage;

type KeyGuard<P> = <<P as Platform>::Shell as Shell>::KeyGuard;

pub struct Coordinator<P: Platform> {
    settings: P::Settings,
    overlay: OverlayPresentation<P::Window, P::Display>,
    registry: HotkeyRegistry<P::Hotkeys>,
    capture: KeyCaptureSession<KeyGuard<P>>,
    shell: P::Shell,
    shut_down: bool,
}

impl<P: Platform> Coordinator<P> {
    /// Restore the saved state and bring every component up.
    ///
    /// `publisher` is captured by the hotkey fire callback, which turns a
    /// press into [`AppEvent::ToggleOverlay`].
    pub fn new(parts: PlatformParts<P>, publisher: EventPublisher) -> Self {
        let PlatformParts {
            hotkeys,
            window,
            display,
            mut settings,
            shell,
        } = parts;

        let startup = storage::load_startup(&mut settings);

        let mut overlay = OverlayPresentation::new(window, display);
        overlay.set_opacity(startup.overlay.opacity);
        overlay.set_width_ratio(startup.overlay.width_ratio);
        let image_path = startup
            .overlay
            .image_path
            .filter(|path| path.exists())
            .or_else(|| shell.bundled_image_path());
        let mut notice = None;
        if let Some(path) = image_path {
            if let Err(err) = overlay.load_image(&path) {
                warn!("{}", err);
                notice = Some(StatusMessage::new(err.to_string(), StatusTone::Error));
            }
        }
        if startup.overlay.visible {
            overlay.show();
        }

        let mut registry = HotkeyRegistry::new(hotkeys);
        registry.on_fire(Box::new(move || publisher.publish(AppEvent::ToggleOverlay)));
        if let Err(err) = registry.register(startup.binding) {
            warn!("Continuing without a global hotkey");
            notice = Some(StatusMessage::new(err.to_string(), StatusTone::Error));
        }

        let mut coordinator = Self {
            settings,
            overlay,
            registry,
            capture: KeyCaptureSession::new(),
            shell,
            shut_down: false,
        };
        coordinator.refresh_menu();
        if notice.is_some() {
            coordinator.shell.show_status(notice.as_ref());
        }
        info!(
            "Started (first launch: {}, visible: {})",
            startup.first_launch,
            coordinator.overlay.is_visible()
        );
        coordinator
    }

    pub fn handle(&mut self, event: AppEvent) {
        debug!("Handling event: {}", event.description());

        match event {
            AppEvent::HotkeyPressed => self.registry.fire(),
            AppEvent::CaptureKeyDown { key_code, flags } => self.capture_key_down(key_code, flags),
            AppEvent::ToggleOverlay => self.toggle_overlay(),
            AppEvent::SetOpacityPercent(tag) => self.set_opacity(fraction_from_tag(tag)),
            AppEvent::SetWidthPercent(tag) => self.set_width_ratio(fraction_from_tag(tag)),
            AppEvent::ChooseImage => self.choose_image(),
            AppEvent::OpenHotkeyCapture => self.open_capture_ui(),
            AppEvent::SaveHotkey => self.save_hotkey(),
            AppEvent::CancelHotkey => self.cancel_capture(),
            AppEvent::Quit => {
                self.shutdown();
                self.shell.terminate();
            }
        }
    }

    pub fn toggle_overlay(&mut self) {
        self.overlay.toggle();
        self.overlay_changed();
    }

    pub fn set_opacity(&mut self, value: f64) {
        self.overlay.set_opacity(value);
        self.overlay_changed();
    }

    pub fn set_width_ratio(&mut self, value: f64) {
        self.overlay.set_width_ratio(value);
        self.overlay_changed();
    }

    /// Run the chooser and load the picked file. The path is saved only
    /// when the image decoded and the window took it.
    pub fn choose_image(&mut self) {
        let Some(path) = self.shell.choose_image() else {
            debug!("Image chooser cancelled");
            return;
        };
        match self.overlay.load_image(&path) {
            Ok(()) => {
                storage::save_image_path(&mut self.settings, &path);
                self.shell.show_status(None);
            }
            Err(err) => {
                warn!("{}", err);
                let status = StatusMessage::new(err.to_string(), StatusTone::Error);
                self.shell.show_status(Some(&status));
            }
        }
    }

    /// Show the capture window and start listening.
    pub fn open_capture_ui(&mut self) {
        self.shell.open_capture_window();
        self.begin_capture();
        self.update_capture_feedback();
    }

    fn begin_capture(&mut self) {
        let shell = &mut self.shell;
        self.capture.begin(|| shell.intercept_keys());
    }

    pub fn capture_key_down(&mut self, key_code: u32, flags: u64) {
        if !self.capture.is_listening() {
            return;
        }
        self.capture.key_down(key_code, flags);
        self.update_capture_feedback();
    }

    /// Commit the captured binding and register it.
    ///
    /// If the OS refuses it, the binding that was live before is registered
    /// again, nothing is persisted and the window keeps listening with the
    /// error on its status line.
    pub fn save_hotkey(&mut self) {
        let binding = match self.capture.commit() {
            Ok(binding) => binding,
            Err(err) => {
                debug!("Save refused: {}", err);
                self.update_capture_feedback();
                return;
            }
        };

        let previous = self
            .registry
            .current()
            .filter(|_| self.registry.is_registered());

        match self.registry.register(binding) {
            Ok(()) => {
                storage::save_binding(&mut self.settings, binding);
                self.shell.close_capture_window();
                self.shell.show_status(None);
            }
            Err(err) => {
                if let Some(previous) = previous {
                    if let Err(restore_err) = self.registry.register(previous) {
                        warn!("Could not restore previous hotkey: {}", restore_err);
                    }
                }
                self.begin_capture();
                self.capture
                    .set_status(StatusMessage::new(err.to_string(), StatusTone::Error));
                self.update_capture_feedback();
            }
        }
    }

    pub fn cancel_capture(&mut self) {
        self.capture.cancel();
        self.shell.close_capture_window();
    }

    /// The capture window is closing by other means (close button).
    pub fn capture_window_closed(&mut self) {
        self.capture.cancel();
    }

    /// Save overlay state and release the OS hotkey. Runs once.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.capture.cancel();
        storage::save_overlay(&mut self.settings, &self.overlay.config());
        self.registry.unregister();
        info!("Saved state and released hotkey");
    }

    pub fn menu_state(&self) -> MenuState {
        MenuState {
            visible: self.overlay.is_visible(),
            opacity: self.overlay.opacity(),
            width_ratio: self.overlay.width_ratio(),
        }
    }

    fn overlay_changed(&mut self) {
        storage::save_overlay(&mut self.settings, &self.overlay.config());
        self.refresh_menu();
    }

    fn refresh_menu(&mut self) {
        let menu = self.menu_state();
        self.shell.refresh_menu(&menu);
    }

    fn update_capture_feedback(&mut self) {
        let label = self.capture.display_label(self.registry.current());
        self.shell.show_capture_feedback(&label, self.capture.status());
    }

    pub fn overlay(&self) -> &OverlayPresentation<P::Window, P::Display> {
        &self.overlay
    }

    pub fn registry(&self) -> &HotkeyRegistry<P::Hotkeys> {
        &self.registry
    }

    pub fn capture(&self) -> &KeyCaptureSession<KeyGuard<P>> {
        &self.capture
    }

    pub fn settings(&self) -> &P::Settings {
        &self.settings
    }

    pub fn shell(&self) -> &P::Shell {
        &self.shell
    }
}

impl<P: Platform> Drop for Coordinator<P> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
