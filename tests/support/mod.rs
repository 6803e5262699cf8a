//! In-memory fakes for every platform seam.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use sukasi::app::{Coordinator, Platform, PlatformParts, Shell};
use sukasi::error::HotkeyError;
use sukasi::events::EventBus;
use sukasi::input::{HotkeyBackend, StatusMessage};
use sukasi::model::{HotkeyBinding, MenuState};
use sukasi::overlay::{OverlayImage, OverlayWindow, PrimaryDisplay, Rect};
use sukasi::storage::SettingsStore;

/// Carbon's eventHotKeyExistsErr
pub const HOTKEY_EXISTS: i32 = -9878;

pub const DISPLAY: Rect = Rect::new(0.0, 0.0, 2000.0, 1200.0);

// === Settings ===

#[derive(Default)]
pub struct MemorySettings {
    pub bools: HashMap<String, bool>,
    pub floats: HashMap<String, f64>,
    pub ints: HashMap<String, u32>,
    pub strings: HashMap<String, String>,
}

impl MemorySettings {
    /// A store that has been through one launch already.
    pub fn launched() -> Self {
        let mut settings = Self::default();
        settings.set_bool(sukasi::model::PREF_FIRST_LAUNCH, true);
        settings
    }
}

impl SettingsStore for MemorySettings {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.bools.get(key).copied()
    }
    fn set_bool(&mut self, key: &str, value: bool) {
        self.bools.insert(key.to_string(), value);
    }
    fn get_f64(&self, key: &str) -> Option<f64> {
        self.floats.get(key).copied()
    }
    fn set_f64(&mut self, key: &str, value: f64) {
        self.floats.insert(key.to_string(), value);
    }
    fn get_u32(&self, key: &str) -> Option<u32> {
        self.ints.get(key).copied()
    }
    fn set_u32(&mut self, key: &str, value: u32) {
        self.ints.insert(key.to_string(), value);
    }
    fn get_string(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }
    fn set_string(&mut self, key: &str, value: &str) {
        self.strings.insert(key.to_string(), value.to_string());
    }
}

// === Hotkeys ===

#[derive(Default)]
pub struct FakeHotkeys {
    /// Combination currently reserved with the "OS".
    pub reserved: Option<HotkeyBinding>,
    /// Combinations the "OS" refuses.
    pub taken: Vec<HotkeyBinding>,
    pub reserve_calls: usize,
}

impl HotkeyBackend for FakeHotkeys {
    fn reserve(&mut self, binding: HotkeyBinding) -> Result<(), HotkeyError> {
        self.reserve_calls += 1;
        if self.taken.contains(&binding) {
            return Err(HotkeyError::RegistrationFailed {
                label: binding.label(),
                status: HOTKEY_EXISTS,
            });
        }
        self.reserved = Some(binding);
        Ok(())
    }

    fn release(&mut self) {
        self.reserved = None;
    }
}

// === Overlay window and display ===

#[derive(Default)]
pub struct FakeWindow {
    pub frame: Option<Rect>,
    pub alpha: f64,
    pub image_size: Option<(u32, u32)>,
    pub visible: bool,
    /// Refuse every bitmap, as a window that cannot build its image would.
    pub refuse_images: bool,
}

impl OverlayWindow for FakeWindow {
    fn set_frame(&mut self, frame: Rect) {
        self.frame = Some(frame);
    }
    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }
    fn set_image(&mut self, image: &OverlayImage) -> bool {
        if self.refuse_images {
            return false;
        }
        self.image_size = Some((image.width(), image.height()));
        true
    }
    fn order_front(&mut self) {
        self.visible = true;
    }
    fn order_out(&mut self) {
        self.visible = false;
    }
    fn is_visible(&self) -> bool {
        self.visible
    }
}

pub struct FakeDisplay(pub Option<Rect>);

impl PrimaryDisplay for FakeDisplay {
    fn frame(&self) -> Option<Rect> {
        self.0
    }
}

// === Shell ===

/// Counts live interceptors through a shared counter.
pub struct FakeGuard(Rc<Cell<usize>>);

impl Drop for FakeGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

#[derive(Default)]
pub struct FakeShell {
    pub menus: Vec<MenuState>,
    /// Answer of the next image chooser run.
    pub next_image: Option<PathBuf>,
    pub bundled_image: Option<PathBuf>,
    pub capture_open: bool,
    pub capture_label: String,
    pub capture_status: Option<StatusMessage>,
    /// Transient status shown next to the status item.
    pub status: Option<StatusMessage>,
    pub status_updates: usize,
    pub live_guards: Rc<Cell<usize>>,
    pub guards_installed: usize,
    pub terminated: bool,
}

impl FakeShell {
    pub fn last_menu(&self) -> MenuState {
        *self.menus.last().expect("menu was never built")
    }
}

impl Shell for FakeShell {
    type KeyGuard = FakeGuard;

    fn refresh_menu(&mut self, menu: &MenuState) {
        self.menus.push(*menu);
    }

    fn show_status(&mut self, status: Option<&StatusMessage>) {
        self.status = status.cloned();
        self.status_updates += 1;
    }

    fn choose_image(&mut self) -> Option<PathBuf> {
        self.next_image.take()
    }

    fn open_capture_window(&mut self) {
        self.capture_open = true;
    }

    fn close_capture_window(&mut self) {
        self.capture_open = false;
    }

    fn show_capture_feedback(&mut self, label: &str, status: Option<&StatusMessage>) {
        self.capture_label = label.to_string();
        self.capture_status = status.cloned();
    }

    fn intercept_keys(&mut self) -> FakeGuard {
        self.live_guards.set(self.live_guards.get() + 1);
        self.guards_installed += 1;
        FakeGuard(Rc::clone(&self.live_guards))
    }

    fn bundled_image_path(&self) -> Option<PathBuf> {
        self.bundled_image.clone()
    }

    fn terminate(&mut self) {
        self.terminated = true;
    }
}

// === Platform ===

pub struct TestPlatform;

impl Platform for TestPlatform {
    type Hotkeys = FakeHotkeys;
    type Window = FakeWindow;
    type Display = FakeDisplay;
    type Settings = MemorySettings;
    type Shell = FakeShell;
}

pub struct Harness {
    pub coordinator: Coordinator<TestPlatform>,
    pub bus: EventBus,
}

impl Harness {
    pub fn new(settings: MemorySettings) -> Self {
        Self::build(settings, FakeHotkeys::default(), FakeShell::default())
    }

    pub fn build(settings: MemorySettings, hotkeys: FakeHotkeys, shell: FakeShell) -> Self {
        Self::with_window(settings, hotkeys, shell, FakeWindow::default())
    }

    pub fn with_window(
        settings: MemorySettings,
        hotkeys: FakeHotkeys,
        shell: FakeShell,
        window: FakeWindow,
    ) -> Self {
        let bus = EventBus::new();
        let parts = PlatformParts::<TestPlatform> {
            hotkeys,
            window,
            display: FakeDisplay(Some(DISPLAY)),
            settings,
            shell,
        };
        let coordinator = Coordinator::new(parts, bus.publisher());
        Self { coordinator, bus }
    }

    /// Feed every event published since the last call back into the coordinator.
    pub fn pump(&mut self) {
        for event in self.bus.drain() {
            self.coordinator.handle(event);
        }
    }

    pub fn window(&self) -> &FakeWindow {
        self.coordinator.overlay().window()
    }

    pub fn shell(&self) -> &FakeShell {
        self.coordinator.shell()
    }

    pub fn settings(&self) -> &MemorySettings {
        self.coordinator.settings()
    }
}

/// Write a small PNG and return its path.
pub fn write_png(dir: &std::path::Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::RgbaImage::new(width, height)
        .save(&path)
        .expect("write png fixture");
    path
}
