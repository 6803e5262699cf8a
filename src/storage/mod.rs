//! Settings persistence.
//!
//! [`SettingsStore`] is a typed key/value store (NSUserDefaults on macOS).
//! The functions here decide what is read on launch and what is written on
//! every change; they never fail, persistence is best effort.

use std::path::PathBuf;

use tracing::info;

use crate::model::constants::*;
use crate::model::{HotkeyBinding, Modifiers, OverlayConfig};

/// Typed key/value persistence.
pub trait SettingsStore {
    fn get_bool(&self, key: &str) -> Option<bool>;
    fn set_bool(&mut self, key: &str, value: bool);
    fn get_f64(&self, key: &str) -> Option<f64>;
    fn set_f64(&mut self, key: &str, value: f64);
    fn get_u32(&self, key: &str) -> Option<u32>;
    fn set_u32(&mut self, key: &str, value: u32);
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: &str);
}

/// Everything restored at launch.
#[derive(Debug, Clone, PartialEq)]
pub struct StartupState {
    pub overlay: OverlayConfig,
    pub binding: HotkeyBinding,
    pub first_launch: bool,
}

/// Read the launch state, writing first-launch defaults when needed.
///
/// On first launch only the defaults are written and nothing else is read.
pub fn load_startup<S: SettingsStore + ?Sized>(store: &mut S) -> StartupState {
    if !store.get_bool(PREF_FIRST_LAUNCH).unwrap_or(false) {
        let overlay = OverlayConfig::default();
        store.set_bool(PREF_FIRST_LAUNCH, true);
        store.set_bool(PREF_OVERLAY_VISIBLE, overlay.visible);
        store.set_f64(PREF_OPACITY, overlay.opacity);
        store.set_f64(PREF_WIDTH_RATIO, overlay.width_ratio);
        info!("First launch: wrote default settings");
        return StartupState {
            overlay,
            binding: HotkeyBinding::default(),
            first_launch: true,
        };
    }

    let mut overlay = OverlayConfig::default();
    if let Some(opacity) = store.get_f64(PREF_OPACITY).filter(|v| *v > 0.0) {
        overlay.opacity = opacity;
    }
    if let Some(ratio) = store.get_f64(PREF_WIDTH_RATIO).filter(|v| *v > 0.0) {
        overlay.width_ratio = ratio;
    }
    overlay.visible = store.get_bool(PREF_OVERLAY_VISIBLE).unwrap_or(false);
    overlay.image_path = store
        .get_string(PREF_IMAGE_PATH)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);
    overlay.validate();

    StartupState {
        overlay,
        binding: load_binding(store).unwrap_or_default(),
        first_launch: false,
    }
}

/// Stored binding, trusted as-is. `None` when no key code was ever saved.
pub fn load_binding<S: SettingsStore + ?Sized>(store: &S) -> Option<HotkeyBinding> {
    let key_code = store.get_u32(PREF_HOTKEY_KEY_CODE)?;
    let modifiers = store.get_u32(PREF_HOTKEY_MODIFIERS).unwrap_or(0);
    Some(HotkeyBinding::new(
        key_code,
        Modifiers::from_bits_retain(modifiers),
    ))
}

/// Save visibility, opacity and width ratio.
pub fn save_overlay<S: SettingsStore + ?Sized>(store: &mut S, config: &OverlayConfig) {
    store.set_bool(PREF_OVERLAY_VISIBLE, config.visible);
    store.set_f64(PREF_OPACITY, config.opacity);
    store.set_f64(PREF_WIDTH_RATIO, config.width_ratio);
}

pub fn save_binding<S: SettingsStore + ?Sized>(store: &mut S, binding: HotkeyBinding) {
    store.set_u32(PREF_HOTKEY_KEY_CODE, binding.key_code);
    store.set_u32(PREF_HOTKEY_MODIFIERS, binding.modifiers.bits());
}

pub fn save_image_path<S: SettingsStore + ?Sized>(store: &mut S, path: &std::path::Path) {
    store.set_string(PREF_IMAGE_PATH, &path.to_string_lossy());
}
