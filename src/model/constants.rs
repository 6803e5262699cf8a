//! Configuration constants and default values.
//!
//! This module contains all application constants including overlay defaults,
//! NSUserDefaults keys, validation limits and the status menu options.

use super::binding::Modifiers;
use crate::input::keys::KC_H;

// === Overlay Defaults ===

/// Default overlay opacity on first launch.
pub const DEFAULT_OPACITY: f64 = 0.35;

/// Default width ratio (1.0 = full primary display width).
pub const DEFAULT_WIDTH_RATIO: f64 = 1.0;

/// Default hotkey key code (ANSI `H`).
pub const DEFAULT_HOTKEY_KEY_CODE: u32 = KC_H;

/// Default hotkey modifiers (⌥⌘).
pub const DEFAULT_HOTKEY_MODIFIERS: Modifiers = Modifiers::OPTION.union(Modifiers::COMMAND);

// === NSUserDefaults Keys ===

/// Key for overlay visibility.
pub const PREF_OVERLAY_VISIBLE: &str = "overlayVisible";

/// Key for overlay opacity.
pub const PREF_OPACITY: &str = "opacity";

/// Key for overlay width ratio.
pub const PREF_WIDTH_RATIO: &str = "widthRatio";

/// Key for the last successfully loaded image path.
pub const PREF_IMAGE_PATH: &str = "imagePath";

/// Key for the bound hotkey key code.
pub const PREF_HOTKEY_KEY_CODE: &str = "hotkeyKeyCode";

/// Key for the bound hotkey modifier mask (Carbon layout).
pub const PREF_HOTKEY_MODIFIERS: &str = "hotkeyModifiers";

/// Key set once the first-launch defaults have been written.
pub const PREF_FIRST_LAUNCH: &str = "firstLaunch";

// === Validation Limits ===

/// Lowest opacity ever applied to the window.
pub const MIN_OPACITY: f64 = 0.05;

/// Highest opacity.
pub const MAX_OPACITY: f64 = 1.0;

/// Narrowest overlay, as a fraction of the display width.
pub const MIN_WIDTH_RATIO: f64 = 0.05;

/// Widest overlay.
pub const MAX_WIDTH_RATIO: f64 = 1.0;

// === Status Menu ===

/// Opacity submenu entries as (label, value).
pub const OPACITY_OPTIONS: [(&str, f64); 6] = [
    ("10%", 0.10),
    ("20%", 0.20),
    ("35%", 0.35),
    ("50%", 0.50),
    ("70%", 0.70),
    ("90%", 0.90),
];

/// Width submenu entries as (label, value).
pub const WIDTH_OPTIONS: [(&str, f64); 4] = [
    ("25%", 0.25),
    ("50%", 0.50),
    ("75%", 0.75),
    ("100%", 1.00),
];

/// Two menu values closer than this are considered the same option.
pub const OPTION_TOLERANCE: f64 = 0.01;

/// Image file extensions accepted by the image chooser.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "tiff", "bmp"];

/// Resource name of the image shipped inside the app bundle.
pub const BUNDLED_IMAGE_NAME: &str = "default_overlay.png";
