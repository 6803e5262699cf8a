//! Hotkey binding model (pure Rust, no FFI).
//!
//! Modifier bits use the Carbon Event Manager layout so a mask can be handed
//! to `RegisterEventHotKey` and stored in NSUserDefaults unchanged.

use std::fmt;
use std::ops::BitOr;

use super::constants::{DEFAULT_HOTKEY_KEY_CODE, DEFAULT_HOTKEY_MODIFIERS};
use crate::input::keys::label;

/// Modifier key mask in Carbon layout (`cmdKey`, `shiftKey`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u32);

impl Modifiers {
    /// No modifiers.
    pub const NONE: Modifiers = Modifiers(0);
    /// ⌘ (`cmdKey`).
    pub const COMMAND: Modifiers = Modifiers(1 << 8);
    /// ⇧ (`shiftKey`).
    pub const SHIFT: Modifiers = Modifiers(1 << 9);
    /// ⌥ (`optionKey`).
    pub const OPTION: Modifiers = Modifiers(1 << 11);
    /// ⌃ (`controlKey`).
    pub const CONTROL: Modifiers = Modifiers(1 << 12);

    /// Raw Carbon mask.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build from a raw mask as stored, keeping every bit.
    ///
    /// Restored bindings are trusted as-is.
    pub const fn from_bits_retain(bits: u32) -> Self {
        Modifiers(bits)
    }

    pub const fn union(self, other: Modifiers) -> Self {
        Modifiers(self.0 | other.0)
    }

    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    /// A committed binding needs ⌘ or ⌃ so it can't swallow plain typing.
    pub const fn has_command_or_control(self) -> bool {
        self.contains(Self::COMMAND) || self.contains(Self::CONTROL)
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        self.union(rhs)
    }
}

/// The key combination listened for system-wide.
///
/// Replaced wholesale on rebind, never mutated field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotkeyBinding {
    pub key_code: u32,
    pub modifiers: Modifiers,
}

impl HotkeyBinding {
    pub const fn new(key_code: u32, modifiers: Modifiers) -> Self {
        Self {
            key_code,
            modifiers,
        }
    }

    /// Human-readable label such as `⌥⌘H`.
    pub fn label(&self) -> String {
        label(self.key_code, self.modifiers)
    }
}

impl Default for HotkeyBinding {
    /// ⌥⌘H
    fn default() -> Self {
        Self::new(DEFAULT_HOTKEY_KEY_CODE, DEFAULT_HOTKEY_MODIFIERS)
    }
}

impl fmt::Display for HotkeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
