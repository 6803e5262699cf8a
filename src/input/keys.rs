//! Key event translation.
//!
//! Maps raw macOS virtual key codes and `NSEvent` modifier flags to the
//! Carbon modifier mask and a display label such as `⌃⇧F5`. Pure and total:
//! unknown key codes render as `?`, unknown flag bits are ignored.

use crate::model::Modifiers;

// ANSI virtual key codes (kVK_*)
pub const KC_A: u32 = 0x00;
pub const KC_S: u32 = 0x01;
pub const KC_D: u32 = 0x02;
pub const KC_F: u32 = 0x03;
pub const KC_H: u32 = 0x04;
pub const KC_G: u32 = 0x05;
pub const KC_Z: u32 = 0x06;
pub const KC_X: u32 = 0x07;
pub const KC_C: u32 = 0x08;
pub const KC_V: u32 = 0x09;
pub const KC_B: u32 = 0x0B;
pub const KC_Q: u32 = 0x0C;
pub const KC_W: u32 = 0x0D;
pub const KC_E: u32 = 0x0E;
pub const KC_R: u32 = 0x0F;
pub const KC_Y: u32 = 0x10;
pub const KC_T: u32 = 0x11;
pub const KC_1: u32 = 0x12;
pub const KC_2: u32 = 0x13;
pub const KC_3: u32 = 0x14;
pub const KC_4: u32 = 0x15;
pub const KC_6: u32 = 0x16;
pub const KC_5: u32 = 0x17;
pub const KC_9: u32 = 0x19;
pub const KC_7: u32 = 0x1A;
pub const KC_8: u32 = 0x1C;
pub const KC_0: u32 = 0x1D;
pub const KC_O: u32 = 0x1F;
pub const KC_U: u32 = 0x20;
pub const KC_I: u32 = 0x22;
pub const KC_P: u32 = 0x23;
pub const KC_L: u32 = 0x25;
pub const KC_J: u32 = 0x26;
pub const KC_K: u32 = 0x28;
pub const KC_N: u32 = 0x2D;
pub const KC_M: u32 = 0x2E;

// Layout-independent keys
pub const KC_RETURN: u32 = 0x24;
pub const KC_TAB: u32 = 0x30;
pub const KC_SPACE: u32 = 0x31;
pub const KC_DELETE: u32 = 0x33;
pub const KC_ESCAPE: u32 = 0x35;
pub const KC_F5: u32 = 0x60;
pub const KC_F6: u32 = 0x61;
pub const KC_F7: u32 = 0x62;
pub const KC_F3: u32 = 0x63;
pub const KC_F8: u32 = 0x64;
pub const KC_F9: u32 = 0x65;
pub const KC_F11: u32 = 0x67;
pub const KC_F10: u32 = 0x6D;
pub const KC_F12: u32 = 0x6F;
pub const KC_HOME: u32 = 0x73;
pub const KC_PAGE_UP: u32 = 0x74;
pub const KC_FORWARD_DELETE: u32 = 0x75;
pub const KC_F4: u32 = 0x76;
pub const KC_END: u32 = 0x77;
pub const KC_F2: u32 = 0x78;
pub const KC_PAGE_DOWN: u32 = 0x79;
pub const KC_F1: u32 = 0x7A;
pub const KC_LEFT_ARROW: u32 = 0x7B;
pub const KC_RIGHT_ARROW: u32 = 0x7C;
pub const KC_DOWN_ARROW: u32 = 0x7D;
pub const KC_UP_ARROW: u32 = 0x7E;

// NSEventModifierFlags
pub const NS_FLAG_SHIFT: u64 = 1 << 17;
pub const NS_FLAG_CONTROL: u64 = 1 << 18;
pub const NS_FLAG_OPTION: u64 = 1 << 19;
pub const NS_FLAG_COMMAND: u64 = 1 << 20;

/// Glyph shown for an unmapped key code.
pub const UNKNOWN_KEY: &str = "?";

const KEY_GLYPHS: &[(u32, &str)] = &[
    (KC_A, "A"),
    (KC_B, "B"),
    (KC_C, "C"),
    (KC_D, "D"),
    (KC_E, "E"),
    (KC_F, "F"),
    (KC_G, "G"),
    (KC_H, "H"),
    (KC_I, "I"),
    (KC_J, "J"),
    (KC_K, "K"),
    (KC_L, "L"),
    (KC_M, "M"),
    (KC_N, "N"),
    (KC_O, "O"),
    (KC_P, "P"),
    (KC_Q, "Q"),
    (KC_R, "R"),
    (KC_S, "S"),
    (KC_T, "T"),
    (KC_U, "U"),
    (KC_V, "V"),
    (KC_W, "W"),
    (KC_X, "X"),
    (KC_Y, "Y"),
    (KC_Z, "Z"),
    (KC_0, "0"),
    (KC_1, "1"),
    (KC_2, "2"),
    (KC_3, "3"),
    (KC_4, "4"),
    (KC_5, "5"),
    (KC_6, "6"),
    (KC_7, "7"),
    (KC_8, "8"),
    (KC_9, "9"),
    (KC_SPACE, "Space"),
    (KC_RETURN, "↩"),
    (KC_TAB, "⇥"),
    (KC_ESCAPE, "⎋"),
    (KC_DELETE, "⌫"),
    (KC_FORWARD_DELETE, "⌦"),
    (KC_HOME, "↖"),
    (KC_END, "↘"),
    (KC_PAGE_UP, "⇞"),
    (KC_PAGE_DOWN, "⇟"),
    (KC_LEFT_ARROW, "←"),
    (KC_RIGHT_ARROW, "→"),
    (KC_UP_ARROW, "↑"),
    (KC_DOWN_ARROW, "↓"),
    (KC_F1, "F1"),
    (KC_F2, "F2"),
    (KC_F3, "F3"),
    (KC_F4, "F4"),
    (KC_F5, "F5"),
    (KC_F6, "F6"),
    (KC_F7, "F7"),
    (KC_F8, "F8"),
    (KC_F9, "F9"),
    (KC_F10, "F10"),
    (KC_F11, "F11"),
    (KC_F12, "F12"),
];

/// Every key code that has a glyph.
pub fn supported_key_codes() -> impl Iterator<Item = u32> {
    KEY_GLYPHS.iter().map(|&(code, _)| code)
}

/// Translate `NSEvent.modifierFlags` into a Carbon modifier mask.
pub fn modifiers_from_platform_flags(flags: u64) -> Modifiers {
    let mut mods = Modifiers::NONE;
    if flags & NS_FLAG_COMMAND != 0 {
        mods = mods | Modifiers::COMMAND;
    }
    if flags & NS_FLAG_OPTION != 0 {
        mods = mods | Modifiers::OPTION;
    }
    if flags & NS_FLAG_CONTROL != 0 {
        mods = mods | Modifiers::CONTROL;
    }
    if flags & NS_FLAG_SHIFT != 0 {
        mods = mods | Modifiers::SHIFT;
    }
    mods
}

/// Display glyph for a single key.
pub fn key_glyph(key_code: u32) -> &'static str {
    KEY_GLYPHS
        .iter()
        .find(|&&(code, _)| code == key_code)
        .map(|&(_, glyph)| glyph)
        .unwrap_or(UNKNOWN_KEY)
}

/// Label in the standard macOS order: ⌃ ⌥ ⇧ ⌘ then the key.
pub fn label(key_code: u32, modifiers: Modifiers) -> String {
    let mut out = String::new();
    if modifiers.contains(Modifiers::CONTROL) {
        out.push('⌃');
    }
    if modifiers.contains(Modifiers::OPTION) {
        out.push('⌥');
    }
    if modifiers.contains(Modifiers::SHIFT) {
        out.push('⇧');
    }
    if modifiers.contains(Modifiers::COMMAND) {
        out.push('⌘');
    }
    out.push_str(key_glyph(key_code));
    out
}
