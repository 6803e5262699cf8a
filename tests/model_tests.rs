//! Tests for the model layer (OverlayConfig, HotkeyBinding, MenuState).
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation. This is clearer than struct update syntax.
#![allow(clippy::field_reassign_with_default)]

use sukasi::input::keys::*;
use sukasi::model::constants::*;
use sukasi::model::menu::{fraction_from_tag, is_selected, percent_tag};
use sukasi::model::{HotkeyBinding, MenuState, Modifiers, OverlayConfig};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Default Values Tests ===

#[test]
fn overlay_config_default_opacity() {
    let config = OverlayConfig::default();
    assert!(approx_eq(config.opacity, 0.35));
}

#[test]
fn overlay_config_default_full_width() {
    let config = OverlayConfig::default();
    assert!(approx_eq(config.width_ratio, 1.0));
}

#[test]
fn overlay_config_default_hidden_without_image() {
    let config = OverlayConfig::default();
    assert!(!config.visible);
    assert!(config.image_path.is_none());
}

// === Validation Tests ===

#[test]
fn validate_clamps_opacity_below_minimum() {
    let mut config = OverlayConfig::default();
    config.opacity = 0.0;
    config.validate();
    assert!(approx_eq(config.opacity, MIN_OPACITY));
}

#[test]
fn validate_clamps_opacity_above_maximum() {
    let mut config = OverlayConfig::default();
    config.opacity = 4.0;
    config.validate();
    assert!(approx_eq(config.opacity, MAX_OPACITY));
}

#[test]
fn validate_clamps_width_ratio() {
    let mut config = OverlayConfig::default();
    config.width_ratio = -1.0;
    config.validate();
    assert!(approx_eq(config.width_ratio, MIN_WIDTH_RATIO));

    config.width_ratio = 1.2;
    config.validate();
    assert!(approx_eq(config.width_ratio, MAX_WIDTH_RATIO));
}

#[test]
fn validate_keeps_values_in_range() {
    let mut config = OverlayConfig::default();
    config.opacity = 0.7;
    config.width_ratio = 0.5;
    config.validate();
    assert!(approx_eq(config.opacity, 0.7));
    assert!(approx_eq(config.width_ratio, 0.5));
}

#[test]
fn validate_leaves_visibility_and_path_alone() {
    let mut config = OverlayConfig::default();
    config.visible = true;
    config.image_path = Some("/tmp/ref.png".into());
    let before = config.clone();
    config.validate();
    assert_eq!(config, before);
}

// === Hotkey Binding Tests ===

#[test]
fn default_binding_label() {
    assert_eq!(HotkeyBinding::default().label(), "⌥⌘H");
}

#[test]
fn label_uses_standard_modifier_order() {
    let all = Modifiers::COMMAND | Modifiers::SHIFT | Modifiers::OPTION | Modifiers::CONTROL;
    assert_eq!(label(KC_K, all), "⌃⌥⇧⌘K");
}

#[test]
fn label_for_named_keys() {
    assert_eq!(label(KC_SPACE, Modifiers::CONTROL), "⌃Space");
    assert_eq!(label(KC_F5, Modifiers::COMMAND), "⌘F5");
}

#[test]
fn every_supported_key_has_a_glyph() {
    for code in supported_key_codes() {
        let glyph = key_glyph(code);
        assert!(!glyph.is_empty());
        assert_ne!(glyph, UNKNOWN_KEY, "key code {code}");
    }
}

#[test]
fn unknown_key_code_gets_placeholder() {
    assert_eq!(key_glyph(0xFF), UNKNOWN_KEY);
    assert_eq!(label(0xFF, Modifiers::COMMAND), "⌘?");
}

#[test]
fn labels_are_deterministic() {
    let binding = HotkeyBinding::new(KC_A, Modifiers::CONTROL | Modifiers::SHIFT);
    assert_eq!(binding.label(), binding.label());
    assert_eq!(binding.to_string(), binding.label());
}

#[test]
fn platform_flags_map_to_carbon_modifiers() {
    let mods = modifiers_from_platform_flags(NS_FLAG_COMMAND | NS_FLAG_OPTION);
    assert_eq!(mods, Modifiers::COMMAND | Modifiers::OPTION);
    assert_eq!(modifiers_from_platform_flags(0), Modifiers::NONE);
    assert!(!modifiers_from_platform_flags(NS_FLAG_SHIFT | NS_FLAG_OPTION).has_command_or_control());
    assert!(modifiers_from_platform_flags(NS_FLAG_CONTROL).has_command_or_control());
}

// === Menu Tests ===

#[test]
fn menu_lists_every_option_in_order() {
    let state = MenuState {
        visible: false,
        opacity: DEFAULT_OPACITY,
        width_ratio: DEFAULT_WIDTH_RATIO,
    };
    let opacity: Vec<_> = state.opacity_options().iter().map(|o| o.tag).collect();
    let width: Vec<_> = state.width_options().iter().map(|o| o.tag).collect();
    assert_eq!(opacity, vec![10, 20, 35, 50, 70, 90]);
    assert_eq!(width, vec![25, 50, 75, 100]);
}

#[test]
fn default_width_checks_full_width() {
    let state = MenuState {
        visible: false,
        opacity: DEFAULT_OPACITY,
        width_ratio: DEFAULT_WIDTH_RATIO,
    };
    let checked: Vec<_> = state
        .width_options()
        .into_iter()
        .filter(|o| o.checked)
        .map(|o| o.label)
        .collect();
    assert_eq!(checked, vec!["100%"]);
}

#[test]
fn selection_tolerance() {
    assert!(is_selected(0.355, 0.35));
    assert!(!is_selected(0.37, 0.35));
}

#[test]
fn tags_match_option_values() {
    for (_, value) in OPACITY_OPTIONS.iter().chain(WIDTH_OPTIONS.iter()) {
        assert!(approx_eq(fraction_from_tag(percent_tag(*value)), *value));
    }
}

// === Clone and PartialEq Tests ===

#[test]
fn overlay_config_equality() {
    let config1 = OverlayConfig::default();
    let mut config2 = OverlayConfig::default();
    assert_eq!(config1, config2);

    config2.width_ratio = 0.5;
    assert_ne!(config1, config2);
}
