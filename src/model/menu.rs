//! Status menu model.
//!
//! The menu itself is built by the platform layer; this module decides
//! titles, check-marks and how option values travel as integer tags.

use super::constants::{OPACITY_OPTIONS, OPTION_TOLERANCE, WIDTH_OPTIONS};

/// Snapshot of what the status menu renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuState {
    pub visible: bool,
    pub opacity: f64,
    pub width_ratio: f64,
}

/// One entry of a value submenu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: &'static str,
    /// Value in whole percent, carried as the menu item's tag.
    pub tag: u32,
    pub checked: bool,
}

impl MenuState {
    pub fn toggle_title(&self) -> &'static str {
        if self.visible {
            "Hide Overlay"
        } else {
            "Show Overlay"
        }
    }

    pub fn opacity_options(&self) -> Vec<MenuOption> {
        options(&OPACITY_OPTIONS, self.opacity)
    }

    pub fn width_options(&self) -> Vec<MenuOption> {
        options(&WIDTH_OPTIONS, self.width_ratio)
    }
}

fn options(table: &[(&'static str, f64)], current: f64) -> Vec<MenuOption> {
    table
        .iter()
        .map(|&(label, value)| MenuOption {
            label,
            tag: percent_tag(value),
            checked: is_selected(current, value),
        })
        .collect()
}

/// Check-mark rule for a submenu option.
pub fn is_selected(current: f64, option: f64) -> bool {
    (current - option).abs() < OPTION_TOLERANCE
}

/// Fraction to whole percent (0.35 → 35).
pub fn percent_tag(value: f64) -> u32 {
    (value * 100.0).round().max(0.0) as u32
}

/// Whole percent back to a fraction (35 → 0.35).
pub fn fraction_from_tag(tag: u32) -> f64 {
    tag as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_title_follows_visibility() {
        let mut state = MenuState {
            visible: false,
            opacity: 0.35,
            width_ratio: 1.0,
        };
        assert_eq!(state.toggle_title(), "Show Overlay");
        state.visible = true;
        assert_eq!(state.toggle_title(), "Hide Overlay");
    }

    #[test]
    fn test_exactly_one_opacity_option_checked_for_default() {
        let state = MenuState {
            visible: false,
            opacity: 0.35,
            width_ratio: 1.0,
        };
        let checked: Vec<_> = state
            .opacity_options()
            .into_iter()
            .filter(|o| o.checked)
            .collect();
        assert_eq!(checked.len(), 1);
        assert_eq!(checked[0].tag, 35);
    }

    #[test]
    fn test_off_menu_value_checks_nothing() {
        let state = MenuState {
            visible: true,
            opacity: 0.42,
            width_ratio: 0.6,
        };
        assert!(state.opacity_options().iter().all(|o| !o.checked));
        assert!(state.width_options().iter().all(|o| !o.checked));
    }

    #[test]
    fn test_tags_round_trip_menu_values() {
        assert_eq!(percent_tag(0.35), 35);
        assert_eq!(percent_tag(1.0), 100);
        assert!((fraction_from_tag(70) - 0.70).abs() < 1e-9);
    }
}
