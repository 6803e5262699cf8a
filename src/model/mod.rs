//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies)
//! including the overlay configuration, hotkey bindings, the status menu
//! model and configuration constants.
//!
//! Platform-specific persistence is in `platform::macos::storage`.

pub mod app_state;
pub mod binding;
pub mod constants;
pub mod menu;

pub use app_state::{clamp_opacity, clamp_width_ratio, OverlayConfig};
pub use binding::{HotkeyBinding, Modifiers};
pub use constants::*;
pub use menu::{MenuOption, MenuState};
