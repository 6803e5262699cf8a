//! Input handling module.
//!
//! - hotkeys.rs: Carbon global hotkey backend and event handler
//! - keyboard_monitors.rs: local key monitor for the capture window
//! - observers.rs: application termination observer

pub mod hotkeys;
pub mod keyboard_monitors;
pub mod observers;

pub use hotkeys::{hotkey_event_handler, CarbonHotkeys};
pub use keyboard_monitors::LocalKeyMonitor;
pub use observers::install_termination_observer;
