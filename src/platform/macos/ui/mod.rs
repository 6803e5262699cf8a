//! User interface components.
//!
//! - overlay_window.rs: the click-through overlay NSWindow
//! - display.rs: primary display geometry
//! - status_bar.rs: menu bar item and its menu
//! - capture_window.rs: "Change Hotkey" window
//! - image_picker.rs: NSOpenPanel image chooser
//! - target.rs: Objective-C action target shared by all of the above

pub mod capture_window;
pub mod display;
pub mod image_picker;
pub mod overlay_window;
pub mod status_bar;
pub mod target;

pub use capture_window::CaptureWindow;
pub use display::MainDisplay;
pub use image_picker::run_image_picker;
pub use overlay_window::MacOverlayWindow;
pub use status_bar::StatusMenu;
pub use target::action_target;
