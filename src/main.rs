//! Sukasi entry point.

#[cfg(target_os = "macos")]
mod macos_main;

use sukasi::events;

fn main() {
    sukasi::logging::init();

    // Initialize the event bus before any callbacks can publish to it
    events::init_event_bus();

    #[cfg(target_os = "macos")]
    macos_main::run();

    #[cfg(not(target_os = "macos"))]
    {
        tracing::error!("Sukasi needs macOS: the overlay and global hotkey use AppKit and Carbon");
        std::process::exit(1);
    }
}
