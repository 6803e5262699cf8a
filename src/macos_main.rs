//! macOS-specific entry point.
//!
//! Builds every platform object, hands them to the coordinator, starts the
//! dispatch timer and runs the AppKit main loop.

use tracing::error;

use sukasi::app::{Coordinator, PlatformParts};
use sukasi::events::publisher;
use sukasi::platform::macos::ffi::bridge::{autoreleasepool, msg_send, NSApp};
use sukasi::platform::macos::handlers::{
    install_coordinator, shutdown_coordinator, start_dispatch_timer,
};
use sukasi::platform::macos::input::{install_termination_observer, CarbonHotkeys};
use sukasi::platform::macos::storage::UserDefaultsStore;
use sukasi::platform::macos::ui::{action_target, MacOverlayWindow, MainDisplay};
use sukasi::platform::macos::{MacPlatform, MacShell};

/// Main entry point for macOS.
pub fn run() {
    // Event bus is already initialized by main()

    autoreleasepool(|| unsafe {
        let app = NSApp();
        // NSApplicationActivationPolicyAccessory = 1 (menu bar only, no Dock icon)
        let _: bool = msg_send![app, setActivationPolicy: 1i64];

        let hotkeys = match CarbonHotkeys::install() {
            Ok(hotkeys) => hotkeys,
            Err(err) => {
                error!("{}", err);
                return;
            }
        };

        let target = action_target();
        let parts = PlatformParts::<MacPlatform> {
            hotkeys,
            window: MacOverlayWindow::create(),
            display: MainDisplay,
            settings: UserDefaultsStore::standard(),
            shell: MacShell::new(target),
        };
        install_coordinator(Coordinator::new(parts, publisher()));

        install_termination_observer(shutdown_coordinator);
        let _ = start_dispatch_timer(target);

        let _: () = msg_send![app, run];
    });
}
