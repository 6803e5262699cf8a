//! Local key monitor used while capturing a new hotkey.

use tracing::debug;

use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, RcBlock};

/// NSEventMaskKeyDown
const KEY_DOWN_MASK: u64 = 1 << 10;

/// Swallows every key-down while `window` is the key window and publishes
/// it as [`AppEvent::CaptureKeyDown`]. Other windows receive their keys as
/// usual. Dropping the monitor removes it.
pub struct LocalKeyMonitor {
    monitor: id,
}

impl LocalKeyMonitor {
    /// # Safety
    /// - `window` must be a valid NSWindow that outlives the monitor.
    /// - Must be called from main thread with valid autorelease pool.
    pub unsafe fn install(window: id) -> Self {
        let block = RcBlock::new(move |event: id| -> id {
            unsafe {
                let is_key: bool = msg_send![window, isKeyWindow];
                if !is_key {
                    return event;
                }
                let key_code: u16 = msg_send![event, keyCode];
                let flags: u64 = msg_send![event, modifierFlags];
                publish(AppEvent::CaptureKeyDown {
                    key_code: u32::from(key_code),
                    flags,
                });
            }
            nil
        });

        let monitor: id = msg_send![
            get_class("NSEvent"),
            addLocalMonitorForEventsMatchingMask: KEY_DOWN_MASK,
            handler: &*block
        ];
        if monitor != nil {
            let _: id = msg_send![monitor, retain];
        }
        debug!("Installed capture key monitor");
        Self { monitor }
    }
}

impl Drop for LocalKeyMonitor {
    fn drop(&mut self) {
        if self.monitor == nil {
            return;
        }
        unsafe {
            let _: () = msg_send![get_class("NSEvent"), removeMonitor: self.monitor];
            let _: () = msg_send![self.monitor, release];
        }
        self.monitor = nil;
        debug!("Removed capture key monitor");
    }
}
