//! Event dispatcher feeding the coordinator.
//!
//! The coordinator lives in a main-thread slot. A repeating NSTimer (in
//! common modes, so it keeps firing while menus are open) drains the event
//! bus and hands each event to it.
//!
//! ```text
//! take_event() → dispatch_events() → Coordinator::handle()
//! ```

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::app::Coordinator;
use crate::events::take_event;
use crate::platform::macos::app::MacPlatform;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, sel, YES};

/// Timer period. Hotkey presses are handled at most this late.
pub const DISPATCH_INTERVAL_SECS: f64 = 0.05;

/// Guard against nested dispatch.
///
/// The run loop keeps firing timers while a modal runs (the image chooser's
/// `runModal`). Those nested ticks skip; their events wait for the outer
/// dispatch or the next tick.
static DISPATCH_GUARD: AtomicBool = AtomicBool::new(false);

thread_local! {
    static COORDINATOR: RefCell<Option<Coordinator<MacPlatform>>> = const { RefCell::new(None) };
}

/// Hand the coordinator to the dispatcher. Must be called on the main thread.
pub fn install_coordinator(coordinator: Coordinator<MacPlatform>) {
    COORDINATOR.with(|slot| {
        *slot.borrow_mut() = Some(coordinator);
    });
}

/// Run `f` on the coordinator unless it is missing or already in use.
pub fn with_coordinator<R>(f: impl FnOnce(&mut Coordinator<MacPlatform>) -> R) -> Option<R> {
    COORDINATOR.with(|slot| {
        let mut slot = slot.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

/// Dispatch all pending events from the global event bus.
pub fn dispatch_events() {
    if DISPATCH_GUARD
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return;
    }

    while let Some(event) = take_event() {
        if with_coordinator(|coordinator| coordinator.handle(event.clone())).is_none() {
            debug!("Coordinator unavailable; dropped {:?}", event);
        }
    }

    DISPATCH_GUARD.store(false, Ordering::SeqCst);
}

/// The capture window is closing. Runs synchronously so the key monitor is
/// removed first; a close started by the coordinator itself is skipped here.
pub fn capture_window_closed() {
    let _ = with_coordinator(|coordinator| coordinator.capture_window_closed());
}

/// Save state and release the hotkey before the process exits.
pub fn shutdown_coordinator() {
    let _ = with_coordinator(|coordinator| coordinator.shutdown());
}

/// Start the repeating dispatch timer on `target` (`tick:`).
///
/// # Safety
/// `target` must be the action target. Must be called from main thread.
pub unsafe fn start_dispatch_timer(target: id) -> id {
    let timer: id = msg_send![
        get_class("NSTimer"),
        timerWithTimeInterval: DISPATCH_INTERVAL_SECS,
        target: target,
        selector: sel!(tick:),
        userInfo: nil,
        repeats: YES
    ];
    // Add to run loop with CommonModes (keeps running during menus)
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let common_modes = nsstring_id("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: common_modes];
    timer
}
