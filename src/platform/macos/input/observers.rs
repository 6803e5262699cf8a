//! Application lifecycle observers.

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, RcBlock};

/// Run `on_terminate` when the application is about to terminate.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn install_termination_observer<F>(on_terminate: F)
where
    F: Fn() + 'static,
{
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
    let queue: id = nil; // posting thread (main)

    let block = RcBlock::new(move |_note: id| {
        on_terminate();
    });

    let name: id = msg_send![
        get_class("NSString"),
        stringWithUTF8String: c"NSApplicationWillTerminateNotification".as_ptr()
    ];
    let _: id =
        msg_send![center, addObserverForName: name, object: nil, queue: queue, usingBlock: &*block];
}
