//! Image chooser (NSOpenPanel).

use std::path::PathBuf;

use crate::model::IMAGE_EXTENSIONS;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, string_from_nsstring, NSApp, NO, YES,
};

/// NSModalResponseOK
const MODAL_RESPONSE_OK: isize = 1;

/// Run the open panel modally. `None` when cancelled.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn run_image_picker() -> Option<PathBuf> {
    let panel: id = msg_send![get_class("NSOpenPanel"), openPanel];
    let _: () = msg_send![panel, setAllowsMultipleSelection: NO];
    let _: () = msg_send![panel, setCanChooseDirectories: NO];
    let _: () = msg_send![panel, setCanChooseFiles: YES];

    let types: id = msg_send![get_class("NSMutableArray"), array];
    for ext in IMAGE_EXTENSIONS {
        let _: () = msg_send![types, addObject: nsstring_id(ext)];
    }
    let _: () = msg_send![panel, setAllowedFileTypes: types];

    // Accessory apps are never active on their own
    let _: () = msg_send![NSApp(), activateIgnoringOtherApps: YES];

    let response: isize = msg_send![panel, runModal];
    if response != MODAL_RESPONSE_OK {
        return None;
    }

    let url: id = msg_send![panel, URL];
    if url == nil {
        return None;
    }
    let path: id = msg_send![url, path];
    string_from_nsstring(path).map(PathBuf::from)
}
