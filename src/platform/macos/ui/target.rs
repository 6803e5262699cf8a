//! Objective-C action target for menus, buttons, the dispatch timer and the
//! capture window delegate.
//!
//! AppKit callbacks only publish events (or, for the timer and window close,
//! call into the dispatcher); no state lives on the Objective-C side.

use std::cell::Cell;

use tracing::debug;

use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, sel, AnyClass, AnyObject, ClassBuilder, Sel,
};
use crate::platform::macos::handlers::{capture_window_closed, dispatch_events};

thread_local! {
    static TARGET: Cell<id> = const { Cell::new(std::ptr::null_mut()) };
}

/// Shared action target instance, created on first use.
///
/// # Safety
/// Must be called from main thread.
pub unsafe fn action_target() -> id {
    TARGET.with(|slot| {
        let existing = slot.get();
        if existing != nil {
            return existing;
        }
        let target: id = msg_send![target_class(), new];
        slot.set(target);
        target
    })
}

unsafe fn target_class() -> &'static AnyClass {
    let class_name = c"SukasiActionTarget";
    if let Some(cls) = AnyClass::get(class_name) {
        return cls;
    }

    let superclass = get_class("NSObject");
    let Some(mut builder) = ClassBuilder::new(class_name, superclass) else {
        return get_class("SukasiActionTarget");
    };

    builder.add_method(sel!(tick:), tick as unsafe extern "C-unwind" fn(_, _, _));

    // Status menu
    builder.add_method(
        sel!(toggleOverlay:),
        toggle_overlay as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(chooseImage:),
        choose_image as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(setOpacity:),
        set_opacity as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(setWidth:),
        set_width as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(openHotkeySettings:),
        open_hotkey_settings as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(sel!(quit:), quit as unsafe extern "C-unwind" fn(_, _, _));

    // Capture window
    builder.add_method(
        sel!(saveHotkey:),
        save_hotkey as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(cancelHotkey:),
        cancel_hotkey as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(windowWillClose:),
        window_will_close as unsafe extern "C-unwind" fn(_, _, _),
    );

    builder.register()
}

/// Menu item tag as a whole percent.
unsafe fn sender_tag(sender: id) -> Option<u32> {
    if sender == nil {
        return None;
    }
    let tag: isize = msg_send![sender, tag];
    u32::try_from(tag).ok()
}

unsafe extern "C-unwind" fn tick(_this: &mut AnyObject, _cmd: Sel, _timer: id) {
    dispatch_events();
}

unsafe extern "C-unwind" fn toggle_overlay(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::ToggleOverlay);
}

unsafe extern "C-unwind" fn choose_image(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::ChooseImage);
}

unsafe extern "C-unwind" fn set_opacity(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    match sender_tag(sender) {
        Some(percent) => publish(AppEvent::SetOpacityPercent(percent)),
        None => debug!("Opacity item without a usable tag"),
    }
}

unsafe extern "C-unwind" fn set_width(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    match sender_tag(sender) {
        Some(percent) => publish(AppEvent::SetWidthPercent(percent)),
        None => debug!("Width item without a usable tag"),
    }
}

unsafe extern "C-unwind" fn open_hotkey_settings(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::OpenHotkeyCapture);
}

unsafe extern "C-unwind" fn quit(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::Quit);
}

unsafe extern "C-unwind" fn save_hotkey(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::SaveHotkey);
}

unsafe extern "C-unwind" fn cancel_hotkey(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::CancelHotkey);
}

unsafe extern "C-unwind" fn window_will_close(_this: &mut AnyObject, _cmd: Sel, _note: id) {
    // Synchronous: the key monitor must be gone before the window is.
    capture_window_closed();
}
