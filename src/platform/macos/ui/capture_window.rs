//! "Change Hotkey" window.
//!
//! Layout (300×150, titled + closable):
//! - "Press new hotkey:" label
//! - read-only hotkey field showing the pending or current binding
//! - status line tinted by [`StatusTone`]
//! - Cancel / Save buttons
//!
//! The window is created once and reused; closing only orders it out.

use objc2_app_kit::NSTextAlignment;

use crate::input::{StatusMessage, StatusTone};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, NSApp, NSPoint, NSRect, NSSize, Sel, NO, YES,
};

const WINDOW_WIDTH: f64 = 300.0;
const WINDOW_HEIGHT: f64 = 150.0;

pub struct CaptureWindow {
    window: id,
    hotkey_field: id,
    status_label: id,
}

fn frame(x: f64, y: f64, w: f64, h: f64) -> NSRect {
    NSRect::new(NSPoint::new(x, y), NSSize::new(w, h))
}

impl CaptureWindow {
    /// Build the window. `target` receives the button actions and acts as the
    /// window delegate (`windowWillClose:`).
    ///
    /// # Safety
    /// Must be called from main thread with valid autorelease pool.
    pub unsafe fn create(target: id) -> Self {
        // NSTitledWindowMask (1) | NSClosableWindowMask (2) = 3
        let style: u64 = 1 | 2;

        let window: id = msg_send![get_class("NSWindow"), alloc];
        let window: id = msg_send![
            window,
            initWithContentRect: frame(0.0, 0.0, WINDOW_WIDTH, WINDOW_HEIGHT),
            styleMask: style,
            backing: 2u64,  // NSBackingStoreBuffered
            defer: NO
        ];
        let _: () = msg_send![window, setReleasedWhenClosed: NO];
        let _: () = msg_send![window, setTitle: nsstring_id("Change Hotkey")];
        let _: () = msg_send![window, setDelegate: target];
        let _: () = msg_send![window, center];

        let content: id = msg_send![window, contentView];

        let prompt = label("Press new hotkey:");
        let _: () = msg_send![prompt, setFrame: frame(20.0, 110.0, 260.0, 20.0)];
        let _: () = msg_send![content, addSubview: prompt];

        let hotkey_field: id = msg_send![get_class("NSTextField"), alloc];
        let hotkey_field: id = msg_send![hotkey_field, initWithFrame: frame(20.0, 75.0, 260.0, 30.0)];
        let _: () = msg_send![hotkey_field, setEditable: NO];
        let _: () = msg_send![hotkey_field, setSelectable: NO];
        let _: () = msg_send![hotkey_field, setAlignment: NSTextAlignment::Center];
        let font: id = msg_send![get_class("NSFont"), systemFontOfSize: 16.0f64];
        let _: () = msg_send![hotkey_field, setFont: font];
        let _: () = msg_send![
            hotkey_field,
            setPlaceholderString: nsstring_id("Click and press keys")
        ];
        let _: () = msg_send![content, addSubview: hotkey_field];

        let status_label = label("");
        let _: () = msg_send![status_label, setFrame: frame(20.0, 50.0, 260.0, 20.0)];
        let _: () = msg_send![status_label, setAlignment: NSTextAlignment::Center];
        let _: () = msg_send![content, addSubview: status_label];

        let cancel = button("Cancel", target, sel!(cancelHotkey:));
        let _: () = msg_send![cancel, setFrame: frame(110.0, 10.0, 80.0, 30.0)];
        let _: () = msg_send![content, addSubview: cancel];

        let save = button("Save", target, sel!(saveHotkey:));
        let _: () = msg_send![save, setFrame: frame(200.0, 10.0, 80.0, 30.0)];
        let _: () = msg_send![save, setKeyEquivalent: nsstring_id("\r")];
        let _: () = msg_send![content, addSubview: save];

        let _: bool = msg_send![window, makeFirstResponder: content];

        Self {
            window,
            hotkey_field,
            status_label,
        }
    }

    /// # Safety
    /// Must be called from main thread.
    pub unsafe fn show(&self) {
        let app = NSApp();
        let _: () = msg_send![app, activateIgnoringOtherApps: YES];
        let _: () = msg_send![self.window, makeKeyAndOrderFront: nil];
    }

    /// Closing posts `windowWillClose:` to the delegate synchronously.
    ///
    /// # Safety
    /// Must be called from main thread.
    pub unsafe fn close(&self) {
        let _: () = msg_send![self.window, close];
    }

    /// # Safety
    /// Must be called from main thread.
    pub unsafe fn set_hotkey_text(&self, text: &str) {
        let _: () = msg_send![self.hotkey_field, setStringValue: nsstring_id(text)];
    }

    /// # Safety
    /// Must be called from main thread.
    pub unsafe fn set_status(&self, status: Option<&StatusMessage>) {
        let (text, color_selector) = match status {
            Some(status) => (status.text.as_str(), tone_color(status.tone)),
            None => ("", sel!(secondaryLabelColor)),
        };
        let color: id = msg_send![get_class("NSColor"), performSelector: color_selector];
        let _: () = msg_send![self.status_label, setStringValue: nsstring_id(text)];
        let _: () = msg_send![self.status_label, setTextColor: color];
    }

    pub fn window(&self) -> id {
        self.window
    }
}

fn tone_color(tone: StatusTone) -> Sel {
    match tone {
        StatusTone::Warning => sel!(systemOrangeColor),
        StatusTone::Success => sel!(systemGreenColor),
        StatusTone::Error => sel!(systemRedColor),
    }
}

unsafe fn label(text: &str) -> id {
    msg_send![get_class("NSTextField"), labelWithString: nsstring_id(text)]
}

unsafe fn button(title: &str, target: id, action: Sel) -> id {
    msg_send![
        get_class("NSButton"),
        buttonWithTitle: nsstring_id(title),
        target: target,
        action: action
    ]
}
