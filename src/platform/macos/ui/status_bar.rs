//! Status bar (menu bar) item with dropdown menu.
//!
//! Menu layout:
//! - Show Overlay / Hide Overlay
//! - Choose Image…
//! - Opacity ▸ 10% … 90%
//! - Width ▸ 25% … 100%
//! - Hotkey…
//! - Quit

use crate::model::{MenuOption, MenuState};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, sel, Sel};

/// NSVariableStatusItemLength
const VARIABLE_LENGTH: f64 = -1.0;

// NSControlStateValueOn / Off
const STATE_ON: isize = 1;
const STATE_OFF: isize = 0;

pub struct StatusMenu {
    status_item: id,
}

impl StatusMenu {
    /// Install the status item. The menu is attached by [`StatusMenu::rebuild`].
    ///
    /// # Safety
    /// Must be called from main thread, after the app is initialized.
    pub unsafe fn install() -> Self {
        let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];
        let status_item: id = msg_send![status_bar, statusItemWithLength: VARIABLE_LENGTH];
        // Keep a strong reference so it doesn't get deallocated
        let _: id = msg_send![status_item, retain];

        let button: id = msg_send![status_item, button];
        if button != nil {
            let icon: id = msg_send![
                get_class("NSImage"),
                imageWithSystemSymbolName: nsstring_id("photo.on.rectangle"),
                accessibilityDescription: nsstring_id("Sukasi")
            ];
            if icon != nil {
                let _: () = msg_send![button, setImage: icon];
            } else {
                let _: () = msg_send![button, setTitle: nsstring_id("透")];
            }
            let _: () = msg_send![button, setToolTip: nsstring_id("Sukasi")];
        }

        Self { status_item }
    }

    /// Put `text` in the item's tooltip, or restore the plain one.
    ///
    /// # Safety
    /// Must be called from main thread.
    pub unsafe fn set_notice(&self, text: Option<&str>) {
        let button: id = msg_send![self.status_item, button];
        if button == nil {
            return;
        }
        let tooltip = match text {
            Some(text) => nsstring_id(&format!("Sukasi: {}", text)),
            None => nsstring_id("Sukasi"),
        };
        let _: () = msg_send![button, setToolTip: tooltip];
    }

    /// Replace the menu with one reflecting `state`.
    ///
    /// # Safety
    /// Must be called from main thread. `target` must respond to the menu actions.
    pub unsafe fn rebuild(&self, target: id, state: &MenuState) {
        let menu = create_status_menu(target, state);
        let _: () = msg_send![self.status_item, setMenu: menu];
        let _: () = msg_send![menu, release];
    }
}

unsafe fn new_menu() -> id {
    let menu: id = msg_send![get_class("NSMenu"), alloc];
    msg_send![menu, init]
}

unsafe fn add_item(menu: id, target: id, title: &str, action: Option<Sel>, key: &str) -> id {
    let item: id = msg_send![get_class("NSMenuItem"), alloc];
    let item: id = msg_send![
        item,
        initWithTitle: nsstring_id(title),
        action: action,
        keyEquivalent: nsstring_id(key)
    ];
    if action.is_some() {
        let _: () = msg_send![item, setTarget: target];
    }
    let _: () = msg_send![menu, addItem: item];
    let _: () = msg_send![item, release];
    item
}

unsafe fn add_separator(menu: id) {
    let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];
}

unsafe fn add_submenu(menu: id, target: id, title: &str, options: &[MenuOption], action: Sel) {
    let parent = add_item(menu, target, title, None, "");
    let submenu = new_menu();
    for option in options {
        let item = add_item(submenu, target, option.label, Some(action), "");
        let _: () = msg_send![item, setTag: option.tag as isize];
        let state = if option.checked { STATE_ON } else { STATE_OFF };
        let _: () = msg_send![item, setState: state];
    }
    let _: () = msg_send![parent, setSubmenu: submenu];
    let _: () = msg_send![submenu, release];
}

/// Create the dropdown menu for the status bar item. Returned retained.
unsafe fn create_status_menu(target: id, state: &MenuState) -> id {
    let menu = new_menu();

    add_item(
        menu,
        target,
        state.toggle_title(),
        Some(sel!(toggleOverlay:)),
        "",
    );
    add_separator(menu);

    add_item(menu, target, "Choose Image…", Some(sel!(chooseImage:)), "");
    add_submenu(
        menu,
        target,
        "Opacity",
        &state.opacity_options(),
        sel!(setOpacity:),
    );
    add_submenu(menu, target, "Width", &state.width_options(), sel!(setWidth:));
    add_separator(menu);

    add_item(
        menu,
        target,
        "Hotkey…",
        Some(sel!(openHotkeySettings:)),
        "",
    );
    add_separator(menu);

    add_item(menu, target, "Quit", Some(sel!(quit:)), "q");

    menu
}
