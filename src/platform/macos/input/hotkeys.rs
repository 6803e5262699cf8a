//! Carbon global hotkey backend.
//!
//! One event handler is installed on the application target for the life of
//! [`CarbonHotkeys`]; rebinding only swaps the `RegisterEventHotKey`
//! reservation. Presses are published to the event bus and handled on the
//! next dispatcher tick.

use tracing::{debug, error};

use crate::error::HotkeyError;
use crate::events::{publish, AppEvent};
use crate::input::HotkeyBackend;
use crate::model::HotkeyBinding;
use crate::platform::macos::ffi::{
    EventHandlerCallRef, EventHandlerRef, EventHotKeyID, EventHotKeyRef, EventRef, EventTypeSpec,
    GetApplicationEventTarget, GetEventClass, GetEventKind, GetEventParameter, InstallEventHandler,
    RegisterEventHotKey, RemoveEventHandler, UnregisterEventHotKey, HKID_TOGGLE,
    K_EVENT_CLASS_KEYBOARD, K_EVENT_HOTKEY_PRESSED, K_EVENT_PARAM_DIRECT_OBJECT, NO_ERR,
    SIG_SUKASI, TYPE_EVENT_HOTKEY_ID,
};

pub struct CarbonHotkeys {
    handler: EventHandlerRef,
    hotkey: EventHotKeyRef,
}

impl CarbonHotkeys {
    /// Install the process-wide hotkey handler.
    ///
    /// Must be called from the main thread.
    pub fn install() -> Result<Self, HotkeyError> {
        let types = [EventTypeSpec {
            event_class: K_EVENT_CLASS_KEYBOARD,
            event_kind: K_EVENT_HOTKEY_PRESSED,
        }];
        let mut handler: EventHandlerRef = std::ptr::null_mut();
        let status = unsafe {
            InstallEventHandler(
                GetApplicationEventTarget(),
                hotkey_event_handler,
                types.len() as u32,
                types.as_ptr(),
                std::ptr::null_mut(),
                &mut handler,
            )
        };
        if status != NO_ERR {
            error!("InstallEventHandler failed: {}", status);
            return Err(HotkeyError::HandlerInstallFailed(status));
        }
        debug!("Installed Carbon hotkey handler");

        Ok(Self {
            handler,
            hotkey: std::ptr::null_mut(),
        })
    }
}

impl HotkeyBackend for CarbonHotkeys {
    fn reserve(&mut self, binding: HotkeyBinding) -> Result<(), HotkeyError> {
        self.release();

        let hk_id = EventHotKeyID {
            signature: SIG_SUKASI,
            id: HKID_TOGGLE,
        };
        let mut out_ref: EventHotKeyRef = std::ptr::null_mut();
        let status = unsafe {
            RegisterEventHotKey(
                binding.key_code,
                binding.modifiers.bits(),
                hk_id,
                GetApplicationEventTarget(),
                0,
                &mut out_ref,
            )
        };
        if status != NO_ERR || out_ref.is_null() {
            return Err(HotkeyError::RegistrationFailed {
                label: binding.label(),
                status,
            });
        }
        self.hotkey = out_ref;
        Ok(())
    }

    fn release(&mut self) {
        if !self.hotkey.is_null() {
            unsafe {
                let _ = UnregisterEventHotKey(self.hotkey);
            }
            self.hotkey = std::ptr::null_mut();
        }
    }
}

impl Drop for CarbonHotkeys {
    fn drop(&mut self) {
        self.release();
        if !self.handler.is_null() {
            unsafe {
                let _ = RemoveEventHandler(self.handler);
            }
            self.handler = std::ptr::null_mut();
        }
    }
}

/// Carbon event handler for hotkey events.
///
/// Called by the Carbon Event Manager on the main thread, outside the
/// dispatcher. Only publishes; never touches application state.
///
/// # Safety
/// Called by Carbon runtime. Must not panic.
pub extern "C" fn hotkey_event_handler(
    _call_ref: EventHandlerCallRef,
    event: EventRef,
    _user_data: *mut std::ffi::c_void,
) -> i32 {
    unsafe {
        if GetEventClass(event) == K_EVENT_CLASS_KEYBOARD
            && GetEventKind(event) == K_EVENT_HOTKEY_PRESSED
        {
            let mut hot_id = EventHotKeyID {
                signature: 0,
                id: 0,
            };
            let status = GetEventParameter(
                event,
                K_EVENT_PARAM_DIRECT_OBJECT,
                TYPE_EVENT_HOTKEY_ID,
                std::ptr::null_mut(),
                std::mem::size_of::<EventHotKeyID>() as u32,
                std::ptr::null_mut(),
                &mut hot_id as *mut _ as *mut std::ffi::c_void,
            );
            if status == NO_ERR && hot_id.signature == SIG_SUKASI && hot_id.id == HKID_TOGGLE {
                publish(AppEvent::HotkeyPressed);
            }
        }
        NO_ERR
    }
}
