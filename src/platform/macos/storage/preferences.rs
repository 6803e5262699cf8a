//! Persistence of settings to NSUserDefaults.

use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, string_from_nsstring, Bool,
};
use crate::storage::SettingsStore;

/// `NSUserDefaults.standardUserDefaults`, keyed by the names in
/// `model::constants`.
///
/// Must only be used from the main thread.
pub struct UserDefaultsStore {
    defaults: id,
}

impl UserDefaultsStore {
    pub fn standard() -> Self {
        let defaults: id = unsafe { msg_send![get_class("NSUserDefaults"), standardUserDefaults] };
        Self { defaults }
    }

    /// Was anything ever stored under `key`?
    ///
    /// `boolForKey:` and friends return zero for missing keys, so presence is
    /// checked separately.
    fn contains(&self, key: &str) -> bool {
        let obj: id = unsafe { msg_send![self.defaults, objectForKey: nsstring_id(key)] };
        obj != nil
    }
}

impl Default for UserDefaultsStore {
    fn default() -> Self {
        Self::standard()
    }
}

impl SettingsStore for UserDefaultsStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        if !self.contains(key) {
            return None;
        }
        let value: bool = unsafe { msg_send![self.defaults, boolForKey: nsstring_id(key)] };
        Some(value)
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        unsafe {
            let _: () = msg_send![self.defaults, setBool: Bool::new(value), forKey: nsstring_id(key)];
        }
    }

    fn get_f64(&self, key: &str) -> Option<f64> {
        if !self.contains(key) {
            return None;
        }
        let value: f64 = unsafe { msg_send![self.defaults, doubleForKey: nsstring_id(key)] };
        Some(value)
    }

    fn set_f64(&mut self, key: &str, value: f64) {
        unsafe {
            let _: () = msg_send![self.defaults, setDouble: value, forKey: nsstring_id(key)];
        }
    }

    fn get_u32(&self, key: &str) -> Option<u32> {
        if !self.contains(key) {
            return None;
        }
        // NSInteger is i64 on 64-bit macOS
        let value: i64 = unsafe { msg_send![self.defaults, integerForKey: nsstring_id(key)] };
        u32::try_from(value).ok()
    }

    fn set_u32(&mut self, key: &str, value: u32) {
        unsafe {
            let _: () =
                msg_send![self.defaults, setInteger: i64::from(value), forKey: nsstring_id(key)];
        }
    }

    fn get_string(&self, key: &str) -> Option<String> {
        unsafe {
            let value: id = msg_send![self.defaults, stringForKey: nsstring_id(key)];
            string_from_nsstring(value)
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        unsafe {
            let _: () = msg_send![self.defaults, setObject: nsstring_id(value), forKey: nsstring_id(key)];
        }
    }
}
