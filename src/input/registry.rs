//! Global hotkey registry.
//!
//! Owns the single active binding and the callback fired when it is pressed.
//! The OS side sits behind [`HotkeyBackend`]: on macOS that is the Carbon
//! Event Manager, which installs one process-wide handler when the backend is
//! built and removes it on drop. Rebinding only swaps the key reservation.

use tracing::{debug, info, warn};

use crate::error::HotkeyError;
use crate::model::HotkeyBinding;

/// OS key reservation service.
pub trait HotkeyBackend {
    /// Reserve `binding` process-wide.
    fn reserve(&mut self, binding: HotkeyBinding) -> Result<(), HotkeyError>;

    /// Release the current reservation. Safe to call when nothing is reserved.
    fn release(&mut self);
}

/// Callback invoked when the bound combination fires.
pub type FireCallback = Box<dyn FnMut()>;

pub struct HotkeyRegistry<B: HotkeyBackend> {
    backend: B,
    current: Option<HotkeyBinding>,
    registered: bool,
    on_fire: Option<FireCallback>,
}

impl<B: HotkeyBackend> HotkeyRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
            registered: false,
            on_fire: None,
        }
    }

    /// Register `binding`, replacing any previous one.
    ///
    /// The current binding is updated to `binding` even when the OS refuses
    /// it, so callers see the latest attempt. [`is_registered`] tells whether
    /// the attempt is live.
    ///
    /// [`is_registered`]: HotkeyRegistry::is_registered
    pub fn register(&mut self, binding: HotkeyBinding) -> Result<(), HotkeyError> {
        self.unregister();
        self.current = Some(binding);

        match self.backend.reserve(binding) {
            Ok(()) => {
                self.registered = true;
                info!("Registered global hotkey {}", binding);
                Ok(())
            }
            Err(err) => {
                warn!("{}", err);
                Err(err)
            }
        }
    }

    /// Release the OS reservation if one is held.
    pub fn unregister(&mut self) {
        if self.registered {
            self.backend.release();
            self.registered = false;
            debug!("Released global hotkey");
        }
    }

    /// Install the fire callback, replacing any previous one.
    pub fn on_fire(&mut self, callback: FireCallback) {
        self.on_fire = Some(callback);
    }

    /// Deliver a hotkey press that the OS reported.
    ///
    /// Called from the main loop after the OS event has been re-dispatched
    /// through the event bus. Presses while nothing is registered are dropped.
    pub fn fire(&mut self) {
        if !self.registered {
            debug!("Hotkey press ignored: no binding registered");
            return;
        }
        if let Some(callback) = self.on_fire.as_mut() {
            callback();
        }
    }

    /// The binding last passed to [`register`](HotkeyRegistry::register).
    pub fn current(&self) -> Option<HotkeyBinding> {
        self.current
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: HotkeyBackend> Drop for HotkeyRegistry<B> {
    fn drop(&mut self) {
        self.unregister();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;
    use std::rc::Rc;

    use super::*;
    use crate::model::Modifiers;

    /// Records live reservations; refuses anything in `taken`.
    #[derive(Default)]
    struct FakeBackend {
        live: Rc<RefCell<Vec<HotkeyBinding>>>,
        taken: HashSet<HotkeyBinding>,
        releases: Rc<Cell<usize>>,
    }

    impl HotkeyBackend for FakeBackend {
        fn reserve(&mut self, binding: HotkeyBinding) -> Result<(), HotkeyError> {
            if self.taken.contains(&binding) {
                return Err(HotkeyError::RegistrationFailed {
                    label: binding.label(),
                    status: -9878,
                });
            }
            self.live.borrow_mut().push(binding);
            Ok(())
        }

        fn release(&mut self) {
            self.live.borrow_mut().pop();
            self.releases.set(self.releases.get() + 1);
        }
    }

    fn cmd(key: u32) -> HotkeyBinding {
        HotkeyBinding::new(key, Modifiers::COMMAND)
    }

    #[test]
    fn test_register_reserves_binding() {
        let backend = FakeBackend::default();
        let live = backend.live.clone();
        let mut registry = HotkeyRegistry::new(backend);

        registry.register(cmd(4)).unwrap();

        assert!(registry.is_registered());
        assert_eq!(registry.current(), Some(cmd(4)));
        assert_eq!(*live.borrow(), vec![cmd(4)]);
    }

    #[test]
    fn test_register_twice_is_idempotent() {
        let backend = FakeBackend::default();
        let live = backend.live.clone();
        let mut registry = HotkeyRegistry::new(backend);

        registry.register(cmd(4)).unwrap();
        registry.register(cmd(4)).unwrap();

        assert_eq!(*live.borrow(), vec![cmd(4)]);
    }

    #[test]
    fn test_unregister_without_binding_is_noop() {
        let backend = FakeBackend::default();
        let releases = backend.releases.clone();
        let mut registry = HotkeyRegistry::new(backend);

        registry.unregister();
        registry.unregister();

        assert_eq!(releases.get(), 0);
        assert!(!registry.is_registered());
    }

    #[test]
    fn test_failed_register_still_records_attempt() {
        let mut backend = FakeBackend::default();
        backend.taken.insert(cmd(12));
        let live = backend.live.clone();
        let mut registry = HotkeyRegistry::new(backend);

        registry.register(cmd(4)).unwrap();
        let err = registry.register(cmd(12)).unwrap_err();

        assert!(matches!(err, HotkeyError::RegistrationFailed { .. }));
        assert_eq!(registry.current(), Some(cmd(12)));
        assert!(!registry.is_registered());
        assert!(live.borrow().is_empty());
    }

    #[test]
    fn test_fire_invokes_callback_only_when_registered() {
        let hits = Rc::new(Cell::new(0));
        let mut registry = HotkeyRegistry::new(FakeBackend::default());
        let counter = hits.clone();
        registry.on_fire(Box::new(move || counter.set(counter.get() + 1)));

        registry.fire();
        assert_eq!(hits.get(), 0);

        registry.register(cmd(4)).unwrap();
        registry.fire();
        registry.fire();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_on_fire_replaces_previous_callback() {
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));
        let mut registry = HotkeyRegistry::new(FakeBackend::default());
        registry.register(cmd(4)).unwrap();

        let f = first.clone();
        registry.on_fire(Box::new(move || f.set(true)));
        let s = second.clone();
        registry.on_fire(Box::new(move || s.set(true)));
        registry.fire();

        assert!(!first.get());
        assert!(second.get());
    }

    #[test]
    fn test_drop_releases_reservation() {
        let backend = FakeBackend::default();
        let live = backend.live.clone();
        {
            let mut registry = HotkeyRegistry::new(backend);
            registry.register(cmd(4)).unwrap();
        }
        assert!(live.borrow().is_empty());
    }
}
