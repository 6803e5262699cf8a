//! Hotkey capture session.
//!
//! Drives the "record a new hotkey" window:
//!
//! ```text
//! Idle → Listening → { Captured | Rejected } → Committed | Cancelled
//! ```
//!
//! While listening, the session holds a key interceptor guard `G`. Dropping
//! the guard removes the interceptor, so every exit path (commit, cancel,
//! window close, session drop) tears it down. At most one guard is alive.

use tracing::debug;

use super::keys::modifiers_from_platform_flags;
use crate::error::CaptureError;
use crate::model::HotkeyBinding;

/// Capture state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Listening,
    Captured(HotkeyBinding),
    Rejected(CaptureError),
    /// Terminal: the binding was handed to the caller.
    Committed(HotkeyBinding),
    /// Terminal: the window was dismissed without saving.
    Cancelled,
}

impl CaptureState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CaptureState::Committed(_) | CaptureState::Cancelled)
    }
}

/// How a status line should be tinted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Warning,
    Success,
    Error,
}

/// Transient status text under the hotkey field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

impl From<CaptureError> for StatusMessage {
    fn from(err: CaptureError) -> Self {
        let tone = match err {
            CaptureError::Rejected => StatusTone::Warning,
            CaptureError::Incomplete => StatusTone::Error,
        };
        StatusMessage::new(err.to_string(), tone)
    }
}

pub struct KeyCaptureSession<G> {
    state: CaptureState,
    interceptor: Option<G>,
    status: Option<StatusMessage>,
}

impl<G> Default for KeyCaptureSession<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> KeyCaptureSession<G> {
    pub fn new() -> Self {
        Self {
            state: CaptureState::Idle,
            interceptor: None,
            status: None,
        }
    }

    /// Start listening (window shown).
    ///
    /// Clears any previous candidate. The old interceptor is dropped before
    /// `install` runs, so two never coexist.
    pub fn begin<F>(&mut self, install: F)
    where
        F: FnOnce() -> G,
    {
        self.interceptor = None;
        self.interceptor = Some(install());
        self.state = CaptureState::Listening;
        self.status = None;
        debug!("Hotkey capture listening");
    }

    /// Feed a key-down seen by the interceptor.
    ///
    /// Ignored unless the session is listening.
    pub fn key_down(&mut self, key_code: u32, platform_flags: u64) -> &CaptureState {
        if !self.is_listening() {
            return &self.state;
        }

        let modifiers = modifiers_from_platform_flags(platform_flags);
        if modifiers.has_command_or_control() {
            let binding = HotkeyBinding::new(key_code, modifiers);
            debug!("Captured candidate hotkey {}", binding);
            self.state = CaptureState::Captured(binding);
            self.status = Some(StatusMessage::new(
                "Press Save to apply",
                StatusTone::Success,
            ));
        } else {
            debug!("Rejected candidate without ⌘ or ⌃");
            self.state = CaptureState::Rejected(CaptureError::Rejected);
            self.status = Some(CaptureError::Rejected.into());
        }
        &self.state
    }

    /// Hand over the captured binding and finish.
    ///
    /// Only valid from `Captured`. Otherwise returns
    /// [`CaptureError::Incomplete`] and leaves the session listening.
    pub fn commit(&mut self) -> Result<HotkeyBinding, CaptureError> {
        match self.state {
            CaptureState::Captured(binding) => {
                self.interceptor = None;
                self.state = CaptureState::Committed(binding);
                self.status = None;
                Ok(binding)
            }
            _ => {
                self.status = Some(CaptureError::Incomplete.into());
                Err(CaptureError::Incomplete)
            }
        }
    }

    /// Discard the candidate and finish. No-op once terminal.
    pub fn cancel(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        self.interceptor = None;
        self.state = CaptureState::Cancelled;
        self.status = None;
        debug!("Hotkey capture cancelled");
    }

    /// Replace the status line, e.g. to report a registration failure.
    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Pending candidate, if any.
    pub fn candidate(&self) -> Option<HotkeyBinding> {
        match self.state {
            CaptureState::Captured(binding) => Some(binding),
            _ => None,
        }
    }

    /// Text for the hotkey field: the candidate, else the active binding.
    pub fn display_label(&self, current: Option<HotkeyBinding>) -> String {
        self.candidate()
            .or(current)
            .map(|binding| binding.label())
            .unwrap_or_default()
    }

    pub fn is_listening(&self) -> bool {
        matches!(
            self.state,
            CaptureState::Listening | CaptureState::Captured(_) | CaptureState::Rejected(_)
        )
    }

    pub fn has_interceptor(&self) -> bool {
        self.interceptor.is_some()
    }
}
