//! Events crossing from OS callbacks into the coordinator.
//!
//! Callbacks (the Carbon hotkey handler, menu item targets, the capture
//! window's key monitor) never touch application state. They publish an
//! [`AppEvent`] and return; a main-loop timer hands queued events to the
//! coordinator.
//!
//! ```text
//! Carbon hotkey ─┐
//! status menu   ─┼─ publish() ─▶ queue ─ take_event() ─▶ dispatcher ─▶ Coordinator::handle
//! capture window ┘
//! ```

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher, take_event};
pub use types::AppEvent;
