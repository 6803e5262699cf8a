//! Channel-backed event queue.
//!
//! Producers hold an [`EventPublisher`] (a cloned `Sender`), the main loop
//! owns the [`EventBus`] and pulls from it. Nothing blocks: publishing never
//! waits on the consumer and reading returns `None` once the queue is empty.

use std::sync::mpsc::{self, Receiver, Sender};

use super::types::AppEvent;

/// Single-consumer queue of [`AppEvent`]s.
///
/// ```
/// use sukasi::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// bus.publisher().publish(AppEvent::ToggleOverlay);
/// assert_eq!(bus.drain(), vec![AppEvent::ToggleOverlay]);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// New producer handle. `Send`, so it may cross threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher::from_sender(self.sender.clone())
    }

    /// Next queued event, if any.
    ///
    /// The bus keeps its own sender alive, so the channel can't disconnect
    /// while it exists; any receive error means "empty".
    pub fn try_recv(&self) -> Option<AppEvent> {
        self.receiver.try_recv().ok()
    }

    /// Everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<AppEvent> {
        self.receiver.try_iter().collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of an [`EventBus`]. Cheap to clone.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    pub fn from_sender(sender: Sender<AppEvent>) -> Self {
        Self { sender }
    }

    /// Queue `event`. Dropped silently once the consumer is gone.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bus_is_empty() {
        let bus = EventBus::default();
        assert!(bus.try_recv().is_none());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_drain_keeps_publish_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::HotkeyPressed);
        publisher.publish(AppEvent::SetOpacityPercent(50));
        publisher.publish(AppEvent::ToggleOverlay);

        assert_eq!(
            bus.drain(),
            vec![
                AppEvent::HotkeyPressed,
                AppEvent::SetOpacityPercent(50),
                AppEvent::ToggleOverlay,
            ]
        );
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_try_recv_takes_one_at_a_time() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        publisher.publish(AppEvent::OpenHotkeyCapture);
        publisher.publish(AppEvent::CancelHotkey);

        assert_eq!(bus.try_recv(), Some(AppEvent::OpenHotkeyCapture));
        assert_eq!(bus.drain(), vec![AppEvent::CancelHotkey]);
    }

    #[test]
    fn test_cloned_publishers_share_the_queue() {
        let bus = EventBus::new();
        let first = bus.publisher();
        let second = first.clone();

        first.publish(AppEvent::SaveHotkey);
        second.publish(AppEvent::Quit);

        assert_eq!(bus.drain().len(), 2);
    }

    #[test]
    fn test_publish_from_another_thread() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        std::thread::spawn(move || {
            publisher.publish(AppEvent::CaptureKeyDown {
                key_code: 40,
                flags: 1 << 20,
            });
        })
        .join()
        .unwrap();

        assert_eq!(
            bus.drain(),
            vec![AppEvent::CaptureKeyDown {
                key_code: 40,
                flags: 1 << 20,
            }]
        );
    }

    #[test]
    fn test_publish_after_bus_dropped_is_ignored() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        drop(bus);
        publisher.publish(AppEvent::ToggleOverlay);
    }
}
