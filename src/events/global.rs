//! Process-wide event queue.
//!
//! Carbon and AppKit callbacks have no way to reach the coordinator, so they
//! publish here; the dispatch timer pulls from the same queue. The queue is
//! created on first use, so publishing before [`init_event_bus`] is safe.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::bus::EventPublisher;
use super::types::AppEvent;

struct SharedQueue {
    sender: Sender<AppEvent>,
    // Only the main thread reads; the mutex just makes the static `Sync`.
    receiver: Mutex<Receiver<AppEvent>>,
}

static QUEUE: OnceLock<SharedQueue> = OnceLock::new();

fn queue() -> &'static SharedQueue {
    QUEUE.get_or_init(|| {
        let (sender, receiver) = mpsc::channel();
        SharedQueue {
            sender,
            receiver: Mutex::new(receiver),
        }
    })
}

/// Create the queue up front. Later calls do nothing.
pub fn init_event_bus() {
    let _ = queue();
}

/// Handle for code that publishes repeatedly (the hotkey fire callback).
pub fn publisher() -> EventPublisher {
    EventPublisher::from_sender(queue().sender.clone())
}

/// Queue `event` from any thread.
pub fn publish(event: AppEvent) {
    let _ = queue().sender.send(event);
}

/// Pop the oldest queued event.
///
/// The dispatcher pulls one event at a time, so an event published while
/// another is being handled (a hotkey press becoming `ToggleOverlay`) still
/// runs in the same tick. The lock is released before returning.
pub fn take_event() -> Option<AppEvent> {
    let receiver = queue()
        .receiver
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    receiver.try_recv().ok()
}

/// Everything queued so far.
pub fn drain_events() -> Vec<AppEvent> {
    std::iter::from_fn(take_event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test only: the queue is shared by the whole test binary.
    #[test]
    fn test_global_queue_round_trip() {
        init_event_bus();
        init_event_bus();
        let _ = drain_events();

        publish(AppEvent::HotkeyPressed);
        publisher().publish(AppEvent::ToggleOverlay);

        assert_eq!(take_event(), Some(AppEvent::HotkeyPressed));
        assert_eq!(drain_events(), vec![AppEvent::ToggleOverlay]);
        assert_eq!(take_event(), None);
    }
}
