//! Thread-safe event bus using mpsc channels.
//!
//! Any thread can publish events via `EventPublisher::publish()`; the main
//! thread polls for them via `EventBus::drain()`. Pure std, no external
//! dependencies.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::LifecycleEvent;

/// Multi-producer, single-consumer bus for lifecycle events.
///
/// # Example
///
/// ```
/// use reloj::events::{EventBus, LifecycleEvent};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(LifecycleEvent::Ready);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<LifecycleEvent>,
    receiver: Receiver<LifecycleEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    ///
    /// Returns `Some(event)` if one is available. Must be called from the
    /// consuming (main) thread.
    pub fn try_recv(&self) -> Option<LifecycleEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            // All senders dropped; nothing left to deliver.
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec.
    pub fn drain(&self) -> Vec<LifecycleEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
///
/// Cloning is cheap (just clones the internal `Sender`).
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<LifecycleEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    ///
    /// Non-blocking; the event is queued until the next drain cycle. A send
    /// after the bus is gone is silently dropped; the process is already
    /// shutting down at that point.
    pub fn publish(&self, event: LifecycleEvent) {
        if self.sender.send(event).is_err() {
            log::debug!("event bus closed, dropping {}", event.description());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_events_in_publish_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(LifecycleEvent::Ready);
        publisher.publish(LifecycleEvent::AllWindowsClosed);

        assert_eq!(
            bus.drain(),
            vec![LifecycleEvent::Ready, LifecycleEvent::AllWindowsClosed]
        );
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn publishers_can_cross_threads() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        let handle = std::thread::spawn(move || {
            publisher.publish(LifecycleEvent::AllWindowsClosed);
        });
        handle.join().unwrap();

        assert_eq!(bus.drain(), vec![LifecycleEvent::AllWindowsClosed]);
    }
}
