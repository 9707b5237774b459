//! In-memory recording dispatcher for tests/dev.

use std::sync::Mutex;

use crate::dispatcher::EventDispatcher;
use crate::event::GenericEvent;

/// Dispatcher that records every `(name, event)` pair it sees.
///
/// - No IO / no async
/// - Order of recording matches dispatch order
#[derive(Debug, Default)]
pub struct RecordingEventDispatcher {
    dispatched: Mutex<Vec<(&'static str, GenericEvent)>>,
}

impl RecordingEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything dispatched so far.
    pub fn dispatched(&self) -> Vec<(&'static str, GenericEvent)> {
        self.dispatched
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    /// Names of the dispatched events, in dispatch order.
    pub fn dispatched_names(&self) -> Vec<&'static str> {
        self.dispatched()
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }
}

impl EventDispatcher for RecordingEventDispatcher {
    fn dispatch(&self, event_name: &'static str, event: GenericEvent) {
        tracing::debug!(event_name, subject = %event.subject_id(), "dispatching event");

        // If the lock is poisoned the event is dropped; the recorder is a
        // test/dev facility and must not take the request down with it.
        if let Ok(mut dispatched) = self.dispatched.lock() {
            dispatched.push((event_name, event));
        }
    }
}
