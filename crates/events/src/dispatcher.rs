//! Event dispatch abstraction (mechanics only).
//!
//! The dispatcher is a plain publish hook: callers name the event and hand
//! over the payload, and must not assume anything about subscribers. Delivery
//! is synchronous and in-process; persistence or fan-out to external brokers
//! belongs to an implementation, not to this contract.

use crate::event::GenericEvent;

/// Domain-agnostic notification dispatcher.
///
/// Implementations must be safe to share by reference across the components
/// of a single request (`Send + Sync` is required so registries can hold
/// them behind `Arc`).
pub trait EventDispatcher: Send + Sync {
    /// Dispatch `event` to whoever is subscribed to `event_name`.
    ///
    /// Dispatch is fire-and-forget from the caller's point of view:
    /// subscriber failures are an implementation concern.
    fn dispatch(&self, event_name: &'static str, event: GenericEvent);
}

impl<D> EventDispatcher for std::sync::Arc<D>
where
    D: EventDispatcher + ?Sized,
{
    fn dispatch(&self, event_name: &'static str, event: GenericEvent) {
        (**self).dispatch(event_name, event)
    }
}
