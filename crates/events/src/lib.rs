//! `openpim-events` — notification names, payloads and dispatch seam.

pub mod dispatcher;
pub mod event;
pub mod recording;

pub use dispatcher::EventDispatcher;
pub use event::{GenericEvent, category_events};
pub use recording::RecordingEventDispatcher;
