//! Notification payloads carried through the dispatcher.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Well-known event names for the category lifecycle.
///
/// Subscribers key off these names; the values are stable identifiers and
/// must not change between releases.
pub mod category_events {
    /// Dispatched before a leaf category is staged for deletion.
    pub const PRE_REMOVE_CATEGORY: &str = "pim_catalog.pre_remove.category";

    /// Dispatched before a whole tree (root category) is staged for deletion.
    pub const PRE_REMOVE_TREE: &str = "pim_catalog.pre_remove.tree";
}

/// A generic notification payload: a subject plus business time.
///
/// Events are immutable facts; the dispatcher hands a copy to every
/// subscriber and makes no assumptions about what they do with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenericEvent {
    subject_id: String,
    subject_type: &'static str,
    occurred_at: DateTime<Utc>,
}

impl GenericEvent {
    pub fn new(subject_id: impl Into<String>, subject_type: &'static str) -> Self {
        Self {
            subject_id: subject_id.into(),
            subject_type,
            occurred_at: Utc::now(),
        }
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn subject_type(&self) -> &'static str {
        self.subject_type
    }

    /// When the event occurred (business time).
    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
