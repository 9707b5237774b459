//! Mass-action handlers and their registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::action::{MassAction, MassActionResponse};
use crate::datagrid::Datagrid;

/// Executes a resolved mass action against a grid.
///
/// By the time a handler runs, the grid's query builder is already
/// constrained by filters and selection; handlers only consume it.
pub trait MassActionHandler: Send + Sync {
    fn handle(&self, datagrid: &Datagrid, action: &MassAction) -> MassActionResponse;
}

/// Alias → handler mapping.
///
/// Populated once during composition-root setup (the builder consumes and
/// returns `self`), read-only for the rest of the process lifetime. No
/// global singleton: the registry is injected into the dispatcher.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn MassActionHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, alias: impl Into<String>, handler: Arc<dyn MassActionHandler>) -> Self {
        self.handlers.insert(alias.into(), handler);
        self
    }

    pub fn handler(&self, alias: &str) -> Option<Arc<dyn MassActionHandler>> {
        self.handlers.get(alias).cloned()
    }
}

impl core::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("aliases", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
