//! Mass actions and their responses.

use serde_json::{Map, Value};

/// A bulk operation registered on a grid, identified by name within the
/// grid's mass-action extension.
///
/// Options are an open map; the one key this crate interprets is `handler`,
/// the alias under which the action's handler is registered.
#[derive(Debug, Clone, PartialEq)]
pub struct MassAction {
    name: String,
    options: Map<String, Value>,
}

impl MassAction {
    pub fn new(name: impl Into<String>, options: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    /// Action whose options carry only a handler alias.
    pub fn with_handler(name: impl Into<String>, handler_alias: impl Into<String>) -> Self {
        let mut options = Map::new();
        options.insert("handler".into(), Value::String(handler_alias.into()));
        Self::new(name, options)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    /// The registered handler alias, if the options carry one.
    pub fn handler_alias(&self) -> Option<&str> {
        self.options.get("handler").and_then(Value::as_str)
    }
}

/// Outcome of a mass action, as reported by its handler.
#[derive(Debug, Clone, PartialEq)]
pub struct MassActionResponse {
    successful: bool,
    message: String,
    options: Map<String, Value>,
}

impl MassActionResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            successful: true,
            message: message.into(),
            options: Map::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            successful: false,
            message: message.into(),
            options: Map::new(),
        }
    }

    /// Attach extra response data (e.g. affected row count).
    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    pub fn is_successful(&self) -> bool {
        self.successful
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }
}
