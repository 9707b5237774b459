//! Request-scoped parameter store.

use serde_json::{Map, Value};

/// Key/value store shared between the dispatcher and the grid's extensions
/// within a single request.
///
/// Single writer, single reader: the dispatcher installs resolved filters,
/// the filter extension reads them back during query construction. Nothing
/// here outlives the request.
#[derive(Debug, Clone, Default)]
pub struct RequestParameters {
    parameters: Map<String, Value>,
}

impl RequestParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.parameters.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }
}
