//! Grid extensions.
//!
//! Extensions are the pluggable behaviors of a grid. The set is a closed
//! enum: "find the mass-action-capable extension" is a variant lookup, not a
//! runtime type test.

use std::collections::HashMap;

use serde_json::Value;

use crate::action::MassAction;
use crate::datasource::{Constraint, QueryBuilder};
use crate::parameters::RequestParameters;

/// One registered extension of a grid.
#[derive(Debug, Clone)]
pub enum DatagridExtension {
    MassAction(MassActionExtension),
    Filter(FilterExtension),
}

impl DatagridExtension {
    /// Capability query: the mass-action extension, if this is one.
    pub fn as_mass_action(&self) -> Option<&MassActionExtension> {
        match self {
            DatagridExtension::MassAction(extension) => Some(extension),
            DatagridExtension::Filter(_) => None,
        }
    }

    /// Let the extension contribute to query construction.
    pub fn visit_datasource(&self, parameters: &RequestParameters, builder: &mut QueryBuilder) {
        match self {
            DatagridExtension::Filter(extension) => {
                extension.visit_datasource(parameters, builder);
            }
            // Mass-action selection is applied explicitly by the dispatcher,
            // not during acceptance.
            DatagridExtension::MassAction(_) => {}
        }
    }
}

/// Holds the mass actions registered on a grid, by name.
#[derive(Debug, Clone, Default)]
pub struct MassActionExtension {
    actions: HashMap<String, MassAction>,
}

impl MassActionExtension {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(mut self, action: MassAction) -> Self {
        self.actions.insert(action.name().to_owned(), action);
        self
    }

    pub fn mass_action(&self, name: &str) -> Option<&MassAction> {
        self.actions.get(name)
    }
}

/// Folds filters installed in the request parameters into the query builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterExtension;

impl FilterExtension {
    /// Well-known request-parameter key under which resolved filters are
    /// installed before query construction.
    pub const FILTER_ROOT_PARAM: &'static str = "_filter";

    pub fn visit_datasource(&self, parameters: &RequestParameters, builder: &mut QueryBuilder) {
        let Some(Value::Object(filters)) = parameters.get(Self::FILTER_ROOT_PARAM) else {
            return;
        };
        for (field, value) in filters {
            builder.add_constraint(Constraint::Field {
                field: field.clone(),
                value: value.clone(),
            });
        }
    }
}
