//! Grid resolution by name.

use std::collections::HashMap;

use crate::datagrid::Datagrid;
use crate::error::MassActionError;

/// Resolves a named grid, yielding a request-scoped instance.
pub trait DatagridManager {
    fn datagrid(&self, name: &str) -> Result<Datagrid, MassActionError>;
}

/// Manager serving clones of registered grid prototypes.
///
/// Each resolution returns a fresh copy so per-request query-builder state
/// never leaks between requests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatagridManager {
    grids: HashMap<String, Datagrid>,
}

impl InMemoryDatagridManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, grid: Datagrid) -> Self {
        self.grids.insert(grid.name().to_owned(), grid);
        self
    }
}

impl DatagridManager for InMemoryDatagridManager {
    fn datagrid(&self, name: &str) -> Result<Datagrid, MassActionError> {
        self.grids
            .get(name)
            .cloned()
            .ok_or_else(|| MassActionError::UnknownDatagrid(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::Datasource;

    #[test]
    fn unknown_grid_is_an_error() {
        let manager = InMemoryDatagridManager::new();

        assert_eq!(
            manager.datagrid("nope").unwrap_err(),
            MassActionError::UnknownDatagrid("nope".into())
        );
    }

    #[test]
    fn resolution_returns_a_fresh_instance() {
        let manager = InMemoryDatagridManager::new()
            .register(Datagrid::new("product-grid", Datasource::with_id_selection()));

        let mut first = manager.datagrid("product-grid").unwrap();
        assert!(first.datasource().query_builder().constraints().is_empty());
        first
            .accepted_datasource(&crate::parameters::RequestParameters::new())
            .apply_mass_action_parameters(true, &["1".into()]);

        let second = manager.datagrid("product-grid").unwrap();
        assert!(second.datasource().query_builder().constraints().is_empty());
    }
}
