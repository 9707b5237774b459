//! Query construction seam.
//!
//! The dispatcher holds no query logic. It records what should constrain the
//! result set; turning constraints into SQL (or anything else) is the job of
//! whatever executes the grid.

use std::sync::Arc;

use serde_json::Value;

/// A single restriction on the grid's result set.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Field equality filter contributed by the filter extension.
    Field { field: String, value: Value },

    /// Row id must be one of the listed ids.
    IdIn(Vec<String>),

    /// Row id must not be one of the listed ids (select-all-except).
    IdNotIn(Vec<String>),
}

/// Accumulates constraints in the order they were applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryBuilder {
    constraints: Vec<Constraint>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}

/// Selection capability of a datasource: constrain a query builder according
/// to mass-action selection parameters.
pub trait MassActionRepository: Send + Sync {
    /// Restrict `query_builder` to rows whose id is in `values` when `inset`,
    /// or to rows whose id is *not* in `values` otherwise.
    fn apply_mass_action_parameters(
        &self,
        query_builder: &mut QueryBuilder,
        inset: bool,
        values: &[String],
    );
}

/// Default selection repository: constrains by row id.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdSelectionRepository;

impl MassActionRepository for IdSelectionRepository {
    fn apply_mass_action_parameters(
        &self,
        query_builder: &mut QueryBuilder,
        inset: bool,
        values: &[String],
    ) {
        let values = values.to_vec();
        let constraint = if inset {
            Constraint::IdIn(values)
        } else {
            Constraint::IdNotIn(values)
        };
        query_builder.add_constraint(constraint);
    }
}

/// A grid's data source: a query builder plus the selection capability.
#[derive(Clone)]
pub struct Datasource {
    query_builder: QueryBuilder,
    repository: Arc<dyn MassActionRepository>,
}

impl Datasource {
    pub fn new(repository: Arc<dyn MassActionRepository>) -> Self {
        Self {
            query_builder: QueryBuilder::new(),
            repository,
        }
    }

    /// Datasource backed by the default id-based selection repository.
    pub fn with_id_selection() -> Self {
        Self::new(Arc::new(IdSelectionRepository))
    }

    pub fn query_builder(&self) -> &QueryBuilder {
        &self.query_builder
    }

    pub fn query_builder_mut(&mut self) -> &mut QueryBuilder {
        &mut self.query_builder
    }

    /// Have the selection repository constrain this datasource's builder.
    pub fn apply_mass_action_parameters(&mut self, inset: bool, values: &[String]) {
        let repository = Arc::clone(&self.repository);
        repository.apply_mass_action_parameters(&mut self.query_builder, inset, values);
    }
}

impl core::fmt::Debug for Datasource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Datasource")
            .field("query_builder", &self.query_builder)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_selection_restricts_to_listed_ids() {
        let mut datasource = Datasource::with_id_selection();
        datasource.apply_mass_action_parameters(true, &["1".into(), "2".into()]);

        assert_eq!(
            datasource.query_builder().constraints(),
            &[Constraint::IdIn(vec!["1".into(), "2".into()])]
        );
    }

    #[test]
    fn outset_selection_excludes_listed_ids() {
        let mut datasource = Datasource::with_id_selection();
        datasource.apply_mass_action_parameters(false, &["7".into()]);

        assert_eq!(
            datasource.query_builder().constraints(),
            &[Constraint::IdNotIn(vec!["7".into()])]
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The selection mode alone decides between include and exclude;
            /// the id list goes through untouched.
            #[test]
            fn selection_constraint_mirrors_inset_and_values(
                inset in any::<bool>(),
                values in proptest::collection::vec("[a-z0-9]{1,8}", 0..16),
            ) {
                let mut datasource = Datasource::with_id_selection();
                datasource.apply_mass_action_parameters(inset, &values);

                let expected = if inset {
                    Constraint::IdIn(values.clone())
                } else {
                    Constraint::IdNotIn(values.clone())
                };
                prop_assert_eq!(datasource.query_builder().constraints(), &[expected]);
            }
        }
    }
}
