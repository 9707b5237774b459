//! The grid itself: a name, its extensions and its datasource.

use crate::datasource::Datasource;
use crate::extension::DatagridExtension;
use crate::parameters::RequestParameters;

/// A named, paginated result grid.
///
/// Instances are request-scoped: the manager hands out a fresh grid per
/// request and the query builder is mutated in place while the request is
/// served.
#[derive(Debug, Clone)]
pub struct Datagrid {
    name: String,
    extensions: Vec<DatagridExtension>,
    datasource: Datasource,
    accepted: bool,
}

impl Datagrid {
    pub fn new(name: impl Into<String>, datasource: Datasource) -> Self {
        Self {
            name: name.into(),
            extensions: Vec::new(),
            datasource,
            accepted: false,
        }
    }

    pub fn with_extension(mut self, extension: DatagridExtension) -> Self {
        self.extensions.push(extension);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extensions(&self) -> &[DatagridExtension] {
        &self.extensions
    }

    /// The raw datasource, untouched by extensions.
    pub fn datasource(&self) -> &Datasource {
        &self.datasource
    }

    /// The datasource after every extension visited the query builder.
    ///
    /// Acceptance runs once per grid instance; repeated calls return the
    /// already-visited datasource without re-applying extensions.
    pub fn accepted_datasource(&mut self, parameters: &RequestParameters) -> &mut Datasource {
        if !self.accepted {
            let Self {
                extensions,
                datasource,
                ..
            } = self;
            for extension in extensions.iter() {
                extension.visit_datasource(parameters, datasource.query_builder_mut());
            }
            self.accepted = true;
        }
        &mut self.datasource
    }
}
