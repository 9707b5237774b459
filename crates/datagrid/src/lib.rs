//! `openpim-datagrid` — grids, mass actions and the mass-action dispatcher.
//!
//! This crate is orchestration glue: it resolves a named bulk operation
//! against a named grid, validates the selection, installs filters for query
//! construction and delegates execution to a registered handler. Persistence
//! and query execution live behind the [`datasource`] seam.

pub mod action;
pub mod datagrid;
pub mod datasource;
pub mod dispatcher;
pub mod error;
pub mod extension;
pub mod handler;
pub mod manager;
pub mod parameters;
pub mod request;

pub use action::{MassAction, MassActionResponse};
pub use datagrid::Datagrid;
pub use datasource::{Constraint, Datasource, IdSelectionRepository, MassActionRepository, QueryBuilder};
pub use dispatcher::MassActionDispatcher;
pub use error::MassActionError;
pub use extension::{DatagridExtension, FilterExtension, MassActionExtension};
pub use handler::{HandlerRegistry, MassActionHandler};
pub use manager::{DatagridManager, InMemoryDatagridManager};
pub use parameters::RequestParameters;
pub use request::{DatagridRequest, MassActionParameters, MassActionParametersParser};
