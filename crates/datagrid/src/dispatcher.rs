//! Mass-action dispatch: resolution, validation, selection, hand-off.

use std::sync::Arc;

use serde_json::Value;

use crate::action::{MassAction, MassActionResponse};
use crate::datagrid::Datagrid;
use crate::error::MassActionError;
use crate::extension::{DatagridExtension, FilterExtension, MassActionExtension};
use crate::handler::{HandlerRegistry, MassActionHandler};
use crate::manager::DatagridManager;
use crate::parameters::RequestParameters;
use crate::request::{DatagridRequest, MassActionParametersParser};

/// Resolves a mass action out of an inbound request and hands it to its
/// registered handler.
///
/// The dispatcher owns no query logic and no persistence: it validates the
/// selection, resolves grid/action/handler, installs filters for query
/// construction and delegates. Every step is a potential failure point; see
/// [`MassActionError`] for the taxonomy.
pub struct MassActionDispatcher<M> {
    handler_registry: HandlerRegistry,
    manager: M,
    request_parameters: RequestParameters,
    parameters_parser: MassActionParametersParser,
}

impl<M> MassActionDispatcher<M>
where
    M: DatagridManager,
{
    pub fn new(handler_registry: HandlerRegistry, manager: M) -> Self {
        Self {
            handler_registry,
            manager,
            request_parameters: RequestParameters::new(),
            parameters_parser: MassActionParametersParser,
        }
    }

    /// Dispatch a grid mass action.
    pub fn dispatch(
        &mut self,
        request: &DatagridRequest,
    ) -> Result<MassActionResponse, MassActionError> {
        let parameters = self.parameters_parser.parse(request);

        // An inset selection with no ids has no explicit target and no
        // exclusion: refuse before touching the grid.
        if parameters.inset && parameters.values.is_empty() {
            return Err(MassActionError::EmptySelection {
                action: request.action_name.clone(),
            });
        }

        let mut datagrid = self.manager.datagrid(&request.grid_name)?;
        let mass_action = Self::mass_action_by_name(&request.action_name, &datagrid)?.clone();

        self.request_parameters.set(
            FilterExtension::FILTER_ROOT_PARAM,
            Value::Object(parameters.filters),
        );

        tracing::debug!(
            action = mass_action.name(),
            grid = datagrid.name(),
            inset = parameters.inset,
            targets = parameters.values.len(),
            "performing mass action"
        );

        self.perform_mass_action(
            &mut datagrid,
            &mass_action,
            parameters.inset,
            &parameters.values,
        )
    }

    /// Standalone grid + action resolution for callers that already hold the
    /// names rather than a full request.
    pub fn mass_action_by_names(
        &self,
        action_name: &str,
        grid_name: &str,
    ) -> Result<MassAction, MassActionError> {
        let datagrid = self.manager.datagrid(grid_name)?;
        Self::mass_action_by_name(action_name, &datagrid).cloned()
    }

    /// Read-only view of the request parameter store.
    pub fn request_parameters(&self) -> &RequestParameters {
        &self.request_parameters
    }

    /// Constrain the query builder per the selection, then invoke the handler.
    fn perform_mass_action(
        &mut self,
        datagrid: &mut Datagrid,
        mass_action: &MassAction,
        inset: bool,
        values: &[String],
    ) -> Result<MassActionResponse, MassActionError> {
        datagrid
            .accepted_datasource(&self.request_parameters)
            .apply_mass_action_parameters(inset, values);

        let handler = self.mass_action_handler(mass_action)?;
        Ok(handler.handle(datagrid, mass_action))
    }

    fn mass_action_by_name<'g>(
        action_name: &str,
        datagrid: &'g Datagrid,
    ) -> Result<&'g MassAction, MassActionError> {
        let extension = Self::mass_action_extension(datagrid)?;
        extension
            .mass_action(action_name)
            .ok_or_else(|| MassActionError::UnknownMassAction(action_name.to_owned()))
    }

    /// Exactly one mass-action extension is expected per grid; the first one
    /// wins if a grid is misconfigured with several.
    fn mass_action_extension(datagrid: &Datagrid) -> Result<&MassActionExtension, MassActionError> {
        datagrid
            .extensions()
            .iter()
            .find_map(DatagridExtension::as_mass_action)
            .ok_or_else(|| MassActionError::ExtensionNotApplied {
                grid: datagrid.name().to_owned(),
            })
    }

    /// Registry misses fail fast: an action pointing at an unregistered
    /// handler is a wiring bug, not a user error.
    fn mass_action_handler(
        &self,
        mass_action: &MassAction,
    ) -> Result<Arc<dyn MassActionHandler>, MassActionError> {
        let alias =
            mass_action
                .handler_alias()
                .ok_or_else(|| MassActionError::MissingHandlerAlias {
                    action: mass_action.name().to_owned(),
                })?;

        self.handler_registry
            .handler(alias)
            .ok_or_else(|| MassActionError::UnknownHandler(alias.to_owned()))
    }
}
