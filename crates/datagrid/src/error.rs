//! Mass-action failure taxonomy.

use thiserror::Error;

/// Failures surfaced by the mass-action dispatch flow.
///
/// All of these are single-shot, request-scoped failures: nothing is retried
/// here, the surrounding layer translates them for the end user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MassActionError {
    /// `inset` selection with no target ids: nothing to include, nothing to
    /// exclude, so the operation is meaningless.
    #[error("there is nothing to do in mass action \"{action}\"")]
    EmptySelection { action: String },

    /// The named grid is not registered with the manager.
    #[error("datagrid \"{0}\" is not registered")]
    UnknownDatagrid(String),

    /// The grid carries no mass-action extension. Misconfiguration.
    #[error("mass action extension is not applied to datagrid \"{grid}\"")]
    ExtensionNotApplied { grid: String },

    /// The extension has no action by that name.
    #[error("can't find mass action \"{0}\"")]
    UnknownMassAction(String),

    /// The action options carry no `handler` alias.
    #[error("mass action \"{action}\" has no \"handler\" option")]
    MissingHandlerAlias { action: String },

    /// The alias resolves to nothing in the handler registry.
    #[error("unknown mass action handler \"{0}\"")]
    UnknownHandler(String),
}
