//! Build errors for machine and rule builders.

use thiserror::Error;

/// Errors that can occur when building machines and rules.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No states registered. Add at least one with .state(id, behavior)")]
    NoStates,

    #[error("State '{id}' registered twice")]
    DuplicateState { id: String },

    #[error("A rule references unregistered state '{id}'")]
    UnknownState { id: String },

    #[error("Rule source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Rule trigger not specified. Call .on(event)")]
    MissingTrigger,

    #[error("Rule target state not specified. Call .to(state)")]
    MissingToState,
}
