//! Runtime errors for machines and actors.

use thiserror::Error;

/// Errors surfaced by machine operations and actor actions.
///
/// All variants are programmer or configuration errors in a deterministic
/// control system: they are surfaced immediately and never retried or
/// swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// Invalid construction parameters.
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },

    /// An operation referenced a state id with no registered behavior.
    #[error("state '{id}' is not registered with this machine")]
    UnknownState { id: String },

    /// Tick before `initialize` or after `shutdown`.
    #[error("machine is not active; call initialize() before tick()")]
    NotInitialized,

    /// An actor action was invoked with an out-of-bounds index.
    #[error("{collection} index {index} is out of range (len {len})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },
}
