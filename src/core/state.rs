//! Core identifier trait for state machine states.
//!
//! State identity is separated from state behavior: identifiers are cheap,
//! comparable values (typically field-less enums) that name each state, while
//! the behavior attached to an identifier lives in the machine's registry.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier for a state machine state.
///
/// Implementations are expected to be field-less enums: one variant per
/// state, unique within a machine and stable for the machine's lifetime.
///
/// # Required Traits
///
/// - `Copy + Eq + Hash`: identifiers key the machine's behavior registry
/// - `Debug`: identifiers appear in diagnostics
/// - `Serialize` + `Deserialize`: transition records are serializable
///
/// # Example
///
/// ```rust
/// use instinct::core::StateId;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum GuardState {
///     Idle,
///     Patrolling,
///     Spawning,
/// }
///
/// impl StateId for GuardState {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Patrolling => "Patrolling",
///             Self::Spawning => "Spawning",
///         }
///     }
/// }
/// ```
pub trait StateId:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the identifier's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &'static str;
}
