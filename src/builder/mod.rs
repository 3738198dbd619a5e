//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders, free-function rule helpers, and the
//! [`state_ids!`](crate::state_ids) macro for defining identifier enums with
//! minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod rule;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use rule::RuleBuilder;

use crate::core::{Guard, Rule, StateId};

/// Create a simple unguarded rule.
///
/// # Example
///
/// ```
/// use instinct::builder::rule;
/// use instinct::state_ids;
///
/// state_ids! {
///     enum Camp {
///         Holding,
///         Raiding,
///     }
/// }
///
/// let rule = rule::<Camp, &str, ()>(Camp::Holding, "raid", Camp::Raiding);
/// assert!(rule.matches(Camp::Holding, &"raid", &()));
/// ```
pub fn rule<S, E, C>(from: S, on: E, to: S) -> Rule<S, E, C>
where
    S: StateId,
    E: PartialEq,
{
    Rule::new(from, on, to)
}

/// Create a rule with a guard predicate.
///
/// # Example
///
/// ```
/// use instinct::builder::guarded_rule;
/// use instinct::state_ids;
///
/// state_ids! {
///     enum Camp {
///         Holding,
///         Raiding,
///     }
/// }
///
/// struct Ctx {
///     reserves: u32,
/// }
///
/// let rule = guarded_rule(Camp::Holding, "raid", Camp::Raiding, |ctx: &Ctx| {
///     ctx.reserves > 0
/// });
///
/// assert!(rule.matches(Camp::Holding, &"raid", &Ctx { reserves: 1 }));
/// assert!(!rule.matches(Camp::Holding, &"raid", &Ctx { reserves: 0 }));
/// ```
pub fn guarded_rule<S, E, C, F>(from: S, on: E, to: S, predicate: F) -> Rule<S, E, C>
where
    S: StateId,
    E: PartialEq,
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    Rule::new(from, on, to).with_guard(Guard::new(predicate))
}
