//! Declarative transition rules and their resolution table.
//!
//! A rule maps (source state, trigger event, optional guard) to a target
//! state. The table scans its rules in declaration order and the first match
//! wins, so overlapping rules are resolved by priority rather than rejected.

use super::guard::Guard;
use super::state::StateId;

/// A single transition rule.
///
/// The rule fires when the machine's current state equals `from`, the
/// trigger supplied to the tick equals `on`, and `guard` (when present)
/// passes against the context.
///
/// # Example
///
/// ```rust
/// use instinct::core::{Guard, Rule};
/// use serde::{Deserialize, Serialize};
/// # use instinct::core::StateId;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Camp {
///     Holding,
///     Raiding,
/// }
/// # impl StateId for Camp {
/// #     fn name(&self) -> &'static str {
/// #         match self {
/// #             Self::Holding => "Holding",
/// #             Self::Raiding => "Raiding",
/// #         }
/// #     }
/// # }
///
/// struct Ctx {
///     reserves: u32,
/// }
///
/// let rule = Rule::new(Camp::Holding, "raid", Camp::Raiding)
///     .with_guard(Guard::new(|ctx: &Ctx| ctx.reserves > 0));
///
/// assert!(rule.matches(Camp::Holding, &"raid", &Ctx { reserves: 2 }));
/// assert!(!rule.matches(Camp::Holding, &"raid", &Ctx { reserves: 0 }));
/// assert!(!rule.matches(Camp::Raiding, &"raid", &Ctx { reserves: 2 }));
/// ```
pub struct Rule<S: StateId, E, C> {
    /// Source state the machine must be in.
    pub from: S,
    /// Trigger event the tick must carry.
    pub on: E,
    /// Target state on a successful match.
    pub to: S,
    /// Optional polled condition against the context.
    pub guard: Option<Guard<C>>,
}

impl<S: StateId, E: PartialEq, C> Rule<S, E, C> {
    /// Create an unguarded rule.
    pub fn new(from: S, on: E, to: S) -> Self {
        Self {
            from,
            on,
            to,
            guard: None,
        }
    }

    /// Attach a guard predicate to the rule.
    pub fn with_guard(mut self, guard: Guard<C>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Check whether this rule fires for the given state, event, and context.
    pub fn matches(&self, from: S, event: &E, context: &C) -> bool {
        if self.from != from || self.on != *event {
            return false;
        }
        self.guard.as_ref().is_none_or(|g| g.check(context))
    }
}

/// A rule made unreachable by an earlier rule in the table.
///
/// Reported when an earlier, unguarded rule shares the shadowed rule's
/// source state and trigger. Shadowing is a configuration smell rather than
/// an error: the table stays usable and the first rule keeps winning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShadowedRule {
    /// Index of the earlier rule that always wins.
    pub kept: usize,
    /// Index of the rule that can never fire.
    pub shadowed: usize,
}

/// Ordered set of transition rules.
///
/// Rules are evaluated in the order they were added; `resolve` returns the
/// first rule that matches, or `None` when no transition should occur.
pub struct TransitionTable<S: StateId, E, C> {
    rules: Vec<Rule<S, E, C>>,
}

impl<S: StateId, E: PartialEq, C> TransitionTable<S, E, C> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. Later rules have lower priority.
    pub fn add(&mut self, rule: Rule<S, E, C>) {
        self.rules.push(rule);
    }

    /// Find the first rule that fires for this state, event, and context.
    pub fn resolve(&self, from: S, event: &E, context: &C) -> Option<&Rule<S, E, C>> {
        self.rules
            .iter()
            .find(|rule| rule.matches(from, event, context))
    }

    /// All rules, in priority order.
    pub fn rules(&self) -> &[Rule<S, E, C>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Report rules that can never fire.
    ///
    /// A rule is shadowed when an earlier rule has the same source state and
    /// trigger and carries no guard. Guarded earlier rules are not reported;
    /// whether they always win depends on runtime context.
    pub fn shadowed(&self) -> Vec<ShadowedRule> {
        let mut report = Vec::new();
        for (later, rule) in self.rules.iter().enumerate() {
            for (earlier, candidate) in self.rules[..later].iter().enumerate() {
                if candidate.from == rule.from
                    && candidate.on == rule.on
                    && candidate.guard.is_none()
                {
                    report.push(ShadowedRule {
                        kept: earlier,
                        shadowed: later,
                    });
                    break;
                }
            }
        }
        report
    }
}

impl<S: StateId, E: PartialEq, C> Default for TransitionTable<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}
