//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::builder::rule::RuleBuilder;
use crate::core::{Rule, StateId};
use crate::machine::{Behavior, Machine};
use std::collections::HashSet;
use std::fmt::Debug;

/// Builder for constructing machines with a fluent API.
///
/// `build` validates what the direct [`Machine`] mutators do not: every rule
/// endpoint must be registered, no state may be registered twice, and
/// shadowed rules are reported as warnings.
pub struct MachineBuilder<S: StateId, E: PartialEq + Debug, C> {
    states: Vec<(S, Box<dyn Behavior<C>>)>,
    rules: Vec<Rule<S, E, C>>,
}

impl<S: StateId, E: PartialEq + Debug, C> MachineBuilder<S, E, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Register a state id with its behavior.
    pub fn state(mut self, id: S, behavior: impl Behavior<C> + 'static) -> Self {
        self.states.push((id, Box::new(behavior)));
        self
    }

    /// Add a pre-built rule.
    pub fn rule(mut self, rule: Rule<S, E, C>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once.
    pub fn rules(mut self, rules: Vec<Rule<S, E, C>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Add a rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(self, builder: RuleBuilder<S, E, C>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        Ok(self.rule(rule))
    }

    /// Build the machine.
    ///
    /// Returns an error when no state is registered, a state is registered
    /// twice, or a rule references an unregistered state. Shadowed rules are
    /// logged as warnings, not errors.
    pub fn build(self) -> Result<Machine<S, E, C>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut ids = HashSet::new();
        for (id, _) in &self.states {
            if !ids.insert(*id) {
                return Err(BuildError::DuplicateState {
                    id: id.name().to_string(),
                });
            }
        }

        for rule in &self.rules {
            for endpoint in [rule.from, rule.to] {
                if !ids.contains(&endpoint) {
                    return Err(BuildError::UnknownState {
                        id: endpoint.name().to_string(),
                    });
                }
            }
        }

        let mut machine = Machine::new();
        for (id, behavior) in self.states {
            machine.add_state(id, behavior);
        }
        for rule in self.rules {
            machine.add_rule(rule);
        }

        for shadow in machine.table().shadowed() {
            tracing::warn!(
                target: "fsm",
                kept = shadow.kept,
                shadowed = shadow.shadowed,
                "transition rule is shadowed by an earlier rule with the same source and trigger"
            );
        }

        Ok(machine)
    }
}

impl<S: StateId, E: PartialEq + Debug, C> Default for MachineBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}
