//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{Guard, Rule, StateId};

/// Builder for constructing rules with a fluent API.
pub struct RuleBuilder<S: StateId, E, C> {
    from: Option<S>,
    on: Option<E>,
    to: Option<S>,
    guard: Option<Guard<C>>,
}

impl<S: StateId, E: PartialEq, C> RuleBuilder<S, E, C> {
    /// Create a new rule builder.
    pub fn new() -> Self {
        Self {
            from: None,
            on: None,
            to: None,
            guard: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the trigger event (required).
    pub fn on(mut self, event: E) -> Self {
        self.on = Some(event);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard<C>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<Rule<S, E, C>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let on = self.on.ok_or(BuildError::MissingTrigger)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        let mut rule = Rule::new(from, on, to);
        if let Some(guard) = self.guard {
            rule = rule.with_guard(guard);
        }
        Ok(rule)
    }
}

impl<S: StateId, E: PartialEq, C> Default for RuleBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}
