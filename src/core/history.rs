//! Transition log for committed state changes.
//!
//! The log is diagnostic: it records what the machine did and when, and it
//! never influences rule resolution.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single committed transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: StateId> {
    /// The state that was exited
    pub from: S,
    /// The state that was entered
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// The tick on which the transition occurred
    pub tick: u64,
}

/// Ordered log of committed transitions.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use instinct::core::{StateId, TransitionLog, TransitionRecord};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Step {
///     A,
///     B,
/// }
///
/// impl StateId for Step {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::A => "A",
///             Self::B => "B",
///         }
///     }
/// }
///
/// let mut log = TransitionLog::new();
/// log.record(TransitionRecord {
///     from: Step::A,
///     to: Step::B,
///     timestamp: Utc::now(),
///     tick: 1,
/// });
///
/// assert_eq!(log.path(), vec![Step::A, Step::B]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: StateId> {
    records: Vec<TransitionRecord<S>>,
}

impl<S: StateId> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId> TransitionLog<S> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a transition record.
    pub fn record(&mut self, record: TransitionRecord<S>) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[TransitionRecord<S>] {
        &self.records
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&TransitionRecord<S>> {
        self.records.last()
    }

    /// The path of states traversed: the first record's source state,
    /// then the target of each record in order. Empty when no transition
    /// has been committed.
    pub fn path(&self) -> Vec<S> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|record| record.to));
        path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
