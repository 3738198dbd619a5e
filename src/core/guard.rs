//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions over the actor context that determine
//! whether a transition rule may fire. They encode the polled-condition half
//! of a trigger: the rule's event must match, and the guard (if any) must
//! pass against the context at that tick.

/// Pure predicate that determines if a rule can fire.
///
/// Guards are evaluated during rule resolution, before any lifecycle hook
/// runs. They must be deterministic and free of side effects: the machine
/// may evaluate any number of guards in a tick that ends with no transition.
///
/// # Example
///
/// ```rust
/// use instinct::core::Guard;
///
/// struct Camp {
///     reinforcements: u32,
/// }
///
/// // Only raid while reserves remain.
/// let can_raid = Guard::new(|camp: &Camp| camp.reinforcements > 0);
///
/// assert!(can_raid.check(&Camp { reinforcements: 3 }));
/// assert!(!can_raid.check(&Camp { reinforcements: 0 }));
/// ```
pub struct Guard<C> {
    predicate: Box<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows a transition given this context.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}
