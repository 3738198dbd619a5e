//! Per-state lifecycle behavior.

use super::error::MachineError;

/// The unit of behavior attached to a state id.
///
/// A machine drives exactly one behavior at a time through three lifecycle
/// hooks. For any transition from state A to state B the call sequence is
/// `A.on_exit`, `B.on_enter`, then `B.on_execute`; hooks are never skipped,
/// reordered, or invoked on a state that is not current.
///
/// `C` is the context lent to every hook: for game actors this is the
/// [`ActorContext`](crate::actor::ActorContext) holding the domain data and
/// host services the behavior acts through.
pub trait Behavior<C>: Send {
    /// Called exactly once, immediately after this state becomes current and
    /// before any `on_execute` call on it.
    ///
    /// Side effects are allowed (computing a randomized plan, resetting
    /// timers). Infallible: invalid parameters are rejected by the
    /// behavior's constructor with [`MachineError::Configuration`], not here.
    fn on_enter(&mut self, _context: &mut C) {}

    /// Called once per tick while this state is current.
    ///
    /// Safe to call repeatedly; errors from actor actions propagate out of
    /// the tick.
    fn on_execute(&mut self, context: &mut C) -> Result<(), MachineError>;

    /// Called exactly once when this state stops being current, before the
    /// next state's `on_enter`.
    ///
    /// Cleanup and logging only; the transition outcome is already decided.
    fn on_exit(&mut self, _context: &mut C) {}
}

/// A behavior that does nothing on every hook.
///
/// Useful for quiescent states that exist only as transition sources.
#[derive(Clone, Copy, Debug, Default)]
pub struct Idle;

impl<C> Behavior<C> for Idle {
    fn on_execute(&mut self, _context: &mut C) -> Result<(), MachineError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_executes_without_effect() {
        let mut idle = Idle;
        let mut context = 7u32;

        assert!(Behavior::on_execute(&mut idle, &mut context).is_ok());
        assert_eq!(context, 7);
    }

    #[test]
    fn default_hooks_are_no_ops() {
        struct CountOnly {
            executed: u32,
        }

        impl Behavior<()> for CountOnly {
            fn on_execute(&mut self, _context: &mut ()) -> Result<(), MachineError> {
                self.executed += 1;
                Ok(())
            }
        }

        let mut behavior = CountOnly { executed: 0 };
        behavior.on_enter(&mut ());
        behavior.on_execute(&mut ()).unwrap();
        behavior.on_exit(&mut ());

        assert_eq!(behavior.executed, 1);
    }
}
