//! The finite state machine that drives lifecycle hooks.
//!
//! A [`Machine`] owns one behavior per registered state id, the transition
//! table, and the transition log. An external host advances it one tick at
//! a time; the machine never runs on its own.

pub mod behavior;
pub mod error;

pub use behavior::{Behavior, Idle};
pub use error::MachineError;

use crate::core::{Rule, StateId, TransitionLog, TransitionRecord, TransitionTable};
use chrono::Utc;
use std::collections::HashMap;
use std::fmt::Debug;

/// Lifecycle phase of a machine.
///
/// `Uninitialized` becomes `Active` through [`Machine::initialize`]; `Active`
/// stays `Active` across transitions; [`Machine::shutdown`] moves any phase
/// to the terminal `ShutDown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase<S> {
    /// No state has been entered yet.
    Uninitialized,
    /// The machine is running with this current state.
    Active(S),
    /// Terminal: the last current state has been exited.
    ShutDown,
}

/// A finite state machine driven by external ticks.
///
/// `S` is the state identifier, `E` the trigger event compared against the
/// transition table, and `C` the context lent to every lifecycle hook.
///
/// # Tick policy
///
/// A tick first evaluates the transition table against the current state and
/// the supplied event. When a rule fires, the machine runs the old state's
/// `on_exit`, then the new state's `on_enter`, then sets the new state
/// current. The tick then always runs `on_execute` on whatever state is
/// current at that point: a tick that transitions executes the **new**
/// state in that same tick, and the old state's `on_execute` is skipped.
///
/// Every failable check (phase, rule resolution, target registration) runs
/// before `on_exit`; a failed tick leaves the machine exactly as it found
/// it, and the exit/enter pair never completes partially.
///
/// # Example
///
/// ```rust
/// use instinct::builder::{rule, MachineBuilder};
/// use instinct::machine::{Idle, Phase};
/// use instinct::state_ids;
///
/// state_ids! {
///     enum Sentry {
///         Dormant,
///         Alert,
///     }
/// }
///
/// let mut machine = MachineBuilder::<Sentry, &str, ()>::new()
///     .state(Sentry::Dormant, Idle)
///     .state(Sentry::Alert, Idle)
///     .rule(rule(Sentry::Dormant, "noise", Sentry::Alert))
///     .build()
///     .unwrap();
///
/// machine.initialize(Sentry::Dormant, &mut ()).unwrap();
/// machine.tick(&"noise", &mut ()).unwrap();
/// assert_eq!(machine.phase(), Phase::Active(Sentry::Alert));
///
/// machine.shutdown(&mut ());
/// assert_eq!(machine.phase(), Phase::ShutDown);
/// ```
pub struct Machine<S: StateId, E: PartialEq + Debug, C> {
    behaviors: HashMap<S, Box<dyn Behavior<C>>>,
    table: TransitionTable<S, E, C>,
    phase: Phase<S>,
    log: TransitionLog<S>,
    ticks: u64,
}

impl<S: StateId, E: PartialEq + Debug, C> Machine<S, E, C> {
    /// Create an empty, uninitialized machine.
    ///
    /// Prefer [`MachineBuilder`](crate::builder::MachineBuilder), which
    /// validates rule endpoints and reports shadowed rules at build time.
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            table: TransitionTable::new(),
            phase: Phase::Uninitialized,
            log: TransitionLog::new(),
            ticks: 0,
        }
    }

    /// Register the behavior for a state id, replacing any previous one.
    pub fn add_state(&mut self, id: S, behavior: Box<dyn Behavior<C>>) {
        self.behaviors.insert(id, behavior);
    }

    /// Append a transition rule. Later rules have lower priority.
    pub fn add_rule(&mut self, rule: Rule<S, E, C>) {
        self.table.add(rule);
    }

    /// Enter the initial state and become active.
    ///
    /// Fails with [`MachineError::UnknownState`] when `initial` has no
    /// registered behavior, leaving the machine uninitialized with no hook
    /// called. Fails with [`MachineError::Configuration`] when the machine
    /// is already active or shut down.
    pub fn initialize(&mut self, initial: S, context: &mut C) -> Result<(), MachineError> {
        match self.phase {
            Phase::Uninitialized => {}
            Phase::Active(_) | Phase::ShutDown => {
                return Err(MachineError::Configuration {
                    reason: "machine has already been initialized".to_string(),
                })
            }
        }

        let behavior = self
            .behaviors
            .get_mut(&initial)
            .ok_or_else(|| MachineError::UnknownState {
                id: initial.name().to_string(),
            })?;
        behavior.on_enter(context);
        self.phase = Phase::Active(initial);
        tracing::debug!(target: "fsm", state = initial.name(), "machine initialized");
        Ok(())
    }

    /// Advance the machine by one tick.
    ///
    /// Evaluates the transition table against the current state and `event`,
    /// commits the first matching rule (exit, enter, log), then runs
    /// `on_execute` on the now-current state. See the type-level docs for
    /// the same-tick execute policy.
    ///
    /// Fails with [`MachineError::NotInitialized`] before `initialize` or
    /// after `shutdown`.
    pub fn tick(&mut self, event: &E, context: &mut C) -> Result<(), MachineError> {
        let current = match self.phase {
            Phase::Active(id) => id,
            Phase::Uninitialized | Phase::ShutDown => return Err(MachineError::NotInitialized),
        };
        let tick = self.ticks + 1;

        let mut active = current;
        if let Some(next) = self.table.resolve(current, event, context).map(|rule| rule.to) {
            // The target must be known before any hook runs; a failed tick
            // must leave the machine untouched.
            if !self.behaviors.contains_key(&next) {
                return Err(MachineError::UnknownState {
                    id: next.name().to_string(),
                });
            }

            if let Some(departing) = self.behaviors.get_mut(&current) {
                departing.on_exit(context);
            }
            if let Some(entering) = self.behaviors.get_mut(&next) {
                entering.on_enter(context);
            }
            self.log.record(TransitionRecord {
                from: current,
                to: next,
                timestamp: Utc::now(),
                tick,
            });
            self.phase = Phase::Active(next);
            tracing::debug!(
                target: "fsm",
                from = current.name(),
                to = next.name(),
                tick,
                "state transition"
            );
            active = next;
        }
        self.ticks = tick;

        let behavior = self
            .behaviors
            .get_mut(&active)
            .ok_or_else(|| MachineError::UnknownState {
                id: active.name().to_string(),
            })?;
        behavior.on_execute(context)
    }

    /// Exit the current state, if any, and shut the machine down.
    ///
    /// Idempotent: repeated calls are no-ops, and shutting down an
    /// uninitialized machine simply makes it terminal.
    pub fn shutdown(&mut self, context: &mut C) {
        if let Phase::Active(id) = self.phase {
            if let Some(behavior) = self.behaviors.get_mut(&id) {
                behavior.on_exit(context);
            }
            tracing::debug!(target: "fsm", state = id.name(), "machine shut down");
        }
        self.phase = Phase::ShutDown;
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase<S> {
        self.phase
    }

    /// The current state id, when active.
    pub fn current_state(&self) -> Option<S> {
        match self.phase {
            Phase::Active(id) => Some(id),
            Phase::Uninitialized | Phase::ShutDown => None,
        }
    }

    /// The transition table.
    pub fn table(&self) -> &TransitionTable<S, E, C> {
        &self.table
    }

    /// The log of committed transitions.
    pub fn log(&self) -> &TransitionLog<S> {
        &self.log
    }

    /// Number of ticks processed while active.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl<S: StateId, E: PartialEq + Debug, C> Default for Machine<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum SentryState {
        Idle,
        Spawning,
    }

    impl StateId for SentryState {
        fn name(&self) -> &'static str {
            match self {
                Self::Idle => "Idle",
                Self::Spawning => "Spawning",
            }
        }
    }

    type CallLog = Arc<Mutex<Vec<(&'static str, &'static str)>>>;

    struct Probe {
        state: &'static str,
        calls: CallLog,
    }

    impl Probe {
        fn boxed(state: &'static str, calls: &CallLog) -> Box<dyn Behavior<()>> {
            Box::new(Self {
                state,
                calls: Arc::clone(calls),
            })
        }
    }

    impl Behavior<()> for Probe {
        fn on_enter(&mut self, _context: &mut ()) {
            self.calls.lock().unwrap().push((self.state, "enter"));
        }

        fn on_execute(&mut self, _context: &mut ()) -> Result<(), MachineError> {
            self.calls.lock().unwrap().push((self.state, "execute"));
            Ok(())
        }

        fn on_exit(&mut self, _context: &mut ()) {
            self.calls.lock().unwrap().push((self.state, "exit"));
        }
    }

    fn probe_machine(calls: &CallLog) -> Machine<SentryState, &'static str, ()> {
        let mut machine = Machine::new();
        machine.add_state(SentryState::Idle, Probe::boxed("Idle", calls));
        machine.add_state(SentryState::Spawning, Probe::boxed("Spawning", calls));
        machine.add_rule(Rule::new(SentryState::Idle, "start", SentryState::Spawning));
        machine
    }

    #[test]
    fn transition_follows_exit_enter_execute_order() {
        let calls: CallLog = CallLog::default();
        let mut machine = probe_machine(&calls);

        machine.initialize(SentryState::Idle, &mut ()).unwrap();
        machine.tick(&"start", &mut ()).unwrap();

        assert_eq!(machine.current_state(), Some(SentryState::Spawning));
        assert_eq!(
            *calls.lock().unwrap(),
            vec![
                ("Idle", "enter"),
                ("Idle", "exit"),
                ("Spawning", "enter"),
                ("Spawning", "execute"),
            ]
        );
    }

    #[test]
    fn unmatched_event_executes_current_state_only() {
        let calls: CallLog = CallLog::default();
        let mut machine = probe_machine(&calls);

        machine.initialize(SentryState::Idle, &mut ()).unwrap();
        machine.tick(&"start", &mut ()).unwrap();
        calls.lock().unwrap().clear();

        machine.tick(&"noop", &mut ()).unwrap();

        assert_eq!(machine.current_state(), Some(SentryState::Spawning));
        assert_eq!(*calls.lock().unwrap(), vec![("Spawning", "execute")]);
    }

    #[test]
    fn initialize_unknown_state_leaves_machine_uninitialized() {
        let calls: CallLog = CallLog::default();
        let mut machine: Machine<SentryState, &str, ()> = Machine::new();
        machine.add_state(SentryState::Idle, Probe::boxed("Idle", &calls));

        let result = machine.initialize(SentryState::Spawning, &mut ());

        assert_eq!(
            result,
            Err(MachineError::UnknownState {
                id: "Spawning".to_string()
            })
        );
        assert_eq!(machine.phase(), Phase::Uninitialized);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn initialize_twice_is_a_configuration_error() {
        let calls: CallLog = CallLog::default();
        let mut machine = probe_machine(&calls);

        machine.initialize(SentryState::Idle, &mut ()).unwrap();
        let result = machine.initialize(SentryState::Idle, &mut ());

        assert!(matches!(result, Err(MachineError::Configuration { .. })));
        assert_eq!(machine.current_state(), Some(SentryState::Idle));
    }

    #[test]
    fn tick_before_initialize_fails() {
        let calls: CallLog = CallLog::default();
        let mut machine = probe_machine(&calls);

        assert_eq!(
            machine.tick(&"start", &mut ()),
            Err(MachineError::NotInitialized)
        );
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn tick_after_shutdown_fails() {
        let calls: CallLog = CallLog::default();
        let mut machine = probe_machine(&calls);

        machine.initialize(SentryState::Idle, &mut ()).unwrap();
        machine.shutdown(&mut ());

        assert_eq!(
            machine.tick(&"start", &mut ()),
            Err(MachineError::NotInitialized)
        );
    }

    #[test]
    fn shutdown_is_idempotent() {
        let calls: CallLog = CallLog::default();
        let mut machine = probe_machine(&calls);

        machine.initialize(SentryState::Idle, &mut ()).unwrap();
        machine.shutdown(&mut ());
        machine.shutdown(&mut ());

        assert_eq!(machine.phase(), Phase::ShutDown);
        let exits = calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, hook)| *hook == "exit")
            .count();
        assert_eq!(exits, 1);
    }

    #[test]
    fn shutdown_before_initialize_is_terminal() {
        let calls: CallLog = CallLog::default();
        let mut machine = probe_machine(&calls);

        machine.shutdown(&mut ());

        assert_eq!(machine.phase(), Phase::ShutDown);
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(
            machine.tick(&"start", &mut ()),
            Err(MachineError::NotInitialized)
        );
    }

    #[test]
    fn transition_to_unregistered_target_fails_before_any_hook() {
        let calls: CallLog = CallLog::default();
        let mut machine: Machine<SentryState, &str, ()> = Machine::new();
        machine.add_state(SentryState::Idle, Probe::boxed("Idle", &calls));
        machine.add_rule(Rule::new(SentryState::Idle, "start", SentryState::Spawning));

        machine.initialize(SentryState::Idle, &mut ()).unwrap();
        calls.lock().unwrap().clear();

        let result = machine.tick(&"start", &mut ());

        assert_eq!(
            result,
            Err(MachineError::UnknownState {
                id: "Spawning".to_string()
            })
        );
        assert_eq!(machine.current_state(), Some(SentryState::Idle));
        assert!(calls.lock().unwrap().is_empty());
        assert!(machine.log().is_empty());
    }

    #[test]
    fn self_transition_reenters_the_state() {
        let calls: CallLog = CallLog::default();
        let mut machine: Machine<SentryState, &str, ()> = Machine::new();
        machine.add_state(SentryState::Idle, Probe::boxed("Idle", &calls));
        machine.add_rule(Rule::new(SentryState::Idle, "reset", SentryState::Idle));

        machine.initialize(SentryState::Idle, &mut ()).unwrap();
        calls.lock().unwrap().clear();

        machine.tick(&"reset", &mut ()).unwrap();

        assert_eq!(
            *calls.lock().unwrap(),
            vec![("Idle", "exit"), ("Idle", "enter"), ("Idle", "execute")]
        );
    }

    #[test]
    fn log_records_committed_transitions() {
        let calls: CallLog = CallLog::default();
        let mut machine = probe_machine(&calls);

        machine.initialize(SentryState::Idle, &mut ()).unwrap();
        machine.tick(&"noop", &mut ()).unwrap();
        machine.tick(&"start", &mut ()).unwrap();

        assert_eq!(machine.log().len(), 1);
        let record = machine.log().last().unwrap();
        assert_eq!(record.from, SentryState::Idle);
        assert_eq!(record.to, SentryState::Spawning);
        assert_eq!(record.tick, 2);
        assert_eq!(
            machine.log().path(),
            vec![SentryState::Idle, SentryState::Spawning]
        );
    }

    #[test]
    fn execute_error_propagates_after_the_transition_committed() {
        struct Faulty;

        impl Behavior<()> for Faulty {
            fn on_execute(&mut self, _context: &mut ()) -> Result<(), MachineError> {
                Err(MachineError::IndexOutOfRange {
                    collection: "spawn points",
                    index: 3,
                    len: 2,
                })
            }
        }

        let calls: CallLog = CallLog::default();
        let mut machine: Machine<SentryState, &str, ()> = Machine::new();
        machine.add_state(SentryState::Idle, Probe::boxed("Idle", &calls));
        machine.add_state(SentryState::Spawning, Box::new(Faulty));
        machine.add_rule(Rule::new(SentryState::Idle, "start", SentryState::Spawning));

        machine.initialize(SentryState::Idle, &mut ()).unwrap();
        let result = machine.tick(&"start", &mut ());

        assert!(matches!(
            result,
            Err(MachineError::IndexOutOfRange { index: 3, .. })
        ));
        // The transition itself committed; only the execute failed.
        assert_eq!(machine.current_state(), Some(SentryState::Spawning));
        assert_eq!(machine.log().len(), 1);
    }
}
