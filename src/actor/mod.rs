//! The externally ticked host object that owns a machine.
//!
//! An [`Actor`] pairs one [`Machine`] with the domain data its behaviors act
//! on: spawn templates, spawn points, and the injected [`Host`] services.
//! The host environment drives the actor with one [`Actor::tick`] per frame
//! or simulation step; the actor forwards the tick into its machine, and the
//! active behavior calls back into actor actions such as
//! [`ActorContext::perform_spawn`].

mod wave;

pub use wave::WaveBehavior;

use crate::core::StateId;
use crate::machine::{Machine, MachineError};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Engine services an actor calls out to.
///
/// The crate never instantiates entities itself; it hands the chosen
/// template and location to the host. Tests substitute a recording mock.
pub trait Host: Send {
    /// Instantiate one entity from `template` at `point`.
    fn instantiate(&mut self, template: &SpawnTemplate, point: &SpawnPoint);
}

/// Opaque handle to a host asset an actor can spawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTemplate {
    pub name: String,
}

impl SpawnTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A world location an actor can spawn at.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl SpawnPoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Domain data lent to behaviors on every lifecycle hook.
///
/// Behaviors do not hold a reference back to their actor; the context is
/// passed into each hook call instead, so states and actor data cannot
/// outlive one another.
pub struct ActorContext<H: Host> {
    host: H,
    templates: Vec<SpawnTemplate>,
    spawn_points: Vec<SpawnPoint>,
}

impl<H: Host> ActorContext<H> {
    /// Create the context for a spawning actor.
    ///
    /// Both collections must be non-empty; an actor that can never spawn
    /// anything is a configuration error caught here, not at first use.
    pub fn new(
        host: H,
        templates: Vec<SpawnTemplate>,
        spawn_points: Vec<SpawnPoint>,
    ) -> Result<Self, MachineError> {
        if templates.is_empty() {
            return Err(MachineError::Configuration {
                reason: "an actor needs at least one spawn template".to_string(),
            });
        }
        if spawn_points.is_empty() {
            return Err(MachineError::Configuration {
                reason: "an actor needs at least one spawn point".to_string(),
            });
        }
        Ok(Self {
            host,
            templates,
            spawn_points,
        })
    }

    /// Number of registered spawn templates.
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Number of registered spawn points.
    pub fn spawner_count(&self) -> usize {
        self.spawn_points.len()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Spawn one entity from template `template` at spawn point `spawner`.
    ///
    /// Fails with [`MachineError::IndexOutOfRange`] when either index is
    /// outside its collection; an index equal to the collection length is
    /// out of range.
    pub fn perform_spawn(&mut self, spawner: usize, template: usize) -> Result<(), MachineError> {
        if spawner >= self.spawn_points.len() {
            return Err(MachineError::IndexOutOfRange {
                collection: "spawn points",
                index: spawner,
                len: self.spawn_points.len(),
            });
        }
        if template >= self.templates.len() {
            return Err(MachineError::IndexOutOfRange {
                collection: "spawn templates",
                index: template,
                len: self.templates.len(),
            });
        }
        tracing::trace!(
            target: "actor",
            spawner,
            template = self.templates[template].name.as_str(),
            "spawn action"
        );
        self.host
            .instantiate(&self.templates[template], &self.spawn_points[spawner]);
        Ok(())
    }
}

/// A game actor: one machine plus the context it runs against.
///
/// Ownership is tree-shaped and exclusive: the actor owns the machine, the
/// machine owns its behaviors, and everything is dropped together. The host
/// environment drives the actor through the generic "initialize once, tick
/// repeatedly" contract: call [`Actor::start`] once, then [`Actor::tick`]
/// every frame, then [`Actor::shutdown`] when the actor leaves play.
pub struct Actor<S: StateId, E: PartialEq + Debug, H: Host> {
    context: ActorContext<H>,
    machine: Machine<S, E, ActorContext<H>>,
}

impl<S: StateId, E: PartialEq + Debug, H: Host> Actor<S, E, H> {
    pub fn new(context: ActorContext<H>, machine: Machine<S, E, ActorContext<H>>) -> Self {
        Self { context, machine }
    }

    /// Enter the initial state. Call once, before the first tick.
    pub fn start(&mut self, initial: S) -> Result<(), MachineError> {
        self.machine.initialize(initial, &mut self.context)
    }

    /// Advance the actor by one tick, carrying this tick's trigger event.
    pub fn tick(&mut self, event: &E) -> Result<(), MachineError> {
        self.machine.tick(event, &mut self.context)
    }

    /// Exit the current state and retire the actor.
    pub fn shutdown(&mut self) {
        self.machine.shutdown(&mut self.context);
    }

    pub fn machine(&self) -> &Machine<S, E, ActorContext<H>> {
        &self.machine
    }

    pub fn context(&self) -> &ActorContext<H> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ActorContext<H> {
        &mut self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{rule, MachineBuilder};
    use crate::machine::{Behavior, Idle};
    use serde::{Deserialize, Serialize};

    #[derive(Default)]
    pub(super) struct RecordingHost {
        pub spawned: Vec<(String, SpawnPoint)>,
    }

    impl Host for RecordingHost {
        fn instantiate(&mut self, template: &SpawnTemplate, point: &SpawnPoint) {
            self.spawned.push((template.name.clone(), *point));
        }
    }

    pub(super) fn templates(names: &[&str]) -> Vec<SpawnTemplate> {
        names.iter().map(|name| SpawnTemplate::new(*name)).collect()
    }

    pub(super) fn spawn_points(count: usize) -> Vec<SpawnPoint> {
        (0..count)
            .map(|i| SpawnPoint::new(i as f32, 0.0, 0.0))
            .collect()
    }

    #[test]
    fn context_requires_spawn_templates() {
        let result = ActorContext::new(RecordingHost::default(), vec![], spawn_points(2));
        assert!(matches!(result, Err(MachineError::Configuration { .. })));
    }

    #[test]
    fn context_requires_spawn_points() {
        let result = ActorContext::new(RecordingHost::default(), templates(&["grunt"]), vec![]);
        assert!(matches!(result, Err(MachineError::Configuration { .. })));
    }

    #[test]
    fn perform_spawn_reaches_the_host() {
        let mut context = ActorContext::new(
            RecordingHost::default(),
            templates(&["grunt", "brute"]),
            spawn_points(2),
        )
        .unwrap();

        context.perform_spawn(1, 0).unwrap();

        assert_eq!(
            context.host().spawned,
            vec![("grunt".to_string(), SpawnPoint::new(1.0, 0.0, 0.0))]
        );
    }

    #[test]
    fn spawner_index_at_collection_length_is_rejected() {
        let mut context = ActorContext::new(
            RecordingHost::default(),
            templates(&["grunt"]),
            spawn_points(2),
        )
        .unwrap();

        let result = context.perform_spawn(2, 0);

        assert_eq!(
            result,
            Err(MachineError::IndexOutOfRange {
                collection: "spawn points",
                index: 2,
                len: 2,
            })
        );
        assert!(context.host().spawned.is_empty());
    }

    #[test]
    fn template_index_out_of_range_is_rejected() {
        let mut context = ActorContext::new(
            RecordingHost::default(),
            templates(&["grunt"]),
            spawn_points(2),
        )
        .unwrap();

        let result = context.perform_spawn(0, 5);

        assert_eq!(
            result,
            Err(MachineError::IndexOutOfRange {
                collection: "spawn templates",
                index: 5,
                len: 1,
            })
        );
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Duty {
        Holding,
        Raiding,
    }

    impl StateId for Duty {
        fn name(&self) -> &'static str {
            match self {
                Self::Holding => "Holding",
                Self::Raiding => "Raiding",
            }
        }
    }

    struct RaidOnce;

    impl Behavior<ActorContext<RecordingHost>> for RaidOnce {
        fn on_execute(
            &mut self,
            context: &mut ActorContext<RecordingHost>,
        ) -> Result<(), MachineError> {
            context.perform_spawn(0, 0)
        }
    }

    #[test]
    fn actor_drives_its_machine_through_the_lifecycle() {
        let machine = MachineBuilder::new()
            .state(Duty::Holding, Idle)
            .state(Duty::Raiding, RaidOnce)
            .rule(rule(Duty::Holding, "raid", Duty::Raiding))
            .build()
            .unwrap();
        let context = ActorContext::new(
            RecordingHost::default(),
            templates(&["grunt"]),
            spawn_points(1),
        )
        .unwrap();

        let mut actor = Actor::new(context, machine);
        actor.start(Duty::Holding).unwrap();

        actor.tick(&"hold").unwrap();
        assert!(actor.context().host().spawned.is_empty());

        // The transition and the new state's execute land on the same tick.
        actor.tick(&"raid").unwrap();
        assert_eq!(actor.machine().current_state(), Some(Duty::Raiding));
        assert_eq!(actor.context().host().spawned.len(), 1);

        actor.shutdown();
        assert_eq!(actor.machine().current_state(), None);
    }
}
