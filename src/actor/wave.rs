//! Wave-spawning behavior.

use super::{ActorContext, Host};
use crate::machine::{Behavior, MachineError};
use rand::Rng;

/// Behavior that spawns one entity per configured spawner each tick.
///
/// On enter, the behavior draws a fresh plan: one template choice per
/// spawner, picked by the injected random source from the actor's registered
/// templates. Each tick while current, it performs one spawn action per
/// spawner following that plan. Re-entering the state draws a new plan.
///
/// The random source is injected and seedable, so a fixed seed makes the
/// whole wave deterministic under test.
pub struct WaveBehavior<R: Rng> {
    spawners: usize,
    plan: Vec<usize>,
    rng: R,
}

impl<R: Rng> WaveBehavior<R> {
    /// Create a wave over `spawners` spawn points.
    ///
    /// Fails with [`MachineError::Configuration`] when `spawners` is zero.
    pub fn new(spawners: usize, rng: R) -> Result<Self, MachineError> {
        if spawners == 0 {
            return Err(MachineError::Configuration {
                reason: "a wave needs at least one spawner".to_string(),
            });
        }
        Ok(Self {
            spawners,
            plan: Vec::new(),
            rng,
        })
    }

    /// Number of spawners this wave drives.
    pub fn spawners(&self) -> usize {
        self.spawners
    }

    /// The current plan: one template index per spawner. Empty until the
    /// state has been entered.
    pub fn plan(&self) -> &[usize] {
        &self.plan
    }
}

impl<R: Rng + Send, H: Host> Behavior<ActorContext<H>> for WaveBehavior<R> {
    fn on_enter(&mut self, context: &mut ActorContext<H>) {
        // ActorContext guarantees at least one template.
        let templates = context.template_count();
        self.plan = (0..self.spawners)
            .map(|_| self.rng.gen_range(0..templates))
            .collect();
        tracing::debug!(target: "actor", spawners = self.spawners, "wave plan drawn");
    }

    fn on_execute(&mut self, context: &mut ActorContext<H>) -> Result<(), MachineError> {
        for (spawner, &template) in self.plan.iter().enumerate() {
            context.perform_spawn(spawner, template)?;
        }
        Ok(())
    }

    fn on_exit(&mut self, _context: &mut ActorContext<H>) {
        tracing::debug!(target: "actor", "wave finished");
    }
}
