//! Sentry State Machine
//!
//! This example demonstrates a two-state sentry driven by trigger events.
//!
//! Key concepts:
//! - Defining state ids with the `state_ids!` macro
//! - Custom behaviors with enter/execute/exit hooks
//! - Declarative transition rules, first match wins
//!
//! Run with: cargo run --example sentry

use instinct::builder::{rule, MachineBuilder};
use instinct::machine::{Behavior, MachineError};
use instinct::state_ids;

state_ids! {
    enum Sentry {
        Dormant,
        Watching,
    }
}

/// Shared scratch data for the sentry's behaviors.
#[derive(Default)]
struct Watchtower {
    sweeps: u32,
}

struct Doze;

impl Behavior<Watchtower> for Doze {
    fn on_execute(&mut self, _tower: &mut Watchtower) -> Result<(), MachineError> {
        tracing::info!(target: "sentry", "dozing");
        Ok(())
    }
}

struct Scan;

impl Behavior<Watchtower> for Scan {
    fn on_enter(&mut self, tower: &mut Watchtower) {
        tower.sweeps = 0;
        tracing::info!(target: "sentry", "snapped awake");
    }

    fn on_execute(&mut self, tower: &mut Watchtower) -> Result<(), MachineError> {
        tower.sweeps += 1;
        tracing::info!(target: "sentry", sweeps = tower.sweeps, "scanning the perimeter");
        Ok(())
    }

    fn on_exit(&mut self, tower: &mut Watchtower) {
        tracing::info!(target: "sentry", sweeps = tower.sweeps, "standing down");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut machine = MachineBuilder::<Sentry, &str, Watchtower>::new()
        .state(Sentry::Dormant, Doze)
        .state(Sentry::Watching, Scan)
        .rule(rule(Sentry::Dormant, "noise", Sentry::Watching))
        .rule(rule(Sentry::Watching, "all-clear", Sentry::Dormant))
        .build()
        .unwrap();

    let mut tower = Watchtower::default();
    machine.initialize(Sentry::Dormant, &mut tower).unwrap();

    for event in ["quiet", "quiet", "noise", "quiet", "quiet", "all-clear"] {
        machine.tick(&event, &mut tower).unwrap();
    }

    machine.shutdown(&mut tower);

    println!("states traversed: {:?}", machine.log().path());
    println!("ticks processed: {}", machine.ticks());
}
