//! Wave Spawner Actor
//!
//! This example demonstrates a full actor: a camp that holds position until
//! ordered to raid, then spawns one entity per spawn point every tick from a
//! seeded random plan.
//!
//! Key concepts:
//! - `ActorContext` lending domain data to behaviors
//! - The `Host` trait as the injected engine boundary
//! - `WaveBehavior` with a seeded, injected random source
//!
//! Run with: cargo run --example wave_spawner

use instinct::actor::{Actor, ActorContext, Host, SpawnPoint, SpawnTemplate, WaveBehavior};
use instinct::builder::{rule, MachineBuilder};
use instinct::machine::Idle;
use instinct::state_ids;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

state_ids! {
    enum Camp {
        Holding,
        Raiding,
    }
}

/// Stand-in for an engine: prints what would be instantiated.
struct ConsoleHost;

impl Host for ConsoleHost {
    fn instantiate(&mut self, template: &SpawnTemplate, point: &SpawnPoint) {
        println!(
            "spawn {} at ({:.1}, {:.1}, {:.1})",
            template.name, point.x, point.y, point.z
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let machine = MachineBuilder::<Camp, &str, ActorContext<ConsoleHost>>::new()
        .state(Camp::Holding, Idle)
        .state(
            Camp::Raiding,
            WaveBehavior::new(3, ChaCha8Rng::seed_from_u64(42)).unwrap(),
        )
        .rule(rule(Camp::Holding, "raid", Camp::Raiding))
        .rule(rule(Camp::Raiding, "recall", Camp::Holding))
        .build()
        .unwrap();

    let context = ActorContext::new(
        ConsoleHost,
        vec![
            SpawnTemplate::new("grunt"),
            SpawnTemplate::new("archer"),
            SpawnTemplate::new("brute"),
        ],
        vec![
            SpawnPoint::new(0.0, 0.0, 0.0),
            SpawnPoint::new(4.0, 0.0, 0.0),
            SpawnPoint::new(8.0, 0.0, 0.0),
        ],
    )
    .unwrap();

    let mut actor = Actor::new(context, machine);
    actor.start(Camp::Holding).unwrap();

    for event in ["hold", "raid", "press", "press", "recall", "hold"] {
        actor.tick(&event).unwrap();
    }

    actor.shutdown();

    println!("states traversed: {:?}", actor.machine().log().path());
}
