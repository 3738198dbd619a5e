//! Instinct: a tick-driven state machine for game actors
//!
//! Instinct separates an actor's "brain" from its "body". The brain is a
//! [`Machine`]: a finite state machine with one active state, a declarative
//! transition table, and enter/execute/exit lifecycle hooks. The body is an
//! [`Actor`]: the externally ticked object that owns the machine and lends
//! its domain data (spawn templates, spawn points, host services) to the
//! active behavior on every hook call.
//!
//! # Core Concepts
//!
//! - **StateId**: cheap, comparable identifiers naming each state
//! - **Behavior**: the per-state lifecycle hooks driven by the machine
//! - **Rules**: (source, trigger, guard) entries resolved in declaration
//!   order, first match wins
//! - **Ticks**: one synchronous advance per host frame; nothing runs on its
//!   own
//!
//! # Example
//!
//! ```rust
//! use instinct::builder::{rule, MachineBuilder};
//! use instinct::machine::Idle;
//! use instinct::state_ids;
//!
//! state_ids! {
//!     enum Sentry {
//!         Dormant,
//!         Alert,
//!     }
//! }
//!
//! let mut machine = MachineBuilder::<Sentry, &str, ()>::new()
//!     .state(Sentry::Dormant, Idle)
//!     .state(Sentry::Alert, Idle)
//!     .rule(rule(Sentry::Dormant, "noise", Sentry::Alert))
//!     .rule(rule(Sentry::Alert, "all-clear", Sentry::Dormant))
//!     .build()
//!     .unwrap();
//!
//! machine.initialize(Sentry::Dormant, &mut ()).unwrap();
//! machine.tick(&"noise", &mut ()).unwrap();
//! assert_eq!(machine.current_state(), Some(Sentry::Alert));
//! ```

pub mod actor;
pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::actor::{Actor, ActorContext, Host, SpawnPoint, SpawnTemplate, WaveBehavior};
pub use crate::builder::{BuildError, MachineBuilder, RuleBuilder};
pub use crate::core::{Guard, Rule, StateId, TransitionLog, TransitionRecord, TransitionTable};
pub use crate::machine::{Behavior, Idle, Machine, MachineError, Phase};
