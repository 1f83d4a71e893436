//! Gate passability logic: policy, controller resolution, and evaluation.
//!
//! Fence gates normally lose their collision shape while open. This crate
//! decides, per entity, whether an open gate should keep blocking: explicitly
//! blocked types always collide, explicitly allowed types never do, and for
//! everything else the gate can hold back any entity a player could put on a
//! leash, so penned animals stay penned while players and their mounts walk
//! through.

pub mod advancement;
pub mod config;
pub mod evaluate;
pub mod policy;
pub mod resolver;
pub mod session;

pub use config::{ConfigError, GateConfig};
pub use evaluate::{GateEvaluator, SubjectMode};
pub use policy::{Behavior, Passability, PassabilitySet};
pub use resolver::{resolve_controller, Resolved};
pub use session::ServerSession;
