//! Virtual Pet Simulation Engine
//!
//! Pets with bounded hunger and happiness that change through care actions
//! and hourly ticks. Ticks draw from an injected [`RandomSource`] and return
//! their notifications instead of printing them.

pub mod components;
pub mod config;
pub mod error;
pub mod random;
pub mod simulator;
pub mod systems;
pub mod world;

pub use components::*;
pub use config::{LevelRange, SimConfig};
pub use error::{SimError, SimResult};
pub use random::{seeded_rng, RandomSource, ScriptedSource};
pub use simulator::{PetEvent, TickResult};
pub use systems::{ActionOutcome, CareAction, RandomEvent, RANDOM_EVENTS};
pub use world::{PetSummary, PetWorld};
