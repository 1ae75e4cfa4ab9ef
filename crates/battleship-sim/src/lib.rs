//! Simulation engine for the battleship hazard model.
//!
//! Owns the hecs ECS world, runs processors once per tick,
//! and produces `SimSnapshot`s for callers.

pub mod engine;
pub mod logging;
pub mod systems;
pub mod world_setup;

pub use battleship_core as core;
pub use engine::{SimConfig, SimulationEngine};
