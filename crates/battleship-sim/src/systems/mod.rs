//! ECS systems that operate on the simulation world each tick.
//!
//! Systems own no world state; everything they read or write lives in
//! components. Each one is wrapped in a `Processor` so the engine can
//! run them in order once per tick.

pub mod damage;
pub mod snapshot;

use hecs::World;

use battleship_core::events::SimEvent;
use battleship_core::types::SimTime;

/// One step of the per-tick pipeline.
pub trait Processor {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Run once against `world` for the tick at `time`.
    /// Returns `false` if the tick failed; the world is left as it was
    /// before this processor ran.
    fn process(&mut self, world: &mut World, time: &SimTime, events: &mut Vec<SimEvent>) -> bool;
}
