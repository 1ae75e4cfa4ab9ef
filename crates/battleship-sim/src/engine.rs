//! Simulation engine.
//!
//! `SimulationEngine` owns the hecs ECS world, runs every processor once
//! per tick and produces `SimSnapshot`s. Completely headless, so the same
//! seed always yields the same run.

use std::path::Path;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use battleship_core::error::SimError;
use battleship_core::events::SimEvent;
use battleship_core::scenario::ScenarioConfig;
use battleship_core::state::SimSnapshot;
use battleship_core::types::SimTime;

use crate::systems;
use crate::systems::damage::DamageProcessor;
use crate::systems::Processor;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    processors: Vec<Box<dyn Processor>>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an engine with an empty world and the damage processor
    /// logging through the `log` facade.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self::without_processors(config);
        engine.add_processor(Box::new(DamageProcessor::new()));
        engine
    }

    /// Create an engine with no processors installed.
    pub fn without_processors(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            processors: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Create an engine and populate it from a scenario.
    pub fn from_scenario(config: SimConfig, scenario: &ScenarioConfig) -> Self {
        let mut engine = Self::new(config);
        world_setup::populate(&mut engine.world, scenario);
        engine
    }

    /// Read a scenario file and populate a new engine from it.
    pub fn load_scenario(config: SimConfig, path: impl AsRef<Path>) -> Result<Self, SimError> {
        let scenario = ScenarioConfig::load(path)?;
        Ok(Self::from_scenario(config, &scenario))
    }

    /// Append a processor; processors run in insertion order.
    pub fn add_processor(&mut self, processor: Box<dyn Processor>) {
        self.processors.push(processor);
    }

    /// Scatter ships and hazards using the engine's seeded RNG.
    pub fn spawn_random_field(&mut self, ships: usize, hazards: usize) -> Vec<hecs::Entity> {
        world_setup::spawn_random_field(&mut self.world, &mut self.rng, ships, hazards)
    }

    /// Run every processor once. Time only advances when all succeed.
    /// Returns whether the tick succeeded.
    pub fn tick(&mut self) -> bool {
        let mut ok = true;
        for processor in &mut self.processors {
            if !processor.process(&mut self.world, &self.time, &mut self.events) {
                log::warn!(
                    "processor '{}' failed at tick {}",
                    processor.name(),
                    self.time.tick
                );
                ok = false;
                break;
            }
        }
        if ok {
            self.time.advance();
        }
        ok
    }

    /// Run up to `ticks` ticks, stopping at the first failure.
    /// Returns the number of ticks that succeeded.
    pub fn run(&mut self, ticks: u64) -> u64 {
        for done in 0..ticks {
            if !self.tick() {
                return done;
            }
        }
        ticks
    }

    /// Build a snapshot of the current world, including undrained events.
    pub fn snapshot(&self) -> SimSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.time, self.events.clone())
    }

    /// Take all events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world, for spawning entities.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
