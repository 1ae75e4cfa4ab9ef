//! Entity spawn factories for setting up the simulation world.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use battleship_core::components::{Hazard, Health};
use battleship_core::constants::*;
use battleship_core::scenario::ScenarioConfig;
use battleship_core::types::Position;

/// Spawn every ship and hazard a scenario describes.
/// Returns the spawned entities, ships first, in declaration order.
pub fn populate(world: &mut World, scenario: &ScenarioConfig) -> Vec<Entity> {
    let mut spawned = Vec::with_capacity(scenario.ships.len() + scenario.hazards.len());
    for ship in &scenario.ships {
        spawned.push(spawn_ship(world, ship.position(), ship.health));
    }
    for hazard in &scenario.hazards {
        spawned.push(spawn_hazard(world, hazard.position(), hazard.safe_dist));
    }
    spawned
}

/// Spawn a ship: a `Position + Health` entity, alive.
pub fn spawn_ship(world: &mut World, position: Position, health: f64) -> Entity {
    world.spawn((position, Health::new(health)))
}

/// Spawn a hazard: a `Position + Hazard` entity.
pub fn spawn_hazard(world: &mut World, position: Position, safe_dist: f64) -> Entity {
    world.spawn((position, Hazard::new(safe_dist)))
}

/// Scatter ships and hazards uniformly over the square field of
/// half-width `FIELD_HALF_EXTENT`. Same RNG state, same field.
pub fn spawn_random_field(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ships: usize,
    hazards: usize,
) -> Vec<Entity> {
    let mut spawned = Vec::with_capacity(ships + hazards);
    for _ in 0..ships {
        let pos = random_position(rng);
        spawned.push(spawn_ship(world, pos, DEFAULT_SHIP_HEALTH));
    }
    for _ in 0..hazards {
        let pos = random_position(rng);
        let safe_dist = rng.gen_range(HAZARD_MIN_SAFE_DIST..HAZARD_MAX_SAFE_DIST);
        spawned.push(spawn_hazard(world, pos, safe_dist));
    }
    spawned
}

fn random_position(rng: &mut ChaCha8Rng) -> Position {
    Position::new(
        rng.gen_range(-FIELD_HALF_EXTENT..FIELD_HALF_EXTENT),
        rng.gen_range(-FIELD_HALF_EXTENT..FIELD_HALF_EXTENT),
    )
}
