//! Snapshot system: queries the ECS world and builds a `SimSnapshot`.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use battleship_core::components::{Hazard, Health};
use battleship_core::events::SimEvent;
use battleship_core::state::{HazardView, ShipView, SimSnapshot};
use battleship_core::types::{Position, SimTime};

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(world: &World, time: &SimTime, events: Vec<SimEvent>) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        ships: build_ships(world),
        hazards: build_hazards(world),
        events,
    }
}

fn build_ships(world: &World) -> Vec<ShipView> {
    let mut ships: Vec<ShipView> = world
        .query::<(&Position, &Health)>()
        .iter()
        .map(|(entity, (pos, health))| ShipView {
            entity: entity.to_bits().get(),
            position: *pos,
            health: health.health,
            status: health.status,
        })
        .collect();
    ships.sort_by_key(|s| s.entity);
    ships
}

fn build_hazards(world: &World) -> Vec<HazardView> {
    let mut hazards: Vec<HazardView> = world
        .query::<(&Position, &Hazard)>()
        .iter()
        .map(|(entity, (pos, hazard))| HazardView {
            entity: entity.to_bits().get(),
            position: *pos,
            safe_dist: hazard.safe_dist,
        })
        .collect();
    hazards.sort_by_key(|h| h.entity);
    hazards
}
