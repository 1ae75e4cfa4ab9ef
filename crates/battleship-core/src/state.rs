//! Simulation snapshot — the complete visible state after a tick.

use serde::{Deserialize, Serialize};

use crate::enums::Status;
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// Read-only view of the world, ordered by entity id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub ships: Vec<ShipView>,
    pub hazards: Vec<HazardView>,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub entity: u64,
    pub position: Position,
    pub health: f64,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardView {
    pub entity: u64,
    pub position: Position,
    pub safe_dist: f64,
}

impl SimSnapshot {
    /// Number of ships whose status is `Dead`.
    pub fn dead_count(&self) -> usize {
        self.ships
            .iter()
            .filter(|s| s.status == Status::Dead)
            .count()
    }
}
