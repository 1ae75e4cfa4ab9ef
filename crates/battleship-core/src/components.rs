//! ECS components for hecs entities.
//!
//! Components are plain data structs. Damage logic lives in the
//! simulation crate's systems, not here.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SHIP_HEALTH;
use crate::enums::Status;

/// Hit points and life status of a ship.
///
/// Any entity carrying `Position + Health` is treated as a ship by the
/// damage system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    /// Remaining hit points. There is no floor: damage may push this
    /// arbitrarily far below zero.
    pub health: f64,
    #[serde(default)]
    pub status: Status,
}

impl Health {
    pub fn new(health: f64) -> Self {
        Self {
            health,
            status: Status::Alive,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.status == Status::Dead
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(DEFAULT_SHIP_HEALTH)
    }
}

/// A damaging area centred on the entity's `Position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    /// Radius (meters) at and beyond which the hazard inflicts no damage.
    pub safe_dist: f64,
}

impl Hazard {
    pub fn new(safe_dist: f64) -> Self {
        Self { safe_dist }
    }
}
