//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Life status of a ship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Alive,
    /// Health dropped strictly below zero.
    Dead,
}
