//! Events emitted by the simulation for downstream consumers.

use serde::{Deserialize, Serialize};

/// Something that happened during a tick which other systems may react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A ship's health dropped below zero this tick.
    ShipDestroyed {
        entity: u64,
        tick: u64,
        /// Health right after the killing blow.
        health: f64,
    },
}
