//! Scenario definitions — the ships and hazards a simulation starts with.
//!
//! Scenarios are plain JSON documents:
//!
//! ```json
//! {
//!   "name": "harbor",
//!   "ships":   [{ "x": 3.0, "y": 0.0, "health": 0.3 }],
//!   "hazards": [{ "x": 0.0, "y": 0.0, "safe_dist": 5.0 }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SAFE_DIST, DEFAULT_SHIP_HEALTH};
use crate::error::ScenarioError;
use crate::types::Position;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ships: Vec<ShipSpec>,
    #[serde(default)]
    pub hazards: Vec<HazardSpec>,
}

/// Starting state of one ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipSpec {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_health")]
    pub health: f64,
}

/// Placement and radius of one hazard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardSpec {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_safe_dist")]
    pub safe_dist: f64,
}

fn default_health() -> f64 {
    DEFAULT_SHIP_HEALTH
}

fn default_safe_dist() -> f64 {
    DEFAULT_SAFE_DIST
}

impl ShipSpec {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

impl HazardSpec {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

impl ScenarioConfig {
    /// Parse and validate a scenario from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        let config: ScenarioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Reject values the simulation cannot start from.
    ///
    /// A zero `safe_dist` is accepted: such a hazard simply never deals
    /// damage. Zero health is accepted too, since a ship at exactly 0.0 is
    /// still alive. Negative values and non-finite numbers are rejected.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        for (i, ship) in self.ships.iter().enumerate() {
            if !ship.position().is_finite() {
                return Err(ScenarioError::Invalid(format!(
                    "ship {i} has a non-finite position"
                )));
            }
            if !ship.health.is_finite() || ship.health < 0.0 {
                return Err(ScenarioError::Invalid(format!(
                    "ship {i} has health {}, expected a finite value >= 0",
                    ship.health
                )));
            }
        }
        for (i, hazard) in self.hazards.iter().enumerate() {
            if !hazard.position().is_finite() {
                return Err(ScenarioError::Invalid(format!(
                    "hazard {i} has a non-finite position"
                )));
            }
            if !hazard.safe_dist.is_finite() || hazard.safe_dist < 0.0 {
                return Err(ScenarioError::Invalid(format!(
                    "hazard {i} has safe_dist {}, expected a finite value >= 0",
                    hazard.safe_dist
                )));
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
