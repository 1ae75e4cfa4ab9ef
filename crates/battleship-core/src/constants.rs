//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Ships ---

/// Starting health for ships that do not specify one.
pub const DEFAULT_SHIP_HEALTH: f64 = 10.0;

// --- Hazards ---

/// Safe distance for hazards that do not specify one (meters).
pub const DEFAULT_SAFE_DIST: f64 = 5.0;

// --- Random field generation ---

/// Half-width of the square area random fields are scattered in (meters).
pub const FIELD_HALF_EXTENT: f64 = 50.0;

/// Smallest safe distance rolled for a random hazard.
pub const HAZARD_MIN_SAFE_DIST: f64 = 2.0;

/// Upper bound (exclusive) of safe distances rolled for random hazards.
pub const HAZARD_MAX_SAFE_DIST: f64 = 12.0;
