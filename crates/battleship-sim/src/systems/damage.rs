//! Hazard damage system: every hazard hurts every ship inside its safe
//! distance, with damage falling off linearly from 1.0 at the hazard's
//! centre to 0.0 at `safe_dist`.
//!
//! Ships are the entities carrying `Position + Health`; hazards are the
//! entities carrying `Position + Hazard`. Each tick runs in two phases:
//! all totals are computed and validated first, then written. A tick that
//! fails validation writes nothing.

use hecs::{Entity, World};

use battleship_core::components::{Hazard, Health};
use battleship_core::enums::Status;
use battleship_core::error::SimError;
use battleship_core::events::SimEvent;
use battleship_core::types::{Position, SimTime};

use crate::logging::{DamageLog, LogSink};
use crate::systems::Processor;

/// Damage a single hazard inflicts on a ship at `ship_pos`.
///
/// Returns a value in `[0, 1]`: `1.0` when the ship sits on the hazard,
/// `0.0` at or beyond `safe_dist`. A hazard with a non-positive or
/// non-finite `safe_dist` has no influence at all, and neither does any
/// hazard when the two positions give no finite distance.
pub fn damage_from(ship_pos: &Position, hazard_pos: &Position, hazard: &Hazard) -> f64 {
    let safe_dist = hazard.safe_dist;
    if !safe_dist.is_finite() || safe_dist <= 0.0 {
        return 0.0;
    }

    let distance = ship_pos.distance_to(hazard_pos);
    if distance.is_nan() || distance >= safe_dist {
        return 0.0;
    }

    (safe_dist - distance) / safe_dist
}

/// A ship that crossed below zero health this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Death {
    pub entity: Entity,
    pub health: f64,
}

/// Summary of one damage tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DamageReport {
    pub ships_processed: usize,
    pub hazards_considered: usize,
    /// Sum of damage dealt to all ships.
    pub total_damage: f64,
    pub deaths: Vec<Death>,
}

/// Applies hazard damage to ships once per tick.
///
/// Holds its log sink and scratch buffers so that repeated ticks do not
/// allocate.
pub struct DamageProcessor<L: DamageLog = LogSink> {
    log: L,
    hazards: Vec<(Entity, Position, Hazard)>,
    pending: Vec<(Entity, f64)>,
}

impl DamageProcessor<LogSink> {
    pub fn new() -> Self {
        Self::with_log(LogSink)
    }
}

impl Default for DamageProcessor<LogSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: DamageLog> DamageProcessor<L> {
    pub fn with_log(log: L) -> Self {
        Self {
            log,
            hazards: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut L {
        &mut self.log
    }

    /// Compute and apply one tick of hazard damage.
    pub fn apply_tick(&mut self, world: &mut World) -> Result<DamageReport, SimError> {
        self.collect_hazards(world)?;
        self.accumulate(world)?;
        Ok(self.commit(world))
    }

    /// Snapshot every hazard, rejecting unusable data.
    fn collect_hazards(&mut self, world: &World) -> Result<(), SimError> {
        self.hazards.clear();
        for (entity, (pos, hazard)) in world.query::<(&Position, &Hazard)>().iter() {
            if !pos.is_finite() {
                return Err(malformed(entity, "Position", format!("{pos:?}")));
            }
            if hazard.safe_dist.is_nan() || hazard.safe_dist.is_infinite() {
                return Err(malformed(
                    entity,
                    "Hazard",
                    format!("safe_dist is {}", hazard.safe_dist),
                ));
            }
            self.hazards.push((entity, *pos, *hazard));
        }
        Ok(())
    }

    /// Sum each ship's damage from every hazard into `pending`.
    fn accumulate(&mut self, world: &World) -> Result<(), SimError> {
        self.pending.clear();
        for (ship, (ship_pos, health)) in world.query::<(&Position, &Health)>().iter() {
            if !ship_pos.is_finite() {
                return Err(malformed(ship, "Position", format!("{ship_pos:?}")));
            }
            if !health.health.is_finite() {
                return Err(malformed(
                    ship,
                    "Health",
                    format!("health is {}", health.health),
                ));
            }

            self.log.debug(format_args!(
                "[BEFORE] ship[entity={}] health={}",
                ship.id(),
                health.health
            ));

            let mut total_damage = 0.0;
            for (hazard_entity, hazard_pos, hazard) in &self.hazards {
                let damage = damage_from(ship_pos, hazard_pos, hazard);
                total_damage += damage;
                self.log.debug(format_args!(
                    "hazard[entity={}] inflicted damage={} on ship[entity={}]",
                    hazard_entity.id(),
                    damage,
                    ship.id()
                ));
            }
            self.pending.push((ship, total_damage));
        }
        Ok(())
    }

    /// Write the accumulated totals back, one health update per ship.
    fn commit(&mut self, world: &mut World) -> DamageReport {
        let mut report = DamageReport {
            ships_processed: self.pending.len(),
            hazards_considered: self.hazards.len(),
            ..Default::default()
        };

        for &(ship, total_damage) in &self.pending {
            let Ok(mut health) = world.get::<&mut Health>(ship) else {
                continue;
            };
            health.health -= total_damage;
            report.total_damage += total_damage;

            self.log.debug(format_args!(
                "[AFTER] ship[entity={}] health={}",
                ship.id(),
                health.health
            ));

            if health.health < 0.0 && health.status != Status::Dead {
                health.status = Status::Dead;
                report.deaths.push(Death {
                    entity: ship,
                    health: health.health,
                });
                self.log.info(format_args!(
                    "ship[entity={}] died (health={})",
                    ship.id(),
                    health.health
                ));
            }
        }

        report
    }
}

impl<L: DamageLog> Processor for DamageProcessor<L> {
    fn name(&self) -> &'static str {
        "damage"
    }

    fn process(&mut self, world: &mut World, time: &SimTime, events: &mut Vec<SimEvent>) -> bool {
        match self.apply_tick(world) {
            Ok(report) => {
                events.extend(report.deaths.iter().map(|death| SimEvent::ShipDestroyed {
                    entity: death.entity.to_bits().get(),
                    tick: time.tick,
                    health: death.health,
                }));
                true
            }
            Err(err) => {
                log::error!("damage tick {} aborted: {err}", time.tick);
                false
            }
        }
    }
}

fn malformed(entity: Entity, component: &'static str, reason: String) -> SimError {
    SimError::MalformedComponent {
        entity: entity.to_bits().get(),
        component,
        reason,
    }
}
