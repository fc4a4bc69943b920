use serde::Serialize;

use crate::simulation::fire::{FireField, FireReport};
use crate::world::World;
use crate::world::entity::StatusEffect;

/// Per-tick aggregate metrics for introspection and run reporting.
#[derive(Debug, Clone, Serialize)]
pub struct TickStatistics {
    pub tick: u64,
    pub active_fires: u32,
    pub fires_ticked: u32,
    pub spread_ignitions: u32,
    pub expirations: u32,
    pub flares: u32,
    pub smokes: u32,
    pub avg_fire_age: f32,
    pub max_fire_lifetime: f32,
    pub structures: u32,
    pub units: u32,
    pub burning_units: u32,
    pub tick_duration_ms: f32,
}

/// Compute statistics for the current state after a tick.
pub fn compute_statistics(
    world: &World,
    fires: &FireField,
    report: &FireReport,
    tick_duration_ms: f32,
) -> TickStatistics {
    let active = fires.len();
    let (avg_fire_age, max_fire_lifetime) = if active == 0 {
        (0.0, 0.0)
    } else {
        let total_age: f32 = fires.iter().map(|(_, f)| f.elapsed()).sum();
        let max_lifetime = fires
            .iter()
            .map(|(_, f)| f.lifetime())
            .fold(0.0_f32, f32::max);
        (total_age / active as f32, max_lifetime)
    };

    let burning_units = world
        .units
        .iter()
        .filter(|u| u.has_status(StatusEffect::Burning))
        .count() as u32;

    TickStatistics {
        tick: world.tick_count,
        active_fires: active as u32,
        fires_ticked: report.ticked,
        spread_ignitions: report.spread_ignitions,
        expirations: report.expirations,
        flares: report.flares,
        smokes: report.smokes,
        avg_fire_age,
        max_fire_lifetime,
        structures: world.structures.len() as u32,
        units: world.units.len() as u32,
        burning_units,
        tick_duration_ms,
    }
}
