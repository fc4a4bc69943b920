pub mod effects;
pub mod fire;
pub mod statistics;

use std::time::Instant;

use rand::Rng;

use crate::simulation::effects::EffectSink;
use crate::simulation::fire::FireField;
use crate::simulation::statistics::TickStatistics;
use crate::world::World;

/// Result of executing a single tick.
#[derive(Debug)]
pub struct TickResult {
    pub statistics: TickStatistics,
}

/// Execute a single simulation step.
///
/// The fire pass runs first and is the only writer of the registry within a
/// step; world housekeeping (status countdowns, corpse removal) follows, then
/// the tick count advances and statistics are computed. The host decides how
/// `extinguish` calls from other subsystems order relative to this.
pub fn execute_tick<R: Rng>(
    world: &mut World,
    fires: &mut FireField,
    rng: &mut R,
    effects: &mut dyn EffectSink,
    delta_time: f32,
) -> TickResult {
    let tick_start = Instant::now();

    let report = fires.update(world, rng, effects, delta_time);
    world.update(delta_time);
    world.tick_count += 1;

    let tick_duration = tick_start.elapsed().as_secs_f32() * 1000.0;
    let statistics = statistics::compute_statistics(world, fires, &report, tick_duration);

    TickResult { statistics }
}
