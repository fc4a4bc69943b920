use std::path::Path;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::config::generation::GenerationParams;
use crate::config::simulation::SimulationConfig;
use crate::simulation;
use crate::simulation::effects::LogEffects;
use crate::simulation::fire::FireField;
use crate::world::generation::{generate_world, pick_ignition_sites, print_world_summary};

/// Generate a world from procedural parameters and print its composition.
pub fn generate(worldgen: &str) -> Result<(), String> {
    let params = GenerationParams::from_file(Path::new(worldgen))?;
    let world = generate_world(&params);
    print_world_summary(&world);
    Ok(())
}

/// Run the fire simulation tick loop.
///
/// The loop ends when every fire has expired or the tick limit is reached
/// (0 = no limit). Statistics are reported every `report_interval` ticks,
/// either as a log line or as a JSON line on stdout.
pub fn run_simulation(
    config: &SimulationConfig,
    tick_limit: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let params = GenerationParams::from_file(Path::new(&config.worldgen))?;
    let mut world = generate_world(&params);
    let seed = world.generation_params.seed;
    info!(
        world = %world.name,
        seed,
        width = world.grid.width(),
        height = world.grid.height(),
        "world generated"
    );

    // Generation consumed the base seed; the fire pass draws from its own
    // stream so worldgen changes do not shift fire behavior.
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let mut fires = FireField::new();
    let mut effects = LogEffects;

    for site in pick_ignition_sites(&world, &mut rng, params.initial_fires as usize) {
        fires.ignite(site);
        info!(x = site.x, y = site.y, "ignition");
    }
    if fires.is_empty() {
        warn!("no ignition sites; nothing to burn");
        return Ok(());
    }

    let max_ticks = tick_limit.unwrap_or(config.max_ticks);
    let tick_interval = Duration::from_secs_f32(1.0 / config.tick_rate_hz);
    let mut total_spread: u64 = 0;
    let mut total_expired: u64 = 0;

    loop {
        let tick_start = Instant::now();
        let result = simulation::execute_tick(
            &mut world,
            &mut fires,
            &mut rng,
            &mut effects,
            config.delta_time,
        );
        let stats = &result.statistics;
        total_spread += u64::from(stats.spread_ignitions);
        total_expired += u64::from(stats.expirations);

        if world.tick_count % config.report_interval == 0 {
            if json {
                match serde_json::to_string(stats) {
                    Ok(line) => println!("{}", line),
                    Err(e) => warn!(error = %e, "statistics serialization failed"),
                }
            } else {
                info!(
                    tick = stats.tick,
                    fires = stats.active_fires,
                    spread = total_spread,
                    expired = total_expired,
                    structures = stats.structures,
                    units = stats.units,
                    "tick report"
                );
            }
        }

        if fires.is_empty() {
            info!(tick = world.tick_count, "all fires expired");
            break;
        }
        if max_ticks > 0 && world.tick_count >= max_ticks {
            info!(
                tick = world.tick_count,
                fires = fires.len(),
                "tick limit reached"
            );
            break;
        }

        let elapsed = tick_start.elapsed();
        if elapsed < tick_interval {
            std::thread::sleep(tick_interval - elapsed);
        }
    }

    info!(
        ticks = world.tick_count,
        spread = total_spread,
        expired = total_expired,
        "simulation finished"
    );
    print_world_summary(&world);
    Ok(())
}
