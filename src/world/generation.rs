use std::collections::HashMap;

use glam::vec2;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::config::generation::GenerationParams;
use crate::world::World;
use crate::world::block::Block;
use crate::world::entity::{Structure, Unit};
use crate::world::grid::{Grid, TILE_SIZE, TilePoint};
use crate::world::puddle::{Liquid, Puddle, PuddleMap};

const STRUCTURE_HEALTH: f32 = 40.0;
const UNIT_HEALTH: f32 = 20.0;

/// Generate a new world from the given parameters.
///
/// If `params.seed` is 0, a random seed is chosen. The actual seed used is
/// stored in the returned World's `generation_params` for reproducibility.
pub fn generate_world(params: &GenerationParams) -> World {
    let seed = if params.seed == 0 {
        rand::thread_rng().r#gen()
    } else {
        params.seed
    };
    let resolved_params = GenerationParams {
        seed,
        ..params.clone()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut grid = Grid::new(params.width, params.height, Block::Stone);
    scatter_fuel(&mut grid, &mut rng, params.vegetation_density);
    let puddles = scatter_puddles(&grid, &mut rng, params.puddle_density);
    let structures = place_structures(&grid, &mut rng, params.structure_count);
    let units = spawn_units(&grid, &mut rng, params.unit_count);

    let id = Uuid::from_bytes(rng.r#gen());

    World {
        id,
        name: format!("Field-{}", seed),
        tick_count: 0,
        generation_params: resolved_params,
        grid,
        puddles,
        structures,
        units,
    }
}

fn scatter_fuel(grid: &mut Grid, rng: &mut ChaCha8Rng, density: f32) {
    let tiles: Vec<TilePoint> = grid.cells().map(|(tile, _)| tile).collect();
    for tile in tiles {
        if !rng.gen_bool(f64::from(density)) {
            continue;
        }
        let roll: f32 = rng.r#gen();
        let block = if roll < 0.5 {
            Block::Grass
        } else if roll < 0.8 {
            Block::Shrub
        } else if roll < 0.95 {
            Block::Timber
        } else {
            Block::CoalSeam
        };
        grid.set(tile, block);
    }
}

fn scatter_puddles(grid: &Grid, rng: &mut ChaCha8Rng, density: f32) -> PuddleMap {
    let mut puddles = PuddleMap::new();
    for (tile, _) in grid.cells() {
        if !rng.gen_bool(f64::from(density)) {
            continue;
        }
        let roll: f32 = rng.r#gen();
        let liquid = if roll < 0.5 {
            Liquid::Oil
        } else if roll < 0.8 {
            Liquid::Tar
        } else {
            Liquid::Water
        };
        puddles.place(tile, Puddle::new(liquid, rng.gen_range(0.5..2.0)));
    }
    puddles
}

fn place_structures(
    grid: &Grid,
    rng: &mut ChaCha8Rng,
    count: u32,
) -> HashMap<TilePoint, Structure> {
    let mut structures = HashMap::new();
    let mut attempts = 0;
    while (structures.len() as u32) < count && attempts < count * 20 {
        attempts += 1;
        let tile = TilePoint::new(
            rng.gen_range(0..grid.width() as i32),
            rng.gen_range(0..grid.height() as i32),
        );
        structures.entry(tile).or_insert_with(|| Structure::new(STRUCTURE_HEALTH));
    }
    structures
}

fn spawn_units(grid: &Grid, rng: &mut ChaCha8Rng, count: u32) -> Vec<Unit> {
    let max_x = grid.width() as f32 * TILE_SIZE;
    let max_y = grid.height() as f32 * TILE_SIZE;
    (0..count)
        .map(|id| {
            let pos = vec2(rng.gen_range(0.0..max_x), rng.gen_range(0.0..max_y));
            Unit::new(id, pos, UNIT_HEALTH)
        })
        .collect()
}

/// Pick up to `count` distinct tiles worth igniting, preferring flammable
/// ground. Falls back to arbitrary tiles on a fully inert field.
pub fn pick_ignition_sites<R: Rng>(world: &World, rng: &mut R, count: usize) -> Vec<TilePoint> {
    let flammable: Vec<TilePoint> = world
        .grid
        .cells()
        .filter(|(_, block)| block.flammability() > 0.0)
        .map(|(tile, _)| tile)
        .collect();

    let pool: Vec<TilePoint> = if flammable.is_empty() {
        world.grid.cells().map(|(tile, _)| tile).collect()
    } else {
        flammable
    };

    pool.choose_multiple(rng, count).copied().collect()
}

/// Print a summary of the generated world.
pub fn print_world_summary(world: &World) {
    println!("=== World Summary ===");
    println!("Name: {}", world.name);
    println!(
        "Grid: {}x{} ({} tiles)",
        world.grid.width(),
        world.grid.height(),
        world.grid.width() * world.grid.height()
    );
    println!("Seed: {}", world.generation_params.seed);

    let mut block_counts: HashMap<&str, u32> = HashMap::new();
    for (_, block) in world.grid.cells() {
        *block_counts.entry(block.name()).or_insert(0) += 1;
    }
    let mut block_sorted: Vec<_> = block_counts.into_iter().collect();
    block_sorted.sort_by_key(|&(name, _)| name);
    let total = (world.grid.width() * world.grid.height()) as f32;
    println!("\nBlocks:");
    for (name, count) in &block_sorted {
        let pct = *count as f32 / total * 100.0;
        println!("  {:<12} {:>5} ({:.1}%)", name, count, pct);
    }

    let mut liquid_counts: HashMap<&str, u32> = HashMap::new();
    for (_, puddle) in world.puddles.iter() {
        *liquid_counts.entry(puddle.liquid.name()).or_insert(0) += 1;
    }
    let mut liquid_sorted: Vec<_> = liquid_counts.into_iter().collect();
    liquid_sorted.sort_by_key(|&(name, _)| name);
    println!("\nPuddles:");
    if liquid_sorted.is_empty() {
        println!("  (none)");
    }
    for (name, count) in &liquid_sorted {
        println!("  {:<12} {:>5}", name, count);
    }

    println!("\nStructures: {}", world.structures.len());
    println!("Units: {}", world.units.len());
}
