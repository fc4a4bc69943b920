pub mod block;
pub mod entity;
pub mod generation;
pub mod grid;
pub mod puddle;

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::config::generation::GenerationParams;
use crate::world::entity::{Structure, Unit};
use crate::world::puddle::PuddleMap;
pub use block::Block;
pub use grid::{CARDINAL_OFFSETS, Grid, TILE_SIZE, TilePoint};

/// Everything the fire simulation reads and mutates besides the fires
/// themselves: terrain, liquid puddles, tile occupants, and mobile units.
#[derive(Debug, Clone)]
pub struct World {
    pub id: Uuid,
    pub name: String,
    pub tick_count: u64,
    pub generation_params: GenerationParams,
    pub grid: Grid,
    pub puddles: PuddleMap,
    pub structures: HashMap<TilePoint, Structure>,
    pub units: Vec<Unit>,
}

impl World {
    /// Create an empty world around an existing grid. Used by tests and as
    /// the base that `generation::generate_world` populates.
    pub fn new(name: &str, grid: Grid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            tick_count: 0,
            generation_params: GenerationParams::default(),
            grid,
            puddles: PuddleMap::new(),
            structures: HashMap::new(),
            units: Vec::new(),
        }
    }

    /// The structure occupying a tile, if any.
    pub fn occupant(&self, tile: TilePoint) -> Option<&Structure> {
        self.structures.get(&tile)
    }

    /// Per-tick housekeeping: status countdowns, periodic status damage,
    /// and removal of destroyed structures and dead units.
    pub fn update(&mut self, delta_time: f32) {
        for unit in &mut self.units {
            unit.update(delta_time);
        }

        let units_before = self.units.len();
        self.units.retain(|u| !u.is_dead());
        let died = units_before - self.units.len();
        if died > 0 {
            debug!(died, "units destroyed");
        }

        self.structures.retain(|tile, structure| {
            if structure.is_destroyed() {
                debug!(x = tile.x, y = tile.y, "structure destroyed");
                false
            } else {
                true
            }
        });
    }
}
