use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};

use crate::world::block::Block;

/// Width of one tile in world units. Effect positions and area-damage radii
/// are expressed in this coordinate space.
pub const TILE_SIZE: f32 = 8.0;

/// The four axis-aligned neighbor offsets, in draw order.
pub const CARDINAL_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Coordinate of a single grid cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TilePoint {
    pub x: i32,
    pub y: i32,
}

impl TilePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> TilePoint {
        TilePoint::new(self.x + dx, self.y + dy)
    }

    /// Center of this tile in world units.
    pub fn world_pos(self) -> Vec2 {
        vec2(self.x as f32 * TILE_SIZE, self.y as f32 * TILE_SIZE)
    }
}

/// Dense rectangular block grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    blocks: Vec<Block>,
}

impl Grid {
    pub fn new(width: u32, height: u32, fill: Block) -> Self {
        Self {
            width,
            height,
            blocks: vec![fill; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, tile: TilePoint) -> bool {
        tile.x >= 0
            && tile.y >= 0
            && (tile.x as u32) < self.width
            && (tile.y as u32) < self.height
    }

    /// Resolve raw coordinates to a valid tile, if any. This is the validity
    /// boundary: callers that hold a `TilePoint` from here may index freely.
    pub fn tile(&self, x: i32, y: i32) -> Option<TilePoint> {
        let tile = TilePoint::new(x, y);
        self.in_bounds(tile).then_some(tile)
    }

    pub fn get(&self, tile: TilePoint) -> Option<Block> {
        self.in_bounds(tile)
            .then(|| self.blocks[self.index(tile)])
    }

    /// Replace the block on a tile. Out-of-bounds writes are ignored.
    pub fn set(&mut self, tile: TilePoint, block: Block) {
        if self.in_bounds(tile) {
            let idx = self.index(tile);
            self.blocks[idx] = block;
        }
    }

    /// Iterate every tile with its block, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (TilePoint, Block)> + '_ {
        let width = self.width as i32;
        self.blocks
            .iter()
            .enumerate()
            .map(move |(i, block)| (TilePoint::new(i as i32 % width, i as i32 / width), *block))
    }

    fn index(&self, tile: TilePoint) -> usize {
        (tile.y as u32 * self.width + tile.x as u32) as usize
    }
}
