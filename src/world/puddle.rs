use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::world::grid::TilePoint;

/// Liquid kinds a puddle can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Liquid {
    Water,
    Oil,
    Tar,
}

impl Liquid {
    /// Per-unit flammability of the liquid.
    pub fn flammability(self) -> f32 {
        match self {
            Liquid::Water => 0.0,
            Liquid::Oil => 1.5,
            Liquid::Tar => 0.9,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Liquid::Water => "Water",
            Liquid::Oil => "Oil",
            Liquid::Tar => "Tar",
        }
    }
}

/// A pool of liquid sitting on one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Puddle {
    pub liquid: Liquid,
    pub amount: f32,
}

impl Puddle {
    pub fn new(liquid: Liquid, amount: f32) -> Self {
        Self { liquid, amount }
    }

    /// Total flammability the puddle contributes: per-unit flammability
    /// scaled by how much liquid is pooled.
    pub fn flammability(&self) -> f32 {
        self.liquid.flammability() * self.amount
    }
}

/// Sparse per-tile puddle store. At most one puddle per tile; placing over
/// an existing puddle replaces it.
#[derive(Debug, Clone, Default)]
pub struct PuddleMap {
    puddles: HashMap<TilePoint, Puddle>,
}

impl PuddleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, tile: TilePoint, puddle: Puddle) {
        self.puddles.insert(tile, puddle);
    }

    pub fn get(&self, tile: TilePoint) -> Option<&Puddle> {
        self.puddles.get(&tile)
    }

    pub fn remove(&mut self, tile: TilePoint) {
        self.puddles.remove(&tile);
    }

    pub fn len(&self) -> usize {
        self.puddles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puddles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TilePoint, &Puddle)> {
        self.puddles.iter()
    }
}
