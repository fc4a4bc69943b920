use serde::{Deserialize, Serialize};

/// Terrain and fuel kinds a grid cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Block {
    Stone,
    Sand,
    Grass,
    Shrub,
    Timber,
    CoalSeam,
}

impl Block {
    /// Propensity of this block to feed a fire. Values above 1.0 can sustain
    /// spread to neighboring tiles.
    pub fn flammability(self) -> f32 {
        match self {
            Block::Stone => 0.0,
            Block::Sand => 0.0,
            Block::Grass => 0.45,
            Block::Shrub => 0.9,
            Block::Timber => 1.3,
            Block::CoalSeam => 2.4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Block::Stone => "Stone",
            Block::Sand => "Sand",
            Block::Grass => "Grass",
            Block::Shrub => "Shrub",
            Block::Timber => "Timber",
            Block::CoalSeam => "Coal Seam",
        }
    }
}
