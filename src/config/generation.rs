use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters used to procedurally populate a fire field.
/// Stored with the world for reproducibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// 0 means: pick a random seed.
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Chance per tile of holding a flammable block instead of bare stone.
    #[serde(default = "default_vegetation_density")]
    pub vegetation_density: f32,
    /// Chance per tile of holding a liquid puddle.
    #[serde(default = "default_puddle_density")]
    pub puddle_density: f32,
    #[serde(default = "default_structure_count")]
    pub structure_count: u32,
    #[serde(default = "default_unit_count")]
    pub unit_count: u32,
    #[serde(default = "default_initial_fires")]
    pub initial_fires: u32,
}

fn default_width() -> u32 {
    64
}
fn default_height() -> u32 {
    48
}
fn default_vegetation_density() -> f32 {
    0.35
}
fn default_puddle_density() -> f32 {
    0.04
}
fn default_structure_count() -> u32 {
    6
}
fn default_unit_count() -> u32 {
    8
}
fn default_initial_fires() -> u32 {
    3
}

impl Default for GenerationParams {
    fn default() -> Self {
        GenerationParams {
            seed: 0,
            width: default_width(),
            height: default_height(),
            vegetation_density: default_vegetation_density(),
            puddle_density: default_puddle_density(),
            structure_count: default_structure_count(),
            unit_count: default_unit_count(),
            initial_fires: default_initial_fires(),
        }
    }
}

impl GenerationParams {
    /// Load generation parameters from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
        let params: Self = toml::from_str(&content)
            .map_err(|e| format!("Invalid TOML in {}: {}", path.display(), e))?;
        params.validate()?;
        Ok(params)
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=1024).contains(&self.width) {
            return Err(format!("width must be 1-1024, got {}", self.width));
        }
        if !(1..=1024).contains(&self.height) {
            return Err(format!("height must be 1-1024, got {}", self.height));
        }
        if !(0.0..=1.0).contains(&self.vegetation_density) {
            return Err(format!(
                "vegetation_density must be 0.0-1.0, got {}",
                self.vegetation_density
            ));
        }
        if !(0.0..=1.0).contains(&self.puddle_density) {
            return Err(format!(
                "puddle_density must be 0.0-1.0, got {}",
                self.puddle_density
            ));
        }
        let tiles = self.width * self.height;
        if self.structure_count > tiles {
            return Err(format!(
                "structure_count must fit the grid ({} tiles), got {}",
                tiles, self.structure_count
            ));
        }
        if self.initial_fires > tiles {
            return Err(format!(
                "initial_fires must fit the grid ({} tiles), got {}",
                tiles, self.initial_fires
            ));
        }
        Ok(())
    }
}
