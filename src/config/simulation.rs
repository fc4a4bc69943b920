use serde::Deserialize;
use std::path::Path;

/// Runtime settings for the simulation driver.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_hz: f32,
    #[serde(default = "default_delta_time")]
    pub delta_time: f32,
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,
    #[serde(default = "default_report_interval")]
    pub report_interval: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_worldgen")]
    pub worldgen: String,
}

fn default_tick_rate() -> f32 {
    60.0
}
fn default_delta_time() -> f32 {
    1.0
}
fn default_max_ticks() -> u64 {
    10_000
}
fn default_report_interval() -> u64 {
    100
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_worldgen() -> String {
    "worldgen.toml".to_string()
}

impl SimulationConfig {
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
        Self::from_toml_str(&content, path)
    }

    pub fn from_toml_str(content: &str, source_path: &Path) -> Result<Self, String> {
        let config: SimulationConfig =
            toml::from_str(content).map_err(|e| format!("{}: {}", source_path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        let mut errors = Vec::new();

        if self.tick_rate_hz <= 0.0 {
            errors.push(format!(
                "tick_rate_hz must be > 0.0, got {}. Example: tick_rate_hz = 60.0",
                self.tick_rate_hz
            ));
        }

        if !(self.delta_time > 0.0 && self.delta_time.is_finite()) {
            errors.push(format!(
                "delta_time must be > 0.0 and finite, got {}. Example: delta_time = 1.0",
                self.delta_time
            ));
        }

        if self.report_interval == 0 {
            errors.push(format!(
                "report_interval must be > 0, got {}. Example: report_interval = 100",
                self.report_interval
            ));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            errors.push(format!(
                "log_level must be one of {:?}, got '{}'. Example: log_level = \"info\"",
                valid_levels, self.log_level
            ));
        }

        if self.worldgen.is_empty() {
            errors.push("worldgen must be a file path. Example: worldgen = \"worldgen.toml\"".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.join("\n"))
        }
    }
}
