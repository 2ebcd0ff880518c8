//! Top-level simulation configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::erosion::ErosionConfig;
use crate::geology::GeologyConfig;
use crate::resources::ResourceConfig;
use crate::rivers::RiverConfig;
use crate::scheduler::SchedulerConfig;
use crate::tectonics::UpliftConfig;
use crate::terrain::{GridError, HeightfieldConfig, MIN_GRID_SIZE};

/// Errors raised while loading or validating a [`SimConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

/// Every tunable constant of the simulation, grouped by component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Side length of the square grid.
    pub grid_size: usize,
    pub heightfield: HeightfieldConfig,
    pub uplift: UpliftConfig,
    pub erosion: ErosionConfig,
    pub geology: GeologyConfig,
    pub resources: ResourceConfig,
    pub rivers: RiverConfig,
    pub scheduler: SchedulerConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size: 50,
            heightfield: HeightfieldConfig::default(),
            uplift: UpliftConfig::default(),
            erosion: ErosionConfig::default(),
            geology: GeologyConfig::default(),
            resources: ResourceConfig::default(),
            rivers: RiverConfig::default(),
            scheduler: SchedulerConfig::default(),
        }
    }
}

impl SimConfig {
    /// 100-cell grid; hill positions scale with it.
    pub fn large() -> Self {
        Self {
            grid_size: 100,
            ..Default::default()
        }
    }

    /// Loads a (possibly partial) JSON configuration and validates it.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the preconditions the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::Invalid(format!(
                "grid_size must be at least {MIN_GRID_SIZE}, got {}",
                self.grid_size
            )));
        }
        if self.scheduler.max_steps == 0 {
            return Err(ConfigError::Invalid("scheduler.max_steps must be positive".into()));
        }
        if self.geology.min_elevation > self.geology.max_elevation {
            return Err(ConfigError::Invalid(format!(
                "geology elevation range is empty: {}..={}",
                self.geology.min_elevation, self.geology.max_elevation
            )));
        }
        if self.uplift.radius <= 0.0 {
            return Err(ConfigError::Invalid("uplift.radius must be positive".into()));
        }
        if self.resources.moisture_depth_scale <= 0.0 {
            return Err(ConfigError::Invalid("resources.moisture_depth_scale must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.grid_size, 50);
        assert_eq!(config.scheduler.max_steps, 50);
        assert_eq!(config.scheduler.step_interval_ms, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_large_config() {
        assert_eq!(SimConfig::large().grid_size, 100);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = SimConfig::from_json_str(r#"{ "grid_size": 64, "erosion": { "thermal_mode": "Buffered" } }"#)
            .unwrap();
        assert_eq!(config.grid_size, 64);
        assert_eq!(config.erosion.thermal_mode, crate::erosion::ThermalMode::Buffered);
        assert_eq!(config.erosion.drops_per_size, 4);
        assert_eq!(config.uplift.hills.len(), 8);
    }

    #[test]
    fn rejects_small_grid() {
        let err = SimConfig::from_json_str(r#"{ "grid_size": 4 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "scheduler": {{ "max_steps": 10 }} }}"#).unwrap();
        let config = SimConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.scheduler.max_steps, 10);
        assert_eq!(config.scheduler.step_interval_ms, 200);
    }

    #[test]
    fn round_trips_through_json() {
        let config = SimConfig::large();
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(SimConfig::from_json_str(&text).unwrap(), config);
    }
}
