//! Erosion configuration.

use serde::{Deserialize, Serialize};

/// How the thermal pass reads neighbor heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThermalMode {
    /// Scan and mutate the live grid: later cells in the pass see earlier
    /// transfers. Matches the reference visuals.
    InPlace,
    /// Read every comparison from a pre-pass snapshot and apply all transfers
    /// afterwards. Order-independent, slightly softer slopes.
    Buffered,
}

impl Default for ThermalMode {
    fn default() -> Self {
        Self::InPlace
    }
}

/// Parameters for hydraulic drops and thermal slumping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErosionConfig {
    /// Drops per step are `size * drops_per_size`.
    pub drops_per_size: u32,
    /// Maximum cells a single drop travels.
    pub max_drop_steps: u32,
    /// Fraction of the downhill gradient removed from the current cell.
    pub erosion_rate: f32,
    /// Upper bound on material removed per drop move.
    pub max_erosion_per_step: f32,
    /// Sediment a drop can carry before it deposits the excess.
    pub sediment_capacity: f32,

    /// Height difference above which material slumps to a neighbor.
    pub max_slope: f32,
    /// Fraction of the excess slope moved per comparison.
    pub thermal_rate: f32,
    /// Live or snapshot neighbor reads for the thermal pass.
    pub thermal_mode: ThermalMode,
}

impl Default for ErosionConfig {
    fn default() -> Self {
        Self {
            drops_per_size: 4,
            max_drop_steps: 30,
            erosion_rate: 0.4,
            max_erosion_per_step: 1.0,
            sediment_capacity: 3.0,

            max_slope: 0.5,
            thermal_rate: 0.1,
            thermal_mode: ThermalMode::default(),
        }
    }
}

impl ErosionConfig {
    /// Fewer, more aggressive drops and a lighter thermal pass.
    pub fn sparse() -> Self {
        Self {
            drops_per_size: 2,
            erosion_rate: 0.8,
            sediment_capacity: 2.0,
            thermal_rate: 0.05,
            ..Default::default()
        }
    }

    /// Number of drops simulated per step on a grid of `size` cells.
    pub fn drops_for(&self, size: usize) -> usize {
        size * self.drops_per_size as usize
    }
}
