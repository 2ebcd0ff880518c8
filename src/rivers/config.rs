//! River tracing parameters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiverConfig {
    /// Sources sit strictly above this elevation ...
    pub source_min_elevation: u32,
    /// ... and have a water table shallower than this or carry a spring.
    pub source_max_water_table: f32,
    /// A trace stops once it reaches a cell strictly below this elevation.
    pub min_elevation: u32,
    /// Abundance of the river resource added to traced cells.
    pub abundance: f32,
    /// Accessibility of the river resource added to traced cells.
    pub accessibility: f32,
}

impl Default for RiverConfig {
    fn default() -> Self {
        Self {
            source_min_elevation: 60,
            source_max_water_table: 2.0,
            min_elevation: 15,
            abundance: 0.9,
            accessibility: 0.95,
        }
    }
}
