//! Geology derivation parameters.

use serde::{Deserialize, Serialize};

use crate::noise::TrigNoise;

/// Thresholds, ranges and noise fields for tile geology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeologyConfig {
    /// Elevation clamp applied before anything else.
    pub min_elevation: u32,
    pub max_elevation: u32,

    /// Cells strictly above this elevation are ROCK regardless of noise.
    pub rock_elevation: u32,
    /// Soil noise above this is SAND.
    pub sand_threshold: f32,
    /// Soil noise below this is CLAY.
    pub clay_threshold: f32,

    /// Noise driving water table depth and soil depth.
    pub water_noise: TrigNoise,
    /// Noise driving soil classification and drainage.
    pub soil_noise: TrigNoise,
    /// Noise mapped onto the four bedrock classes.
    pub bedrock_noise: TrigNoise,

    /// Water table depth = base + elevation * per_meter + water_noise * amplitude.
    pub water_table_base: f32,
    pub water_table_per_meter: f32,
    pub water_table_noise: f32,
    /// Soil depth swing from water noise.
    pub soil_depth_noise: f32,

    /// Buildable requires elevation strictly below this ...
    pub buildable_max_elevation: u32,
    /// ... and a water table strictly deeper than this.
    pub buildable_min_water_table: f32,
}

impl Default for GeologyConfig {
    fn default() -> Self {
        Self {
            min_elevation: 5,
            max_elevation: 150,

            rock_elevation: 45,
            sand_threshold: 0.3,
            clay_threshold: -0.3,

            water_noise: TrigNoise::new(0.31, 0.27, 0.0),
            soil_noise: TrigNoise::new(0.13, 0.11, 1.3),
            bedrock_noise: TrigNoise::new(0.07, 0.09, 0.5),

            water_table_base: 1.0,
            water_table_per_meter: 0.03,
            water_table_noise: 2.5,
            soil_depth_noise: 1.5,

            buildable_max_elevation: 50,
            buildable_min_water_table: 0.5,
        }
    }
}
