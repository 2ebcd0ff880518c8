//! Pure derivation of [`GeologyData`] from `(x, y, elevation)`.

use super::{BedrockType, GeologyConfig, GeologyData, SoilType, BEDROCK_ORDER};

/// The three coordinate noises sampled for a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellNoise {
    pub water: f32,
    pub soil: f32,
    pub bedrock: f32,
}

impl CellNoise {
    pub fn sample(config: &GeologyConfig, x: usize, y: usize) -> Self {
        Self {
            water: config.water_noise.sample(x, y),
            soil: config.soil_noise.sample(x, y),
            bedrock: config.bedrock_noise.sample(x, y),
        }
    }
}

/// Rounds and clamps a raw height into the configured integer range.
///
/// Non-finite inputs land on the low end.
pub fn clamp_elevation(raw: f32, config: &GeologyConfig) -> u32 {
    if !raw.is_finite() {
        return if raw == f32::INFINITY {
            config.max_elevation
        } else {
            config.min_elevation
        };
    }
    let lo = config.min_elevation as f32;
    let hi = config.max_elevation as f32;
    raw.round().clamp(lo, hi) as u32
}

/// Elevation first, then soil noise.
pub fn classify_soil(elevation: u32, soil_noise: f32, config: &GeologyConfig) -> SoilType {
    if elevation > config.rock_elevation {
        SoilType::Rock
    } else if soil_noise > config.sand_threshold {
        SoilType::Sand
    } else if soil_noise < config.clay_threshold {
        SoilType::Clay
    } else {
        SoilType::Loam
    }
}

/// Maps noise in [-1, 1] to `floor((n + 1) * 2) % 4` over [`BEDROCK_ORDER`].
pub fn classify_bedrock(noise: f32) -> BedrockType {
    let n = noise.clamp(-1.0, 1.0);
    let idx = ((n + 1.0) * 2.0).floor() as usize % BEDROCK_ORDER.len();
    BEDROCK_ORDER[idx]
}

/// Elevation strictly below the limit and a water table strictly deeper than the minimum.
pub fn is_buildable(elevation: u32, water_table_depth: f32, config: &GeologyConfig) -> bool {
    elevation < config.buildable_max_elevation && water_table_depth > config.buildable_min_water_table
}

/// Derives the geology of cell `(x, y)` with raw height `raw_elevation`.
pub fn derive_geology(x: usize, y: usize, raw_elevation: f32, config: &GeologyConfig) -> GeologyData {
    let elevation = clamp_elevation(raw_elevation, config);
    let noise = CellNoise::sample(config, x, y);

    let soil_type = classify_soil(elevation, noise.soil, config);
    let bedrock_type = classify_bedrock(noise.bedrock);

    let soil_depth = (soil_type.base_depth() + noise.water * config.soil_depth_noise).clamp(0.5, 8.0);
    let water_table_depth = (config.water_table_base
        + elevation as f32 * config.water_table_per_meter
        + noise.water * config.water_table_noise)
        .max(0.0);
    let drainage = (soil_type.base_drainage() + noise.soil * 0.1).clamp(0.0, 1.0);
    let stability =
        (soil_type.base_stability() + bedrock_type.stability_bonus() + noise.water * 0.05).clamp(0.0, 1.0);

    // Shallow soil exposes the bedrock to the shovel.
    let exposure = 1.0 - soil_depth / 8.0;
    let excavation_cost = (soil_type.base_excavation_cost()
        + bedrock_type.hardness() * exposure
        + noise.soil.abs() * 0.3)
        .clamp(1.0, 5.0);

    GeologyData {
        elevation,
        soil_type,
        soil_depth,
        bedrock_type,
        water_table_depth,
        drainage,
        stability,
        excavation_cost,
    }
}
