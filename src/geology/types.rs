//! Soil and bedrock classes and the per-cell geology record.

use serde::{Deserialize, Serialize};

/// Surface soil class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SoilType {
    Clay,
    Sand,
    Loam,
    Rock,
}

impl SoilType {
    pub const ALL: [SoilType; 4] = [SoilType::Clay, SoilType::Sand, SoilType::Loam, SoilType::Rock];

    pub fn name(self) -> &'static str {
        match self {
            SoilType::Clay => "CLAY",
            SoilType::Sand => "SAND",
            SoilType::Loam => "LOAM",
            SoilType::Rock => "ROCK",
        }
    }

    /// Typical soil depth in meters before noise.
    pub fn base_depth(self) -> f32 {
        match self {
            SoilType::Clay => 4.0,
            SoilType::Sand => 3.0,
            SoilType::Loam => 5.0,
            SoilType::Rock => 0.8,
        }
    }

    /// How readily water drains through the soil (0..1).
    pub fn base_drainage(self) -> f32 {
        match self {
            SoilType::Clay => 0.2,
            SoilType::Sand => 0.9,
            SoilType::Loam => 0.6,
            SoilType::Rock => 0.75,
        }
    }

    /// Load-bearing stability (0..1).
    pub fn base_stability(self) -> f32 {
        match self {
            SoilType::Clay => 0.5,
            SoilType::Sand => 0.4,
            SoilType::Loam => 0.7,
            SoilType::Rock => 0.95,
        }
    }

    /// Digging cost multiplier before bedrock and noise adjustments.
    pub fn base_excavation_cost(self) -> f32 {
        match self {
            SoilType::Clay => 2.2,
            SoilType::Sand => 1.2,
            SoilType::Loam => 1.5,
            SoilType::Rock => 4.0,
        }
    }

    /// RGB preview color.
    pub fn preview_rgb(self) -> [u8; 3] {
        match self {
            SoilType::Clay => [178, 102, 68],
            SoilType::Sand => [222, 200, 140],
            SoilType::Loam => [96, 140, 64],
            SoilType::Rock => [128, 124, 120],
        }
    }
}

/// Underlying rock class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BedrockType {
    Granite,
    Limestone,
    Sandstone,
    Shale,
}

/// Index order used when mapping bedrock noise to a class.
pub const BEDROCK_ORDER: [BedrockType; 4] = [
    BedrockType::Granite,
    BedrockType::Limestone,
    BedrockType::Sandstone,
    BedrockType::Shale,
];

impl BedrockType {
    pub fn name(self) -> &'static str {
        match self {
            BedrockType::Granite => "GRANITE",
            BedrockType::Limestone => "LIMESTONE",
            BedrockType::Sandstone => "SANDSTONE",
            BedrockType::Shale => "SHALE",
        }
    }

    /// Additive stability adjustment.
    pub fn stability_bonus(self) -> f32 {
        match self {
            BedrockType::Granite => 0.05,
            BedrockType::Limestone => 0.0,
            BedrockType::Sandstone => -0.05,
            BedrockType::Shale => -0.1,
        }
    }

    /// Extra digging cost when the bedrock sits close to the surface.
    pub fn hardness(self) -> f32 {
        match self {
            BedrockType::Granite => 1.0,
            BedrockType::Limestone => 0.6,
            BedrockType::Sandstone => 0.4,
            BedrockType::Shale => 0.2,
        }
    }
}

/// Geology of a single cell. Built once per derivation and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeologyData {
    /// Elevation in meters, clamped to the configured range.
    pub elevation: u32,
    pub soil_type: SoilType,
    /// Soil depth in meters (0.5..=8).
    pub soil_depth: f32,
    pub bedrock_type: BedrockType,
    /// Depth to groundwater in meters (>= 0).
    pub water_table_depth: f32,
    /// 0..=1
    pub drainage: f32,
    /// 0..=1
    pub stability: f32,
    /// Multiplier in 1..=5.
    pub excavation_cost: f32,
}
