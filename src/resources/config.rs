//! Resource placement parameters.

use serde::{Deserialize, Serialize};

use crate::noise::HashNoise;

/// Hash offset and base roll threshold for one placement rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceRule {
    /// Added to the cell hash seed so each rule rolls independently.
    pub offset: f64,
    /// The rule fires when the roll is strictly above this (before moisture).
    pub threshold: f32,
}

impl ResourceRule {
    pub const fn new(offset: f64, threshold: f32) -> Self {
        Self { offset, threshold }
    }
}

/// All thresholds and bands used by [`place_resources`](super::place_resources).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    pub hash: HashNoise,

    // Water
    pub spring: ResourceRule,
    pub seasonal_stream: ResourceRule,
    pub spring_max_water_table: f32,
    pub stream_max_water_table: f32,

    // Vegetation zones
    /// Lowland is strictly below this elevation.
    pub lowland_max: u32,
    /// Highland is `lowland_max..alpine_min`; alpine is at or above.
    pub alpine_min: u32,
    /// Water table depth at which the moisture term reaches zero.
    pub moisture_depth_scale: f32,
    /// Moisture bonus when the tile already carries a water resource.
    pub water_moisture_bonus: f32,
    pub berries: ResourceRule,
    pub nuts: ResourceRule,
    pub edible_plants: ResourceRule,
    pub alpine_plants: ResourceRule,
    pub game_trail: ResourceRule,
    pub game_trail_max_elevation: u32,

    // Materials
    pub flint: ResourceRule,
    pub obsidian: ResourceRule,
    pub obsidian_min_elevation: u32,
    pub clay_deposit: ResourceRule,
    pub clay_max_elevation: u32,

    // Wood
    pub hardwood: ResourceRule,
    pub hardwood_max_elevation: u32,
    pub softwood: ResourceRule,
    pub softwood_min_elevation: u32,
    pub softwood_max_elevation: u32,

    // Shelter
    pub cave: ResourceRule,
    pub cave_min_elevation: u32,
    pub rock_shelter: ResourceRule,
    pub rock_shelter_min_elevation: u32,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            hash: HashNoise::default(),

            spring: ResourceRule::new(11.0, 0.7),
            seasonal_stream: ResourceRule::new(23.0, 0.75),
            spring_max_water_table: 1.0,
            stream_max_water_table: 3.0,

            lowland_max: 30,
            alpine_min: 60,
            moisture_depth_scale: 10.0,
            water_moisture_bonus: 0.2,
            berries: ResourceRule::new(37.0, 0.6),
            nuts: ResourceRule::new(41.0, 0.65),
            edible_plants: ResourceRule::new(53.0, 0.5),
            alpine_plants: ResourceRule::new(59.0, 0.85),
            game_trail: ResourceRule::new(67.0, 0.8),
            game_trail_max_elevation: 60,

            flint: ResourceRule::new(71.0, 0.6),
            obsidian: ResourceRule::new(83.0, 0.85),
            obsidian_min_elevation: 55,
            clay_deposit: ResourceRule::new(97.0, 0.5),
            clay_max_elevation: 40,

            hardwood: ResourceRule::new(101.0, 0.5),
            hardwood_max_elevation: 50,
            softwood: ResourceRule::new(113.0, 0.5),
            softwood_min_elevation: 30,
            softwood_max_elevation: 80,

            cave: ResourceRule::new(127.0, 0.85),
            cave_min_elevation: 50,
            rock_shelter: ResourceRule::new(131.0, 0.8),
            rock_shelter_min_elevation: 35,
        }
    }
}
