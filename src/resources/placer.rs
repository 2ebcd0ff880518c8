//! Rule-based resource placement.
//!
//! Categories fire independently; within the vegetation category the
//! elevation zone decides which rules are even considered.

use super::{Resource, ResourceCategory, ResourceConfig, ResourceRule, ResourceType};
use crate::geology::{BedrockType, GeologyData, SoilType};

/// Per-cell roller bound to a coordinate.
struct Roller<'a> {
    config: &'a ResourceConfig,
    x: usize,
    y: usize,
}

impl Roller<'_> {
    fn roll(&self, rule: &ResourceRule) -> f32 {
        self.config.hash.sample(self.x, self.y, rule.offset)
    }

    /// Returns the roll when it beats `rule.threshold - bonus`.
    fn fires(&self, rule: &ResourceRule, bonus: f32) -> Option<f32> {
        let r = self.roll(rule);
        (r > rule.threshold - bonus).then_some(r)
    }
}

/// Moisture in [0, 1] from the water table, boosted by water already on the tile.
pub fn moisture(geology: &GeologyData, has_water: bool, config: &ResourceConfig) -> f32 {
    let base = 1.0 - geology.water_table_depth / config.moisture_depth_scale;
    let bonus = if has_water { config.water_moisture_bonus } else { 0.0 };
    (base + bonus).clamp(0.0, 1.0)
}

/// Places every resource whose rule fires for the cell at `(x, y)`.
pub fn place_resources(geology: &GeologyData, x: usize, y: usize, config: &ResourceConfig) -> Vec<Resource> {
    let roller = Roller { config, x, y };
    let mut out = Vec::new();

    place_water(geology, &roller, &mut out);
    place_food(geology, &roller, &mut out);
    place_materials(geology, &roller, &mut out);
    place_wood(geology, &roller, &mut out);
    place_shelter(geology, &roller, &mut out);

    out
}

fn place_water(g: &GeologyData, roller: &Roller<'_>, out: &mut Vec<Resource>) {
    let c = roller.config;
    if g.water_table_depth < c.spring_max_water_table {
        if let Some(r) = roller.fires(&c.spring, 0.0) {
            out.push(Resource::new(ResourceType::Spring, r, false, 0.9));
            return;
        }
    }
    if g.water_table_depth < c.stream_max_water_table {
        if let Some(r) = roller.fires(&c.seasonal_stream, 0.0) {
            out.push(Resource::new(ResourceType::SeasonalStream, 0.3 + 0.5 * r, true, 0.8));
        }
    }
}

fn place_food(g: &GeologyData, roller: &Roller<'_>, out: &mut Vec<Resource>) {
    let c = roller.config;
    let has_water = out.iter().any(|r| r.category() == ResourceCategory::Water);
    let m = moisture(g, has_water, c);

    if g.elevation < c.lowland_max {
        if roller.fires(&c.berries, 0.2 * m).is_some() {
            out.push(Resource::new(ResourceType::Berries, 0.4 + 0.5 * m, true, 0.9));
        }
        if roller.fires(&c.edible_plants, 0.3 * m).is_some() {
            out.push(Resource::new(ResourceType::EdiblePlants, 0.3 + 0.6 * m, true, 0.95));
        }
    } else if g.elevation < c.alpine_min {
        if roller.fires(&c.nuts, 0.2 * m).is_some() {
            out.push(Resource::new(ResourceType::Nuts, 0.5 + 0.3 * m, true, 0.7));
        }
        if roller.fires(&c.berries, 0.1 * m - 0.15).is_some() {
            out.push(Resource::new(ResourceType::Berries, 0.3 + 0.4 * m, true, 0.75));
        }
        if roller.fires(&c.edible_plants, 0.2 * m - 0.2).is_some() {
            out.push(Resource::new(ResourceType::EdiblePlants, 0.25 + 0.4 * m, true, 0.8));
        }
    } else if roller.fires(&c.alpine_plants, 0.0).is_some() {
        out.push(Resource::new(ResourceType::EdiblePlants, 0.2 + 0.3 * m, true, 0.4));
    }

    if g.elevation < c.game_trail_max_elevation {
        if let Some(r) = roller.fires(&c.game_trail, 0.1 * m) {
            out.push(Resource::new(ResourceType::GameTrail, 0.4 + 0.5 * r, false, 0.8));
        }
    }
}

fn place_materials(g: &GeologyData, roller: &Roller<'_>, out: &mut Vec<Resource>) {
    let c = roller.config;
    let dig = 1.0 - g.excavation_cost / 5.0;

    if g.bedrock_type == BedrockType::Limestone {
        if let Some(r) = roller.fires(&c.flint, 0.0) {
            out.push(Resource::new(ResourceType::Flint, 0.3 + 0.6 * r, false, dig));
        }
    }
    if g.bedrock_type == BedrockType::Granite && g.elevation > c.obsidian_min_elevation {
        if let Some(r) = roller.fires(&c.obsidian, 0.0) {
            out.push(Resource::new(ResourceType::Obsidian, 0.2 + 0.5 * r, false, dig * 0.8));
        }
    }
    if g.soil_type == SoilType::Clay && g.elevation < c.clay_max_elevation {
        if roller.fires(&c.clay_deposit, 0.0).is_some() {
            let abundance = 0.5 + 0.5 * (1.0 - g.drainage);
            out.push(Resource::new(ResourceType::ClayDeposit, abundance, false, 0.85));
        }
    }
}

fn place_wood(g: &GeologyData, roller: &Roller<'_>, out: &mut Vec<Resource>) {
    let c = roller.config;
    let m = moisture(g, false, c);

    if g.elevation < c.hardwood_max_elevation && matches!(g.soil_type, SoilType::Loam | SoilType::Clay) {
        if roller.fires(&c.hardwood, 0.0).is_some() {
            out.push(Resource::new(ResourceType::Hardwood, 0.5 + 0.4 * m, false, 0.8));
        }
    }
    if (c.softwood_min_elevation..c.softwood_max_elevation).contains(&g.elevation) && g.soil_type != SoilType::Sand {
        if roller.fires(&c.softwood, 0.0).is_some() {
            out.push(Resource::new(ResourceType::Softwood, 0.4 + 0.4 * m, false, 0.75));
        }
    }
}

fn place_shelter(g: &GeologyData, roller: &Roller<'_>, out: &mut Vec<Resource>) {
    let c = roller.config;
    if g.bedrock_type == BedrockType::Shale {
        return;
    }
    if g.elevation > c.cave_min_elevation {
        if let Some(r) = roller.fires(&c.cave, 0.0) {
            out.push(Resource::new(ResourceType::Cave, 0.5 + 0.5 * r, false, 0.6));
        }
    }
    if g.elevation > c.rock_shelter_min_elevation {
        if let Some(r) = roller.fires(&c.rock_shelter, 0.0) {
            out.push(Resource::new(ResourceType::RockShelter, 0.4 + 0.5 * r, false, 0.7));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geology(elevation: u32, soil_type: SoilType, bedrock_type: BedrockType, water_table_depth: f32) -> GeologyData {
        GeologyData {
            elevation,
            soil_type,
            soil_depth: 3.0,
            bedrock_type,
            water_table_depth,
            drainage: 0.5,
            stability: 0.6,
            excavation_cost: 2.0,
        }
    }

    fn has(resources: &[Resource], kind: ResourceType) -> bool {
        resources.iter().any(|r| r.kind == kind)
    }

    #[test]
    fn limestone_flint_accessibility_follows_excavation_cost() {
        let config = ResourceConfig::default();
        let g = geology(40, SoilType::Loam, BedrockType::Limestone, 4.0);
        let (x, y) = (0..40usize)
            .flat_map(|y| (0..40usize).map(move |x| (x, y)))
            .find(|&(x, y)| config.hash.sample(x, y, config.flint.offset) > config.flint.threshold)
            .expect("some cell rolls flint");

        let placed = place_resources(&g, x, y, &config);
        let flint = placed.iter().find(|r| r.kind == ResourceType::Flint).expect("flint placed");
        assert!((flint.accessibility - (1.0 - 2.0 / 5.0)).abs() < 1e-6);
        assert!(!flint.seasonal);
    }

    #[test]
    fn no_flint_off_limestone() {
        let config = ResourceConfig::default();
        for bedrock in [BedrockType::Granite, BedrockType::Sandstone, BedrockType::Shale] {
            let g = geology(40, SoilType::Loam, bedrock, 4.0);
            for y in 0..30 {
                for x in 0..30 {
                    assert!(!has(&place_resources(&g, x, y, &config), ResourceType::Flint));
                }
            }
        }
    }

    #[test]
    fn alpine_zone_only_grows_edible_plants() {
        let config = ResourceConfig::default();
        let g = geology(90, SoilType::Rock, BedrockType::Granite, 0.2);
        let mut plants = 0;
        for y in 0..50 {
            for x in 0..50 {
                let placed = place_resources(&g, x, y, &config);
                assert!(!has(&placed, ResourceType::Berries));
                assert!(!has(&placed, ResourceType::Nuts));
                assert!(!has(&placed, ResourceType::GameTrail));
                plants += placed.iter().filter(|r| r.kind == ResourceType::EdiblePlants).count();
            }
        }
        assert!(plants > 0);
    }

    #[test]
    fn shale_never_shelters() {
        let config = ResourceConfig::default();
        let g = geology(100, SoilType::Rock, BedrockType::Shale, 5.0);
        for y in 0..40 {
            for x in 0..40 {
                let placed = place_resources(&g, x, y, &config);
                assert!(!placed.iter().any(|r| r.category() == ResourceCategory::Shelter));
            }
        }
    }

    #[test]
    fn deep_water_table_has_no_springs() {
        let config = ResourceConfig::default();
        let g = geology(20, SoilType::Loam, BedrockType::Granite, 6.0);
        for y in 0..40 {
            for x in 0..40 {
                let placed = place_resources(&g, x, y, &config);
                assert!(!placed.iter().any(|r| r.category() == ResourceCategory::Water));
            }
        }
    }

    #[test]
    fn categories_can_stack() {
        let config = ResourceConfig::default();
        let g = geology(40, SoilType::Loam, BedrockType::Limestone, 2.0);
        let found = (0..60usize)
            .flat_map(|y| (0..60usize).map(move |x| (x, y)))
            .map(|(x, y)| place_resources(&g, x, y, &config))
            .any(|placed| has(&placed, ResourceType::Hardwood) && has(&placed, ResourceType::Softwood));
        assert!(found);
    }

    #[test]
    fn placement_is_deterministic_and_bounded() {
        let config = ResourceConfig::default();
        let g = geology(25, SoilType::Clay, BedrockType::Limestone, 0.4);
        for y in 0..30 {
            for x in 0..30 {
                let a = place_resources(&g, x, y, &config);
                assert_eq!(a, place_resources(&g, x, y, &config));
                for r in &a {
                    assert!((0.0..=1.0).contains(&r.abundance));
                    assert!((0.0..=1.0).contains(&r.accessibility));
                }
            }
        }
    }

    #[test]
    fn moisture_bonus_from_water() {
        let config = ResourceConfig::default();
        let g = geology(20, SoilType::Loam, BedrockType::Granite, 5.0);
        assert!((moisture(&g, false, &config) - 0.5).abs() < 1e-6);
        assert!((moisture(&g, true, &config) - 0.7).abs() < 1e-6);
        let dry = geology(20, SoilType::Loam, BedrockType::Granite, 30.0);
        assert_eq!(moisture(&dry, false, &config), 0.0);
    }
}
