//! Resource kinds and per-tile resource records.

use serde::{Deserialize, Serialize};

/// Broad grouping used for summaries and the inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Water,
    Food,
    Material,
    Shelter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Spring,
    River,
    SeasonalStream,
    Berries,
    Nuts,
    EdiblePlants,
    GameTrail,
    Flint,
    Obsidian,
    ClayDeposit,
    Hardwood,
    Softwood,
    Cave,
    RockShelter,
}

impl ResourceType {
    pub const ALL: [ResourceType; 14] = [
        ResourceType::Spring,
        ResourceType::River,
        ResourceType::SeasonalStream,
        ResourceType::Berries,
        ResourceType::Nuts,
        ResourceType::EdiblePlants,
        ResourceType::GameTrail,
        ResourceType::Flint,
        ResourceType::Obsidian,
        ResourceType::ClayDeposit,
        ResourceType::Hardwood,
        ResourceType::Softwood,
        ResourceType::Cave,
        ResourceType::RockShelter,
    ];

    pub fn category(self) -> ResourceCategory {
        match self {
            ResourceType::Spring | ResourceType::River | ResourceType::SeasonalStream => ResourceCategory::Water,
            ResourceType::Berries | ResourceType::Nuts | ResourceType::EdiblePlants | ResourceType::GameTrail => {
                ResourceCategory::Food
            }
            ResourceType::Flint
            | ResourceType::Obsidian
            | ResourceType::ClayDeposit
            | ResourceType::Hardwood
            | ResourceType::Softwood => ResourceCategory::Material,
            ResourceType::Cave | ResourceType::RockShelter => ResourceCategory::Shelter,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ResourceType::Spring => "spring",
            ResourceType::River => "river",
            ResourceType::SeasonalStream => "seasonal_stream",
            ResourceType::Berries => "berries",
            ResourceType::Nuts => "nuts",
            ResourceType::EdiblePlants => "edible_plants",
            ResourceType::GameTrail => "game_trail",
            ResourceType::Flint => "flint",
            ResourceType::Obsidian => "obsidian",
            ResourceType::ClayDeposit => "clay_deposit",
            ResourceType::Hardwood => "hardwood",
            ResourceType::Softwood => "softwood",
            ResourceType::Cave => "cave",
            ResourceType::RockShelter => "rock_shelter",
        }
    }
}

/// One resource on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceType,
    /// 0..=1
    pub abundance: f32,
    pub seasonal: bool,
    /// 0..=1
    pub accessibility: f32,
}

impl Resource {
    /// Builds a resource with abundance and accessibility clamped to [0, 1].
    pub fn new(kind: ResourceType, abundance: f32, seasonal: bool, accessibility: f32) -> Self {
        Self {
            kind,
            abundance: abundance.clamp(0.0, 1.0),
            seasonal,
            accessibility: accessibility.clamp(0.0, 1.0),
        }
    }

    pub fn category(&self) -> ResourceCategory {
        self.kind.category()
    }
}
