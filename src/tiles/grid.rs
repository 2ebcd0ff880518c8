//! Terrain tiles and the grid that owns them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geology::{GeologyData, SoilType, BEDROCK_ORDER};
use crate::resources::{Resource, ResourceType};
use crate::terrain::{GridError, MIN_GRID_SIZE};

/// One cell of derived terrain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainTile {
    pub x: usize,
    pub y: usize,
    pub geology: GeologyData,
    pub buildable: bool,
    pub resources: Vec<Resource>,
    /// Reserved for settlement logic; always `None`.
    pub building: Option<u32>,
}

impl TerrainTile {
    pub fn new(x: usize, y: usize, geology: GeologyData, resources: Vec<Resource>, buildable: bool) -> Self {
        Self {
            x,
            y,
            geology,
            buildable,
            resources,
            building: None,
        }
    }

    pub fn has_resource(&self, kind: ResourceType) -> bool {
        self.resources.iter().any(|r| r.kind == kind)
    }
}

/// Square grid of tiles in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileGrid {
    size: usize,
    tiles: Vec<TerrainTile>,
}

impl TileGrid {
    /// Wraps tiles produced elsewhere, checking the grid shape.
    pub fn from_tiles(size: usize, tiles: Vec<TerrainTile>) -> Result<Self, GridError> {
        if size < MIN_GRID_SIZE {
            return Err(GridError::TooSmall {
                size,
                min: MIN_GRID_SIZE,
            });
        }
        if tiles.len() != size * size {
            return Err(GridError::LengthMismatch {
                expected: size * size,
                actual: tiles.len(),
            });
        }
        Ok(Self { size, tiles })
    }

    /// Shape is guaranteed by the caller (the derivation always fills every cell).
    pub(crate) fn from_parts(size: usize, tiles: Vec<TerrainTile>) -> Self {
        debug_assert_eq!(tiles.len(), size * size);
        Self { size, tiles }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &TerrainTile {
        debug_assert!(x < self.size && y < self.size);
        &self.tiles[y * self.size + x]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut TerrainTile {
        debug_assert!(x < self.size && y < self.size);
        &mut self.tiles[y * self.size + x]
    }

    /// Bounds-checked lookup for callers holding untrusted coordinates.
    pub fn try_get(&self, x: usize, y: usize) -> Option<&TerrainTile> {
        (x < self.size && y < self.size).then(|| self.get(x, y))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TerrainTile> {
        self.tiles.iter()
    }

    /// Aggregate counts for reports and the inspector.
    ///
    /// Every soil, bedrock and resource type has an entry, zero when absent.
    pub fn summary(&self) -> GridSummary {
        let mut s = GridSummary {
            tiles: self.tiles.len(),
            min_elevation: u32::MAX,
            max_elevation: 0,
            soils: SoilType::ALL.iter().map(|t| (t.name(), 0)).collect(),
            bedrock: BEDROCK_ORDER.iter().map(|t| (t.name(), 0)).collect(),
            resources: ResourceType::ALL.iter().map(|t| (t.name(), 0)).collect(),
            ..Default::default()
        };
        for tile in &self.tiles {
            let g = &tile.geology;
            s.min_elevation = s.min_elevation.min(g.elevation);
            s.max_elevation = s.max_elevation.max(g.elevation);
            *s.soils.entry(g.soil_type.name()).or_default() += 1;
            *s.bedrock.entry(g.bedrock_type.name()).or_default() += 1;
            if tile.buildable {
                s.buildable += 1;
            }
            if tile.has_resource(ResourceType::River) {
                s.river_cells += 1;
            }
            for r in &tile.resources {
                *s.resources.entry(r.kind.name()).or_default() += 1;
            }
        }
        s
    }
}

/// Counts over a whole grid, keyed by display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GridSummary {
    pub tiles: usize,
    pub min_elevation: u32,
    pub max_elevation: u32,
    pub buildable: usize,
    pub river_cells: usize,
    pub soils: BTreeMap<&'static str, usize>,
    pub bedrock: BTreeMap<&'static str, usize>,
    pub resources: BTreeMap<&'static str, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geology::BedrockType;

    fn tile(x: usize, y: usize, elevation: u32) -> TerrainTile {
        let geology = GeologyData {
            elevation,
            soil_type: if elevation > 45 { SoilType::Rock } else { SoilType::Loam },
            soil_depth: 2.0,
            bedrock_type: BedrockType::Sandstone,
            water_table_depth: 1.0,
            drainage: 0.5,
            stability: 0.5,
            excavation_cost: 2.0,
        };
        TerrainTile::new(x, y, geology, Vec::new(), elevation < 50)
    }

    #[test]
    fn from_tiles_checks_shape() {
        let tiles: Vec<_> = (0..24).map(|i| tile(i % 5, i / 5, 20)).collect();
        assert!(matches!(
            TileGrid::from_tiles(5, tiles),
            Err(GridError::LengthMismatch { expected: 25, actual: 24 })
        ));
        assert!(matches!(
            TileGrid::from_tiles(3, Vec::new()),
            Err(GridError::TooSmall { size: 3, .. })
        ));
    }

    #[test]
    fn summary_counts() {
        let mut tiles: Vec<_> = (0..25).map(|i| tile(i % 5, i / 5, 20 + i as u32 * 2)).collect();
        tiles[3]
            .resources
            .push(Resource::new(ResourceType::River, 0.9, false, 0.95));
        let grid = TileGrid::from_tiles(5, tiles).unwrap();
        let s = grid.summary();
        assert_eq!(s.tiles, 25);
        assert_eq!(s.min_elevation, 20);
        assert_eq!(s.max_elevation, 68);
        assert_eq!(s.river_cells, 1);
        assert_eq!(s.resources.get("river"), Some(&1));
        assert_eq!(s.bedrock.get("SANDSTONE"), Some(&25));
        assert_eq!(s.soils.values().sum::<usize>(), 25);
        assert_eq!(s.buildable, 15);
    }

    #[test]
    fn summary_lists_absent_kinds_as_zero() {
        let tiles: Vec<_> = (0..25).map(|i| tile(i % 5, i / 5, 20)).collect();
        let s = TileGrid::from_tiles(5, tiles).unwrap().summary();
        assert_eq!(s.soils.len(), 4);
        assert_eq!(s.soils.get("ROCK"), Some(&0));
        assert_eq!(s.bedrock.len(), 4);
        assert_eq!(s.bedrock.get("GRANITE"), Some(&0));
        assert_eq!(s.resources.len(), 14);
        assert_eq!(s.resources.get("cave"), Some(&0));
    }

    #[test]
    fn grid_serializes_for_the_inspector() {
        let tiles: Vec<_> = (0..25).map(|i| tile(i % 5, i / 5, 20)).collect();
        let grid = TileGrid::from_tiles(5, tiles).unwrap();
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["size"], 5);
        assert_eq!(json["tiles"].as_array().map(Vec::len), Some(25));
        assert_eq!(json["tiles"][7]["geology"]["soilType"], "LOAM");
    }

    #[test]
    fn try_get_bounds() {
        let tiles: Vec<_> = (0..25).map(|i| tile(i % 5, i / 5, 20)).collect();
        let grid = TileGrid::from_tiles(5, tiles).unwrap();
        assert!(grid.try_get(4, 4).is_some());
        assert!(grid.try_get(5, 0).is_none());
    }
}
