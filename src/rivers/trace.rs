//! Steepest-descent river paths.

use super::RiverConfig;
use crate::geometry::neighbor_8;
use crate::resources::{Resource, ResourceType};
use crate::tiles::{TerrainTile, TileGrid};

/// Outcome of a full tracing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiverStats {
    pub sources: usize,
    /// Cells that gained a river resource in this pass.
    pub new_river_cells: usize,
    pub longest_path: usize,
}

/// High ground with shallow groundwater or a spring.
pub fn is_river_source(tile: &TerrainTile, config: &RiverConfig) -> bool {
    tile.geology.elevation > config.source_min_elevation
        && (tile.geology.water_table_depth < config.source_max_water_table
            || tile.has_resource(ResourceType::Spring))
}

/// Source coordinates in row-major order.
pub fn find_sources(grid: &TileGrid, config: &RiverConfig) -> Vec<(usize, usize)> {
    grid.iter()
        .filter(|t| is_river_source(t, config))
        .map(|t| (t.x, t.y))
        .collect()
}

/// Follows the lowest strictly-lower neighbor from `start`.
///
/// The returned path includes `start`, never repeats a cell and holds at most
/// `size * size` cells.
///
/// # Arguments
/// * `grid` - Fully derived tile grid
/// * `start` - Source cell
/// * `config` - Elevation below which a river ends
///
/// # Returns
/// Visited cells in walk order
pub fn trace_river(grid: &TileGrid, start: (usize, usize), config: &RiverConfig) -> Vec<(usize, usize)> {
    let size = grid.size();
    let mut visited = vec![false; size * size];
    let mut path = Vec::new();
    let (mut x, mut y) = start;

    while path.len() < size * size {
        let i = y * size + x;
        if visited[i] {
            break;
        }
        visited[i] = true;
        path.push((x, y));

        let elevation = grid.get(x, y).geology.elevation;
        if elevation < config.min_elevation {
            break;
        }

        let mut best: Option<(usize, usize, u32)> = None;
        for (_, _, nx, ny) in neighbor_8(size, x, y) {
            let e = grid.get(nx, ny).geology.elevation;
            if e < best.map_or(elevation, |b| b.2) {
                best = Some((nx, ny, e));
            }
        }

        match best {
            Some((nx, ny, _)) => {
                x = nx;
                y = ny;
            }
            None => break,
        }
    }

    path
}

/// Traces every source and tags visited cells with a river resource.
pub fn trace_rivers(grid: &mut TileGrid, config: &RiverConfig) -> RiverStats {
    let sources = find_sources(grid, config);
    let mut stats = RiverStats {
        sources: sources.len(),
        ..Default::default()
    };

    for start in sources {
        let path = trace_river(grid, start, config);
        stats.longest_path = stats.longest_path.max(path.len());
        for (x, y) in path {
            let tile = grid.get_mut(x, y);
            if !tile.has_resource(ResourceType::River) {
                tile.resources
                    .push(Resource::new(ResourceType::River, config.abundance, false, config.accessibility));
                stats.new_river_cells += 1;
            }
        }
    }

    stats
}
