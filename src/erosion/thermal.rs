//! Thermal erosion: material slumps off slopes steeper than `max_slope`.

use crate::erosion::{ErosionConfig, ThermalMode};
use crate::geometry::{interior_range, neighbor_8};
use crate::terrain::Heightfield;

/// Runs one thermal pass over interior cells.
///
/// Cells are visited row-major and neighbors in the fixed scan order. With
/// [`ThermalMode::InPlace`] each comparison reads the live grid, so a cell's
/// later comparisons (and later cells) see transfers already made this pass.
///
/// # Returns
/// Total material moved between cells
pub fn apply_thermal(field: &mut Heightfield, config: &ErosionConfig) -> f32 {
    match config.thermal_mode {
        ThermalMode::InPlace => thermal_in_place(field, config),
        ThermalMode::Buffered => thermal_buffered(field, config),
    }
}

fn thermal_in_place(field: &mut Heightfield, config: &ErosionConfig) -> f32 {
    let size = field.size();
    let mut moved = 0.0;

    for y in interior_range(size) {
        for x in interior_range(size) {
            for (_, _, nx, ny) in neighbor_8(size, x, y) {
                let diff = field.get(x, y) - field.get(nx, ny);
                if diff > config.max_slope {
                    let transfer = (diff - config.max_slope) * config.thermal_rate;
                    field.add(x, y, -transfer);
                    field.add(nx, ny, transfer);
                    moved += transfer;
                }
            }
        }
    }

    moved
}

fn thermal_buffered(field: &mut Heightfield, config: &ErosionConfig) -> f32 {
    let size = field.size();
    let snapshot = field.clone();
    let mut delta = vec![0.0f32; size * size];
    let mut moved = 0.0;

    for y in interior_range(size) {
        for x in interior_range(size) {
            let h = snapshot.get(x, y);
            for (_, _, nx, ny) in neighbor_8(size, x, y) {
                let diff = h - snapshot.get(nx, ny);
                if diff > config.max_slope {
                    let transfer = (diff - config.max_slope) * config.thermal_rate;
                    delta[snapshot.index(x, y)] -= transfer;
                    delta[snapshot.index(nx, ny)] += transfer;
                    moved += transfer;
                }
            }
        }
    }

    for (h, d) in field.values_mut().iter_mut().zip(delta) {
        *h += d;
    }
    moved
}
