//! Moore-neighborhood helpers for a square, row-major grid.
//!
//! Every pass that scans neighbors (hydraulic drops, thermal slumping, river
//! tracing) uses the same fixed order so that tie-breaking is stable.

use std::ops::Range;

/// Width of the border ring that force kernels never touch directly.
pub const BORDER: usize = 2;

/// Neighbor offsets as `(dx, dy)`, dx-major: dx in -1..=1, then dy in -1..=1.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Range of interior indices (`2..size-2`) along either axis.
#[inline]
pub fn interior_range(size: usize) -> Range<usize> {
    BORDER..size.saturating_sub(BORDER)
}

/// True if `(x, y)` lies inside the interior window.
#[inline]
pub fn is_interior(size: usize, x: usize, y: usize) -> bool {
    let r = interior_range(size);
    r.contains(&x) && r.contains(&y)
}

/// Returns the in-bounds 8-neighbors of `(x, y)` as `(dx, dy, nx, ny)`.
///
/// Out-of-grid neighbors are skipped; the order of the remaining ones follows
/// [`NEIGHBOR_OFFSETS`].
pub fn neighbor_8(size: usize, x: usize, y: usize) -> impl Iterator<Item = (i32, i32, usize, usize)> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if (0..size as i64).contains(&nx) && (0..size as i64).contains(&ny) {
            Some((dx, dy, nx as usize, ny as usize))
        } else {
            None
        }
    })
}
