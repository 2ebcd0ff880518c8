//! Heightfield storage, random seeding and edge smoothing.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::BORDER;

/// Smallest side length with a non-empty interior (`2..size-2`).
pub const MIN_GRID_SIZE: usize = 5;

/// Precondition failures when building a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size {size} is below the minimum of {min}")]
    TooSmall { size: usize, min: usize },
    #[error("expected {expected} height values for the grid, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Parameters for the initial random heightfield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightfieldConfig {
    /// Mean starting elevation for every cell.
    pub base_elevation: f32,
    /// Half-width of the uniform per-cell jitter around the base.
    pub jitter: f32,
}

impl Default for HeightfieldConfig {
    fn default() -> Self {
        Self {
            base_elevation: 35.0,
            jitter: 4.0,
        }
    }
}

/// A square grid of elevations stored in row-major order (`values[y * size + x]`).
///
/// Only built through the size-checked constructors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heightfield {
    size: usize,
    values: Vec<f32>,
}

impl Heightfield {
    /// Creates a flat heightfield of zeros.
    pub fn new(size: usize) -> Result<Self, GridError> {
        check_size(size)?;
        Ok(Self {
            size,
            values: vec![0.0; size * size],
        })
    }

    /// Wraps existing row-major values.
    pub fn from_values(size: usize, values: Vec<f32>) -> Result<Self, GridError> {
        check_size(size)?;
        if values.len() != size * size {
            return Err(GridError::LengthMismatch {
                expected: size * size,
                actual: values.len(),
            });
        }
        Ok(Self { size, values })
    }

    /// Seeds a fresh heightfield: `base + uniform(-jitter, +jitter)` per cell.
    ///
    /// Cells are independent; there is no spatial coherence in the seed noise.
    pub fn generate<R: Rng + ?Sized>(
        size: usize,
        config: &HeightfieldConfig,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        check_size(size)?;
        let values = (0..size * size)
            .map(|_| config.base_elevation + (rng.gen::<f32>() * 2.0 - 1.0) * config.jitter)
            .collect();
        Ok(Self { size, values })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size);
        y * self.size + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = self.index(x, y);
        self.values[i] = value;
    }

    /// Adds `delta` to the cell at `(x, y)`.
    #[inline]
    pub fn add(&mut self, x: usize, y: usize, delta: f32) {
        let i = self.index(x, y);
        self.values[i] += delta;
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Overwrites the outer two rings with the value two cells inward.
    ///
    /// Rows 0 and 1 copy row 2, rows `size-1` and `size-2` copy row `size-3`;
    /// columns are then treated the same way. Force kernels only touch the
    /// interior, so this keeps the border from drifting away from it.
    pub fn smooth_edges(&mut self) {
        let n = self.size;
        let inner_lo = BORDER;
        let inner_hi = n - 1 - BORDER;

        for x in 0..n {
            let top = self.get(x, inner_lo);
            let bottom = self.get(x, inner_hi);
            for ring in 0..BORDER {
                self.set(x, ring, top);
                self.set(x, n - 1 - ring, bottom);
            }
        }

        for y in 0..n {
            let left = self.get(inner_lo, y);
            let right = self.get(inner_hi, y);
            for ring in 0..BORDER {
                self.set(ring, y, left);
                self.set(n - 1 - ring, y, right);
            }
        }
    }

    /// Minimum and maximum elevation in the grid.
    pub fn height_range(&self) -> (f32, f32) {
        self.values
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), &h| (lo.min(h), hi.max(h)))
    }

    /// True when no cell holds NaN or an infinity.
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|h| h.is_finite())
    }
}

fn check_size(size: usize) -> Result<(), GridError> {
    if size < MIN_GRID_SIZE {
        return Err(GridError::TooSmall {
            size,
            min: MIN_GRID_SIZE,
        });
    }
    Ok(())
}
