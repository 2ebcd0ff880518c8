//! Configuration for tectonic uplift.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single uplift source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HillCenter {
    /// Position in reference-grid cells (see [`UpliftConfig::reference_size`]).
    pub position: Vec2,
    /// Peak uplift per step at full intensity, before `scale_factor`.
    pub strength: f32,
}

impl HillCenter {
    pub const fn new(x: f32, y: f32, strength: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            strength,
        }
    }
}

/// Parameters for the uplift pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpliftConfig {
    /// Hill centers; they define the characteristic shape of the terrain.
    pub hills: Vec<HillCenter>,
    /// Cutoff distance in cells; the Gaussian sigma is `radius / 3`.
    pub radius: f32,
    /// Global multiplier on every hill's contribution.
    pub scale_factor: f32,
    /// Amplitude of the per-cell random perturbation (`±intensity*jitter/2`).
    pub jitter: f32,
    /// Grid size the hill positions are authored for. Positions scale by
    /// `size / reference_size` on other grids.
    pub reference_size: f32,
}

/// The standard 8-hill layout for a 50-cell grid.
pub const DEFAULT_HILLS: [HillCenter; 8] = [
    HillCenter::new(12.0, 12.0, 6.0),
    HillCenter::new(36.0, 14.0, 7.5),
    HillCenter::new(25.0, 25.0, 8.0),
    HillCenter::new(14.0, 36.0, 5.5),
    HillCenter::new(37.0, 37.0, 6.5),
    HillCenter::new(8.0, 24.0, 4.0),
    HillCenter::new(42.0, 26.0, 4.5),
    HillCenter::new(25.0, 8.0, 5.0),
];

impl Default for UpliftConfig {
    fn default() -> Self {
        Self {
            hills: DEFAULT_HILLS.to_vec(),
            radius: 15.0,
            scale_factor: 0.5,
            jitter: 0.05,
            reference_size: 50.0,
        }
    }
}

impl UpliftConfig {
    /// Lower scale factor: rounded hills that barely reach the alpine band.
    pub fn gentle() -> Self {
        Self {
            scale_factor: 0.3,
            ..Default::default()
        }
    }

    /// Wider, stronger hills.
    pub fn rugged() -> Self {
        Self {
            radius: 18.0,
            scale_factor: 0.7,
            ..Default::default()
        }
    }

    /// Gaussian sigma derived from the cutoff radius.
    pub fn sigma(&self) -> f32 {
        self.radius / 3.0
    }

    /// Hill positions scaled onto a grid of `size` cells.
    pub fn scaled_hills(&self, size: usize) -> impl Iterator<Item = HillCenter> + '_ {
        let scale = if self.reference_size > 0.0 {
            size as f32 / self.reference_size
        } else {
            1.0
        };
        self.hills.iter().map(move |h| HillCenter {
            position: h.position * scale,
            strength: h.strength,
        })
    }
}
