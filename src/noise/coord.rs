//! Trigonometric field noise and the sine-fract cell hash.

use serde::{Deserialize, Serialize};

/// Separable trig noise: `sin(x*fx + phase) * cos(y*fy + phase)`, in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrigNoise {
    /// Frequency along x.
    pub fx: f32,
    /// Frequency along y.
    pub fy: f32,
    /// Phase offset applied on both axes.
    pub phase: f32,
}

impl TrigNoise {
    pub const fn new(fx: f32, fy: f32, phase: f32) -> Self {
        Self { fx, fy, phase }
    }

    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> f32 {
        let v = (x as f32 * self.fx + self.phase).sin() * (y as f32 * self.fy + self.phase).cos();
        v.clamp(-1.0, 1.0)
    }
}

/// Hash-like pseudo-random value in [0, 1) keyed by cell and rule offset.
///
/// `fract(sin(x*kx + y*ky + offset) * scale)`. Evaluated in f64 so the
/// fractional part keeps enough precision on larger grids.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HashNoise {
    pub kx: f64,
    pub ky: f64,
    pub scale: f64,
}

impl Default for HashNoise {
    fn default() -> Self {
        Self {
            kx: 12.9898,
            ky: 78.233,
            scale: 43_758.545_3,
        }
    }
}

impl HashNoise {
    #[inline]
    pub fn sample(&self, x: usize, y: usize, offset: f64) -> f32 {
        let seed = x as f64 * self.kx + y as f64 * self.ky + offset;
        let v = (seed.sin() * self.scale).abs();
        ((v - v.floor()) as f32).min(1.0 - f32::EPSILON)
    }
}
