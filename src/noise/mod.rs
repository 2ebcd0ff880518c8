//! Coordinate-deterministic noise used by tile and resource derivation.
//!
//! Nothing here holds state or draws from a random source: every value is a
//! pure function of grid coordinates and the configured constants.

mod coord;

pub use coord::{HashNoise, TrigNoise};
