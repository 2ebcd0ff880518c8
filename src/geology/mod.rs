//! Per-cell geology derived from elevation and coordinate noise.
//!
//! Nothing in this module touches the random source: two heightfields that
//! agree on a cell's elevation produce identical geology for that cell.

mod config;
mod derive;
mod types;

pub use config::GeologyConfig;
pub use derive::{
    clamp_elevation, classify_bedrock, classify_soil, derive_geology, is_buildable, CellNoise,
};
pub use types::{BedrockType, GeologyData, SoilType, BEDROCK_ORDER};
