//! Natural resources attached to tiles.
//!
//! Placement is a pure function of a tile's geology and coordinates, keyed by
//! a per-rule hash so every rule rolls independently.

mod config;
mod placer;
mod types;

pub use config::{ResourceConfig, ResourceRule};
pub use placer::{moisture, place_resources};
pub use types::{Resource, ResourceCategory, ResourceType};
