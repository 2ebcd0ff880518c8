//! Procedural terrain and geology simulator.
//!
//! A square heightfield is seeded with noise and then evolved step by step
//! under tectonic uplift, hydraulic erosion and thermal erosion. After every
//! step a grid of terrain tiles is re-derived from it: soil, bedrock, water
//! table, excavation cost, placed resources and traced rivers.

pub mod config;
pub mod erosion;
pub mod export;
pub mod geology;
pub mod geometry;
pub mod noise;
pub mod pipeline;
pub mod resources;
pub mod rivers;
pub mod scheduler;
pub mod tectonics;
pub mod terrain;
pub mod tiles;

pub use config::{ConfigError, SimConfig};
pub use erosion::{ErosionConfig, ThermalMode};
pub use geology::{BedrockType, GeologyConfig, GeologyData, SoilType};
pub use pipeline::{step, ForceStage, StepPipeline};
pub use resources::{Resource, ResourceCategory, ResourceConfig, ResourceType};
pub use rivers::RiverConfig;
pub use scheduler::{generate, Clock, ManualClock, SchedulerConfig, SimPhase, SimState, Simulation, SystemClock, TickOutcome};
pub use tectonics::{HillCenter, UpliftConfig};
pub use terrain::{GridError, Heightfield, HeightfieldConfig};
pub use tiles::{derive_tiles, GridSummary, TerrainTile, TileGrid};
