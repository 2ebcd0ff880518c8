//! Terrain module.
//!
//! Provides the square [`Heightfield`] grid that the force passes evolve, its
//! random seeding and the border-smoothing invariant.

mod heightfield;

pub use heightfield::{GridError, Heightfield, HeightfieldConfig, MIN_GRID_SIZE};
