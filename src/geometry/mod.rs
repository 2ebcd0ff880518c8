//! Square-grid geometry shared by the force passes and the river tracer.

pub mod neighbors;

pub use neighbors::{interior_range, is_interior, neighbor_8, BORDER, NEIGHBOR_OFFSETS};
