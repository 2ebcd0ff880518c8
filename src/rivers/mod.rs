//! River tracing over a derived tile grid.
//!
//! Each source walks steepest descent independently; there is no flow
//! accumulation or merging between traces.

mod config;
mod trace;

pub use config::RiverConfig;
pub use trace::{find_sources, is_river_source, trace_river, trace_rivers, RiverStats};
