//! Export module for saving simulation output as images.
//!
//! Heightfields go out as 16-bit grayscale PNG; the tile grid as an RGB
//! soil map with rivers drawn over it.

mod geology_map;
mod png;

pub use geology_map::{export_geology_map_png, GeologyMapOptions};
pub use png::{export_heightfield_png, ExportError, PngExportOptions};
