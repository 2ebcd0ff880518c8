//! Hydraulic and thermal erosion.
//!
//! Both passes operate on interior cells only and mutate the heightfield in
//! place; the step pipeline hands them a private working copy.

mod config;
pub mod hydraulic;
pub mod thermal;

pub use config::{ErosionConfig, ThermalMode};
pub use hydraulic::{apply_hydraulic, HydraulicStats};
pub use thermal::apply_thermal;
