//! Tectonic uplift.
//!
//! Raises the interior of the heightfield around a fixed table of hill
//! centers with a Gaussian falloff, scaled by the scheduler's intensity.

mod config;
mod uplift;

pub use config::{HillCenter, UpliftConfig};
pub use uplift::{apply_uplift, uplift_contribution};
