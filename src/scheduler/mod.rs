//! Simulation scheduling.
//!
//! [`SimState`] is a small copyable value advanced by pure `tick` calls;
//! [`Simulation`] owns the heightfield, tile grid and random source and
//! applies a step whenever the state says one is due.

mod clock;
mod simulation;
mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use simulation::{generate, Simulation, TickOutcome};
pub use state::{SchedulerConfig, SimPhase, SimState};
