//! Step pipeline: the ordered force passes applied once per simulation step.
//!
//! Provides a trait-based architecture so the passes can be composed and
//! tested in isolation while the scheduler only sees a single `step`.

mod stage;

pub use stage::{
    step, EdgeSmoothingStage, ForceStage, HydraulicStage, PipelineError, StageId, StepContext, StepPipeline,
    ThermalStage, UpliftStage,
};
