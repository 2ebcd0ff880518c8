//! Force stage trait and pipeline orchestration.

use std::time::Instant;

use rand::RngCore;
use thiserror::Error;

use crate::config::SimConfig;
use crate::erosion::{apply_hydraulic, apply_thermal, ErosionConfig};
use crate::tectonics::{apply_uplift, UpliftConfig};
use crate::terrain::Heightfield;

/// Unique identifier for force stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageId {
    /// Gaussian hill uplift.
    Uplift,
    /// Drop-based hydraulic erosion.
    Hydraulic,
    /// Slope-limited thermal erosion.
    Thermal,
    /// Border ring smoothing.
    EdgeSmoothing,
}

impl StageId {
    /// Returns the name of the stage.
    pub fn name(&self) -> &'static str {
        match self {
            StageId::Uplift => "uplift",
            StageId::Hydraulic => "hydraulic",
            StageId::Thermal => "thermal",
            StageId::EdgeSmoothing => "edge_smoothing",
        }
    }
}

/// Per-step inputs shared by every stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepContext {
    /// Scheduler intensity in [0, 1].
    pub intensity: f32,
}

/// Errors raised when assembling a pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("pipeline has no stages")]
    Empty,
    #[error("pipeline must end with edge smoothing, but ends with '{0}'")]
    UnsmoothedTail(&'static str),
}

/// A single force pass over the heightfield.
///
/// Stages mutate the working copy handed to them by [`StepPipeline::run`];
/// they never see the caller's heightfield.
pub trait ForceStage: Send + Sync {
    /// Returns the unique identifier for this stage.
    fn id(&self) -> StageId;

    /// Returns a human-readable name for the stage.
    fn name(&self) -> &str;

    /// Applies the stage in place.
    fn apply(&self, field: &mut Heightfield, ctx: &StepContext, rng: &mut dyn RngCore);
}

/// Orchestrates force stages into one simulation step.
pub struct StepPipeline {
    stages: Vec<Box<dyn ForceStage>>,
}

impl StepPipeline {
    /// Builds a pipeline from explicit stages, checking that it ends by smoothing the border.
    pub fn from_stages(stages: Vec<Box<dyn ForceStage>>) -> Result<Self, PipelineError> {
        match stages.last() {
            None => Err(PipelineError::Empty),
            Some(last) if last.id() != StageId::EdgeSmoothing => Err(PipelineError::UnsmoothedTail(last.id().name())),
            Some(_) => Ok(Self { stages }),
        }
    }

    /// Uplift, hydraulic, thermal, then edge smoothing.
    pub fn standard(config: &SimConfig) -> Self {
        Self {
            stages: vec![
                Box::new(UpliftStage::new(config.uplift.clone())),
                Box::new(HydraulicStage::new(config.erosion.clone())),
                Box::new(ThermalStage::new(config.erosion.clone())),
                Box::new(EdgeSmoothingStage),
            ],
        }
    }

    /// Returns the number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Stage identifiers in execution order.
    pub fn stage_ids(&self) -> Vec<StageId> {
        self.stages.iter().map(|s| s.id()).collect()
    }

    /// Runs every stage on a copy of `field` and returns the evolved copy.
    pub fn run(&self, field: &Heightfield, intensity: f32, rng: &mut dyn RngCore) -> Heightfield {
        let ctx = StepContext { intensity };
        let mut working = field.clone();
        for stage in &self.stages {
            let start = Instant::now();
            stage.apply(&mut working, &ctx, rng);
            tracing::trace!(stage = stage.name(), elapsed = ?start.elapsed(), "stage applied");
        }
        working
    }
}

/// One full step with the standard pipeline.
pub fn step(field: &Heightfield, config: &SimConfig, intensity: f32, rng: &mut dyn RngCore) -> Heightfield {
    StepPipeline::standard(config).run(field, intensity, rng)
}

/// Tectonic uplift stage.
pub struct UpliftStage {
    pub config: UpliftConfig,
}

impl UpliftStage {
    pub fn new(config: UpliftConfig) -> Self {
        Self { config }
    }
}

impl ForceStage for UpliftStage {
    fn id(&self) -> StageId {
        StageId::Uplift
    }

    fn name(&self) -> &str {
        "Tectonic Uplift"
    }

    fn apply(&self, field: &mut Heightfield, ctx: &StepContext, rng: &mut dyn RngCore) {
        apply_uplift(field, &self.config, ctx.intensity, rng);
    }
}

/// Hydraulic erosion stage.
pub struct HydraulicStage {
    pub config: ErosionConfig,
}

impl HydraulicStage {
    pub fn new(config: ErosionConfig) -> Self {
        Self { config }
    }
}

impl ForceStage for HydraulicStage {
    fn id(&self) -> StageId {
        StageId::Hydraulic
    }

    fn name(&self) -> &str {
        "Hydraulic Erosion"
    }

    fn apply(&self, field: &mut Heightfield, _ctx: &StepContext, rng: &mut dyn RngCore) {
        let stats = apply_hydraulic(field, &self.config, rng);
        tracing::trace!(drops = stats.drops, eroded = stats.eroded, deposited = stats.deposited, "hydraulic pass");
    }
}

/// Thermal erosion stage.
pub struct ThermalStage {
    pub config: ErosionConfig,
}

impl ThermalStage {
    pub fn new(config: ErosionConfig) -> Self {
        Self { config }
    }
}

impl ForceStage for ThermalStage {
    fn id(&self) -> StageId {
        StageId::Thermal
    }

    fn name(&self) -> &str {
        "Thermal Erosion"
    }

    fn apply(&self, field: &mut Heightfield, _ctx: &StepContext, _rng: &mut dyn RngCore) {
        let moved = apply_thermal(field, &self.config);
        tracing::trace!(moved, "thermal pass");
    }
}

/// Copies the value two cells inward over the outer two rings.
pub struct EdgeSmoothingStage;

impl ForceStage for EdgeSmoothingStage {
    fn id(&self) -> StageId {
        StageId::EdgeSmoothing
    }

    fn name(&self) -> &str {
        "Edge Smoothing"
    }

    fn apply(&self, field: &mut Heightfield, _ctx: &StepContext, _rng: &mut dyn RngCore) {
        field.smooth_edges();
    }
}
