//! Scheduler state machine.

use serde::{Deserialize, Serialize};

/// Step budget and pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Steps before the simulation goes inert.
    pub max_steps: u32,
    /// Minimum wall time between steps.
    pub step_interval_ms: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_steps: 50,
            step_interval_ms: 200,
        }
    }
}

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// A fresh heightfield is being seeded.
    Generating,
    /// Steps are applied as the time gate opens.
    Stepping,
    /// `step == max_steps`; inert until restarted.
    Done,
}

/// Scheduler state. Every transition returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub phase: SimPhase,
    /// Steps applied since the last generation.
    pub step: u32,
    pub max_steps: u32,
    /// Intensity the next step will run at.
    pub intensity: f32,
    pub paused: bool,
    pub last_step_ms: u64,
    pub step_interval_ms: u64,
}

impl SimState {
    /// A state about to generate terrain.
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            phase: SimPhase::Generating,
            step: 0,
            max_steps: config.max_steps,
            intensity: 1.0,
            paused: false,
            last_step_ms: 0,
            step_interval_ms: config.step_interval_ms,
        }
    }

    /// Linear ramp: 1.0 at step 0 down to `1/max` on the last step.
    pub fn intensity_for(step: u32, max_steps: u32) -> f32 {
        if max_steps == 0 {
            return 0.0;
        }
        (1.0 - step as f32 / max_steps as f32).clamp(0.0, 1.0)
    }

    /// Generation finished at `now_ms`; the first step is one interval away.
    pub fn generated(&self, now_ms: u64) -> Self {
        Self {
            phase: if self.step >= self.max_steps {
                SimPhase::Done
            } else {
                SimPhase::Stepping
            },
            last_step_ms: now_ms,
            intensity: Self::intensity_for(self.step, self.max_steps),
            ..*self
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == SimPhase::Done
    }

    /// True when a tick at `now_ms` would apply a step.
    pub fn is_due(&self, now_ms: u64) -> bool {
        self.phase == SimPhase::Stepping
            && !self.paused
            && self.step < self.max_steps
            && now_ms.saturating_sub(self.last_step_ms) >= self.step_interval_ms
    }

    /// Advances one step if the time gate is open; otherwise returns `self` unchanged.
    pub fn tick(&self, now_ms: u64) -> Self {
        if !self.is_due(now_ms) {
            return *self;
        }
        let step = self.step + 1;
        Self {
            phase: if step >= self.max_steps {
                SimPhase::Done
            } else {
                SimPhase::Stepping
            },
            step,
            intensity: Self::intensity_for(step, self.max_steps),
            last_step_ms: now_ms,
            ..*self
        }
    }

    /// Flips the pause flag. Only the stepping time gate looks at it.
    pub fn toggle_pause(&self) -> Self {
        Self {
            paused: !self.paused,
            ..*self
        }
    }

    /// Back to step 0 and un-paused, ready to regenerate.
    pub fn restart(&self) -> Self {
        Self {
            phase: SimPhase::Generating,
            step: 0,
            intensity: 1.0,
            paused: false,
            ..*self
        }
    }
}
