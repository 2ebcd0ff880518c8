//! Owner of the evolving heightfield and its derived tile grid.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, SimConfig};
use crate::pipeline::StepPipeline;
use crate::resources::ResourceType;
use crate::terrain::{GridError, Heightfield};
use crate::tiles::{derive_tiles, TileGrid};

use super::state::{SimPhase, SimState};

/// Seeds a heightfield, smooths its border and derives the first tile grid.
pub fn generate(config: &SimConfig, rng: &mut dyn RngCore) -> Result<(Heightfield, TileGrid), GridError> {
    let mut field = Heightfield::generate(config.grid_size, &config.heightfield, rng)?;
    field.smooth_edges();
    let tiles = derive_tiles(&field, config);
    Ok((field, tiles))
}

/// Result of a single [`Simulation::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Nothing ran: paused, not yet due, or already done.
    Idle,
    /// A step ran at `intensity`; `step` is the new step count.
    Stepped { step: u32, intensity: f32 },
    /// The final step ran and the simulation is now inert.
    Finished { step: u32 },
}

/// A running simulation.
///
/// Every step replaces the heightfield with an evolved copy and rebuilds the
/// tile grid from it, so readers always see a grid consistent with the
/// current heightfield.
pub struct Simulation<R: RngCore = ChaCha8Rng> {
    config: SimConfig,
    pipeline: StepPipeline,
    rng: R,
    heightfield: Heightfield,
    tiles: TileGrid,
    state: SimState,
}

impl Simulation<ChaCha8Rng> {
    /// Simulation with a reproducible random source.
    pub fn seeded(config: SimConfig, seed: u64, now_ms: u64) -> Result<Self, ConfigError> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed), now_ms)
    }

    /// Simulation seeded from OS entropy.
    pub fn from_entropy(config: SimConfig, now_ms: u64) -> Result<Self, ConfigError> {
        Self::new(config, ChaCha8Rng::from_entropy(), now_ms)
    }
}

impl<R: RngCore> Simulation<R> {
    /// Validates `config`, generates terrain and enters the stepping phase.
    pub fn new(config: SimConfig, mut rng: R, now_ms: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let (heightfield, tiles) = generate(&config, &mut rng)?;
        let state = SimState::new(&config.scheduler).generated(now_ms);
        let pipeline = StepPipeline::standard(&config);
        tracing::info!(
            size = config.grid_size,
            max_steps = config.scheduler.max_steps,
            "terrain generated"
        );
        Ok(Self {
            config,
            pipeline,
            rng,
            heightfield,
            tiles,
            state,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn heightfield(&self) -> &Heightfield {
        &self.heightfield
    }

    pub fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Applies at most one step if the time gate at `now_ms` allows it.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        if !self.state.is_due(now_ms) {
            return TickOutcome::Idle;
        }
        let intensity = self.state.intensity;
        self.heightfield = self.pipeline.run(&self.heightfield, intensity, &mut self.rng);
        self.tiles = derive_tiles(&self.heightfield, &self.config);
        self.state = self.state.tick(now_ms);

        let (lo, hi) = self.heightfield.height_range();
        let rivers = self.tiles.iter().filter(|t| t.has_resource(ResourceType::River)).count();
        tracing::debug!(step = self.state.step, intensity, min = lo, max = hi, rivers, "step applied");

        if self.state.phase == SimPhase::Done {
            tracing::info!(steps = self.state.step, "simulation finished");
            TickOutcome::Finished { step: self.state.step }
        } else {
            TickOutcome::Stepped {
                step: self.state.step,
                intensity,
            }
        }
    }

    /// Flips the pause flag and returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.state = self.state.toggle_pause();
        tracing::debug!(paused = self.state.paused, "pause toggled");
        self.state.paused
    }

    /// Discards the current terrain and starts over from a fresh heightfield.
    pub fn restart(&mut self, now_ms: u64) -> Result<(), GridError> {
        self.state = self.state.restart();
        let (heightfield, tiles) = generate(&self.config, &mut self.rng)?;
        self.heightfield = heightfield;
        self.tiles = tiles;
        self.state = self.state.generated(now_ms);
        tracing::info!("simulation restarted");
        Ok(())
    }

    /// Drives the simulation to `Done` on virtual time, one interval per step.
    ///
    /// Returns the number of steps applied; a paused simulation applies none.
    pub fn run_to_completion(&mut self) -> u32 {
        let start = self.state.step;
        let mut now = self.state.last_step_ms;
        while self.state.phase == SimPhase::Stepping && !self.state.paused {
            now = now.saturating_add(self.state.step_interval_ms);
            self.tick(now);
        }
        self.state.step - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Clock, ManualClock};

    fn small_config(max_steps: u32) -> SimConfig {
        let mut config = SimConfig::default();
        config.scheduler.max_steps = max_steps;
        config
    }

    fn sim(max_steps: u32, clock: &ManualClock) -> Simulation<ChaCha8Rng> {
        Simulation::new(small_config(max_steps), ChaCha8Rng::seed_from_u64(5), clock.now_ms()).unwrap()
    }

    #[test]
    fn generate_smooths_edges_and_derives_tiles() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (field, tiles) = generate(&SimConfig::default(), &mut rng).unwrap();
        assert_eq!(tiles.size(), 50);
        assert_eq!(field.get(0, 10), field.get(2, 10));
        assert_eq!(field.get(49, 10), field.get(47, 10));
        for tile in tiles.iter() {
            assert!((5..=150).contains(&tile.geology.elevation));
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = SimConfig::default();
        config.grid_size = 3;
        assert!(matches!(
            Simulation::new(config, ChaCha8Rng::seed_from_u64(0), 0),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn tick_respects_interval() {
        let clock = ManualClock::new(1_000);
        let mut sim = sim(3, &clock);
        assert_eq!(sim.state().phase, SimPhase::Stepping);

        clock.advance(100);
        assert_eq!(sim.tick(clock.now_ms()), TickOutcome::Idle);

        clock.advance(100);
        let before = sim.heightfield().clone();
        assert_eq!(sim.tick(clock.now_ms()), TickOutcome::Stepped { step: 1, intensity: 1.0 });
        assert_ne!(sim.heightfield(), &before);
    }

    #[test]
    fn tiles_track_heightfield() {
        let clock = ManualClock::new(0);
        let mut sim = sim(2, &clock);
        clock.advance(200);
        sim.tick(clock.now_ms());
        let expected = derive_tiles(sim.heightfield(), sim.config());
        assert_eq!(sim.tiles(), &expected);
    }

    #[test]
    fn finishes_and_goes_inert() {
        let clock = ManualClock::new(0);
        let mut sim = sim(2, &clock);
        clock.advance(200);
        sim.tick(clock.now_ms());
        clock.advance(200);
        assert_eq!(sim.tick(clock.now_ms()), TickOutcome::Finished { step: 2 });
        let done = sim.heightfield().clone();
        clock.advance(10_000);
        assert_eq!(sim.tick(clock.now_ms()), TickOutcome::Idle);
        assert_eq!(sim.heightfield(), &done);
    }

    #[test]
    fn pause_then_restart() {
        let clock = ManualClock::new(0);
        let mut sim = sim(5, &clock);
        clock.advance(200);
        sim.tick(clock.now_ms());
        assert!(sim.toggle_pause());
        clock.advance(1_000);
        assert_eq!(sim.tick(clock.now_ms()), TickOutcome::Idle);
        assert_eq!(sim.run_to_completion(), 0);

        sim.restart(clock.now_ms()).unwrap();
        assert_eq!(sim.state().step, 0);
        assert!(!sim.state().paused);
        assert_eq!(sim.state().phase, SimPhase::Stepping);
    }

    #[test]
    fn run_to_completion_uses_every_step() {
        let clock = ManualClock::new(0);
        let mut sim = sim(6, &clock);
        assert_eq!(sim.run_to_completion(), 6);
        assert!(sim.state().is_done());
        assert!(sim.heightfield().is_finite());
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = Simulation::seeded(small_config(4), 99, 0).unwrap();
        let mut b = Simulation::seeded(small_config(4), 99, 0).unwrap();
        a.run_to_completion();
        b.run_to_completion();
        assert_eq!(a.heightfield(), b.heightfield());
    }
}
