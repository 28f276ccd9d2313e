//! Episode orchestration: one generation, start to extinction.
//!
//! The runner owns everything that used to be ambient in older designs:
//! the generation counter and the best-score record live here and are
//! threaded back to callers through [`EpisodeReport`], never through
//! globals. Episodes run strictly sequentially; each gets its own world.

use crate::config::AppConfig;
use crate::controller::Controller;
use crate::world::World;
use thiserror::Error;

/// Fatal episode-start failures. Nothing in this enum can occur mid-tick;
/// by the time a world is stepping, fitness accounting cannot be corrupted
/// by a late validation error.
#[derive(Error, Debug)]
pub enum EpisodeError {
    #[error("no controllers supplied for the episode")]
    NoControllers,
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Outcome of one episode, reported back to the learning framework.
#[derive(Debug, Clone)]
pub struct EpisodeReport {
    /// Final fitness accumulators, index-aligned with the controllers.
    pub fitness: Vec<f64>,
    pub score: u32,
    pub ticks: u64,
    pub generation: u64,
    /// Best score seen by this runner across all of its episodes so far.
    pub best_score: u32,
}

/// Runs generation episodes against a fixed configuration.
pub struct EpisodeRunner {
    config: AppConfig,
    generation: u64,
    best_score: u32,
}

impl EpisodeRunner {
    /// Validates the configuration up front; a malformed config is fatal
    /// here, at episode-start time, not mid-tick.
    pub fn new(config: AppConfig) -> Result<Self, EpisodeError> {
        config
            .validate()
            .map_err(|error| EpisodeError::Config(error.to_string()))?;
        Ok(Self {
            config,
            generation: 0,
            best_score: 0,
        })
    }

    /// Runs one full episode: spawns one agent per controller in a fresh
    /// shared world, steps until the last agent dies (or the configured
    /// tick cap is reached), and reports per-controller fitness.
    ///
    /// A configured seed is offset by the generation number so that
    /// successive generations see different obstacle sequences while the
    /// whole run stays reproducible.
    pub fn run(
        &mut self,
        controllers: Vec<Box<dyn Controller>>,
    ) -> Result<EpisodeReport, EpisodeError> {
        self.generation += 1;

        let mut config = self.config.clone();
        if let Some(seed) = config.world.seed {
            config.world.seed = Some(seed.wrapping_add(self.generation));
        }

        let roster = controllers.len();
        let mut world = World::new(controllers, config)?;
        while !world.is_over() {
            world.step();
            if let Some(cap) = world.config.max_ticks {
                if world.tick >= cap {
                    tracing::info!(cap, "episode reached tick cap");
                    break;
                }
            }
        }

        if world.score > self.best_score {
            self.best_score = world.score;
        }

        let report = EpisodeReport {
            fitness: world.fitness_scores(),
            score: world.score,
            ticks: world.tick,
            generation: self.generation,
            best_score: self.best_score,
        };
        tracing::info!(
            generation = report.generation,
            roster,
            ticks = report.ticks,
            score = report.score,
            best_score = report.best_score,
            "episode complete"
        );
        Ok(report)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Constant;

    fn never_jump_roster(count: usize) -> Vec<Box<dyn Controller>> {
        (0..count)
            .map(|_| Box::new(Constant(0.0)) as Box<dyn Controller>)
            .collect()
    }

    #[test]
    fn test_invalid_config_is_fatal_at_start() {
        let mut config = AppConfig::default();
        config.world.width = -1.0;
        assert!(matches!(
            EpisodeRunner::new(config),
            Err(EpisodeError::Config(_))
        ));
    }

    #[test]
    fn test_generation_counter_advances() {
        let mut config = AppConfig::default();
        config.world.seed = Some(5);
        let mut runner = EpisodeRunner::new(config).unwrap();
        let first = runner.run(never_jump_roster(2)).unwrap();
        let second = runner.run(never_jump_roster(2)).unwrap();
        assert_eq!(first.generation, 1);
        assert_eq!(second.generation, 2);
    }

    #[test]
    fn test_report_is_index_aligned() {
        let mut config = AppConfig::default();
        config.world.seed = Some(8);
        let mut runner = EpisodeRunner::new(config).unwrap();
        let report = runner.run(never_jump_roster(4)).unwrap();
        assert_eq!(report.fitness.len(), 4);
    }

    #[test]
    fn test_tick_cap_bounds_episode() {
        let mut config = AppConfig::default();
        config.world.seed = Some(2);
        config.max_ticks = Some(10);
        let mut runner = EpisodeRunner::new(config).unwrap();
        // A never-jump roster dies at tick 22 uncapped; the cap wins here.
        let report = runner.run(never_jump_roster(1)).unwrap();
        assert_eq!(report.ticks, 10);
    }
}
