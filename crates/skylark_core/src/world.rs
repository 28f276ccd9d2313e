//! The shared-world tick orchestrator.
//!
//! One [`World`] holds every live agent, the obstacle ring, and the scroll
//! surface, and advances them in a fixed order each tick: controllers,
//! agent physics, surface, bounds culling, obstacle collision/scoring/
//! recycling. All state is single-writer and purely tick-indexed; running
//! throttled or at unbounded speed produces identical results.

use crate::agent::Agent;
use crate::config::AppConfig;
use crate::controller::Controller;
use crate::episode::EpisodeError;
use crate::obstacle::{ObstacleRing, RING_SLOTS};
use crate::sensor;
use crate::snapshot::WorldSnapshot;
use crate::surface::ScrollSurface;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct World {
    pub config: AppConfig,
    /// One agent per controller, index-aligned for the whole episode. Dead
    /// agents stay in place with `alive = false` so accumulators survive
    /// and iteration order never shifts mid-pass.
    pub agents: Vec<Agent>,
    controllers: Vec<Box<dyn Controller>>,
    pub ring: ObstacleRing,
    pub surface: ScrollSurface,
    pub tick: u64,
    pub score: u32,
    rng: ChaCha8Rng,
}

impl World {
    /// Builds a world with one agent per controller, all sharing a single
    /// obstacle ring. The seed in `config` makes the obstacle sequence
    /// reproducible; `None` seeds from entropy.
    pub fn new(
        controllers: Vec<Box<dyn Controller>>,
        config: AppConfig,
    ) -> Result<Self, EpisodeError> {
        if controllers.is_empty() {
            return Err(EpisodeError::NoControllers);
        }

        let mut rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let ring = ObstacleRing::new(&config, &mut rng);
        let surface = ScrollSurface::new(&config);
        let agents = (0..controllers.len())
            .map(|_| Agent::new(&config))
            .collect();

        Ok(Self {
            config,
            agents,
            controllers,
            ring,
            surface,
            tick: 0,
            score: 0,
            rng,
        })
    }

    /// Advances the simulation by one fixed tick.
    ///
    /// Ordering is load-bearing: bounds culling runs before obstacle
    /// collision so an agent cannot be both culled and penalized in the
    /// same tick, and agents are only ever marked dead during a pass,
    /// never removed.
    pub fn step(&mut self) {
        // 1. Decisions, physics, and survival shaping.
        for i in 0..self.agents.len() {
            if !self.agents[i].alive {
                continue;
            }
            let senses = sensor::build(&self.agents[i], &self.ring, &self.config);
            let output = match self.controllers[i].decide(&senses) {
                Ok(output) => output,
                Err(error) => {
                    tracing::warn!(agent = i, %error, "controller failed; treating as no-flap");
                    0.0
                }
            };
            if output > self.config.fitness.decision_threshold {
                self.agents[i].flap(&self.config);
            }
            self.agents[i].step(&self.config);
            self.agents[i].fitness += self.config.fitness.alive_bonus;
        }

        // 2. Ground scroll.
        self.surface.advance();

        // 3. Bounds culling, before any collision test. No penalty.
        let ground_y = self.surface.ground_y;
        let floor_extent = self.config.agent.floor_extent;
        for agent in &mut self.agents {
            if agent.alive && (agent.y + floor_extent >= ground_y || agent.y < 0.0) {
                agent.alive = false;
                tracing::debug!(y = agent.y, "agent culled at world bounds");
            }
        }

        // 4. Obstacles: advance, collide, detect clearance, recycle.
        let lane_x = self.config.agent.spawn_x;
        let mut cleared = false;
        for i in 0..RING_SLOTS {
            let prev_trailing = self.ring.get(i).trailing_edge();
            self.ring.get_mut(i).advance(&self.config);
            let trailing = self.ring.get(i).trailing_edge();

            let obstacle = self.ring.get(i);
            for agent in &mut self.agents {
                if agent.alive
                    && (agent.hitbox.intersects(&obstacle.hitbox_bottom)
                        || agent.hitbox.intersects(&obstacle.hitbox_top))
                {
                    agent.fitness -= self.config.fitness.collision_penalty;
                    agent.alive = false;
                }
            }

            // Crossing test: the trailing edge passed the lane this tick.
            if prev_trailing > lane_x && trailing <= lane_x {
                cleared = true;
            }

            if trailing <= 0.0 {
                self.ring.recycle(i, &self.config, &mut self.rng);
            }
        }

        // A clearance is world-global: every agent still alive after the
        // obstacle pass is bonused once, and the score moves by exactly one
        // however many obstacles crossed this tick.
        if cleared {
            let mut any_alive = false;
            for agent in &mut self.agents {
                if agent.alive {
                    agent.fitness += self.config.fitness.clearance_bonus;
                    any_alive = true;
                }
            }
            if any_alive {
                self.score += 1;
                tracing::debug!(score = self.score, tick = self.tick, "obstacle cleared");
            }
        }

        self.tick += 1;
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.agents.iter().filter(|agent| agent.alive).count()
    }

    /// The episode's expected terminal condition: every agent is dead.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.alive_count() == 0
    }

    /// Final fitness accumulators, index-aligned with the controllers the
    /// world was built from.
    #[must_use]
    pub fn fitness_scores(&self) -> Vec<f64> {
        self.agents.iter().map(|agent| agent.fitness).collect()
    }

    /// Read-only view of the current tick's final state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(self)
    }
}
