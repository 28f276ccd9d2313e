//! Gapped obstacles and the fixed-size recycling ring that carries them.
//!
//! The ring always holds exactly [`RING_SLOTS`] obstacles. A slot whose
//! trailing edge passes the left boundary is relocated ahead of the slot two
//! positions further along the ring (wrap-around) plus the configured
//! spacing, with a freshly randomized gap placement. Uniform spacing holds
//! forever without allocation.

use crate::config::AppConfig;
use crate::geometry::Aabb;
use rand::Rng;

/// Number of obstacles alive at any time.
pub const RING_SLOTS: usize = 3;

/// A single gapped obstacle with independent top and bottom collision
/// regions. The top-region origin is always derived as
/// `y_bottom - gap - region_height`; the regions can never overlap.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: f64,
    pub y_bottom: f64,
    pub y_top: f64,
    pub hitbox_bottom: Aabb,
    pub hitbox_top: Aabb,
}

impl Obstacle {
    fn spawn<R: Rng>(x: f64, config: &AppConfig, rng: &mut R) -> Self {
        let y_bottom = draw_bottom(config, rng);
        let mut obstacle = Self {
            x,
            y_bottom,
            y_top: y_bottom - config.track.gap - config.track.region_height,
            hitbox_bottom: Aabb::new(0.0, 0.0, 0.0, 0.0),
            hitbox_top: Aabb::new(0.0, 0.0, 0.0, 0.0),
        };
        obstacle.recompute_hitboxes(config);
        obstacle
    }

    /// Advances one tick leftward and refreshes both hitboxes.
    pub fn advance(&mut self, config: &AppConfig) {
        self.x -= config.track.speed;
        self.recompute_hitboxes(config);
    }

    /// Relocates to `target_x` with a freshly randomized gap placement.
    pub fn respawn<R: Rng>(&mut self, target_x: f64, config: &AppConfig, rng: &mut R) {
        self.x = target_x;
        self.y_bottom = draw_bottom(config, rng);
        self.y_top = self.y_bottom - config.track.gap - config.track.region_height;
        self.recompute_hitboxes(config);
    }

    /// World-space x of the trailing (right) edge.
    #[must_use]
    pub fn trailing_edge(&self) -> f64 {
        self.hitbox_bottom.right()
    }

    pub fn recompute_hitboxes(&mut self, config: &AppConfig) {
        let width = config.track.obstacle_width;
        let height = config.track.region_height;
        self.hitbox_bottom = Aabb::new(self.x, self.y_bottom, width, height);
        self.hitbox_top = Aabb::new(self.x, self.y_top, width, height);
    }
}

fn draw_bottom<R: Rng>(config: &AppConfig, rng: &mut R) -> f64 {
    f64::from(rng.gen_range(config.track.bottom_min..=config.track.bottom_max))
}

/// Fixed-size, perpetually recycled set of obstacles at uniform spacing.
#[derive(Debug, Clone)]
pub struct ObstacleRing {
    slots: [Obstacle; RING_SLOTS],
    last_respawned: usize,
}

impl ObstacleRing {
    /// Spawns the ring just past the right edge of the world, one spacing
    /// interval apart.
    #[must_use]
    pub fn new<R: Rng>(config: &AppConfig, rng: &mut R) -> Self {
        let spawn = |i: usize, rng: &mut R| {
            Obstacle::spawn(
                config.world.width + i as f64 * config.track.spacing,
                config,
                rng,
            )
        };
        let slots = [spawn(0, rng), spawn(1, rng), spawn(2, rng)];
        Self {
            slots,
            // The farthest slot was placed last.
            last_respawned: RING_SLOTS - 1,
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> &Obstacle {
        &self.slots[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut Obstacle {
        &mut self.slots[index]
    }

    #[must_use]
    pub fn slots(&self) -> &[Obstacle] {
        &self.slots
    }

    /// Relocates `index` ahead of the slot two ring positions further along,
    /// re-randomizing its gap placement.
    pub fn recycle<R: Rng>(&mut self, index: usize, config: &AppConfig, rng: &mut R) {
        let anchor = (index + 2) % RING_SLOTS;
        let target_x = self.slots[anchor].x + config.track.spacing;
        self.slots[index].respawn(target_x, config, rng);
        self.last_respawned = index;
    }

    /// The most recently respawned obstacle; sensor fallback when every
    /// slot has already passed an agent's lane.
    #[must_use]
    pub fn most_recent(&self) -> &Obstacle {
        &self.slots[self.last_respawned]
    }
}
