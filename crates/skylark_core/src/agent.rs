//! Agent physics: vertical-only integration with a jump impulse.
//!
//! An agent occupies a fixed horizontal lane for its whole life; each tick
//! only `y`, the vertical velocity, and the cosmetic tilt/wing state change.
//! The hitbox is recomputed from `x`/`y` every tick and is the sole
//! collision geometry.

use crate::config::AppConfig;
use crate::geometry::Aabb;

/// Wing position of the flap cycle. Cosmetic only.
///
/// The cycle runs Down → Mid → Up → Mid → Down, keyed off a frame counter
/// compared against multiples of [`FLAP_RATE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WingPhase {
    Down,
    Mid,
    Up,
}

/// Ticks spent in each wing phase before advancing to the next.
pub const FLAP_RATE: u32 = 5;

/// Tilt bounds and steps, in degrees. Nose-up snaps to its cap while
/// ascending; nose-down eases toward its cap while descending. Visual only.
const NOSE_UP_CAP: f32 = 25.0;
const NOSE_DOWN_CAP: f32 = -90.0;
const NOSE_DOWN_STEP: f32 = 5.0;

#[derive(Debug, Clone)]
pub struct Agent {
    /// Horizontal lane; never changes after spawn.
    pub x: f64,
    pub y: f64,
    pub velocity: f64,
    pub tilt: f32,
    pub alive: bool,
    /// Running fitness accumulator for this agent's controller session.
    pub fitness: f64,
    pub hitbox: Aabb,
    frame: u32,
}

impl Agent {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let x = config.agent.spawn_x;
        let y = config.agent.spawn_y;
        Self {
            x,
            y,
            velocity: 0.0,
            tilt: 0.0,
            alive: true,
            fitness: 0.0,
            hitbox: Aabb::new(x, y, config.agent.width, config.agent.height),
            frame: 0,
        }
    }

    /// Advances one fixed tick: wing cycle, gravity integration with the
    /// low-speed floor, tilt, and hitbox recomputation.
    pub fn step(&mut self, config: &AppConfig) {
        if self.frame > 4 * FLAP_RATE {
            self.frame = 0;
        }
        self.frame += 1;

        let physics = &config.physics;
        self.velocity += physics.gravity;
        if self.velocity > physics.max_fall_speed {
            self.velocity = physics.max_fall_speed;
        }

        // Below the floor magnitude the agent drifts by a smoothed-sign
        // fraction of the floor instead of its true velocity. This shapes
        // the apex of every jump and must not be simplified to sign(v).
        if self.velocity.abs() < physics.speed_floor {
            let direction = self.velocity / (self.velocity.abs() + 1.0);
            self.y += direction * physics.speed_floor;
        } else {
            self.y += self.velocity;
        }

        if self.velocity < 0.0 && self.tilt < NOSE_UP_CAP {
            self.tilt += NOSE_UP_CAP;
        }
        if self.velocity > 0.0 && self.tilt > NOSE_DOWN_CAP {
            self.tilt -= NOSE_DOWN_STEP;
        }

        self.hitbox = Aabb::new(self.x, self.y, config.agent.width, config.agent.height);
    }

    /// Instantaneous upward impulse; overrides the current velocity
    /// unconditionally (no cooldown, no state machine).
    pub fn flap(&mut self, config: &AppConfig) {
        self.velocity = config.physics.flap_impulse;
    }

    /// Current wing phase of the flap cycle.
    #[must_use]
    pub fn wing_phase(&self) -> WingPhase {
        match self.frame {
            f if f <= FLAP_RATE => WingPhase::Down,
            f if f <= 2 * FLAP_RATE => WingPhase::Mid,
            f if f <= 3 * FLAP_RATE => WingPhase::Up,
            f if f <= 4 * FLAP_RATE => WingPhase::Mid,
            _ => WingPhase::Down,
        }
    }
}
