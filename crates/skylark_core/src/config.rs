//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures that map to `config.toml`.
//! Defaults carry the standard tuning (a 430x770 world, 51x36 agents,
//! 75x700 obstacle regions); every parameter can be overridden through
//! the configuration file.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 430.0
//! height = 770.0
//! seed = 42
//!
//! [track]
//! spacing = 275.0
//! gap = 200.0
//!
//! [fitness]
//! clearance_bonus = 10.0
//! ```

use serde::{Deserialize, Serialize};

/// World geometry and global pacing.
///
/// All positions are in world units, y growing downward. The ground line
/// sits `ground_offset` above the bottom edge.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub ground_offset: f64,
    pub scroll_speed: f64,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 430.0,
            height: 770.0,
            ground_offset: 80.0,
            scroll_speed: 5.0,
            seed: None,
        }
    }
}

/// Agent spawn placement and collision geometry.
///
/// `floor_extent` is the vertical reach used for the ground cull test
/// (`y + floor_extent >= ground line`); it is independent of the hitbox
/// height.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AgentConfig {
    pub spawn_x: f64,
    pub spawn_y: f64,
    pub width: f64,
    pub height: f64,
    pub floor_extent: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            spawn_x: 50.0,
            spawn_y: 330.0,
            width: 51.0,
            height: 36.0,
            floor_extent: 51.0,
        }
    }
}

/// Vertical physics integration constants, per fixed tick.
///
/// `speed_floor` drives the low-speed rule: below that magnitude the agent
/// advances by `(v / (|v| + 1)) * speed_floor` instead of `v`, which keeps
/// the apex of a jump floaty. `flap_impulse` is negative (upward).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PhysicsConfig {
    pub gravity: f64,
    pub max_fall_speed: f64,
    pub speed_floor: f64,
    pub flap_impulse: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 2.0,
            max_fall_speed: 17.5,
            speed_floor: 5.0,
            flap_impulse: -23.5,
        }
    }
}

/// Obstacle ring geometry and movement.
///
/// The bottom-region origin of a fresh obstacle is drawn uniformly from
/// `[bottom_min, bottom_max]` (integer draw, inclusive).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackConfig {
    pub spacing: f64,
    pub speed: f64,
    pub obstacle_width: f64,
    pub region_height: f64,
    pub gap: f64,
    pub bottom_min: i32,
    pub bottom_max: i32,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            spacing: 275.0,
            speed: 5.0,
            obstacle_width: 75.0,
            region_height: 700.0,
            gap: 200.0,
            bottom_min: 300,
            bottom_max: 570,
        }
    }
}

/// Fitness shaping applied by the world step.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FitnessConfig {
    pub alive_bonus: f64,
    pub collision_penalty: f64,
    pub clearance_bonus: f64,
    pub decision_threshold: f64,
}

impl Default for FitnessConfig {
    fn default() -> Self {
        Self {
            alive_bonus: 0.05,
            collision_penalty: 1.0,
            clearance_bonus: 10.0,
            decision_threshold: 0.5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub agent: AgentConfig,
    pub physics: PhysicsConfig,
    pub track: TrackConfig,
    pub fitness: FitnessConfig,
    /// Safety cap on episode length; `None` runs until the last agent dies.
    pub max_ticks: Option<u64>,
    pub target_fps: u64,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure. Validation runs once at
    /// episode start; nothing is re-checked mid-tick.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.world.width > 0.0, "World width must be positive");
        anyhow::ensure!(self.world.height > 0.0, "World height must be positive");
        anyhow::ensure!(
            self.world.ground_offset >= 0.0 && self.world.ground_offset < self.world.height,
            "Ground offset must lie within the world height"
        );
        anyhow::ensure!(
            self.world.scroll_speed >= 0.0,
            "Scroll speed must be non-negative"
        );

        anyhow::ensure!(self.agent.width > 0.0, "Agent width must be positive");
        anyhow::ensure!(self.agent.height > 0.0, "Agent height must be positive");
        anyhow::ensure!(
            self.agent.floor_extent > 0.0,
            "Agent floor extent must be positive"
        );
        anyhow::ensure!(
            self.agent.spawn_x >= 0.0 && self.agent.spawn_x < self.world.width,
            "Agent spawn x must lie within the world"
        );
        anyhow::ensure!(
            self.agent.spawn_y >= 0.0 && self.agent.spawn_y < self.world.height,
            "Agent spawn y must lie within the world"
        );

        anyhow::ensure!(self.physics.gravity > 0.0, "Gravity must be positive");
        anyhow::ensure!(
            self.physics.max_fall_speed > 0.0,
            "Max fall speed must be positive"
        );
        anyhow::ensure!(
            self.physics.speed_floor >= 0.0,
            "Speed floor must be non-negative"
        );
        anyhow::ensure!(
            self.physics.flap_impulse < 0.0,
            "Flap impulse must be upward (negative)"
        );

        anyhow::ensure!(self.track.speed > 0.0, "Obstacle speed must be positive");
        anyhow::ensure!(
            self.track.obstacle_width > 0.0,
            "Obstacle width must be positive"
        );
        anyhow::ensure!(
            self.track.region_height > 0.0,
            "Obstacle region height must be positive"
        );
        anyhow::ensure!(self.track.gap > 0.0, "Obstacle gap must be positive");
        anyhow::ensure!(
            self.track.spacing > self.track.obstacle_width,
            "Obstacle spacing must exceed the obstacle width"
        );
        anyhow::ensure!(
            self.track.bottom_min <= self.track.bottom_max,
            "Obstacle bottom range must be non-empty"
        );
        anyhow::ensure!(
            self.track.bottom_min > 0 && f64::from(self.track.bottom_max) < self.world.height,
            "Obstacle bottom range must lie within the world height"
        );

        anyhow::ensure!(
            self.fitness.alive_bonus >= 0.0,
            "Alive bonus must be non-negative"
        );
        anyhow::ensure!(
            self.fitness.collision_penalty >= 0.0,
            "Collision penalty must be non-negative"
        );
        anyhow::ensure!(
            self.fitness.clearance_bonus >= 0.0,
            "Clearance bonus must be non-negative"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.fitness.decision_threshold),
            "Decision threshold must be in [0.0, 1.0]"
        );

        anyhow::ensure!(self.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(self.target_fps <= 240, "Target FPS too high (max 240)");

        Ok(())
    }

    /// Loads and validates configuration from TOML content.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// World-space y of the ground line agents are culled against.
    #[must_use]
    pub fn ground_line(&self) -> f64 {
        self.world.height - self.world.ground_offset
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            agent: AgentConfig::default(),
            physics: PhysicsConfig::default(),
            track: TrackConfig::default(),
            fitness: FitnessConfig::default(),
            max_ticks: None,
            target_fps: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ground_line() {
        let config = AppConfig::default();
        assert_eq!(config.ground_line(), 690.0);
    }

    #[test]
    fn test_invalid_world_width() {
        let config = AppConfig {
            world: WorldConfig {
                width: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_spacing_must_exceed_obstacle_width() {
        let config = AppConfig {
            track: TrackConfig {
                spacing: 60.0,
                obstacle_width: 75.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_decision_threshold() {
        let config = AppConfig {
            fitness: FitnessConfig {
                decision_threshold: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_downward_flap_impulse_rejected() {
        let config = AppConfig {
            physics: PhysicsConfig {
                flap_impulse: 3.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_roundtrip() {
        let config = AppConfig::default();
        let content = toml::to_string(&config).unwrap();
        let parsed = AppConfig::from_toml(&content).unwrap();
        assert_eq!(parsed.world.width, config.world.width);
        assert_eq!(parsed.track.spacing, config.track.spacing);
    }
}
