//! Read-only per-tick views for rendering.
//!
//! A snapshot is captured after a world step completes and carries plain
//! values only; renderers can hold it across a frame without touching (or
//! being able to mutate) simulation state.

use crate::agent::WingPhase;
use crate::world::World;

#[derive(Debug, Clone)]
pub struct AgentSnapshot {
    pub x: f64,
    pub y: f64,
    pub tilt: f32,
    pub wing_phase: WingPhase,
    pub alive: bool,
    pub fitness: f64,
}

#[derive(Debug, Clone)]
pub struct ObstacleSnapshot {
    pub x: f64,
    pub y_bottom: f64,
    pub y_top: f64,
    pub width: f64,
    pub region_height: f64,
}

#[derive(Debug, Clone)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub score: u32,
    pub alive: usize,
    pub agents: Vec<AgentSnapshot>,
    pub obstacles: Vec<ObstacleSnapshot>,
    pub surface_tiles: [f64; 2],
    pub ground_y: f64,
    pub world_width: f64,
    pub world_height: f64,
}

impl WorldSnapshot {
    #[must_use]
    pub fn capture(world: &World) -> Self {
        let agents = world
            .agents
            .iter()
            .map(|agent| AgentSnapshot {
                x: agent.x,
                y: agent.y,
                tilt: agent.tilt,
                wing_phase: agent.wing_phase(),
                alive: agent.alive,
                fitness: agent.fitness,
            })
            .collect();

        let obstacles = world
            .ring
            .slots()
            .iter()
            .map(|obstacle| ObstacleSnapshot {
                x: obstacle.x,
                y_bottom: obstacle.y_bottom,
                y_top: obstacle.y_top,
                width: world.config.track.obstacle_width,
                region_height: world.config.track.region_height,
            })
            .collect();

        Self {
            tick: world.tick,
            score: world.score,
            alive: world.alive_count(),
            agents,
            obstacles,
            surface_tiles: world.surface.tiles,
            ground_y: world.surface.ground_y,
            world_width: world.config.world.width,
            world_height: world.config.world.height,
        }
    }
}
