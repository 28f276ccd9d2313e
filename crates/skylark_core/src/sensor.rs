//! Sensor-vector construction.
//!
//! Derives the fixed-length numeric input a controller receives each tick:
//! the agent's absolute height, its offsets from the nearest obstacle's gap
//! edges, and the horizontal distance to that obstacle. This vector is the
//! sole contract between world state and the external controller.

use crate::agent::Agent;
use crate::config::AppConfig;
use crate::obstacle::{Obstacle, ObstacleRing};

/// The 4-element sensor vector handed to a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Senses {
    /// Agent's absolute y.
    pub altitude: f64,
    /// Agent's y minus the nearest obstacle's bottom-region origin.
    pub bottom_offset: f64,
    /// Agent's y minus the lower edge of the nearest obstacle's top region.
    pub top_offset: f64,
    /// Horizontal distance from the agent to the nearest obstacle's leading
    /// edge; negative while overlapping the agent's lane.
    pub horizontal_distance: f64,
}

impl Senses {
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [
            self.altitude,
            self.bottom_offset,
            self.top_offset,
            self.horizontal_distance,
        ]
    }
}

/// Builds the sensor vector for one agent from the current world state.
///
/// The nearest obstacle is the one with the smallest positive distance
/// whose trailing edge has not yet passed the agent's lane. The ring
/// invariants should guarantee a candidate always exists; if none does,
/// the most recently respawned obstacle is used instead of failing.
#[must_use]
pub fn build(agent: &Agent, ring: &ObstacleRing, config: &AppConfig) -> Senses {
    let nearest = nearest_ahead(agent.x, ring);
    Senses {
        altitude: agent.y,
        bottom_offset: agent.y - nearest.y_bottom,
        top_offset: agent.y - (nearest.y_top + config.track.region_height),
        horizontal_distance: nearest.x - agent.x,
    }
}

fn nearest_ahead(lane_x: f64, ring: &ObstacleRing) -> &Obstacle {
    let candidate = ring
        .slots()
        .iter()
        .filter(|obstacle| obstacle.trailing_edge() > lane_x)
        .min_by(|a, b| {
            let da = a.trailing_edge() - lane_x;
            let db = b.trailing_edge() - lane_x;
            da.total_cmp(&db)
        });

    match candidate {
        Some(obstacle) => obstacle,
        None => {
            tracing::warn!(lane_x, "no obstacle ahead of agent; using most recent respawn");
            ring.most_recent()
        }
    }
}
