//! The looping ground strip.
//!
//! Two tiles the width of the world scroll leftward as an adjacent pair; a
//! tile that fully passes the left edge rejoins on the right of the other.
//! The surface contributes nothing to collision except its ground line.

use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct ScrollSurface {
    /// Left edge of each tile.
    pub tiles: [f64; 2],
    /// World-space y of the ground line.
    pub ground_y: f64,
    tile_width: f64,
    speed: f64,
}

impl ScrollSurface {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            tiles: [0.0, config.world.width],
            ground_y: config.ground_line(),
            tile_width: config.world.width,
            speed: config.world.scroll_speed,
        }
    }

    /// Scrolls both tiles one tick leftward, looping whichever has fully
    /// passed the left edge.
    pub fn advance(&mut self) {
        self.tiles[0] -= self.speed;
        self.tiles[1] -= self.speed;
        if self.tiles[0] + self.tile_width < 0.0 {
            self.tiles[0] = self.tiles[1] + self.tile_width;
        }
        if self.tiles[1] + self.tile_width < 0.0 {
            self.tiles[1] = self.tiles[0] + self.tile_width;
        }
    }
}
