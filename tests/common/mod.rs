use skylark_core::config::AppConfig;
use skylark_core::controller::{Constant, Controller};
use skylark_core::obstacle::RING_SLOTS;
use skylark_core::world::World;

/// Builds worlds with a seeded obstacle ring and, optionally, explicit gap
/// placements so scenarios stay independent of the RNG draw.
#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    controllers: Vec<Box<dyn Controller>>,
    bottoms: Option<[f64; RING_SLOTS]>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.seed = Some(0);
        Self {
            config,
            controllers: Vec::new(),
            bottoms: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_controller(mut self, controller: Box<dyn Controller>) -> Self {
        self.controllers.push(controller);
        self
    }

    /// Adds `count` agents that never flap.
    pub fn with_never_jumpers(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.controllers.push(Box::new(Constant(0.0)));
        }
        self
    }

    /// Pins the initial bottom-region origins of the three ring slots.
    pub fn with_bottoms(mut self, bottoms: [f64; RING_SLOTS]) -> Self {
        self.bottoms = Some(bottoms);
        self
    }

    pub fn build(self) -> World {
        let mut world =
            World::new(self.controllers, self.config).expect("failed to build world in test");
        if let Some(bottoms) = self.bottoms {
            let config = world.config.clone();
            for (i, bottom) in bottoms.iter().enumerate() {
                let slot = world.ring.get_mut(i);
                slot.y_bottom = *bottom;
                slot.y_top = bottom - config.track.gap - config.track.region_height;
                slot.recompute_hitboxes(&config);
            }
        }
        world
    }
}
