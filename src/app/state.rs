//! Application state for manual play.

use anyhow::Result;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use skylark_core::config::AppConfig;
use skylark_core::controller::Controller;
use skylark_core::sensor::Senses;
use skylark_core::snapshot::WorldSnapshot;
use skylark_core::world::World;

/// A controller driven by the keyboard: a jump keypress arms it, and the
/// next decision consumes the press as a single flap. This keeps manual
/// play on exactly the same world-step path as simulated populations.
pub struct KeyPress {
    armed: Rc<Cell<bool>>,
}

impl Controller for KeyPress {
    fn decide(&mut self, _senses: &Senses) -> Result<f64> {
        Ok(if self.armed.replace(false) { 1.0 } else { 0.0 })
    }
}

pub struct App {
    pub running: bool,
    pub paused: bool,
    pub config: AppConfig,
    pub world: World,
    pub best_score: u32,
    pub latest_snapshot: WorldSnapshot,
    /// Set when the last agent died; the game-over panel holds until the
    /// fixed display duration elapses.
    pub game_over_at: Option<Instant>,
    pub(crate) armed: Rc<Cell<bool>>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;

        let armed = Rc::new(Cell::new(false));
        let controller: Box<dyn Controller> = Box::new(KeyPress {
            armed: Rc::clone(&armed),
        });
        let world = World::new(vec![controller], config.clone())?;
        let latest_snapshot = world.snapshot();

        Ok(Self {
            running: true,
            paused: false,
            config,
            world,
            best_score: 0,
            latest_snapshot,
            game_over_at: None,
            armed,
        })
    }
}

/// Loads configuration from `path`, falling back to defaults.
///
/// A missing file is seeded with the default configuration so the tuning
/// is discoverable; an invalid file is reported and ignored.
pub fn load_config(path: &str) -> AppConfig {
    if let Ok(content) = std::fs::read_to_string(path) {
        match AppConfig::from_toml(&content) {
            Ok(config) => return config,
            Err(e) => {
                eprintln!("Warning: Failed to load {path}: {e}");
            }
        }
    }
    let default = AppConfig::default();
    if !std::path::Path::new(path).exists() {
        if let Ok(toml_str) = toml::to_string(&default) {
            let _ = std::fs::write(path, toml_str);
        }
    }
    default
}
