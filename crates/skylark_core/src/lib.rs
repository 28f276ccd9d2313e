//! # Skylark Core
//!
//! The simulation engine for Skylark, a side-scrolling obstacle-avoidance
//! world used as the evaluation substrate for population-based learning.
//!
//! The engine is a single-threaded, fixed-step, shared-world simulation:
//! - **Agents** with vertical-only physics, a jump impulse, and an
//!   axis-aligned hitbox.
//! - **Obstacle ring**: exactly three gapped obstacles kept at uniform
//!   spacing forever by recycling, never by allocation.
//! - **Sensor builder**: the 4-element vector that is a controller's only
//!   window into the world.
//! - **World step**: the per-tick ordering of decisions, physics,
//!   culling, collision, scoring, and fitness shaping.
//! - **Episode runner**: one generation per invocation, reporting a
//!   fitness accumulator per controller.
//!
//! Determinism comes from seeded RNG (`ChaCha8Rng`) and tick-indexed
//! arithmetic; wall-clock pacing is strictly a cosmetic concern of callers.
//!
//! ## Example
//!
//! ```
//! use skylark_core::config::AppConfig;
//! use skylark_core::controller::{Controller, Periodic};
//! use skylark_core::episode::EpisodeRunner;
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(42);
//! config.max_ticks = Some(5_000);
//!
//! let mut runner = EpisodeRunner::new(config).unwrap();
//! let roster: Vec<Box<dyn Controller>> = (10..15)
//!     .map(|period| Box::new(Periodic::new(period)) as Box<dyn Controller>)
//!     .collect();
//! let report = runner.run(roster).unwrap();
//! assert_eq!(report.fitness.len(), 5);
//! ```

/// Agent physics and the cosmetic flap/tilt state machine
pub mod agent;
/// Configuration management for simulation parameters
pub mod config;
/// Controller contract between the world and external decision functions
pub mod controller;
/// Episode orchestration and fitness reporting
pub mod episode;
/// Axis-aligned collision geometry
pub mod geometry;
/// Run counters and structured logging
pub mod metrics;
/// The fixed-size recycling obstacle ring
pub mod obstacle;
/// Sensor-vector construction
pub mod sensor;
/// Read-only per-tick views for rendering
pub mod snapshot;
/// The looping ground strip
pub mod surface;
/// The shared-world tick orchestrator
pub mod world;

pub use config::AppConfig;
pub use controller::{Controller, ControllerFactory};
pub use episode::{EpisodeError, EpisodeReport, EpisodeRunner};
pub use metrics::{init_logging, Metrics};
pub use sensor::Senses;
pub use snapshot::WorldSnapshot;
pub use world::World;
