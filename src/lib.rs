//! Application layer for the Skylark simulator.
//!
//! Ties the engine ([`skylark_core`]) to the terminal renderer
//! ([`skylark_tui`]): configuration loading, the fixed-tick run loop for
//! manual play, and the headless demo driver.

pub mod app;

pub use app::state::App;
