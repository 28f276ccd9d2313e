//! Headless demo driver.
//!
//! Runs a batch of generation episodes with scripted controllers: the
//! same episode path an external learning framework would use, minus the
//! learning. Useful as a smoke test and as API documentation in motion.

use anyhow::Result;

use skylark_core::config::AppConfig;
use skylark_core::controller::{Constant, Controller, GapSeeker, Periodic};
use skylark_core::episode::EpisodeRunner;
use skylark_core::metrics::Metrics;

/// Runs `generations` episodes and prints a short summary.
pub fn run(mut config: AppConfig, generations: u64) -> Result<()> {
    // The gap-seeking baseline survives indefinitely; an uncapped demo
    // would never return.
    if config.max_ticks.is_none() {
        config.max_ticks = Some(10_000);
    }

    let mut runner = EpisodeRunner::new(config)?;
    let metrics = Metrics::new();

    for _ in 0..generations {
        let report = runner.run(scripted_roster())?;
        metrics.record_episode(report.ticks, report.score);
    }

    tracing::info!(
        episodes = metrics.episode_count(),
        total_ticks = metrics.tick_count(),
        best_score = runner.best_score(),
        elapsed_ms = metrics.elapsed().as_millis() as u64,
        "demo complete"
    );
    println!(
        "{} generations, best score {}",
        runner.generation(),
        runner.best_score()
    );
    Ok(())
}

/// A mixed roster: periodic flappers across a band of cadences, one
/// gap-seeker, and one bird that never flaps.
fn scripted_roster() -> Vec<Box<dyn Controller>> {
    let mut roster: Vec<Box<dyn Controller>> = (4..=9)
        .map(|period| Box::new(Periodic::new(period)) as Box<dyn Controller>)
        .collect();
    roster.push(Box::new(GapSeeker));
    roster.push(Box::new(Constant(0.0)));
    roster
}
