//! Run counters and structured logging.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Counters accumulated across a batch of episodes.
pub struct Metrics {
    episode_count: AtomicU64,
    tick_count: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            episode_count: AtomicU64::new(0),
            tick_count: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed episode.
    pub fn record_episode(&self, ticks: u64, score: u32) {
        let episode = self.episode_count.fetch_add(1, Ordering::Relaxed) + 1;
        let total_ticks = self.tick_count.fetch_add(ticks, Ordering::Relaxed) + ticks;
        tracing::debug!(episode, ticks, score, total_ticks, "episode recorded");
    }

    #[must_use]
    pub fn episode_count(&self) -> u64 {
        self.episode_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    /// Elapsed wall time since this collector was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize the tracing subscriber for logging. Respects `RUST_LOG`.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_start_empty() {
        let metrics = Metrics::new();
        assert_eq!(metrics.episode_count(), 0);
        assert_eq!(metrics.tick_count(), 0);
    }

    #[test]
    fn test_record_episode_accumulates() {
        let metrics = Metrics::new();
        metrics.record_episode(120, 3);
        metrics.record_episode(80, 1);
        assert_eq!(metrics.episode_count(), 2);
        assert_eq!(metrics.tick_count(), 200);
    }
}
