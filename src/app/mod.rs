pub mod demo;
pub mod input;
pub mod state;

pub use state::{load_config, App};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;
use std::time::{Duration, Instant};

use skylark_tui::renderer::{GameOverWidget, StatsWidget, WorldWidget};
use skylark_tui::Tui;

/// How long the game-over panel stays up before the app exits.
const GAME_OVER_HOLD: Duration = Duration::from_secs(2);

impl App {
    /// The manual-play loop: draw, drain input, and advance the world on a
    /// fixed tick gate. The throttle is cosmetic; simulation results are
    /// tick-indexed and identical at any frame rate.
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let tick_rate = Duration::from_millis(1000 / self.config.target_fps.max(1));
        let mut last_tick = Instant::now();

        while self.running {
            tui.terminal.draw(|f| self.draw(f))?;

            // 1ms poll keeps input responsive without busy-waiting.
            while event::poll(Duration::from_millis(1))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if !self.paused && self.game_over_at.is_none() {
                    self.world.step();
                    self.latest_snapshot = self.world.snapshot();
                    if self.world.is_over() {
                        self.best_score = self.best_score.max(self.world.score);
                        self.game_over_at = Some(Instant::now());
                    }
                }
                last_tick = Instant::now();
            }

            if let Some(at) = self.game_over_at {
                if at.elapsed() >= GAME_OVER_HOLD {
                    self.running = false;
                }
            }
        }

        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let [world_area, stats_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(18)])
                .areas(frame.area());

        frame.render_widget(WorldWidget::new(&self.latest_snapshot), world_area);
        frame.render_widget(
            StatsWidget {
                generation: 1,
                alive: self.latest_snapshot.alive,
                score: self.latest_snapshot.score,
                best_score: self.best_score,
            },
            stats_area,
        );

        if self.game_over_at.is_some() {
            frame.render_widget(
                GameOverWidget {
                    score: self.latest_snapshot.score,
                    best_score: self.best_score,
                },
                world_area,
            );
        }
    }
}
