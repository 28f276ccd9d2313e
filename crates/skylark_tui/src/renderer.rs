//! Widgets that draw a world snapshot into the terminal.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use skylark_core::agent::WingPhase;
use skylark_core::snapshot::{AgentSnapshot, WorldSnapshot};

const SKY: Color = Color::Rgb(110, 197, 205);
const PIPE: Color = Color::Rgb(100, 170, 40);
const GROUND: Color = Color::Rgb(210, 185, 110);
const BIRD: Color = Color::Rgb(245, 200, 66);

/// Draws the whole world, scaled into the widget area.
pub struct WorldWidget<'a> {
    snapshot: &'a WorldSnapshot,
}

impl<'a> WorldWidget<'a> {
    #[must_use]
    pub fn new(snapshot: &'a WorldSnapshot) -> Self {
        Self { snapshot }
    }

    /// Maps world coordinates onto a cell of `inner`, or `None` when the
    /// point falls outside the viewport.
    pub fn world_to_screen(
        world_x: f64,
        world_y: f64,
        snapshot: &WorldSnapshot,
        inner: Rect,
    ) -> Option<(u16, u16)> {
        if world_x < 0.0 || world_y < 0.0 {
            return None;
        }
        let sx = f64::from(inner.width) / snapshot.world_width;
        let sy = f64::from(inner.height) / snapshot.world_height;
        let x = (world_x * sx) as u16;
        let y = (world_y * sy) as u16;
        if x < inner.width && y < inner.height {
            Some((inner.x + x, inner.y + y))
        } else {
            None
        }
    }

    /// Agent glyph: nose-up while climbing, nose-down in a dive.
    #[must_use]
    pub fn symbol_for_agent(agent: &AgentSnapshot) -> char {
        if agent.tilt > 0.0 {
            '^'
        } else if agent.tilt <= -45.0 {
            'v'
        } else {
            match agent.wing_phase {
                WingPhase::Up => '>',
                WingPhase::Mid => '»',
                WingPhase::Down => '>',
            }
        }
    }
}

impl Widget for WorldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(
                " Score: {}  Tick: {} ",
                self.snapshot.score, self.snapshot.tick
            ))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let sx = f64::from(inner.width) / self.snapshot.world_width;
        let sy = f64::from(inner.height) / self.snapshot.world_height;

        // Sky backdrop.
        for y in inner.top()..inner.bottom() {
            for x in inner.left()..inner.right() {
                buf[(x, y)].set_char(' ').set_bg(SKY);
            }
        }

        // Obstacle regions, columns clipped to the viewport.
        for obstacle in &self.snapshot.obstacles {
            let left = (obstacle.x.max(0.0) * sx) as u16;
            let right = (((obstacle.x + obstacle.width) * sx).max(0.0) as u16).min(inner.width);
            for region_top in [obstacle.y_top, obstacle.y_bottom] {
                let top = (region_top.max(0.0) * sy) as u16;
                let bottom =
                    (((region_top + obstacle.region_height) * sy).max(0.0) as u16).min(inner.height);
                for y in top..bottom {
                    for x in left..right {
                        buf[(inner.x + x, inner.y + y)]
                            .set_char('█')
                            .set_fg(PIPE)
                            .set_bg(SKY);
                    }
                }
            }
        }

        // Ground strip below the ground line; the tile offset scrolls the
        // dither pattern so motion reads even with a stationary agent.
        let ground_top = ((self.snapshot.ground_y * sy) as u16).min(inner.height);
        let scroll = (self.snapshot.surface_tiles[0] * sx) as i64;
        for y in ground_top..inner.height {
            for x in 0..inner.width {
                let glyph = if (i64::from(x) - scroll).rem_euclid(4) < 2 {
                    '▒'
                } else {
                    '░'
                };
                buf[(inner.x + x, inner.y + y)]
                    .set_char(glyph)
                    .set_fg(GROUND)
                    .set_bg(SKY);
            }
        }

        // Live agents on top.
        for agent in self.snapshot.agents.iter().filter(|agent| agent.alive) {
            if let Some((x, y)) =
                Self::world_to_screen(agent.x, agent.y, self.snapshot, inner)
            {
                buf[(x, y)]
                    .set_char(Self::symbol_for_agent(agent))
                    .set_fg(BIRD)
                    .set_bg(SKY);
            }
        }
    }
}

/// Run statistics overlaid beside the world view.
pub struct StatsWidget {
    pub generation: u64,
    pub alive: usize,
    pub score: u32,
    pub best_score: u32,
}

impl Widget for StatsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(format!("Gen   : {}", self.generation)),
            Line::from(format!("Alive : {}", self.alive)),
            Line::from(format!("Score : {}", self.score)),
            Line::from(format!("Best  : {}", self.best_score)),
        ];
        Paragraph::new(lines)
            .style(Style::default().fg(Color::Green))
            .block(Block::default().title(" Run ").borders(Borders::ALL))
            .render(area, buf);
    }
}

/// Centered end-of-game panel shown after the last agent dies.
pub struct GameOverWidget {
    pub score: u32,
    pub best_score: u32,
}

impl Widget for GameOverWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 24u16.min(area.width);
        let height = 5u16.min(area.height);
        let panel = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };
        let lines = vec![
            Line::from("GAME OVER"),
            Line::from(format!("Score: {}", self.score)),
            Line::from(format!("Best : {}", self.best_score)),
        ];
        Paragraph::new(lines)
            .style(Style::default().fg(Color::White).bg(Color::Black))
            .block(Block::default().borders(Borders::ALL))
            .centered()
            .render(panel, buf);
    }
}
