//! Key handling for manual play.

use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char(' ') | KeyCode::Up => self.armed.set(true),
            KeyCode::Char('p') => self.paused = !self.paused,
            _ => {}
        }
    }
}
