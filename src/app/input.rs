use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::state::App;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('s') if self.paused => {
                self.step();
            }
            KeyCode::Char('r') => self.restart()?,
            _ => {}
        }
        Ok(())
    }
}
