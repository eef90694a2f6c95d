pub mod renderer;
pub mod views;

use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::style::Color;
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout};

use contagion_data::EpiState;

/// Terminal colour for an epidemic state.
#[must_use]
pub fn state_color(state: EpiState) -> Color {
    let (r, g, b) = state.rgb();
    Color::Rgb(r, g, b)
}

/// Owns the terminal for the lifetime of the interactive view.
///
/// `enter` and `exit` are both idempotent, and dropping an entered `Tui`
/// restores the terminal, so an early `?` in the host loop never leaves the
/// shell in raw mode.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    entered: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            entered: false,
        })
    }

    /// Switches to the alternate screen in raw mode with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        if self.entered {
            return Ok(());
        }
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        enable_raw_mode()?;
        self.entered = true;
        self.terminal.clear()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Renders one frame.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
