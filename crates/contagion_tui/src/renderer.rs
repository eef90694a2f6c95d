use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Widget};

use crate::state_color;
use contagion_core::snapshot::PopulationSnapshot;
use contagion_data::{AgentSnapshot, EpiState};

/// Draw order: later states paint over earlier ones sharing a cell.
const PAINT_ORDER: [EpiState; 3] = [EpiState::New, EpiState::Immune, EpiState::Infected];

/// The field with every agent drawn as a coloured glyph.
///
/// The world is scaled to fit the widget, so one terminal cell usually covers
/// several field units.
pub struct FieldWidget<'a> {
    snapshot: &'a PopulationSnapshot,
    paused: bool,
}

impl<'a> FieldWidget<'a> {
    pub fn new(snapshot: &'a PopulationSnapshot, paused: bool) -> Self {
        Self { snapshot, paused }
    }

    pub fn get_inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Maps a field position onto a cell of `inner`.
    ///
    /// Agents a fraction outside the field (they are not clamped by the engine)
    /// are drawn on the nearest edge cell.
    pub fn world_to_screen(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        inner: Rect,
    ) -> Option<(u16, u16)> {
        if inner.width == 0 || inner.height == 0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let fx = (x / width).clamp(0.0, 1.0);
        let fy = (y / height).clamp(0.0, 1.0);
        let cx = ((fx * f64::from(inner.width)) as u16).min(inner.width - 1);
        let cy = ((fy * f64::from(inner.height)) as u16).min(inner.height - 1);
        Some((inner.x + cx, inner.y + cy))
    }

    fn paint(&self, agent: &AgentSnapshot, inner: Rect, buf: &mut Buffer) {
        if let Some((x, y)) = Self::world_to_screen(
            agent.position.x,
            agent.position.y,
            self.snapshot.width,
            self.snapshot.height,
            inner,
        ) {
            let cell = &mut buf[(x, y)];
            cell.set_symbol(&agent.state.symbol().to_string());
            cell.set_fg(state_color(agent.state));
        }
    }
}

impl<'a> Widget for FieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.paused {
            format!(" Field (Tick: {}) [paused] ", self.snapshot.tick)
        } else {
            format!(" Field (Tick: {}) ", self.snapshot.tick)
        };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .render(area, buf);

        let inner = Self::get_inner_area(area);
        for state in PAINT_ORDER {
            for agent in self.snapshot.agents.iter().filter(|a| a.state == state) {
                self.paint(agent, inner, buf);
            }
        }
    }
}
