use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Widget};

use crate::state_color;
use contagion_data::{EpiState, Observation};

/// Bottom-to-top stacking order of each column.
const STACK_ORDER: [EpiState; 3] = [EpiState::Infected, EpiState::New, EpiState::Immune];

/// Stacked histogram of observations over time, one column per sample.
///
/// When there are more samples than columns only the most recent ones are
/// shown, oldest on the left.
pub struct HistogramWidget<'a> {
    observations: &'a [Observation],
}

impl<'a> HistogramWidget<'a> {
    pub fn new(observations: &'a [Observation]) -> Self {
        Self { observations }
    }

    /// Rows given to each state in a column of `height` cells, in
    /// [`STACK_ORDER`]. Always sums to `height` for a non-empty observation.
    pub fn column_rows(obs: &Observation, height: u16) -> [u16; 3] {
        let total = obs.total();
        if total == 0 || height == 0 {
            return [0; 3];
        }
        let share = |state: EpiState| {
            ((obs.count(state) as f64 / total as f64) * f64::from(height)).round() as u16
        };
        let infected = share(EpiState::Infected).min(height);
        let immune = share(EpiState::Immune).min(height - infected);
        let new = height - infected - immune;
        [infected, new, immune]
    }
}

impl<'a> Widget for HistogramWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Infected / New / Immune ")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let shown = self.observations.len().min(usize::from(inner.width));
        let visible = &self.observations[self.observations.len() - shown..];
        let bottom = inner.bottom() - 1;

        for (col, obs) in visible.iter().enumerate() {
            let x = inner.x + col as u16;
            let mut y = bottom;
            let rows = Self::column_rows(obs, inner.height);
            for (state, count) in STACK_ORDER.into_iter().zip(rows) {
                for _ in 0..count {
                    let cell = &mut buf[(x, y)];
                    cell.set_symbol("█");
                    cell.set_fg(state_color(state));
                    y = y.saturating_sub(1);
                }
            }
        }
    }
}
