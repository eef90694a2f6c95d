use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::state_color;
use contagion_data::{EpiState, Observation};

/// One-line summary: current counts, peak, run state and key hints.
pub struct StatusWidget {
    pub observation: Observation,
    pub peak_infected: usize,
    pub paused: bool,
    pub settled: bool,
}

impl StatusWidget {
    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (state, count) in self.observation.iter() {
            spans.push(Span::styled(
                format!(" {} {} {} ", state.symbol(), state.label(), count),
                Style::default().fg(state_color(state)),
            ));
        }
        spans.push(Span::raw(format!("| peak {} ", self.peak_infected)));

        let run_state = if self.settled {
            Span::styled(
                "| epidemic over ",
                Style::default()
                    .fg(state_color(EpiState::Immune))
                    .add_modifier(Modifier::BOLD),
            )
        } else if self.paused {
            Span::styled(
                "| paused ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("| running ")
        };
        spans.push(run_state);
        spans.push(Span::styled(
            "| [space] pause [s] step [r] restart [q] quit",
            Style::default().fg(Color::DarkGray),
        ));
        Line::from(spans)
    }
}

impl Widget for StatusWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
