use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::state::App;
use contagion_data::Observation;
use contagion_tui::renderer::FieldWidget;
use contagion_tui::views::histogram::HistogramWidget;
use contagion_tui::views::status::StatusWidget;

impl App {
    pub fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),     // Field
                Constraint::Length(10), // Histogram
                Constraint::Length(1),  // Status
            ])
            .split(f.area());

        f.render_widget(
            FieldWidget::new(&self.latest_snapshot, self.paused),
            layout[0],
        );

        // One column per sample inside the histogram's border.
        let columns = usize::from(layout[1].width.saturating_sub(2));
        let samples: Vec<Observation> = self.history.tail(columns).copied().collect();
        f.render_widget(HistogramWidget::new(&samples), layout[1]);

        f.render_widget(
            StatusWidget {
                observation: self.latest_snapshot.observation,
                peak_infected: self.history.peak_infected(),
                paused: self.paused,
                settled: self.population.is_settled(),
            },
            layout[2],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contagion_core::config::SimConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_shows_field_histogram_and_status() {
        let mut config = SimConfig::default();
        config.world.seed = Some(3);
        config.sampling.observation_interval = 1;
        let mut app = App::new(config).unwrap();
        for _ in 0..120 {
            app.step();
        }

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Field (Tick: 120)"));
        assert!(text.contains("Infected / New / Immune"));
        assert!(text.contains("peak"));
    }
}
