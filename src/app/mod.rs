pub mod input;
pub mod render;
pub mod state;

pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use serde::Serialize;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

use contagion_data::Observation;
use contagion_tui::Tui;

/// Outcome of a headless run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub settled: bool,
    pub peak_infected: usize,
    pub final_observation: Observation,
}

impl RunSummary {
    /// Writes the summary as one JSON line, closing a headless transcript.
    pub fn write_line<W: Write>(&self, out: &mut W) -> Result<()> {
        write_json_line(out, self)?;
        out.flush()?;
        Ok(())
    }
}

fn write_json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

impl App {
    /// Interactive loop: one tick per timer period, drawing between ticks.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, initiating graceful shutdown...");
            shutdown_clone.store(true, Ordering::SeqCst);
        });

        let mut ticker = tokio::time::interval(self.config.tick_period());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while self.running && !shutdown.load(Ordering::SeqCst) {
            tui.draw(|f| self.draw(f))?;
            ticker.tick().await;

            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key)?;
                    }
                }
            }

            if self.running && !self.paused {
                self.step();
            }
        }

        tracing::info!(
            ticks = self.metrics.tick_count(),
            tps = self.metrics.ticks_per_second(),
            "Simulation stopped"
        );
        Ok(())
    }

    /// Runs as fast as possible, writing every sampled observation to `out`
    /// as one JSON object per line. Stops after `max_ticks` or once nobody is
    /// infected.
    pub fn run_headless<W: Write>(&mut self, max_ticks: u64, out: &mut W) -> Result<RunSummary> {
        for obs in self.history.iter() {
            write_json_line(out, obs)?;
        }

        while self.population.tick_count() < max_ticks && !self.population.is_settled() {
            let report = self.step();
            if self.history.is_due(report.tick) {
                if let Some(obs) = self.history.latest() {
                    write_json_line(out, obs)?;
                }
            }
        }
        out.flush()?;

        let summary = RunSummary {
            ticks: self.population.tick_count(),
            settled: self.population.is_settled(),
            peak_infected: self.history.peak_infected(),
            final_observation: self.population.observe(),
        };
        tracing::info!(
            ticks = summary.ticks,
            settled = summary.settled,
            peak_infected = summary.peak_infected,
            immune = summary.final_observation.immune,
            "Headless run finished"
        );
        Ok(summary)
    }
}
