//! Run metrics and structured logging for the simulation.

use crate::population::TickReport;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Every this many ticks a summary line is logged.
const LOG_EVERY: u64 = 100;

/// Running totals over the ticks of one simulation run.
#[derive(Debug, Clone)]
pub struct Metrics {
    tick_count: u64,
    interactions: u64,
    infections: u64,
    recoveries: u64,
    busy: Duration,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: 0,
            interactions: 0,
            infections: 0,
            recoveries: 0,
            busy: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    /// Folds in one tick and how long it took to compute.
    pub fn record_tick(&mut self, report: &TickReport, duration: Duration) {
        self.tick_count += 1;
        self.interactions += report.interactions as u64;
        self.infections += report.infections as u64;
        self.recoveries += report.recoveries as u64;
        self.busy += duration;

        if self.tick_count % LOG_EVERY == 0 {
            tracing::info!(
                tick = report.tick,
                interactions = self.interactions,
                infections = self.infections,
                recoveries = self.recoveries,
                avg_tick_us = self.average_tick().as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn interactions(&self) -> u64 {
        self.interactions
    }

    #[must_use]
    pub fn infections(&self) -> u64 {
        self.infections
    }

    #[must_use]
    pub fn recoveries(&self) -> u64 {
        self.recoveries
    }

    /// Mean compute time per tick, excluding time spent waiting on the timer.
    #[must_use]
    pub fn average_tick(&self) -> Duration {
        if self.tick_count == 0 {
            Duration::ZERO
        } else {
            self.busy / self.tick_count as u32
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Wall-clock tick rate since the metrics were created.
    #[must_use]
    pub fn ticks_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.tick_count as f64 / secs
        } else {
            0.0
        }
    }
}

/// Installs a stderr fmt subscriber. `RUST_LOG` wins over `default_directive`.
pub fn init_logging(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
