use anyhow::Result;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

use contagion_core::config::SimConfig;
use contagion_core::history::ObservationLog;
use contagion_core::metrics::Metrics;
use contagion_core::population::{Population, TickReport};
use contagion_core::snapshot::PopulationSnapshot;

/// Host-side driver: owns the population and everything sampled from it.
pub struct App {
    pub running: bool,
    pub paused: bool,
    pub config: SimConfig,
    pub population: Population,
    pub history: ObservationLog,
    pub metrics: Metrics,
    pub latest_snapshot: PopulationSnapshot,
    rng: ChaCha8Rng,
    settled_logged: bool,
}

impl App {
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = config.rng();
        let population = Population::initialize(config.params(), &mut rng)?;
        let mut history = ObservationLog::new(
            config.sampling.observation_interval,
            config.sampling.max_samples,
        );
        history.record_if_due(&population);
        let latest_snapshot = population.snapshot();

        Ok(Self {
            running: true,
            paused: false,
            config,
            population,
            history,
            metrics: Metrics::new(),
            latest_snapshot,
            rng,
            settled_logged: false,
        })
    }

    /// Advances one tick and records whatever is due.
    pub fn step(&mut self) -> TickReport {
        let started = Instant::now();
        let report = self.population.tick();
        self.metrics.record_tick(&report, started.elapsed());
        self.history.record_if_due(&self.population);
        self.latest_snapshot = self.population.snapshot();

        if report.infections > 0 {
            tracing::debug!(
                tick = report.tick,
                infections = report.infections,
                "New infections"
            );
        }
        if !self.settled_logged && self.population.is_settled() {
            self.settled_logged = true;
            tracing::info!(
                tick = report.tick,
                peak_infected = self.history.peak_infected(),
                immune = self.latest_snapshot.observation.immune,
                untouched = self.latest_snapshot.observation.new,
                "Epidemic over"
            );
        }
        report
    }

    /// Throws the current population away and seeds a fresh one.
    ///
    /// The RNG stream continues, so a seeded run restarts into a different
    /// but still reproducible population.
    pub fn restart(&mut self) -> Result<()> {
        self.population = Population::initialize(self.config.params(), &mut self.rng)?;
        self.history.clear();
        self.history.record_if_due(&self.population);
        self.metrics = Metrics::new();
        self.latest_snapshot = self.population.snapshot();
        self.settled_logged = false;
        tracing::info!("Simulation restarted");
        Ok(())
    }
}
