//! The population driver: owns every agent and advances them one tick at a time.

use crate::agent::{Agent, UpdateContext};
use crate::collision::CollisionDetector;
use crate::config::SimulationParams;
use crate::error::{ConfigError, Result};
use crate::snapshot::PopulationSnapshot;
use contagion_data::{EpiState, Observation, Vector};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// What happened during one [`Population::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Tick number after advancing (the first tick reports 1).
    pub tick: u64,
    pub interactions: usize,
    pub infections: usize,
    pub recoveries: usize,
}

/// A fixed-size collection of agents and the constants that drive them.
///
/// The population is the only owner and mutator of its agents; renderers read
/// [`PopulationSnapshot`]s between ticks.
#[derive(Debug, Clone)]
pub struct Population {
    agents: Vec<Agent>,
    params: SimulationParams,
    detector: CollisionDetector,
    tick: u64,
}

impl Population {
    /// Spawns `params.population` random agents and infects the first one.
    pub fn initialize<R: Rng + ?Sized>(params: SimulationParams, rng: &mut R) -> Result<Self> {
        params.validate()?;
        let agents: Vec<Agent> = (0..params.population)
            .map(|_| Agent::random(params.field_extent, &mut *rng))
            .collect();
        let mut population = Self::build(agents, params);
        population.agents[0].infect();

        tracing::info!(
            population = params.population,
            width = population.field_extent().x,
            height = population.field_extent().y,
            collision_distance = population.detector.threshold(),
            "Population initialized"
        );
        tracing::debug!(
            x = population.agents[0].position().x,
            y = population.agents[0].position().y,
            "Seed agent infected"
        );
        Ok(population)
    }

    /// Wraps explicitly placed agents. Nothing is infected on your behalf.
    ///
    /// `params.population` is replaced by `agents.len()`.
    pub fn from_agents(agents: Vec<Agent>, params: SimulationParams) -> Result<Self> {
        if agents.is_empty() {
            return Err(ConfigError::invalid(
                "world.population",
                "must be at least 1",
            ));
        }
        let params = SimulationParams {
            population: agents.len(),
            ..params
        };
        params.validate()?;
        Ok(Self::build(agents, params))
    }

    fn build(agents: Vec<Agent>, params: SimulationParams) -> Self {
        Self {
            agents,
            detector: CollisionDetector::new(params.collision_distance),
            params,
            tick: 0,
        }
    }

    /// Moves every agent, then resolves every contact.
    pub fn tick(&mut self) -> TickReport {
        let ctx = UpdateContext {
            infection_duration: self.params.infection_duration,
            field_extent: self.field_extent(),
            tick_magnitude: self.params.tick_magnitude,
        };

        #[cfg(feature = "parallel")]
        let recoveries: usize = self
            .agents
            .par_iter_mut()
            .map(|a| usize::from(a.update(&ctx).recovered))
            .sum();
        #[cfg(not(feature = "parallel"))]
        let recoveries: usize = self
            .agents
            .iter_mut()
            .map(|a| usize::from(a.update(&ctx).recovered))
            .sum();

        let contacts = self.detector.resolve(&mut self.agents);
        self.tick += 1;

        TickReport {
            tick: self.tick,
            interactions: contacts.interactions,
            infections: contacts.infections,
            recoveries,
        }
    }

    #[must_use]
    pub fn observe(&self) -> Observation {
        Observation::from_states(self.tick, self.agents.iter().map(Agent::state))
    }

    #[must_use]
    pub fn snapshot(&self) -> PopulationSnapshot {
        PopulationSnapshot {
            tick: self.tick,
            width: self.field_extent().x,
            height: self.field_extent().y,
            agents: self.agents.iter().map(Agent::snapshot).collect(),
            observation: self.observe(),
        }
    }

    /// True once nobody is infected: from here on no state can change.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.agents.iter().any(Agent::is_infected)
    }

    #[must_use]
    pub fn count(&self, state: EpiState) -> usize {
        self.agents.iter().filter(|a| a.state() == state).count()
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Always false; a population holds at least one agent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    #[must_use]
    pub fn field_extent(&self) -> Vector {
        self.params.field_extent
    }
}
