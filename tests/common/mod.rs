use contagion_core::agent::Agent;
use contagion_core::config::SimulationParams;
use contagion_core::population::Population;
use contagion_data::Vector;

/// Builds small hand-placed populations for scenario tests.
#[allow(dead_code)]
pub struct PopulationBuilder {
    params: SimulationParams,
    agents: Vec<Agent>,
    infected: Vec<usize>,
}

#[allow(dead_code)]
impl PopulationBuilder {
    pub fn new() -> Self {
        Self {
            params: SimulationParams::default(),
            agents: Vec::new(),
            infected: Vec::new(),
        }
    }

    pub fn with_field(mut self, width: f64, height: f64) -> Self {
        self.params.field_extent = Vector::new(width, height);
        self
    }

    pub fn with_collision_distance(mut self, distance: f64) -> Self {
        self.params.collision_distance = distance;
        self
    }

    pub fn with_infection_duration(mut self, ticks: u32) -> Self {
        self.params.infection_duration = ticks;
        self
    }

    pub fn with_agent(mut self, x: f64, y: f64, dx: f64, dy: f64) -> Self {
        self.agents
            .push(Agent::new(Vector::new(x, y), Vector::new(dx, dy)));
        self
    }

    pub fn with_infected_agent(mut self, x: f64, y: f64, dx: f64, dy: f64) -> Self {
        self.infected.push(self.agents.len());
        self.with_agent(x, y, dx, dy)
    }

    pub fn build(self) -> Population {
        let mut agents = self.agents;
        for idx in self.infected {
            agents[idx].infect();
        }
        Population::from_agents(agents, self.params).expect("Failed to build population")
    }
}
