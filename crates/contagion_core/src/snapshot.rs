use contagion_data::{AgentSnapshot, Observation};
use serde::{Deserialize, Serialize};

/// Immutable copy of a population taken between ticks, for renderers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PopulationSnapshot {
    pub tick: u64,
    pub width: f64,
    pub height: f64,
    pub agents: Vec<AgentSnapshot>,
    pub observation: Observation,
}
