use super::state::EpiState;
use super::vector::Vector;
use serde::{Deserialize, Serialize};

/// Read-only view of one agent, as handed to renderers after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub position: Vector,
    pub state: EpiState,
}

impl AgentSnapshot {
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        self.state.rgb()
    }
}
