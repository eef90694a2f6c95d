//! Plain data types shared by the contagion engine and its renderers.
//!
//! Nothing in here knows how a tick is advanced; these are the values the
//! engine hands out (snapshots, observations) and the 2D arithmetic it is
//! built on.

pub mod data;

pub use data::observation::Observation;
pub use data::snapshot::AgentSnapshot;
pub use data::state::EpiState;
pub use data::vector::Vector;
