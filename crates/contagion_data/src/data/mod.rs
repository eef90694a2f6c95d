//! Core data structures for the contagion simulation.

pub mod observation;
pub mod snapshot;
pub mod state;
pub mod vector;
