//! # Contagion Core
//!
//! The simulation engine for contagion: agents wandering a rectangular field,
//! bouncing off each other and passing on an infection.
//!
//! This crate contains:
//! - The agent state machine (`New -> Infected -> Immune`) and movement
//! - Pairwise collision detection and resolution
//! - The population driver that advances everything one tick at a time
//! - Observation sampling, configuration and run metrics
//!
//! ## Tick order
//!
//! Every tick first updates all agents (state timer, movement, reflection off
//! the field edges) and then resolves contacts between every pair of agents
//! closer than the collision distance, in ascending index order.
//!
//! ## Example
//!
//! ```
//! use contagion_core::config::SimConfig;
//! use contagion_core::population::Population;
//!
//! let mut config = SimConfig::default();
//! config.world.seed = Some(42);
//! let mut rng = config.rng();
//! let mut population = Population::initialize(config.params(), &mut rng).unwrap();
//!
//! for _ in 0..50 {
//!     population.tick();
//! }
//! assert_eq!(population.observe().total(), config.world.population);
//! ```

/// Agent state machine and movement
pub mod agent;
/// Pairwise contact detection and resolution
pub mod collision;
/// Configuration management for simulation parameters
pub mod config;
/// Configuration errors
pub mod error;
/// Observation time series
pub mod history;
/// Run metrics and logging setup
pub mod metrics;
/// The population driver
pub mod population;
/// Read-only population snapshots for renderers
pub mod snapshot;

pub use agent::Agent;
pub use config::{SimConfig, SimulationParams};
pub use error::ConfigError;
pub use history::ObservationLog;
pub use metrics::{init_logging, Metrics};
pub use population::{Population, TickReport};
pub use snapshot::PopulationSnapshot;
