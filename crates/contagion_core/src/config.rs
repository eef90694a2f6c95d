//! Configuration management for simulation parameters.
//!
//! `SimConfig` maps onto a `config.toml` file. Every field has a default, so a
//! partial file (or none at all) is fine.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (`Default` impl)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command-line flags (applied by the binary)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! tick_period_ms = 100
//!
//! [world]
//! width = 300.0
//! height = 300.0
//! population = 100
//! seed = 42
//!
//! [disease]
//! collision_distance = 3.0
//! infection_duration = 100
//!
//! [motion]
//! tick_magnitude = 1.0
//!
//! [sampling]
//! observation_interval = 10
//! max_samples = 200
//! ```

use crate::error::{ensure_positive, ConfigError, Result};
use contagion_data::Vector;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Field size, population and RNG seed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub population: usize,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 300.0,
            population: 100,
            seed: None,
        }
    }
}

/// Transmission and recovery constants.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DiseaseConfig {
    /// Agents strictly closer than this collide.
    pub collision_distance: f64,
    /// Ticks an agent stays infected before becoming immune.
    pub infection_duration: u32,
}

impl Default for DiseaseConfig {
    fn default() -> Self {
        Self {
            collision_distance: 3.0,
            infection_duration: 100,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    pub tick_magnitude: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            tick_magnitude: 1.0,
        }
    }
}

/// How often aggregate observations are taken and how many are kept.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SamplingConfig {
    pub observation_interval: u64,
    pub max_samples: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            observation_interval: 10,
            max_samples: 200,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Period of the host timer driving ticks.
    pub tick_period_ms: u64,
    pub world: WorldConfig,
    pub disease: DiseaseConfig,
    pub motion: MotionConfig,
    pub sampling: SamplingConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 100,
            world: WorldConfig::default(),
            disease: DiseaseConfig::default(),
            motion: MotionConfig::default(),
            sampling: SamplingConfig::default(),
        }
    }
}

/// Constants the engine needs to build and advance a population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    pub field_extent: Vector,
    pub population: usize,
    pub collision_distance: f64,
    pub infection_duration: u32,
    pub tick_magnitude: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        SimConfig::default().params()
    }
}

impl SimulationParams {
    /// Checks that every constant is positive.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("world.width", self.field_extent.x)?;
        ensure_positive("world.height", self.field_extent.y)?;
        if self.population == 0 {
            return Err(ConfigError::invalid(
                "world.population",
                "must be at least 1",
            ));
        }
        ensure_positive("disease.collision_distance", self.collision_distance)?;
        if self.infection_duration == 0 {
            return Err(ConfigError::invalid(
                "disease.infection_duration",
                "must be at least 1 tick",
            ));
        }
        ensure_positive("motion.tick_magnitude", self.tick_magnitude)?;
        Ok(())
    }
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        self.params().validate()?;
        if self.sampling.observation_interval == 0 {
            return Err(ConfigError::invalid(
                "sampling.observation_interval",
                "must be at least 1 tick",
            ));
        }
        if self.sampling.max_samples == 0 {
            return Err(ConfigError::invalid(
                "sampling.max_samples",
                "must be at least 1",
            ));
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::invalid(
                "tick_period_ms",
                "must be at least 1 millisecond",
            ));
        }
        Ok(())
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, or the defaults if the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    #[must_use]
    pub fn params(&self) -> SimulationParams {
        SimulationParams {
            field_extent: Vector::new(self.world.width, self.world.height),
            population: self.world.population,
            collision_distance: self.disease.collision_distance,
            infection_duration: self.disease.infection_duration,
            tick_magnitude: self.motion.tick_magnitude,
        }
    }

    #[must_use]
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Seeded from `world.seed` when set, from OS entropy otherwise.
    #[must_use]
    pub fn rng(&self) -> ChaCha8Rng {
        match self.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
