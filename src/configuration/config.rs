//! Configuration types for the simulation.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation run. Every field has a default matching the reference
//! configuration, so an empty YAML document (or no file at all) yields the
//! stock 1000-body, 10 ticks/second demo.
//!
//! # YAML format
//! An example config YAML matching these types:
//!
//! ```yaml
//! bodies: 1000            # number of point masses
//! ticks_per_second: 10    # logical tick rate
//! G: 1.0                  # gravitational constant
//! seed: 42                # fixed RNG seed (omit for entropy)
//! mass_floor: 1.0e-3      # minimum mass assigned at init
//! dist_floor: 1.0e-9      # minimum pair distance in the force divide
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Validation failures caught before the simulation starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least two bodies are required, got {0}")]
    TooFewBodies(usize),

    #[error("ticks_per_second must be at least 1")]
    ZeroTickRate,

    #[error("mass_floor must be positive, got {0}")]
    NonPositiveMassFloor(f64),

    #[error("dist_floor must be positive, got {0}")]
    NonPositiveDistFloor(f64),
}

/// Top-level run configuration, loadable from YAML
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SimConfig {
    pub bodies: usize, // number of point masses
    pub ticks_per_second: u32, // logical tick rate
    pub G: f64, // gravitational constant
    pub seed: Option<u64>, // fixed RNG seed, None draws entropy
    pub mass_floor: f64, // minimum mass assigned at init
    pub dist_floor: f64, // minimum pair distance in the force divide
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bodies: 1000,
            ticks_per_second: 10,
            G: 1.0,
            seed: None,
            mass_floor: 1e-3,
            dist_floor: 1e-9,
        }
    }
}

impl SimConfig {
    /// Fail fast on configurations the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies < 2 {
            return Err(ConfigError::TooFewBodies(self.bodies));
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.mass_floor <= 0.0 {
            return Err(ConfigError::NonPositiveMassFloor(self.mass_floor));
        }
        if self.dist_floor <= 0.0 {
            return Err(ConfigError::NonPositiveDistFloor(self.dist_floor));
        }
        Ok(())
    }
}
