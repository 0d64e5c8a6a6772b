//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `SimConfig` and produces the runtime bundle (`Scenario`)
//! containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with randomized bodies at tick 0)
//! - the active gravity term (`LinearGravity`)
//!
//! The scenario is consumed by the scheduler loop and by tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{ConfigError, SimConfig};
use crate::simulation::forces::LinearGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Fully-initialized runtime bundle built from a [`SimConfig`]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub gravity: LinearGravity,
}

impl Scenario {
    /// Validate the config and build the randomized initial state
    pub fn build(cfg: SimConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Fixed seed for reproducible runs, entropy otherwise
        let mut rng = match cfg.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        let system = initialize(cfg.bodies, cfg.mass_floor, &mut rng);

        let parameters = Parameters {
            G: cfg.G,
            ticks_per_second: cfg.ticks_per_second,
            dist_floor: cfg.dist_floor,
            mass_floor: cfg.mass_floor,
            seed: cfg.seed,
        };

        let gravity = LinearGravity {
            G: parameters.G,
            dist_floor: parameters.dist_floor,
        };

        Ok(Self {
            parameters,
            system,
            gravity,
        })
    }
}

/// Draw `n` randomized bodies:
/// - position components uniform in [-n, n] (spread scales with population)
/// - velocity components uniform in [0, 1]
/// - mass uniform in (0, 1], clamped up to `mass_floor`
pub fn initialize(n: usize, mass_floor: f64, rng: &mut impl Rng) -> System {
    let extent = n as f64;

    let bodies = (0..n)
        .map(|_| Body {
            x: NVec3::new(
                rng.gen_range(-extent..=extent),
                rng.gen_range(-extent..=extent),
                rng.gen_range(-extent..=extent),
            ),
            v: NVec3::new(
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
            ),
            m: rng.gen_range(0.0..=1.0_f64).max(mass_floor),
        })
        .collect();

    System { bodies, tick: 0 }
}
