//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `G`,
//! - logical tick rate driving the scheduler,
//! - distance and mass floors guarding the degenerate cases,
//! - optional fixed random seed

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub ticks_per_second: u32, // logical tick rate
    pub dist_floor: f64, // minimum pair distance used in the force divide
    pub mass_floor: f64, // minimum mass assigned at initialization
    pub seed: Option<u64>, // fixed seed, or None for entropy
}
