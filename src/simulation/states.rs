//! Core state types for the N-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` using `NVec3` (position, velocity, mass)
//! - `System` holding the runtime-sized body collection and the tick count
//!
//! The collection is allocated once at startup and mutated in place for the
//! lifetime of the process.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass (positive, floored at init)
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, insertion-ordered
    pub tick: u64, // completed integration steps
}

impl System {
    /// Sum of `m * v` over all bodies
    /// Pairwise kicks are equal and opposite, so this is conserved per step
    pub fn total_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .fold(NVec3::zeros(), |p, b| p + b.v * b.m)
    }

    /// Arithmetic mean of all body positions
    pub fn centroid(&self) -> NVec3 {
        if self.bodies.is_empty() {
            return NVec3::zeros();
        }
        let sum = self.bodies.iter().fold(NVec3::zeros(), |s, b| s + b.x);
        sum / self.bodies.len() as f64
    }
}
