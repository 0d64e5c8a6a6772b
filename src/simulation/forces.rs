//! Pairwise gravity for the n-body engine
//!
//! Defines the [`VelocityKick`] trait and the direct O(N^2) gravity term.
//! A kick reads reference positions from an immutable snapshot and applies
//! velocity changes to the live system, so per-pair results do not depend on
//! body order within a tick.

use crate::simulation::states::{Body, System};

/// Trait for interaction terms that turn a position snapshot into velocity
/// updates on the live system
pub trait VelocityKick {
    fn apply(&self, reference: &[Body], sys: &mut System);
}

/// Direct pairwise gravity, linear in separation
///
/// The force magnitude is `G * m_i * m_j / d` with `d` floored at
/// `dist_floor`. The law is linear in distance, not inverse-square;
/// see DESIGN.md before changing it.
#[allow(non_snake_case)]
pub struct LinearGravity {
    pub G: f64, // gravitional constant
    pub dist_floor: f64, // lower clamp on pair distance
}

impl VelocityKick for LinearGravity {
    fn apply(&self, reference: &[Body], sys: &mut System) {
        let n = reference.len();
        if n < 2 { // nothing to pair up, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n - 1 {
            // bi: body i (left side of the pair)
            let bi = &reference[i];

            for j in (i + 1)..n {
                // bj: body j (right side of the pair)
                let bj = &reference[j];

                // r is the displacement vector from i to j
                // If r points from i to j, then i feels a pull along +r,
                // j feels a pull along -r
                let r = bj.x - bi.x;

                // Separation distance, floored so coincident bodies yield a
                // bounded force instead of a non-finite one
                let d = r.norm().max(self.dist_floor);

                // Force magnitude: G * m_i * m_j / d (linear in distance)
                let force = self.G * bi.m * bj.m / d;

                // Unit direction from i to j, scaled to the force magnitude
                // For truly coincident bodies r is the zero vector and the
                // kick vanishes
                let f = r / d * force;

                // acceleration = force / mass, equal and opposite
                sys.bodies[i].v += f / bi.m;
                sys.bodies[j].v -= f / bj.m;
            }
        }
    }
}
