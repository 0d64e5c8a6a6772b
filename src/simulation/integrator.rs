//! Fixed-step tick integrator for the N-body system
//!
//! One [`step`] advances the system by a single tick:
//! drift positions by velocity, snapshot the drifted positions, apply the
//! pairwise velocity kick against the snapshot, then recenter the system on
//! the origin. The timestep is one implicit unit per tick.

use super::forces::VelocityKick;
use super::states::System;

/// Advance the system by one tick
///
/// Ordering matters: the kick reads the snapshot taken *after* the drift, so
/// force computation is independent of body order and of the in-place
/// velocity writes happening in the same tick.
pub fn step(sys: &mut System, forces: &impl VelocityKick) {
    // Drift: x_n+1 = x_n + v_n (unit timestep)
    for b in sys.bodies.iter_mut() {
        b.x += b.v;
    }

    // Snapshot of the drifted positions; the kick reads these while it
    // mutates the live velocities
    let reference = sys.bodies.clone();
    forces.apply(&reference, sys);

    recenter(sys);
    sys.tick += 1;
}

/// Pin the system centroid at the origin
/// Bounds numeric drift without rescaling inter-body distances
pub fn recenter(sys: &mut System) {
    let c = sys.centroid();
    for b in sys.bodies.iter_mut() {
        b.x -= c;
    }
}
