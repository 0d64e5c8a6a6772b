use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::simulation::forces::LinearGravity;
use crate::simulation::integrator::step;
use crate::simulation::scenario::initialize;

/// Time one full tick (drift + pairwise kick + recenter) for a range of N
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() {
    // Different system sizes to test
    let ns = [100, 200, 400, 800, 1600, 3200];
    let steps = 5; // steps averaged per size

    println!("N,step_ms");

    for n in ns {
        // Deterministic bodies so runs are comparable
        let mut rng = StdRng::seed_from_u64(42);
        let mut sys = initialize(n, 1e-3, &mut rng);

        let gravity = LinearGravity {
            G: 1.0,
            dist_floor: 1e-9,
        };

        // Warm up
        step(&mut sys, &gravity);

        let t0 = Instant::now();
        for _ in 0..steps {
            step(&mut sys, &gravity);
        }
        let ms_per_step = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms_per_step:.6}");
    }
}
