pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::params::Parameters;
pub use simulation::forces::{VelocityKick, LinearGravity};
pub use simulation::integrator::{step, recenter};
pub use simulation::scenario::{Scenario, initialize};

pub use configuration::config::{SimConfig, ConfigError};

pub use visualization::ascii::{render, DEPTH_PALETTE};
pub use visualization::terminal::{run, Display, TermDisplay, FixedDisplay, DEFAULT_DIMS};

pub use benchmark::benchmark::bench_step;
