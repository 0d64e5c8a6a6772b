use nbsim::{bench_step, run, Scenario, SimConfig, TermDisplay};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Optional YAML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of bodies
    #[arg(short = 'n', long)]
    bodies: Option<usize>,

    /// Logical tick rate (ticks per second)
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Fixed RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks (default: run until killed)
    #[arg(long)]
    ticks: Option<u64>,

    /// Run the step-time benchmark instead of the simulation
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_config(args: &Args) -> Result<SimConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let file = File::open(path)?;
            let reader = BufReader::new(file);
            serde_yaml::from_reader(reader)?
        }
        None => SimConfig::default(),
    };

    if let Some(n) = args.bodies {
        cfg.bodies = n;
    }
    if let Some(rate) = args.tick_rate {
        cfg.ticks_per_second = rate;
    }
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }

    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let cfg = load_config(&args)?;
    let mut scenario = Scenario::build(cfg)?;

    log::info!(
        "starting: {} bodies, {} ticks/s, seed {:?}",
        scenario.system.bodies.len(),
        scenario.parameters.ticks_per_second,
        scenario.parameters.seed,
    );

    let limit = args.ticks;
    let mut display = TermDisplay::new();
    run(&mut scenario, &mut display, move |tick| {
        limit.is_some_and(|l| tick >= l)
    })?;

    Ok(())
}
