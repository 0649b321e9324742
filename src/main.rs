use orbitsim::{ScenarioConfig, Scenario, Simulation, UserInput};
use orbitsim::{run_2d, bench_step, bench_trajectory};
use orbitsim::simulation::forces::{specific_orbital_energy, specific_angular_momentum};
use orbitsim::visualization::orbit_vis2d::{WINDOW_WIDTH, WINDOW_HEIGHT};

use clap::Parser;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run without a window and log the orbit instead
    #[arg(long)]
    headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    frames: usize,

    /// Wall-clock seconds per headless frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_dt: f64,

    /// Run the timing benchmarks and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn run_headless(mut sim: Simulation, frames: usize, frame_dt: f64) -> Result<()> {
    sim.apply_input(UserInput::Start)?;

    for i in 0..frames {
        let steps = sim.advance(frame_dt)?.steps;
        if i % 60 != 0 {
            continue;
        }

        let mu = sim.scheduler.params().mu;
        let current = sim.scheduler.current();
        if let Some(p) = current.planets.first() {
            info!(
                frame = i,
                steps,
                sim_time = sim.scheduler.sim_time(),
                x = p.pos().x,
                y = p.pos().y,
                energy = specific_orbital_energy(&current.attractor, p, mu),
                momentum = specific_angular_momentum(&current.attractor, p),
                "orbit"
            );
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        init_logging();
        bench_step();
        bench_trajectory();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg, (WINDOW_WIDTH / WINDOW_HEIGHT) as f64)?;
    let sim = Simulation::new(scenario)?;

    if args.headless {
        init_logging();
        run_headless(sim, args.frames, args.frame_dt)?;
    } else {
        // Bevy installs its own log subscriber
        run_2d(sim);
    }

    Ok(())
}
