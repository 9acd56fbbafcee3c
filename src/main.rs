use clap::Parser;
use ocean_sim::config::Config;
use ocean_sim::render::{ConsoleRenderer, JsonLinesRenderer, NullRenderer, Render};
use ocean_sim::simulation::{Simulation, Termination};
use ocean_sim::stats::SimulationMetrics;
use std::io;
use tokio::time::{interval, Duration};

#[derive(Parser, Debug)]
#[command(name = "ocean-sim")]
#[command(about = "Toroidal ocean ecosystem simulator", long_about = None)]
struct Args {
    /// Grid rows, overrides the config file.
    rows: Option<usize>,

    /// Grid columns, overrides the config file.
    cols: Option<usize>,

    #[arg(short, long, default_value = "ocean.json")]
    config: String,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    max_iterations: Option<u64>,

    #[arg(long)]
    stagnation_limit: Option<u64>,

    /// Milliseconds between frames.
    #[arg(long)]
    frame_ms: Option<u64>,

    /// Emit one JSON frame per line instead of drawing the grid.
    #[arg(long)]
    json: bool,

    /// Run without rendering.
    #[arg(long, conflicts_with = "json")]
    quiet: bool,
}

impl Args {
    fn headless(&self) -> bool {
        self.json || self.quiet
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(rows) = self.rows {
            config.ocean.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.ocean.cols = cols;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.simulation.max_iterations = max_iterations;
        }
        if let Some(stagnation_limit) = self.stagnation_limit {
            config.simulation.stagnation_limit = stagnation_limit;
        }
        if let Some(frame_ms) = self.frame_ms {
            config.simulation.frame_millis = frame_ms;
        }
    }

    fn renderer(&self) -> Box<dyn Render> {
        if self.quiet {
            Box::new(NullRenderer)
        } else if self.json {
            Box::new(JsonLinesRenderer::new(io::stdout()))
        } else {
            Box::new(ConsoleRenderer::new(io::stdout()))
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.headless() { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = if std::path::Path::new(&args.config).exists() {
        log::info!("Loading config from: {}", args.config);
        Config::load_from_file(&args.config)?
    } else {
        log::info!(
            "Config file not found, using defaults and saving to: {}",
            args.config
        );
        let config = Config::default();
        config.save_to_file(&args.config)?;
        config
    };

    args.apply_overrides(&mut config);
    config.validate()?;

    log::info!(
        "Starting {}x{} ocean | seed: {} | max iterations: {} | stagnation limit: {}",
        config.ocean.rows,
        config.ocean.cols,
        args.seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "entropy".to_string()),
        config.simulation.max_iterations,
        config.simulation.stagnation_limit
    );

    let sim = Simulation::new(&config, args.seed);
    let mut renderer = args.renderer();

    run_simulation(sim, renderer.as_mut()).await
}

async fn run_simulation(
    mut sim: Simulation,
    renderer: &mut dyn Render,
) -> Result<(), Box<dyn std::error::Error>> {
    let frame_duration = Duration::from_millis(sim.config().simulation.frame_millis.max(1));
    let log_every = sim.config().simulation.log_interval_ticks;
    let mut frame_interval = interval(frame_duration);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut extinct = false;
    renderer.render(&sim.frame())?;

    let reason = loop {
        if let Some(termination) = sim.termination() {
            break Some(termination);
        }

        tokio::select! {
            _ = frame_interval.tick() => {}
            _ = &mut ctrl_c => break None,
        }

        sim.tick();
        renderer.render(&sim.frame())?;

        let metrics = sim.metrics();
        if log_every > 0 && metrics.iteration % log_every == 0 {
            log_metrics(&metrics);
        }

        if metrics.census.fauna() == 0 && !extinct {
            log::warn!("All fauna have died out at iteration {}", metrics.iteration);
            extinct = true;
        }
    };

    report(reason, &sim.metrics());
    Ok(())
}

fn log_metrics(metrics: &SimulationMetrics) {
    log::info!(
        "Iteration: {} | Prey: {} | Predators: {} | Apex: {} | Births: {} | Deaths: {} | Meals: {}",
        metrics.iteration,
        metrics.census.prey,
        metrics.census.predator,
        metrics.census.apex,
        metrics.total_births,
        metrics.total_deaths,
        metrics.total_meals
    );
}

fn report(reason: Option<Termination>, metrics: &SimulationMetrics) {
    match reason {
        Some(termination) => log::info!("Simulation stopped: {}", termination),
        None => log::info!("Simulation interrupted at iteration {}", metrics.iteration),
    }
    log_metrics(metrics);
    log::info!(
        "Storms: {} ({} casualties) | Terrain transforms: {}",
        metrics.total_storms,
        metrics.storm_casualties,
        metrics.terrain_transforms
    );
}
