//! Terrasim CLI - procedural terrain and geology simulator.
//!
//! Generates a heightfield, evolves it under uplift and erosion, and reports
//! or exports the derived geology.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use terrasim::config::{ConfigError, SimConfig};
use terrasim::export::{export_geology_map_png, export_heightfield_png, GeologyMapOptions, PngExportOptions};
use terrasim::scheduler::{Clock, Simulation, SystemClock, TickOutcome};

/// Procedural terrain and geology simulator.
#[derive(Parser)]
#[command(name = "terrasim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that builds a simulation.
#[derive(clap::Args)]
struct SimArgs {
    /// JSON configuration file (missing fields take their defaults).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in preset used when no configuration file is given.
    #[arg(long, default_value = "default")]
    preset: Preset,

    /// Random seed for reproducible runs.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Grid side length override.
    #[arg(long)]
    size: Option<usize>,

    /// Step budget override.
    #[arg(long)]
    steps: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate terrain and run it to completion.
    Simulate {
        #[command(flatten)]
        sim: SimArgs,

        /// Pace steps on the wall clock instead of virtual time.
        #[arg(long)]
        realtime: bool,

        /// Step interval override in milliseconds.
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Output directory for PNG exports; nothing is written without it.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Base name for output files.
        #[arg(short, long, default_value = "terrain")]
        name: String,

        /// Print the final grid summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run a simulation and print one tile as JSON.
    Inspect {
        #[command(flatten)]
        sim: SimArgs,

        /// Tile column.
        #[arg(short, long)]
        x: usize,

        /// Tile row.
        #[arg(short, long)]
        y: usize,
    },

    /// Print the effective configuration as JSON.
    Info {
        #[command(flatten)]
        sim: SimArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// 50x50 grid.
    Default,
    /// 100x100 grid with hills scaled to match.
    Large,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            sim,
            realtime,
            interval_ms,
            output,
            name,
            json,
        } => run_simulate(&sim, realtime, interval_ms, output.as_deref(), &name, json),
        Commands::Inspect { sim, x, y } => run_inspect(&sim, x, y),
        Commands::Info { sim } => run_info(&sim),
    }
}

fn load_config(args: &SimArgs) -> Result<SimConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => SimConfig::from_json_file(path)?,
        None => match args.preset {
            Preset::Default => SimConfig::default(),
            Preset::Large => SimConfig::large(),
        },
    };
    if let Some(size) = args.size {
        config.grid_size = size;
    }
    if let Some(steps) = args.steps {
        config.scheduler.max_steps = steps;
    }
    config.validate()?;
    Ok(config)
}

fn build_simulation(args: &SimArgs, config: SimConfig, now_ms: u64) -> Simulation {
    let result = match args.seed {
        Some(seed) => Simulation::seeded(config, seed, now_ms),
        None => Simulation::from_entropy(config, now_ms),
    };
    match result {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error during generation: {}", e);
            std::process::exit(1);
        }
    }
}

fn config_or_exit(args: &SimArgs) -> SimConfig {
    match load_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_simulate(args: &SimArgs, realtime: bool, interval_ms: Option<u64>, output: Option<&Path>, name: &str, json: bool) {
    let mut config = config_or_exit(args);
    if let Some(interval) = interval_ms {
        config.scheduler.step_interval_ms = interval;
    }

    println!("Simulating terrain:");
    println!("  Grid: {}x{}", config.grid_size, config.grid_size);
    println!("  Steps: {}", config.scheduler.max_steps);
    println!("  Seed: {}", args.seed.map_or_else(|| "random".to_string(), |s| s.to_string()));
    println!(
        "  Pacing: {}",
        if realtime {
            format!("wall clock, {} ms per step", config.scheduler.step_interval_ms)
        } else {
            "virtual".to_string()
        }
    );
    println!();

    let start = Instant::now();
    let clock = SystemClock::new();
    let mut sim = build_simulation(args, config, clock.now_ms());

    if realtime {
        let poll = Duration::from_millis((sim.state().step_interval_ms / 4).max(1));
        loop {
            match sim.tick(clock.now_ms()) {
                TickOutcome::Finished { .. } => break,
                TickOutcome::Stepped { step, intensity } => {
                    println!("  step {:>3}  intensity {:.2}", step, intensity);
                }
                TickOutcome::Idle => std::thread::sleep(poll),
            }
        }
    } else {
        sim.run_to_completion();
    }

    let elapsed = start.elapsed();
    let (lo, hi) = sim.heightfield().height_range();
    let summary = sim.tiles().summary();

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error serializing summary: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("Finished {} steps in {:.2?}", sim.state().step, elapsed);
        println!("  Raw height range: {:.2} .. {:.2}", lo, hi);
        println!("  Elevation range: {} .. {}", summary.min_elevation, summary.max_elevation);
        println!("  Buildable tiles: {} / {}", summary.buildable, summary.tiles);
        println!("  River tiles: {}", summary.river_cells);
        println!("  Soils:");
        for (soil, count) in &summary.soils {
            println!("    {:<10} {}", soil, count);
        }
        println!("  Bedrock:");
        for (rock, count) in &summary.bedrock {
            println!("    {:<10} {}", rock, count);
        }
        println!("  Resources:");
        for (kind, count) in &summary.resources {
            println!("    {:<16} {}", kind, count);
        }
    }

    if let Some(dir) = output {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error creating output directory: {}", e);
            std::process::exit(1);
        }
        let height_path = dir.join(format!("{}_height.png", name));
        let options = PngExportOptions::auto_range(sim.heightfield());
        if let Err(e) = export_heightfield_png(sim.heightfield(), &height_path, &options) {
            eprintln!("Error exporting heightfield: {}", e);
            std::process::exit(1);
        }
        let geology_path = dir.join(format!("{}_geology.png", name));
        if let Err(e) = export_geology_map_png(sim.tiles(), &geology_path, &GeologyMapOptions::default()) {
            eprintln!("Error exporting geology map: {}", e);
            std::process::exit(1);
        }
        println!();
        println!("Wrote {}", height_path.display());
        println!("Wrote {}", geology_path.display());
    }
}

fn run_inspect(args: &SimArgs, x: usize, y: usize) {
    let config = config_or_exit(args);
    let mut sim = build_simulation(args, config, 0);
    sim.run_to_completion();

    let Some(tile) = sim.tiles().try_get(x, y) else {
        eprintln!("Error: ({}, {}) is outside the {}x{} grid", x, y, sim.tiles().size(), sim.tiles().size());
        std::process::exit(1);
    };
    match serde_json::to_string_pretty(tile) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error serializing tile: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_info(args: &SimArgs) {
    let config = config_or_exit(args);
    let cells = config.grid_size * config.grid_size;
    let drops = config.erosion.drops_for(config.grid_size);

    println!("Terrain configuration:");
    println!("  Grid: {}x{} ({} cells)", config.grid_size, config.grid_size, cells);
    println!("  Steps: {} every {} ms", config.scheduler.max_steps, config.scheduler.step_interval_ms);
    println!("  Hills: {}", config.uplift.hills.len());
    println!("  Drops per step: {}", drops);
    println!("  Thermal mode: {:?}", config.erosion.thermal_mode);
    println!();
    match serde_json::to_string_pretty(&config) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error serializing configuration: {}", e);
            std::process::exit(1);
        }
    }
}
