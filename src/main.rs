use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use emberfield::cli::commands;
use emberfield::config::simulation::SimulationConfig;

#[derive(Parser)]
#[command(name = "emberfield")]
#[command(about = "A tile-grid fire hazard simulation engine with probabilistic spread rules")]
#[command(version)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a world from procedural parameters and print its summary
    Generate {
        /// Path to world generation config file
        #[arg(short, long, default_value = "worldgen.toml")]
        worldgen: String,
    },

    /// Run the fire simulation tick loop
    Run {
        /// Stop after this many ticks (overrides max_ticks; 0 = no limit)
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Print per-report statistics as JSON lines
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { worldgen } => {
            if let Err(e) = commands::generate(&worldgen) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }

        Commands::Run { ticks, json } => {
            let config = match SimulationConfig::from_file(Path::new(&cli.config)) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error loading config: {}", e);
                    std::process::exit(1);
                }
            };
            init_logging(&config.log_level);

            if let Err(e) = commands::run_simulation(&config, ticks, json) {
                eprintln!("Simulation error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
