//! Vector Arena CLI
//!
//! Usage:
//!   vector-arena battle --warriors 16 --rounds 4 --seed 42
//!   vector-arena store --query 2,3,4

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vector_arena::simulation::{self, BattleSimulation};
use vector_arena::Config;

#[derive(Parser)]
#[command(name = "vector-arena")]
#[command(about = "Vector similarity store and tournament evolution arena")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run a tournament over randomly generated warriors
    Battle {
        /// Number of warriors
        #[arg(long)]
        warriors: Option<usize>,

        /// Tournament rounds
        #[arg(long)]
        rounds: Option<usize>,

        /// Vector dimensions
        #[arg(long)]
        dimensions: Option<usize>,

        /// Base seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Battle worker threads
        #[arg(long)]
        workers: Option<usize>,
    },
    /// Query a small demo store for the nearest vector
    Store {
        /// Comma-separated query vector
        #[arg(long, value_delimiter = ',', default_value = "2,3,4", allow_negative_numbers = true)]
        query: Vec<f32>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Setup logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("vector_arena={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env()?;
    tracing::debug!("Loaded config: {:?}", config);

    match args.command {
        Command::Battle {
            warriors,
            rounds,
            dimensions,
            seed,
            workers,
        } => {
            if let Some(warriors) = warriors {
                config.simulation.warriors = warriors;
            }
            if let Some(rounds) = rounds {
                config.simulation.rounds = rounds;
            }
            if let Some(dimensions) = dimensions {
                config.simulation.dimensions = dimensions;
            }
            if seed.is_some() {
                config.arena.seed = seed;
            }
            if workers.is_some() {
                config.arena.worker_threads = workers;
            }

            let results = BattleSimulation::new(config.arena, config.simulation).run()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                results.print_summary();
            }
        }
        Command::Store { query } => {
            let results = simulation::run_store_demo(query)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                results.print_summary();
            }
        }
    }

    Ok(())
}
