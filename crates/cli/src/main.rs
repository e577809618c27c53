mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};

use commands::params::ParamArgs;

#[derive(Parser)]
#[command(name = "outbreak", about = "Monte Carlo outbreak detection simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Monte Carlo batch and report detection-day statistics
    Run {
        #[command(flatten)]
        params: ParamArgs,
        /// Abort if a single run goes past this many days
        #[arg(long)]
        max_days: Option<u32>,
        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
        /// Also print the per-day average series
        #[arg(long)]
        table: bool,
    },
    /// Run one batch per transmission rate in parallel
    Sweep {
        #[command(flatten)]
        params: ParamArgs,
        /// Comma-separated transmission rates
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        rates: Vec<f64>,
        /// Number of parallel workers (0 = auto)
        #[arg(long, default_value = "0")]
        workers: usize,
        /// Print the final snapshots as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the default parameters as JSON
    Defaults,
    /// Measure run throughput for the default scenario
    Profile {
        /// Number of runs to time
        #[arg(long, default_value = "1000")]
        runs: u32,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            params,
            max_days,
            json,
            table,
        } => commands::run::run(&params, max_days, json, table),
        Commands::Sweep {
            params,
            rates,
            workers,
            json,
        } => commands::sweep::run(&params, &rates, workers, json),
        Commands::Defaults => commands::defaults::run(),
        Commands::Profile { runs } => commands::profile::run(runs),
    }
}
