//! CLI for computing pairwise distances in metabolic niche space.

mod commands;
mod data;
mod metrics;
mod utils;

use clap::Parser;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The stem of the log file, written to `./logs/<log-name>.log`.
    #[arg(long, default_value = "nichespace")]
    log_name: String,

    /// Whether to log debug messages.
    #[arg(short('v'), long, default_value_t = false)]
    verbose: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = utils::configure_logger(&args.log_name, args.verbose)?;
    println!("Logging to {}", log_path.display());
    ftlog::info!("Args: {args:?}");

    let result = match &args.command {
        Commands::Distance(distance_args) => commands::distance::run(distance_args),
        Commands::Neighbors(neighbors_args) => commands::neighbors::run(neighbors_args),
    };

    if let Err(e) = &result {
        ftlog::error!("{e}");
    }
    result
}
