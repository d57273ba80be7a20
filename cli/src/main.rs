mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{hazards, merge, rank, simulate};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so data written to stdout stays clean.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Rank(args) => rank::run(&cli, args),
        Commands::Merge(args) => merge::run(&cli, args),
        Commands::Hazards(args) => hazards::run(&cli, args),
        Commands::Simulate(args) => simulate::run(&cli, args),
    }
}

fn main() -> std::process::ExitCode {
    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::ExitCode::FAILURE
        }
    }
}
