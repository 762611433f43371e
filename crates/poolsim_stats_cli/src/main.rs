//! miner-info CLI: aggregate statistics for one miner from a results file.

use clap::Parser;
use poolsim_stats::{aggregate_miner, load_results};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "miner-info")]
#[command(about = "Aggregate statistics for a single miner from simulation results")]
struct Cli {
    /// Results document: plain JSON, or gzipped when the path ends in `.gz`.
    results_file: PathBuf,
    /// Miner address, matched by exact equality.
    address: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let document = load_results(&cli.results_file)?;
    info!(
        miners = document.miners.len(),
        pools = document.pools.len(),
        "results document loaded"
    );
    let stats = aggregate_miner(&document, &cli.address)?;
    Ok(serde_json::to_string(&stats)?)
}
