use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vehicle_bench")]
#[command(about = "A micro-benchmark comparing static and dynamic dispatch over a vehicle workload")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run both dispatch scenarios and print a comparison summary
    Compare {
        /// Number of measured trials per scenario
        #[arg(short, long)]
        iterations: Option<u64>,

        /// Configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file path for the JSON report
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Suppress per-counter console output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Write a default configuration file
    InitConfig {
        /// Destination path for the configuration file
        #[arg(default_value = "bench_config.json")]
        output: PathBuf,
    },
}
