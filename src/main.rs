//! Bowlwatch - command line runner
//!
//! Runs a water and feeding simulation and prints the report as JSON or a
//! short text summary. Reads an optional TOML config; flags override it.

use std::path::PathBuf;

use bowlwatch::core::config::load_config;
use bowlwatch::core::error::Result;
use bowlwatch::{simulate, FoodBowl, SimulationConfig};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Water bowl and feeding simulator
#[derive(Parser, Debug)]
#[command(name = "bowlwatch")]
#[command(about = "Simulate a pet's water bowl and meals, then report daily rollups and alerts")]
struct Args {
    /// First simulated day (YYYY-MM-DD)
    #[arg(long, default_value = "2024-12-13")]
    start: NaiveDate,

    /// Number of days to simulate
    #[arg(long, default_value_t = 7)]
    days: u32,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Low-water alert threshold in percent
    #[arg(long)]
    threshold: Option<f64>,

    /// TOML config file (see data/default_config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Food in the bowl before the run, in grams
    #[arg(long, default_value_t = 0.0)]
    bowl: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bowlwatch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            load_config(path)?
        }
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(threshold) = args.threshold {
        config.alert_threshold = threshold;
    }

    let mut bowl = FoodBowl::new(args.bowl);
    let report = simulate(args.start, args.days, &config, &mut bowl)?;

    match args.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => println!("{}", report.summary()),
    }

    Ok(())
}
