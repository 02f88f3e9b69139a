//! Sensor Dashboard - Main Entry Point

use anyhow::Context;
use clap::Parser;
use dashboard::{init_logging, load_config, DashboardSession, ThresholdOverrides};
use sensor_series::{AnalysisOutcome, SensorSeries};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Evaluate sensor series against alert thresholds")]
struct Args {
    /// JSON document with `temperature`, `strain` and `timestamps` arrays
    #[arg(long)]
    input: PathBuf,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output of the analysis runner to attach to the report
    #[arg(long)]
    analysis: Option<PathBuf>,

    #[command(flatten)]
    overrides: ThresholdOverrides,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.logging)?;

    info!("=== Sensor Dashboard v{} ===", env!("CARGO_PKG_VERSION"));

    let session = DashboardSession::new(&config);
    session.apply_overrides(&args.overrides)?;

    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let series: SensorSeries = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid series document {}", args.input.display()))?;

    let mut report = session.report(&series)?;

    if let Some(path) = &args.analysis {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let outcome = AnalysisOutcome::from_json(&raw)
            .with_context(|| format!("Invalid analysis output {}", path.display()))?;
        report = report.with_analysis(outcome);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
