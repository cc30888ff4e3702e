//! Run projections for a batch of portfolio requests
//!
//! Reads a JSON array of portfolio requests, projects them in parallel and
//! writes one CSV row per portfolio per year.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use growth_projection::service::PortfolioRequest;
use growth_projection::{Calculator, PortfolioReport, RunConfig};
use log::{error, info};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Project a batch of portfolio requests")]
struct Args {
    /// JSON file holding an array of portfolio requests
    input: PathBuf,

    /// JSON run configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output CSV (overrides the configuration)
    #[arg(long)]
    output: Option<PathBuf>,
}

/// One year of one portfolio in the output table
#[derive(Debug, Serialize)]
struct YearRow {
    portfolio: usize,
    year: usize,
    value: f64,
    roi: f64,
}

/// Aggregated year across every successful portfolio
#[derive(Debug, Clone, Default)]
struct AggregatedYear {
    total_value: f64,
    portfolios: usize,
}

#[derive(Debug, Serialize)]
struct BatchSummary {
    generated_at: DateTime<Utc>,
    requests: usize,
    projected: usize,
    failed: usize,
    output: PathBuf,
    elapsed_ms: u128,
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    let args = Args::parse();
    let config = RunConfig::load_or_default(args.config.as_deref())
        .context("Failed to load run configuration")?;
    let output_path = args.output.clone().unwrap_or_else(|| config.output_path.clone());

    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let requests: Vec<PortfolioRequest> = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;
    info!("Loaded {} portfolio requests", requests.len());

    let calculator = Calculator::new(config.catalog().context("Failed to load asset catalog")?);

    // Independent projections; order is preserved by collect
    let results: Vec<Option<PortfolioReport>> = requests
        .par_iter()
        .enumerate()
        .map(|(idx, request)| match calculator.project_portfolio(request) {
            Ok(report) => Some(report),
            Err(e) => {
                error!("Portfolio {} failed: {}", idx, e);
                None
            }
        })
        .collect();

    let projected = results.iter().filter(|r| r.is_some()).count();
    info!("Projected {} portfolios in {:?}", projected, start.elapsed());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let mut aggregated: Vec<AggregatedYear> = Vec::new();

    for (idx, report) in results.iter().enumerate() {
        let Some(report) = report else { continue };
        for (year, &value) in report.yearly_values.values().iter().enumerate() {
            writer.serialize(YearRow { portfolio: idx, year, value, roi: report.roi })?;

            if aggregated.len() <= year {
                aggregated.resize(year + 1, AggregatedYear::default());
            }
            aggregated[year].total_value += value;
            aggregated[year].portfolios += 1;
        }
    }
    writer.flush()?;
    info!("Output written to {}", output_path.display());

    println!("Batch Summary:");
    println!("{:<6} {:>12} {:>18}", "Year", "Portfolios", "Total Value");
    for (year, row) in aggregated.iter().enumerate() {
        println!("{:<6} {:>12} {:>18.2}", year, row.portfolios, row.total_value);
    }

    let summary = BatchSummary {
        generated_at: Utc::now(),
        requests: requests.len(),
        projected,
        failed: requests.len() - projected,
        output: output_path,
        elapsed_ms: start.elapsed().as_millis(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
