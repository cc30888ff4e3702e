//! Command-line calculator for asset and portfolio projections
//!
//! Prints JSON payloads, or a year-by-year table with `--table`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use growth_projection::portfolio::Holding;
use growth_projection::service::{AssetRequest, PortfolioRequest, RateRequest};
use growth_projection::{Calculator, RunConfig, ValueSeries};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "growth", about = "Project compounding growth of assets and portfolios")]
struct Cli {
    /// JSON run configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Asset catalog CSV (overrides the configuration)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print a year-by-year table instead of JSON
    #[arg(long, global = true)]
    table: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a single catalog asset
    Asset {
        name: String,
        /// Starting capital (0 uses the asset's default amount)
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long, default_value_t = 0.0)]
        monthly: f64,
        #[arg(long, default_value_t = 0.0)]
        yearly: f64,
    },
    /// Project at a constant yearly rate given in percent
    Rate {
        #[arg(long)]
        initial: f64,
        /// Yearly rate in percent, e.g. 7.5
        #[arg(long, allow_hyphen_values = true)]
        rate: f64,
        #[arg(long, default_value_t = 1)]
        years: u32,
    },
    /// Project a portfolio request read from a JSON file
    Portfolio { file: PathBuf },
    /// Insight figures for saved holdings read from a JSON file
    Insights { file: PathBuf },
    /// List the assets in the catalog
    Catalog,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = RunConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load run configuration")?;
    if cli.catalog.is_some() {
        config.catalog_path = cli.catalog.clone();
    }
    let calculator = Calculator::new(config.catalog().context("Failed to load asset catalog")?);

    match cli.command {
        Command::Asset { name, initial, monthly, yearly } => {
            let projection = calculator.project_asset(&AssetRequest {
                asset: name,
                initial_amount: initial,
                monthly_contribution: monthly,
                yearly_contribution: yearly,
            })?;
            if cli.table {
                print_series(&projection.yearly_values);
                println!("ROI: {:.2}%", projection.roi * 100.0);
            } else {
                print_json(&projection)?;
            }
        }
        Command::Rate { initial, rate, years } => {
            let projection = Calculator::project_rate(&RateRequest {
                initial_amount: initial,
                yearly_rate: rate,
                years,
            })?;
            if cli.table {
                print_series(&projection.yearly_values);
                println!("ROI: {:.2}%", projection.roi * 100.0);
            } else {
                print_json(&projection)?;
            }
        }
        Command::Portfolio { file } => {
            let request: PortfolioRequest = read_json(&file)?;
            let report = calculator.project_portfolio(&request)?;
            if cli.table {
                print_series(&report.yearly_values);
                println!("ROI: {:.2}%", report.roi * 100.0);
                println!("\nAllocation:");
                for (name, percent) in &report.allocation {
                    println!("  {:<28} {:>7.2}%", name, percent);
                }
            } else {
                print_json(&report)?;
            }
        }
        Command::Insights { file } => {
            let holdings: Vec<Holding> = read_json(&file)?;
            let report = calculator.insights(&holdings)?;
            print_json(&report)?;
        }
        Command::Catalog => {
            println!("{:<28} {:<8} {:>12} {:>8} {:>8}", "Asset", "Years", "Default", "Best", "Worst");
            for asset in calculator.catalog().iter() {
                let returns = &asset.historical_returns;
                println!(
                    "{:<28} {:<8} {:>12.2} {:>7.1}% {:>7.1}%",
                    asset.name,
                    returns.len(),
                    asset.default_amount,
                    returns.best().unwrap_or(0.0) * 100.0,
                    returns.worst().unwrap_or(0.0) * 100.0,
                );
            }
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_series(series: &ValueSeries) {
    println!("{:<6} {:>16}", "Year", "Value");
    for (year, value) in series.values().iter().enumerate() {
        println!("{:<6} {:>16.2}", year, value);
    }
}
