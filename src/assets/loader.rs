//! Load the asset catalog from CSV
//!
//! Expected columns: `name`, `historical_returns`, `default_amount`.
//! `historical_returns` holds the stored JSON array text (e.g. `"[0.12, -0.03]"`);
//! it is decoded here, once, into a [`ReturnSeries`]. An empty cell is an
//! empty series and a missing `default_amount` falls back to the configured one.

use super::{Asset, AssetCatalog};
use crate::error::{ProjectionError, Result};
use crate::projection::{validate_amount, ReturnSeries};
use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Starting capital for assets that do not specify one
pub const DEFAULT_ASSET_AMOUNT: f64 = 1000.0;

#[derive(Debug, Deserialize)]
struct AssetRecord {
    name: String,
    #[serde(default)]
    historical_returns: String,
    #[serde(default)]
    default_amount: Option<f64>,
}

impl AssetRecord {
    fn into_asset(self, fallback_amount: f64) -> Result<Asset> {
        let blob = self.historical_returns.trim();
        let historical_returns: ReturnSeries = if blob.is_empty() {
            ReturnSeries::default()
        } else {
            serde_json::from_str(blob).map_err(|e| {
                ProjectionError::invalid_input(format!(
                    "historical returns for '{}' could not be decoded: {e}",
                    self.name
                ))
            })?
        };

        let default_amount = self.default_amount.unwrap_or(fallback_amount);
        validate_amount(&format!("default amount for '{}'", self.name), default_amount)?;

        Ok(Asset::new(self.name, historical_returns, default_amount))
    }
}

/// Load a catalog from a CSV file
pub fn load_catalog<P: AsRef<Path>>(path: P, fallback_amount: f64) -> Result<AssetCatalog> {
    let file = File::open(path.as_ref())?;
    let catalog = load_catalog_from_reader(file, fallback_amount)?;
    info!(
        "Loaded {} assets from {}",
        catalog.len(),
        path.as_ref().display()
    );
    Ok(catalog)
}

/// Load a catalog from any CSV reader
pub fn load_catalog_from_reader<R: Read>(reader: R, fallback_amount: f64) -> Result<AssetCatalog> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut assets = Vec::new();
    for result in rdr.deserialize() {
        let record: AssetRecord = result?;
        assets.push(record.into_asset(fallback_amount)?);
    }

    AssetCatalog::new(assets)
}
