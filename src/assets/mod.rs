//! Asset catalog: named assets with historical annual returns

pub mod loader;

pub use loader::{load_catalog, load_catalog_from_reader, DEFAULT_ASSET_AMOUNT};

use crate::error::{ProjectionError, Result};
use crate::projection::ReturnSeries;
use serde::{Deserialize, Serialize};

/// An investable asset and the return history used to project it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub historical_returns: ReturnSeries,
    /// Starting capital used when a request does not name one
    pub default_amount: f64,
}

impl Asset {
    pub fn new(name: impl Into<String>, historical_returns: ReturnSeries, default_amount: f64) -> Self {
        Self {
            name: name.into(),
            historical_returns,
            default_amount,
        }
    }
}

/// Lookup table of assets by name
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
}

impl AssetCatalog {
    /// Build from a list of assets; names must be unique and non-empty
    pub fn new(assets: Vec<Asset>) -> Result<Self> {
        for (idx, asset) in assets.iter().enumerate() {
            if asset.name.trim().is_empty() {
                return Err(ProjectionError::invalid_input(format!(
                    "asset #{} has an empty name",
                    idx + 1
                )));
            }
            if assets[..idx].iter().any(|a| a.name == asset.name) {
                return Err(ProjectionError::invalid_input(format!(
                    "duplicate asset name '{}'",
                    asset.name
                )));
            }
        }
        Ok(Self { assets })
    }

    /// Built-in catalog of four sample assets with five years of returns each
    pub fn seeded() -> Result<Self> {
        let seed = |name: &str, rates: [f64; 5]| -> Result<Asset> {
            Ok(Asset::new(name, ReturnSeries::new(rates.to_vec())?, DEFAULT_ASSET_AMOUNT))
        };

        Self::new(vec![
            seed("ETF S&P 500", [0.12, -0.03, 0.08, 0.10, 0.15])?,
            seed("Bond Governativi EU", [0.02, 0.015, 0.018, 0.01, 0.022])?,
            seed("Bitcoin", [0.50, -0.40, 0.30, 0.10, 0.60])?,
            seed("Real Estate Europe", [0.06, 0.05, 0.04, 0.03, 0.05])?,
        ])
    }

    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.name == name)
    }

    /// Like [`get`](Self::get) but a missing asset is an error
    pub fn find(&self, name: &str) -> Result<&Asset> {
        self.get(name).ok_or_else(|| ProjectionError::AssetNotFound {
            name: name.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
