//! Run configuration for the command-line tools
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults below.

use crate::assets::{load_catalog, AssetCatalog, DEFAULT_ASSET_AMOUNT};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Asset catalog CSV; the built-in seeded catalog is used when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Starting capital for catalog rows without a `default_amount`
    #[serde(default = "default_asset_amount")]
    pub default_asset_amount: f64,

    /// Where the batch runner writes its per-year CSV
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_asset_amount() -> f64 { DEFAULT_ASSET_AMOUNT }
fn default_output_path() -> PathBuf { PathBuf::from("portfolio_projection_output.csv") }

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_asset_amount: DEFAULT_ASSET_AMOUNT,
            output_path: default_output_path(),
        }
    }
}

impl RunConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn catalog(&self) -> Result<AssetCatalog> {
        match &self.catalog_path {
            Some(path) => load_catalog(path, self.default_asset_amount),
            None => AssetCatalog::seeded(),
        }
    }
}
