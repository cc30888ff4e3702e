//! Request and response payloads for the calculator

use crate::portfolio::{AssetInsight, Holding, HoldingTotals, PortfolioInsight};
use crate::projection::ValueSeries;
use serde::{Deserialize, Serialize};

/// Project one catalog asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRequest {
    pub asset: String,

    /// Starting capital; 0 means "use the asset's default amount"
    #[serde(default)]
    pub initial_amount: f64,

    #[serde(default)]
    pub monthly_contribution: f64,

    #[serde(default)]
    pub yearly_contribution: f64,
}

/// Quick projection at one constant yearly rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRequest {
    #[serde(default)]
    pub initial_amount: f64,

    /// Yearly rate in percent (7.5 = 7.5%)
    #[serde(default)]
    pub yearly_rate: f64,

    #[serde(default = "default_years")]
    pub years: u32,
}

fn default_years() -> u32 { 1 }

/// `yearly_values` plus ROI for a single projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub yearly_values: ValueSeries,
    pub roi: f64,
}

/// One ad-hoc position in a portfolio request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub asset: String,

    /// Starting capital; the asset's default amount when absent
    #[serde(default)]
    pub amount: Option<f64>,

    #[serde(default)]
    pub monthly_contribution: f64,

    #[serde(default)]
    pub yearly_contribution: f64,
}

/// Portfolio to project, either saved holdings or an ad-hoc list
///
/// Holdings take precedence when both are present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioRequest {
    #[serde(default)]
    pub holdings: Option<Vec<Holding>>,

    #[serde(default)]
    pub portfolio: Vec<PortfolioEntry>,
}

/// Per-asset and whole-portfolio figures for a holdings list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightReport {
    pub totals: HoldingTotals,
    pub assets: Vec<AssetInsight>,
    pub portfolio: PortfolioInsight,
}
