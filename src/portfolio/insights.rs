//! Headline figures for single assets and whole portfolios

use super::{PortfolioItem, PortfolioSeries};
use super::summary::total_contributions;
use crate::projection::{total_invested, ValueSeries};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetInsight {
    pub name: String,
    pub years: usize,
    pub invested_amount: f64,
    pub monthly_contribution: f64,
    pub yearly_contribution: f64,
    /// Initial amount plus all contributions over the horizon
    pub total_contributions: f64,
    pub final_value: f64,
    /// Best annual rate in the return series (`None` for an empty horizon)
    pub best_year: Option<f64>,
    pub worst_year: Option<f64>,
}

impl AssetInsight {
    pub fn new(item: &PortfolioItem, series: &ValueSeries) -> Self {
        Self {
            name: item.name.clone(),
            years: item.years(),
            invested_amount: item.amount,
            monthly_contribution: item.contributions.monthly,
            yearly_contribution: item.contributions.yearly,
            total_contributions: total_invested(item.amount, item.years(), item.contributions),
            final_value: series.terminal().unwrap_or(item.amount),
            best_year: item.returns.best(),
            worst_year: item.returns.worst(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioInsight {
    pub total_contributions: f64,
    pub ending_value: f64,
    /// Years spanned by the aggregated total
    pub horizon: usize,
    /// Item with the highest terminal value (first one on ties)
    pub top_asset: Option<String>,
}

impl PortfolioInsight {
    pub fn new(items: &[PortfolioItem], series: &PortfolioSeries) -> Self {
        let mut top: Option<(usize, f64)> = None;
        for (idx, item_series) in series.per_item.iter().enumerate() {
            let Some(value) = item_series.terminal() else { continue };
            if top.map_or(true, |(_, best)| value > best) {
                top = Some((idx, value));
            }
        }

        Self {
            total_contributions: total_contributions(items),
            ending_value: series.total.terminal().unwrap_or(0.0),
            horizon: series.total.years(),
            top_asset: top.and_then(|(idx, _)| items.get(idx)).map(|item| item.name.clone()),
        }
    }
}
