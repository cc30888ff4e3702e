//! Figures derived from a portfolio projection for reporting
//!
//! Allocation and contribution accounting are computed from the items
//! themselves; the aggregated series only supplies the ending value.

use super::{build_portfolio_series, PortfolioItem};
use crate::error::Result;
use crate::projection::{round_to, total_invested, ValueSeries, CURRENCY_DECIMALS, ROI_DECIMALS};
use serde::Serialize;
use std::collections::BTreeMap;

/// Share of starting capital per item, in percent (rounded to 2 decimals)
///
/// Every item gets 0 when the portfolio has no starting capital. Items that
/// share a name collapse to the last one.
pub fn allocation(items: &[PortfolioItem]) -> BTreeMap<String, f64> {
    let invested: f64 = items.iter().map(|item| item.amount).sum();
    items
        .iter()
        .map(|item| {
            let percent = if invested != 0.0 {
                item.amount / invested * 100.0
            } else {
                0.0
            };
            (item.name.clone(), round_to(percent, CURRENCY_DECIMALS))
        })
        .collect()
}

/// Capital contributed across the portfolio
///
/// Each item is counted over its own horizon, not the longest one, even
/// though the aggregated total holds short items flat past their horizon.
pub fn total_contributions(items: &[PortfolioItem]) -> f64 {
    items
        .iter()
        .map(|item| total_invested(item.amount, item.years(), item.contributions))
        .sum()
}

/// Fractional ROI of an aggregated total against contributed capital
pub fn portfolio_roi(total: &ValueSeries, contributions: f64) -> f64 {
    match total.terminal() {
        Some(ending) if contributions != 0.0 => {
            round_to((ending - contributions) / contributions, ROI_DECIMALS)
        }
        _ => 0.0,
    }
}

/// Portfolio projection as handed back to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioReport {
    pub yearly_values: ValueSeries,
    pub roi: f64,
    pub allocation: BTreeMap<String, f64>,
    pub per_asset_series: BTreeMap<String, ValueSeries>,
}

impl PortfolioReport {
    pub fn from_items(items: &[PortfolioItem]) -> Result<Self> {
        let (total, per_item) = build_portfolio_series(items)?.into_parts();
        let roi = portfolio_roi(&total, total_contributions(items));

        let per_asset_series = items
            .iter()
            .map(|item| item.name.clone())
            .zip(per_item)
            .collect();

        Ok(Self {
            yearly_values: total,
            roi,
            allocation: allocation(items),
            per_asset_series,
        })
    }
}
