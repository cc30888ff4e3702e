//! Persisted user holdings and their bookkeeping figures

use crate::projection::{round_to, ContributionSchedule, CURRENCY_DECIMALS};
use serde::{Deserialize, Serialize};

/// A saved position in a user's portfolio, keyed by asset name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub asset: String,

    #[serde(default)]
    pub invested_amount: f64,

    /// Percent of the portfolio's invested capital; see [`recalculate_allocations`]
    #[serde(default)]
    pub allocation_percent: f64,

    #[serde(default)]
    pub monthly_contribution: f64,

    #[serde(default)]
    pub yearly_contribution: f64,
}

impl Holding {
    pub fn new(asset: impl Into<String>, invested_amount: f64) -> Self {
        Self {
            asset: asset.into(),
            invested_amount,
            allocation_percent: 0.0,
            monthly_contribution: 0.0,
            yearly_contribution: 0.0,
        }
    }

    pub fn contributions(&self) -> ContributionSchedule {
        ContributionSchedule {
            monthly: self.monthly_contribution,
            yearly: self.yearly_contribution,
        }
    }
}

/// Rewrite every holding's allocation from its share of invested capital
pub fn recalculate_allocations(holdings: &mut [Holding]) {
    let total: f64 = holdings.iter().map(|h| h.invested_amount).sum();
    for holding in holdings.iter_mut() {
        holding.allocation_percent = if total != 0.0 {
            round_to(holding.invested_amount / total * 100.0, CURRENCY_DECIMALS)
        } else {
            0.0
        };
    }
}

/// Sums shown alongside a holdings list
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HoldingTotals {
    pub invested: f64,
    pub monthly: f64,
    pub yearly: f64,
}

impl HoldingTotals {
    pub fn from_holdings(holdings: &[Holding]) -> Self {
        holdings.iter().fold(Self::default(), |acc, h| Self {
            invested: acc.invested + h.invested_amount,
            monthly: acc.monthly + h.monthly_contribution,
            yearly: acc.yearly + h.yearly_contribution,
        })
    }
}
