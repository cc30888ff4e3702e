//! Portfolio item: one asset position with its own returns and contributions

use crate::error::{ProjectionError, Result};
use crate::projection::{validate_amount, ContributionSchedule, ReturnSeries};
use serde::{Deserialize, Serialize};

/// A single position fed to the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    /// Asset identifier, used to key per-asset output
    pub name: String,

    /// Starting capital
    pub amount: f64,

    /// Annual returns for this asset; its length is the item's horizon
    pub returns: ReturnSeries,

    #[serde(default)]
    pub contributions: ContributionSchedule,
}

impl PortfolioItem {
    pub fn new(name: impl Into<String>, amount: f64, returns: ReturnSeries) -> Self {
        Self {
            name: name.into(),
            amount,
            returns,
            contributions: ContributionSchedule::default(),
        }
    }

    pub fn with_contributions(mut self, contributions: ContributionSchedule) -> Self {
        self.contributions = contributions;
        self
    }

    /// Horizon in years
    pub fn years(&self) -> usize {
        self.returns.len()
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ProjectionError::invalid_input("portfolio item name must not be empty"));
        }
        validate_amount(&format!("amount for '{}'", self.name), self.amount)?;
        self.contributions.validate()
    }
}
