//! Calculator service: turns requests into core inputs and shapes results
//!
//! Request handling decides where a portfolio comes from; the projection core
//! only ever sees a normalized list of [`PortfolioItem`]s.

mod payload;

pub use payload::{
    AssetRequest, InsightReport, PortfolioEntry, PortfolioRequest, Projection, RateRequest,
};

use crate::assets::AssetCatalog;
use crate::error::{ProjectionError, Result};
use crate::portfolio::{
    build_portfolio_series, AssetInsight, Holding, HoldingTotals, PortfolioInsight,
    PortfolioItem, PortfolioReport,
};
use crate::projection::{calculate_roi, compound_growth, ContributionSchedule, ReturnSeries};
use log::{debug, warn};

pub struct Calculator {
    catalog: AssetCatalog,
}

impl Calculator {
    pub fn new(catalog: AssetCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    /// Project a single catalog asset over its full return history
    pub fn project_asset(&self, request: &AssetRequest) -> Result<Projection> {
        let asset = self.catalog.find(&request.asset)?;
        let initial = if request.initial_amount != 0.0 {
            request.initial_amount
        } else {
            asset.default_amount
        };
        let contributions =
            ContributionSchedule::new(request.monthly_contribution, request.yearly_contribution)?;

        debug!("Projecting asset '{}' from {:.2}", asset.name, initial);
        Ok(Projection {
            yearly_values: compound_growth(initial, &asset.historical_returns, contributions)?,
            roi: calculate_roi(initial, &asset.historical_returns, contributions)?,
        })
    }

    /// Project at one constant rate; the rate arrives in percent
    pub fn project_rate(request: &RateRequest) -> Result<Projection> {
        let returns = ReturnSeries::constant_percent(request.yearly_rate, request.years as usize)?;
        let contributions = ContributionSchedule::default();

        Ok(Projection {
            yearly_values: compound_growth(request.initial_amount, &returns, contributions)?,
            roi: calculate_roi(request.initial_amount, &returns, contributions)?,
        })
    }

    /// Resolve ad-hoc entries against the catalog, skipping unknown assets
    pub fn entry_items(&self, entries: &[PortfolioEntry]) -> Vec<PortfolioItem> {
        entries
            .iter()
            .filter_map(|entry| {
                let Some(asset) = self.catalog.get(&entry.asset) else {
                    warn!("Skipping unknown asset '{}' in portfolio request", entry.asset);
                    return None;
                };
                let contributions = ContributionSchedule {
                    monthly: entry.monthly_contribution,
                    yearly: entry.yearly_contribution,
                };
                Some(
                    PortfolioItem::new(
                        asset.name.clone(),
                        entry.amount.unwrap_or(asset.default_amount),
                        asset.historical_returns.clone(),
                    )
                    .with_contributions(contributions),
                )
            })
            .collect()
    }

    /// Resolve saved holdings; every holding must reference a known asset
    pub fn holding_items(&self, holdings: &[Holding]) -> Result<Vec<PortfolioItem>> {
        holdings
            .iter()
            .map(|holding| {
                let asset = self.catalog.find(&holding.asset)?;
                Ok(PortfolioItem::new(
                    asset.name.clone(),
                    holding.invested_amount,
                    asset.historical_returns.clone(),
                )
                .with_contributions(holding.contributions()))
            })
            .collect()
    }

    pub fn portfolio_items(&self, request: &PortfolioRequest) -> Result<Vec<PortfolioItem>> {
        match &request.holdings {
            Some(holdings) => self.holding_items(holdings),
            None => Ok(self.entry_items(&request.portfolio)),
        }
    }

    pub fn project_portfolio(&self, request: &PortfolioRequest) -> Result<PortfolioReport> {
        let items = self.portfolio_items(request)?;
        PortfolioReport::from_items(&items)
    }

    /// Per-asset and portfolio insight figures for a non-empty holdings list
    pub fn insights(&self, holdings: &[Holding]) -> Result<InsightReport> {
        if holdings.is_empty() {
            return Err(ProjectionError::invalid_input(
                "at least one holding is required for insights",
            ));
        }

        let items = self.holding_items(holdings)?;
        let series = build_portfolio_series(&items)?;
        let assets = items
            .iter()
            .zip(&series.per_item)
            .map(|(item, values)| AssetInsight::new(item, values))
            .collect();

        Ok(InsightReport {
            totals: HoldingTotals::from_holdings(holdings),
            assets,
            portfolio: PortfolioInsight::new(&items, &series),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn calculator() -> Calculator {
        Calculator::new(AssetCatalog::seeded().unwrap())
    }

    #[test]
    fn test_project_asset_uses_default_amount() {
        let calc = calculator();
        let request = AssetRequest {
            asset: "Real Estate Europe".to_string(),
            initial_amount: 0.0,
            monthly_contribution: 0.0,
            yearly_contribution: 0.0,
        };
        let projection = calc.project_asset(&request).unwrap();

        assert_eq!(projection.yearly_values.len(), 6);
        assert_eq!(projection.yearly_values.initial(), Some(1000.0));
        assert_eq!(projection.yearly_values.values()[1], 1060.0);
        let expected = 1000.0 * 1.06 * 1.05 * 1.04 * 1.03 * 1.05;
        assert_relative_eq!(projection.yearly_values.terminal().unwrap(), expected, epsilon = 0.01);
    }

    #[test]
    fn test_project_asset_unknown() {
        let request: AssetRequest = serde_json::from_str(r#"{"asset": "Dogecoin"}"#).unwrap();
        assert!(matches!(
            calculator().project_asset(&request),
            Err(ProjectionError::AssetNotFound { .. })
        ));
    }

    #[test]
    fn test_project_rate_from_percent() {
        let request: RateRequest =
            serde_json::from_str(r#"{"initial_amount": 1000, "yearly_rate": 10, "years": 2}"#).unwrap();
        let projection = Calculator::project_rate(&request).unwrap();
        assert_eq!(projection.yearly_values.values(), &[1000.0, 1100.0, 1210.0]);
        assert_eq!(projection.roi, 0.21);

        let default_years: RateRequest = serde_json::from_str(r#"{"initial_amount": 100}"#).unwrap();
        assert_eq!(default_years.years, 1);
    }

    #[test]
    fn test_project_rate_total_loss_rejected() {
        let request = RateRequest { initial_amount: 100.0, yearly_rate: -100.0, years: 3 };
        assert!(Calculator::project_rate(&request).is_err());
    }

    #[test]
    fn test_project_rate_horizon_limit() {
        let request = RateRequest { initial_amount: 100.0, yearly_rate: 5.0, years: 4_000_000_000 };
        assert!(matches!(
            Calculator::project_rate(&request),
            Err(ProjectionError::InvalidInput { .. })
        ));

        let request = RateRequest { initial_amount: 100.0, yearly_rate: 5.0, years: 500 };
        assert_eq!(Calculator::project_rate(&request).unwrap().yearly_values.len(), 501);
    }

    #[test]
    fn test_entries_skip_unknown_assets() {
        let request: PortfolioRequest = serde_json::from_str(
            r#"{"portfolio": [
                {"asset": "Bitcoin", "amount": 500},
                {"asset": "Dogecoin", "amount": 500},
                {"asset": "Bond Governativi EU", "monthly_contribution": 10}
            ]}"#,
        )
        .unwrap();
        let calc = calculator();
        let items = calc.portfolio_items(&request).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].amount, 500.0);
        assert_eq!(items[1].amount, 1000.0);
        assert_eq!(items[1].contributions.monthly, 10.0);

        let report = calc.project_portfolio(&request).unwrap();
        assert_eq!(report.allocation["Bitcoin"], 33.33);
        assert_eq!(report.allocation["Bond Governativi EU"], 66.67);
        assert!(!report.per_asset_series.contains_key("Dogecoin"));
    }

    #[test]
    fn test_holdings_take_precedence() {
        let request = PortfolioRequest {
            holdings: Some(vec![Holding::new("ETF S&P 500", 2000.0)]),
            portfolio: vec![PortfolioEntry {
                asset: "Bitcoin".to_string(),
                amount: Some(1.0),
                monthly_contribution: 0.0,
                yearly_contribution: 0.0,
            }],
        };
        let report = calculator().project_portfolio(&request).unwrap();
        assert_eq!(report.per_asset_series.len(), 1);
        assert_eq!(report.allocation["ETF S&P 500"], 100.0);
    }

    #[test]
    fn test_unknown_holding_is_error() {
        let holdings = vec![Holding::new("Dogecoin", 10.0)];
        assert!(calculator().holding_items(&holdings).is_err());
    }

    #[test]
    fn test_empty_portfolio_request() {
        let report = calculator().project_portfolio(&PortfolioRequest::default()).unwrap();
        assert!(report.yearly_values.is_empty());
        assert_eq!(report.roi, 0.0);
    }

    #[test]
    fn test_insights() {
        let holdings = vec![
            Holding {
                monthly_contribution: 100.0,
                ..Holding::new("ETF S&P 500", 1000.0)
            },
            Holding::new("Bitcoin", 1000.0),
        ];
        let report = calculator().insights(&holdings).unwrap();

        assert_eq!(report.totals.invested, 2000.0);
        assert_eq!(report.assets.len(), 2);
        assert_eq!(report.assets[0].total_contributions, 1000.0 + 100.0 * 12.0 * 5.0);
        assert_eq!(report.assets[1].best_year, Some(0.6));
        assert_eq!(report.portfolio.horizon, 5);
        assert_eq!(report.portfolio.total_contributions, 8000.0);

        assert!(calculator().insights(&[]).is_err());
    }
}
