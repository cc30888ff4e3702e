//! Multi-asset aggregation of compounded series

use super::PortfolioItem;
use crate::error::Result;
use crate::projection::{compound_growth, round_to, ValueSeries, CURRENCY_DECIMALS};
use log::debug;
use serde::Serialize;

/// Portfolio total plus the per-item series it was summed from
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PortfolioSeries {
    pub total: ValueSeries,
    /// Same order as the input items
    pub per_item: Vec<ValueSeries>,
}

impl PortfolioSeries {
    pub fn is_empty(&self) -> bool {
        self.per_item.is_empty()
    }

    pub fn into_parts(self) -> (ValueSeries, Vec<ValueSeries>) {
        (self.total, self.per_item)
    }
}

/// Compound every item and sum the results year by year
///
/// Items with a shorter horizon are held at their terminal value for the
/// remaining years; they are never zero-padded or dropped from the total.
/// An empty item list yields an empty total and no per-item series.
pub fn build_portfolio_series(items: &[PortfolioItem]) -> Result<PortfolioSeries> {
    if items.is_empty() {
        return Ok(PortfolioSeries::default());
    }

    let mut per_item = Vec::with_capacity(items.len());
    let mut max_len = 0;
    for item in items {
        item.validate()?;
        let series = compound_growth(item.amount, &item.returns, item.contributions)?;
        max_len = max_len.max(series.len());
        per_item.push(series);
    }

    let total: Vec<f64> = (0..max_len)
        .map(|idx| {
            let sum: f64 = per_item
                .iter()
                .filter_map(|series| series.value_or_terminal(idx))
                .sum();
            round_to(sum, CURRENCY_DECIMALS)
        })
        .collect();

    debug!(
        "Aggregated {} items over {} year boundaries",
        items.len(),
        max_len
    );

    Ok(PortfolioSeries {
        total: ValueSeries::from_values(total),
        per_item,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{ContributionSchedule, ReturnSeries};
    use approx::assert_relative_eq;

    fn item(name: &str, amount: f64, rates: &[f64]) -> PortfolioItem {
        PortfolioItem::new(name, amount, ReturnSeries::new(rates.to_vec()).unwrap())
    }

    #[test]
    fn test_empty_portfolio() {
        let series = build_portfolio_series(&[]).unwrap();
        assert!(series.is_empty());
        let (total, per_item) = series.into_parts();
        assert!(total.is_empty());
        assert!(per_item.is_empty());
    }

    #[test]
    fn test_single_item_total_matches_item() {
        let series = build_portfolio_series(&[item("A", 100.0, &[0.12])]).unwrap();
        assert_eq!(series.total.values(), &[100.0, 112.0]);
        assert_eq!(series.per_item[0], series.total);
    }

    #[test]
    fn test_short_series_held_at_terminal_value() {
        let items = [
            item("A", 100.0, &[0.1, 0.1, 0.1]),
            item("B", 100.0, &[0.1]),
        ];
        let series = build_portfolio_series(&items).unwrap();

        assert_eq!(series.per_item[0].values(), &[100.0, 110.0, 121.0, 133.1]);
        assert_eq!(series.per_item[1].values(), &[100.0, 110.0]);

        // B stays at 110 for years 2 and 3 instead of dropping to zero
        let total = series.total.values();
        assert_eq!(total.len(), 4);
        assert_relative_eq!(total[0], 200.0);
        assert_relative_eq!(total[1], 220.0);
        assert_relative_eq!(total[2], 121.0 + 110.0);
        assert_relative_eq!(total[3], 133.1 + 110.0, epsilon = 1e-9);
        assert_relative_eq!(total[3], 243.1, epsilon = 1e-9);
    }

    #[test]
    fn test_item_without_returns_holds_initial_amount() {
        let items = [item("Cash", 500.0, &[]), item("Growth", 1000.0, &[0.5, -0.4])];
        let series = build_portfolio_series(&items).unwrap();
        assert_eq!(series.per_item[0].values(), &[500.0]);
        assert_eq!(series.per_item[1].values(), &[1000.0, 1500.0, 900.0]);
        assert_eq!(series.total.values(), &[1500.0, 2000.0, 1400.0]);
    }

    #[test]
    fn test_per_item_order_and_contributions() {
        let items = [
            item("Bonds", 0.0, &[0.0, 0.0]).with_contributions(ContributionSchedule::monthly(100.0).unwrap()),
            item("Stocks", 1000.0, &[0.1, 0.1]).with_contributions(ContributionSchedule::yearly(1000.0).unwrap()),
        ];
        let series = build_portfolio_series(&items).unwrap();

        assert_eq!(series.per_item[0].values(), &[0.0, 1200.0, 2400.0]);
        assert_eq!(series.per_item[1].values(), &[1000.0, 2200.0, 3520.0]);
        assert_relative_eq!(series.total.values()[2], 5920.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_item_rejected() {
        assert!(build_portfolio_series(&[item("  ", 100.0, &[0.1])]).is_err());
        assert!(build_portfolio_series(&[item("A", -100.0, &[0.1])]).is_err());
    }

    #[test]
    fn test_idempotent() {
        let items = [
            item("ETF", 1000.0, &[0.12, -0.03, 0.08, 0.10, 0.15]),
            item("BTC", 250.0, &[0.5, -0.4, 0.3]),
        ];
        assert_eq!(
            build_portfolio_series(&items).unwrap(),
            build_portfolio_series(&items).unwrap()
        );
    }
}
