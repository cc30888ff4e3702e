//! Portfolio aggregation, allocation and reporting

mod item;
mod aggregator;
pub mod summary;
pub mod holdings;
pub mod insights;

pub use item::PortfolioItem;
pub use aggregator::{build_portfolio_series, PortfolioSeries};
pub use summary::{allocation, portfolio_roi, total_contributions, PortfolioReport};
pub use holdings::{recalculate_allocations, Holding, HoldingTotals};
pub use insights::{AssetInsight, PortfolioInsight};
