//! Growth Projection - compounding growth and ROI engine for assets and portfolios
//!
//! This library provides:
//! - Year-by-year compounding of annual returns with monthly/yearly contributions
//! - Return-on-investment against total contributed capital
//! - Multi-asset portfolio aggregation with per-asset series
//! - Allocation, contribution and insight figures for reporting
//! - An asset catalog and a request-level calculator service

pub mod error;
pub mod projection;
pub mod portfolio;
pub mod assets;
pub mod service;
pub mod config;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use projection::{calculate_roi, compound_growth, ContributionSchedule, ReturnSeries, ValueSeries};
pub use portfolio::{build_portfolio_series, PortfolioItem, PortfolioReport, PortfolioSeries};
pub use assets::{Asset, AssetCatalog};
pub use service::Calculator;
pub use config::RunConfig;
