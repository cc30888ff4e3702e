//! Compounding engine and ROI calculation for single-asset projections

mod series;
mod engine;
mod roi;

pub use series::{ContributionSchedule, ReturnSeries, ValueSeries};
pub use engine::{compound_growth, monthly_rate};
pub use roi::{calculate_roi, total_invested};

pub(crate) use series::{round_to, validate_amount};

// ============================================================================
// Projection Conventions
// ============================================================================
// Annual rates are decomposed into 12 equal geometric monthly rates.
// Currency values are rounded only at year boundaries; ROI is reported as a
// fraction, not a percentage.

/// Compounding periods per projection year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Decimal places kept on every currency value in a series
pub const CURRENCY_DECIMALS: usize = 2;

/// Decimal places kept on ROI figures
pub const ROI_DECIMALS: usize = 4;

/// Longest horizon a return series may span
pub const MAX_HORIZON_YEARS: usize = 1000;
