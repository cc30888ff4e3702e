//! Input and output series for the compounding engine

use super::MAX_HORIZON_YEARS;
use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// Round to a fixed number of decimal places
///
/// Goes through the shortest-decimal formatter, so the stored binary value is
/// what gets rounded (2.675 -> 2.67) and exact ties go to even.
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Reject horizons longer than [`MAX_HORIZON_YEARS`]
pub(crate) fn validate_horizon(years: usize) -> Result<()> {
    if years > MAX_HORIZON_YEARS {
        return Err(ProjectionError::invalid_input(format!(
            "horizon of {years} years exceeds the {MAX_HORIZON_YEARS}-year limit"
        )));
    }
    Ok(())
}

/// Reject currency amounts that are negative or not finite
pub(crate) fn validate_amount(label: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid_input(format!(
            "{label} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(ProjectionError::invalid_input(format!(
            "{label} must not be negative, got {value}"
        )));
    }
    Ok(())
}

/// Annual return rates in chronological order (0.12 = +12%)
///
/// Every rate is finite and strictly greater than -1.0, so the equivalent
/// monthly rate is always defined. Deserialization goes through the same check.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ReturnSeries {
    rates: Vec<f64>,
}

impl ReturnSeries {
    pub fn new(rates: Vec<f64>) -> Result<Self> {
        validate_horizon(rates.len())?;
        for (year, &rate) in rates.iter().enumerate() {
            if !rate.is_finite() {
                return Err(ProjectionError::invalid_input(format!(
                    "annual rate for year {} is not finite",
                    year + 1
                )));
            }
            if rate <= -1.0 {
                return Err(ProjectionError::invalid_input(format!(
                    "annual rate for year {} is {rate}; rates at or below -100% have no monthly equivalent",
                    year + 1
                )));
            }
        }
        Ok(Self { rates })
    }

    /// Same rate repeated for every year of the horizon
    pub fn constant(rate: f64, years: usize) -> Result<Self> {
        validate_horizon(years)?;
        Self::new(vec![rate; years])
    }

    /// Build from percentages (12.0 = +12%), as entered at the outer boundary
    pub fn from_percentages<I: IntoIterator<Item = f64>>(percentages: I) -> Result<Self> {
        Self::new(percentages.into_iter().map(|p| p / 100.0).collect())
    }

    /// Same percentage repeated for every year of the horizon
    pub fn constant_percent(percent: f64, years: usize) -> Result<Self> {
        Self::constant(percent / 100.0, years)
    }

    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.rates.iter().copied()
    }

    /// Horizon in years
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Highest annual rate, if any
    pub fn best(&self) -> Option<f64> {
        self.iter().reduce(f64::max)
    }

    /// Lowest annual rate, if any
    pub fn worst(&self) -> Option<f64> {
        self.iter().reduce(f64::min)
    }
}

impl TryFrom<Vec<f64>> for ReturnSeries {
    type Error = ProjectionError;

    fn try_from(rates: Vec<f64>) -> Result<Self> {
        Self::new(rates)
    }
}

impl From<ReturnSeries> for Vec<f64> {
    fn from(series: ReturnSeries) -> Self {
        series.rates
    }
}

/// Recurring contributions applied uniformly across every projection year
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContributionSchedule {
    /// Added at the start of every month, before that month's growth
    #[serde(default)]
    pub monthly: f64,

    /// Added once at the start of every year, before monthly compounding
    #[serde(default)]
    pub yearly: f64,
}

impl ContributionSchedule {
    pub fn new(monthly: f64, yearly: f64) -> Result<Self> {
        let schedule = Self { monthly, yearly };
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn monthly(amount: f64) -> Result<Self> {
        Self::new(amount, 0.0)
    }

    pub fn yearly(amount: f64) -> Result<Self> {
        Self::new(0.0, amount)
    }

    pub fn validate(&self) -> Result<()> {
        validate_amount("monthly contribution", self.monthly)?;
        validate_amount("yearly contribution", self.yearly)
    }

    pub fn is_none(&self) -> bool {
        self.monthly == 0.0 && self.yearly == 0.0
    }
}

/// Year-end values, index 0 being the starting amount
///
/// Only the engine and the aggregator produce these; callers get read access.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ValueSeries(Vec<f64>);

impl ValueSeries {
    pub(crate) fn from_values(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of projected years (boundaries minus the starting point)
    pub fn years(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn initial(&self) -> Option<f64> {
        self.0.first().copied()
    }

    /// Last computed value
    pub fn terminal(&self) -> Option<f64> {
        self.0.last().copied()
    }

    /// Value at `idx`, or the terminal value once the horizon has ended
    pub fn value_or_terminal(&self, idx: usize) -> Option<f64> {
        self.0.get(idx).copied().or_else(|| self.terminal())
    }
}
