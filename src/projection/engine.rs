//! Year-by-year compounding with monthly growth and recurring contributions

use super::series::{round_to, validate_amount};
use super::{ContributionSchedule, ReturnSeries, ValueSeries, CURRENCY_DECIMALS, MONTHS_PER_YEAR};
use crate::error::Result;
use log::debug;

/// Monthly rate equivalent to an annual rate under monthly compounding
///
/// `(1 + r)^(1/12) - 1`, so twelve months at this rate reproduce `1 + r`
/// exactly (up to floating point). Defined for any `r > -1`.
pub fn monthly_rate(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / MONTHS_PER_YEAR as f64) - 1.0
}

/// Project an initial amount through a series of annual returns
///
/// Each year the yearly contribution lands first, then twelve months compound,
/// each month adding the monthly contribution before growth. The returned
/// series has one value per year boundary, starting with the initial amount,
/// every entry rounded to cents. Full precision is carried between years.
///
/// # Arguments
/// * `initial` - Starting capital (non-negative)
/// * `returns` - Annual rates in chronological order
/// * `contributions` - Recurring monthly/yearly contributions
pub fn compound_growth(
    initial: f64,
    returns: &ReturnSeries,
    contributions: ContributionSchedule,
) -> Result<ValueSeries> {
    validate_amount("initial amount", initial)?;
    contributions.validate()?;

    let mut values = Vec::with_capacity(returns.len() + 1);
    values.push(round_to(initial, CURRENCY_DECIMALS));

    let mut current = initial;
    for rate in returns.iter() {
        current += contributions.yearly;

        let growth = 1.0 + monthly_rate(rate);
        for _ in 0..MONTHS_PER_YEAR {
            current = (current + contributions.monthly) * growth;
        }

        values.push(round_to(current, CURRENCY_DECIMALS));
    }

    debug!(
        "Compounded {:.2} over {} years (monthly {:.2}, yearly {:.2}) -> {:.2}",
        initial,
        returns.len(),
        contributions.monthly,
        contributions.yearly,
        values.last().copied().unwrap_or_default()
    );

    Ok(ValueSeries::from_values(values))
}
