//! Return on investment relative to total capital contributed

use super::series::round_to;
use super::{compound_growth, ContributionSchedule, ReturnSeries, MONTHS_PER_YEAR, ROI_DECIMALS};
use crate::error::{ProjectionError, Result};

/// Capital put in over a horizon: initial amount plus every contribution
///
/// `initial + yearly * years + monthly * 12 * years`
pub fn total_invested(initial: f64, years: usize, contributions: ContributionSchedule) -> f64 {
    let years = years as f64;
    initial
        + contributions.yearly * years
        + contributions.monthly * MONTHS_PER_YEAR as f64 * years
}

/// Fractional ROI of a compounded projection, rounded to 4 decimals
///
/// Returns exactly `0.0` when nothing was invested.
pub fn calculate_roi(
    initial: f64,
    returns: &ReturnSeries,
    contributions: ContributionSchedule,
) -> Result<f64> {
    let values = compound_growth(initial, returns, contributions)?;
    let final_value = values
        .terminal()
        .ok_or_else(|| ProjectionError::invalid_input("projection produced no values"))?;

    let invested = total_invested(initial, returns.len(), contributions);
    if invested == 0.0 {
        return Ok(0.0);
    }

    Ok(round_to((final_value - invested) / invested, ROI_DECIMALS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn returns(rates: &[f64]) -> ReturnSeries {
        ReturnSeries::new(rates.to_vec()).unwrap()
    }

    #[test]
    fn test_zero_invested_is_zero_roi() {
        let roi = calculate_roi(0.0, &ReturnSeries::default(), ContributionSchedule::default()).unwrap();
        assert_eq!(roi, 0.0);

        // Growth on nothing is still nothing
        let roi = calculate_roi(0.0, &returns(&[0.5, 0.5]), ContributionSchedule::default()).unwrap();
        assert_eq!(roi, 0.0);
    }

    #[test]
    fn test_single_year_roi() {
        let roi = calculate_roi(1000.0, &returns(&[0.1]), ContributionSchedule::default()).unwrap();
        assert_eq!(roi, 0.1);
    }

    #[test]
    fn test_no_growth_with_contributions() {
        let c = ContributionSchedule::new(100.0, 1000.0).unwrap();
        assert_eq!(total_invested(500.0, 3, c), 500.0 + 3000.0 + 3600.0);

        let roi = calculate_roi(500.0, &returns(&[0.0, 0.0, 0.0]), c).unwrap();
        assert_eq!(roi, 0.0);
    }

    #[test]
    fn test_negative_roi() {
        let roi = calculate_roi(1000.0, &returns(&[-0.5]), ContributionSchedule::default()).unwrap();
        assert_eq!(roi, -0.5);
    }

    #[test]
    fn test_roi_rounded_to_four_places() {
        // 1000 -> 1331 over three 10% years
        let roi = calculate_roi(1000.0, &returns(&[0.1, 0.1, 0.1]), ContributionSchedule::default()).unwrap();
        assert_eq!(roi, 0.331);

        let roi = calculate_roi(3000.0, &returns(&[0.0123456]), ContributionSchedule::default()).unwrap();
        assert_eq!(roi, 0.0123);
    }

    #[test]
    fn test_contributions_count_toward_invested() {
        // 1000 yearly top-up at 10%: final 2200 against 2000 invested
        let roi = calculate_roi(1000.0, &returns(&[0.1]), ContributionSchedule::yearly(1000.0).unwrap()).unwrap();
        assert_eq!(roi, 0.1);
    }

    #[test]
    fn test_invalid_input_propagates() {
        assert!(calculate_roi(-5.0, &returns(&[0.1]), ContributionSchedule::default()).is_err());
    }

    #[test]
    fn test_idempotent() {
        let r = returns(&[0.5, -0.4, 0.3, 0.1, 0.6]);
        let c = ContributionSchedule::new(50.0, 0.0).unwrap();
        assert_eq!(
            calculate_roi(1000.0, &r, c).unwrap().to_bits(),
            calculate_roi(1000.0, &r, c).unwrap().to_bits()
        );
    }
}
