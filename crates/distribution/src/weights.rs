//! Weight validation shared by every categorical distribution.

use crate::DistributionError;
use rust_decimal::Decimal;

/// Maximum allowed distance between the weight sum and 1.
///
/// Configured percentages are decimal strings such as `"0.333333333333"`,
/// so the check allows for truncated repeating fractions.
pub const WEIGHT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 9);

/// Check that a set of weights forms a probability distribution.
///
/// Every weight must lie in `[0, 1]` and their sum must be within
/// [`WEIGHT_TOLERANCE`] of 1. Returns the sum on success.
pub fn validate_weights<I>(weights: I) -> Result<Decimal, DistributionError>
where
    I: IntoIterator<Item = Decimal>,
{
    let mut sum = Decimal::ZERO;
    for (index, weight) in weights.into_iter().enumerate() {
        if weight < Decimal::ZERO || weight > Decimal::ONE {
            return Err(DistributionError::WeightOutOfRange { index, weight });
        }
        sum += weight;
    }

    if (sum - Decimal::ONE).abs() > WEIGHT_TOLERANCE {
        return Err(DistributionError::WeightsDoNotSumToOne {
            sum,
            tolerance: WEIGHT_TOLERANCE,
        });
    }

    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_tolerance_is_one_billionth() {
        assert_eq!(WEIGHT_TOLERANCE, dec("0.000000001"));
    }

    #[test]
    fn test_exact_sum_accepted() {
        let sum = validate_weights([dec("0.5"), dec("0.3"), dec("0.2")]).unwrap();
        assert_eq!(sum, Decimal::ONE);
    }

    #[test]
    fn test_sum_within_tolerance_accepted() {
        let third = dec("0.3333333333");
        assert!(validate_weights([third, third, third]).is_ok());
    }

    #[test]
    fn test_short_sum_rejected() {
        let err = validate_weights([dec("0.5"), dec("0.4")]).unwrap_err();
        assert_eq!(
            err,
            DistributionError::WeightsDoNotSumToOne {
                sum: dec("0.9"),
                tolerance: WEIGHT_TOLERANCE,
            }
        );
    }

    #[test]
    fn test_excess_sum_rejected() {
        assert!(validate_weights([dec("0.7"), dec("0.31")]).is_err());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = validate_weights([dec("1.5"), dec("-0.5")]).unwrap_err();
        assert!(matches!(
            err,
            DistributionError::WeightOutOfRange { index: 0, .. }
        ));
    }

    #[test]
    fn test_empty_weights_do_not_sum_to_one() {
        assert!(validate_weights(std::iter::empty()).is_err());
    }
}
