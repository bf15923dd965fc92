//! Goodness-of-fit helpers.

/// Pearson's chi-squared statistic for observed counts against expected
/// probabilities.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn chi_squared(observed: &[u64], expected: &[f64]) -> f64 {
    assert_eq!(
        observed.len(),
        expected.len(),
        "observed and expected must have the same number of categories"
    );

    let total: u64 = observed.iter().sum();
    observed
        .iter()
        .zip(expected)
        .filter(|(_, p)| **p > 0.0)
        .map(|(&o, &p)| {
            let e = p * total as f64;
            let diff = o as f64 - e;
            diff * diff / e
        })
        .sum()
}

/// Critical value of the chi-squared distribution at significance 0.001.
///
/// # Panics
///
/// Panics for degrees of freedom outside `1..=10`.
pub fn chi_squared_critical_p001(degrees_of_freedom: usize) -> f64 {
    const TABLE: [f64; 10] = [
        10.828, 13.816, 16.266, 18.467, 20.515, 22.458, 24.322, 26.124, 27.877, 29.588,
    ];
    assert!(
        (1..=TABLE.len()).contains(&degrees_of_freedom),
        "no critical value for {degrees_of_freedom} degrees of freedom"
    );
    TABLE[degrees_of_freedom - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_fit_is_zero() {
        assert_eq!(chi_squared(&[50, 30, 20], &[0.5, 0.3, 0.2]), 0.0);
    }

    #[test]
    fn test_skewed_counts_exceed_critical_value() {
        let statistic = chi_squared(&[900, 100], &[0.5, 0.5]);
        assert!(statistic > chi_squared_critical_p001(1));
    }
}
