//! Numeric range sampler.

use crate::DistributionError;
use rand::Rng;
use rust_decimal::Decimal;

/// A range `[min, max]` quantized into `distinct_count` equally spaced values.
///
/// The candidate values are `min + k * (max - min) / distinct_count` for
/// `k` in `0..distinct_count`. The step is computed over the whole range, so
/// `max` itself is never produced: a distribution over `[1, 2]` with four
/// values yields `1, 1.25, 1.5, 1.75`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericDistribution {
    min: Decimal,
    max: Decimal,
    distinct_count: u64,
    step: Decimal,
}

impl NumericDistribution {
    /// Create a validated numeric distribution.
    pub fn new(
        min: Decimal,
        max: Decimal,
        distinct_count: u64,
    ) -> Result<Self, DistributionError> {
        if distinct_count == 0 {
            return Err(DistributionError::NoDistinctValues);
        }
        if min > max {
            return Err(DistributionError::InvertedRange { min, max });
        }

        let step = max
            .checked_sub(min)
            .and_then(|width| width.checked_div(Decimal::from(distinct_count)))
            .ok_or(DistributionError::RangeOverflow { min, max })?;

        // Near the 28-digit limit the top grid point can round onto `max`.
        if step > Decimal::ZERO {
            let last = step
                .checked_mul(Decimal::from(distinct_count - 1))
                .and_then(|offset| min.checked_add(offset))
                .ok_or(DistributionError::RangeOverflow { min, max })?;
            if last >= max {
                return Err(DistributionError::UnrepresentableGrid {
                    min,
                    max,
                    distinct_count,
                });
            }
        }

        Ok(Self {
            min,
            max,
            distinct_count,
            step,
        })
    }

    /// A distribution that always yields `value`.
    pub fn constant(value: Decimal) -> Self {
        Self {
            min: value,
            max: value,
            distinct_count: 1,
            step: Decimal::ZERO,
        }
    }

    pub fn min(&self) -> Decimal {
        self.min
    }

    pub fn max(&self) -> Decimal {
        self.max
    }

    pub fn distinct_count(&self) -> u64 {
        self.distinct_count
    }

    /// Spacing between adjacent candidate values.
    pub fn step(&self) -> Decimal {
        self.step
    }

    /// The `k`-th candidate value, or `None` if `k` is off the grid.
    pub fn value_at(&self, k: u64) -> Option<Decimal> {
        if k >= self.distinct_count {
            return None;
        }
        Some(self.min + self.step * Decimal::from(k))
    }

    /// Draw one value uniformly from the candidate grid.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Decimal {
        let k = rng.gen_range(0..self.distinct_count);
        self.min + self.step * Decimal::from(k)
    }

    /// All candidate values, in increasing order.
    pub fn values(&self) -> impl Iterator<Item = Decimal> + '_ {
        (0..self.distinct_count).map(move |k| self.min + self.step * Decimal::from(k))
    }
}
