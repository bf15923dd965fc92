//! Weighted selection among discrete labels.
//!
//! One walk serves every categorical mix in a workload: the DEX and staking
//! message-type groups and the target-contract mix.

use crate::{draw_unit, validate_weights, DistributionError};
use loadtest_types::ContractAddress;
use rand::Rng;
use rust_decimal::Decimal;

/// A label and the probability of drawing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedOption<T> {
    pub label: T,
    pub weight: Decimal,
}

impl<T> WeightedOption<T> {
    pub fn new(label: T, weight: Decimal) -> Self {
        Self { label, weight }
    }
}

/// An ordered, validated set of weighted labels.
///
/// Options are kept in declaration order. `[0, 1)` is split into
/// consecutive segments sized by weight and a draw selects the option
/// whose segment it falls in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalDistribution<T> {
    options: Vec<WeightedOption<T>>,
}

/// Target-contract mix.
pub type ContractDistribution = CategoricalDistribution<ContractAddress>;

impl<T> CategoricalDistribution<T> {
    /// Create a distribution, checking that it is non-empty and that the
    /// weights sum to 1.
    pub fn new(options: Vec<WeightedOption<T>>) -> Result<Self, DistributionError> {
        if options.is_empty() {
            return Err(DistributionError::Empty);
        }
        validate_weights(options.iter().map(|option| option.weight))?;
        Ok(Self { options })
    }

    /// Create a distribution from `(label, weight)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, DistributionError>
    where
        I: IntoIterator<Item = (T, Decimal)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(label, weight)| WeightedOption::new(label, weight))
                .collect(),
        )
    }

    /// Select the label for a draw `r` in `[0, 1)`.
    ///
    /// Returns the first option whose cumulative weight reaches `r`. When
    /// rounding leaves the total slightly below `r`, the last option is
    /// returned. Zero-weight options own no segment and are never returned.
    pub fn pick(&self, r: Decimal) -> &T {
        let mut cumulative = Decimal::ZERO;
        let mut last = &self.options[self.options.len() - 1].label;
        for option in self.options.iter().filter(|o| o.weight > Decimal::ZERO) {
            cumulative += option.weight;
            if cumulative >= r {
                return &option.label;
            }
            last = &option.label;
        }
        last
    }

    /// Draw one label.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        self.pick(draw_unit(rng))
    }

    pub fn options(&self) -> &[WeightedOption<T>] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false; construction rejects empty option lists.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &T> {
        self.options.iter().map(|option| &option.label)
    }
}
