//! Error types for distribution construction.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating a distribution.
///
/// These are configuration errors: they are reported once, when the
/// distribution is built, and never from a sampling call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    /// A categorical distribution with no options.
    #[error("Distribution has no options")]
    Empty,

    /// A single weight outside `[0, 1]`.
    #[error("Weight {weight} at position {index} is outside [0, 1]")]
    WeightOutOfRange { index: usize, weight: Decimal },

    /// Weights whose sum is not 1 within tolerance.
    #[error("Weights sum to {sum}, expected 1 (tolerance {tolerance})")]
    WeightsDoNotSumToOne { sum: Decimal, tolerance: Decimal },

    /// A numeric distribution with `number_of_distinct_values` of zero.
    #[error("Number of distinct values must be at least 1")]
    NoDistinctValues,

    /// A numeric distribution with `min > max`.
    #[error("Range minimum {min} is greater than maximum {max}")]
    InvertedRange { min: Decimal, max: Decimal },

    /// A numeric range too wide for decimal arithmetic.
    #[error("Range {min}..{max} overflows decimal arithmetic")]
    RangeOverflow { min: Decimal, max: Decimal },

    /// A grid whose points cannot be kept below `max` at decimal precision.
    #[error("Range {min}..{max} cannot hold {distinct_count} distinct values below the maximum")]
    UnrepresentableGrid {
        min: Decimal,
        max: Decimal,
        distinct_count: u64,
    },
}
