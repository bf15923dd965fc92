//! Sampling core for load-test workloads.
//!
//! Turns declarative distributions into concrete per-message values:
//!
//! - [`NumericDistribution`] - a closed range quantized into equally spaced points
//! - [`CategoricalDistribution`] - weighted selection among discrete labels
//! - [`MessageTypeMix`] - the DEX and staking message-type groups
//! - [`validate_weights`] - the shared "weights sum to 1" check
//!
//! All distributions are validated when they are constructed, so sampling
//! never fails. Randomness is always passed in by the caller; use
//! [`SeedSource`] to derive an independent generator per worker.

mod categorical;
mod error;
mod mix;
mod numeric;
mod rng;
mod weights;

pub use categorical::{CategoricalDistribution, ContractDistribution, WeightedOption};
pub use error::DistributionError;
pub use mix::MessageTypeMix;
pub use numeric::NumericDistribution;
pub use rng::{draw_unit, SeedSource, UNIT_DRAW_SCALE};
pub use weights::{validate_weights, WEIGHT_TOLERANCE};
