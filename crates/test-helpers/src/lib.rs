//! Test helpers for load-test planning.
//!
//! - [`fixtures`] - config files in the on-disk formats
//! - [`stats`] - goodness-of-fit checks for sampled distributions

pub mod fixtures;
pub mod stats;
