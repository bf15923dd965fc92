//! Error types for budget metering.

use thiserror::Error;

/// Errors while metering execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// Consumption would exceed a capped budget.
    #[error("Out of budget in {descriptor}: limit {limit}, consumed {consumed}, requested {requested}")]
    OutOfBudget {
        descriptor: String,
        limit: u64,
        consumed: u64,
        requested: u64,
    },
}
