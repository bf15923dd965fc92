//! Execution budgets for generated transactions.
//!
//! A transaction's gas limit selects one of two budget policies:
//!
//! - a limit of `0` gives an unbounded budget
//! - any positive limit caps execution at exactly that amount
//!
//! [`BudgetMeter`] tracks consumption against a selected budget.

mod budget;
mod error;

pub use budget::{select_budget, BudgetMeter, ExecutionBudget};
pub use error::ExecutionError;
