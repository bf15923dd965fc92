//! Execution budget selection and metering.

use crate::ExecutionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use tracing::trace;

/// Resource ceiling applied to one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "limit", rename_all = "snake_case")]
pub enum ExecutionBudget {
    /// No ceiling.
    Unbounded,
    /// Execution stops once `limit` units are consumed.
    Capped(NonZeroU64),
}

/// Map a gas limit to a budget: `0` is unbounded, anything else is a cap
/// at exactly that limit.
pub fn select_budget(limit: u64) -> ExecutionBudget {
    match NonZeroU64::new(limit) {
        Some(limit) => ExecutionBudget::Capped(limit),
        None => ExecutionBudget::Unbounded,
    }
}

impl ExecutionBudget {
    /// The cap, or `None` for an unbounded budget.
    pub fn limit(&self) -> Option<u64> {
        match self {
            ExecutionBudget::Unbounded => None,
            ExecutionBudget::Capped(limit) => Some(limit.get()),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, ExecutionBudget::Unbounded)
    }

    /// Start metering against this budget.
    pub fn meter(&self) -> BudgetMeter {
        BudgetMeter::new(*self)
    }
}

impl From<u64> for ExecutionBudget {
    fn from(limit: u64) -> Self {
        select_budget(limit)
    }
}

impl fmt::Display for ExecutionBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionBudget::Unbounded => f.write_str("unbounded"),
            ExecutionBudget::Capped(limit) => write!(f, "capped({})", limit),
        }
    }
}

/// Tracks consumption against an [`ExecutionBudget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetMeter {
    budget: ExecutionBudget,
    consumed: u64,
}

impl BudgetMeter {
    pub fn new(budget: ExecutionBudget) -> Self {
        Self {
            budget,
            consumed: 0,
        }
    }

    pub fn budget(&self) -> ExecutionBudget {
        self.budget
    }

    /// Units consumed so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Units left, or `None` for an unbounded budget.
    pub fn remaining(&self) -> Option<u64> {
        self.budget
            .limit()
            .map(|limit| limit.saturating_sub(self.consumed))
    }

    /// Whether a capped budget has been used up.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == Some(0)
    }

    /// Consume `amount` units on behalf of `descriptor`.
    ///
    /// A capped meter rejects consumption past its limit and leaves its
    /// count unchanged. An unbounded meter saturates at `u64::MAX`.
    pub fn consume(&mut self, amount: u64, descriptor: &str) -> Result<(), ExecutionError> {
        match self.budget.limit() {
            None => {
                self.consumed = self.consumed.saturating_add(amount);
            }
            Some(limit) => {
                let total = self.consumed.checked_add(amount).filter(|t| *t <= limit);
                match total {
                    Some(total) => self.consumed = total,
                    None => {
                        return Err(ExecutionError::OutOfBudget {
                            descriptor: descriptor.to_string(),
                            limit,
                            consumed: self.consumed,
                            requested: amount,
                        });
                    }
                }
            }
        }

        trace!(amount, consumed = self.consumed, descriptor, "Consumed execution budget");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_zero_limit_is_unbounded() {
        let budget = select_budget(0);
        assert_eq!(budget, ExecutionBudget::Unbounded);
        assert!(budget.is_unbounded());
        assert_eq!(budget.limit(), None);
    }

    #[test]
    fn test_positive_limit_is_capped_exactly() {
        for limit in [1, 200_000, u64::MAX] {
            let budget = select_budget(limit);
            assert_eq!(budget.limit(), Some(limit));
            assert!(!budget.is_unbounded());
        }
    }

    #[test]
    fn test_from_u64_matches_select() {
        assert_eq!(ExecutionBudget::from(0), select_budget(0));
        assert_eq!(ExecutionBudget::from(42), select_budget(42));
    }

    #[traced_test]
    #[test]
    fn test_capped_meter_rejects_overrun() {
        let mut meter = select_budget(100).meter();

        meter.consume(60, "place order").unwrap();
        assert_eq!(meter.remaining(), Some(40));

        let err = meter.consume(41, "settle").unwrap_err();
        assert_eq!(
            err,
            ExecutionError::OutOfBudget {
                descriptor: "settle".to_string(),
                limit: 100,
                consumed: 60,
                requested: 41,
            }
        );
        assert_eq!(meter.consumed(), 60);

        meter.consume(40, "settle").unwrap();
        assert!(meter.is_exhausted());

        assert!(logs_contain("Consumed execution budget"));
        assert!(logs_contain("amount=60"));
        assert!(!logs_contain("amount=41"));
    }

    #[traced_test]
    #[test]
    fn test_unbounded_meter_never_fails() {
        let mut meter = select_budget(0).meter();
        meter.consume(u64::MAX, "huge").unwrap();
        meter.consume(1, "more").unwrap();
        assert_eq!(meter.consumed(), u64::MAX);
        assert_eq!(meter.remaining(), None);
        assert!(!meter.is_exhausted());
        assert!(logs_contain("Consumed execution budget"));
    }

    #[test]
    fn test_budget_json_shape() {
        let capped = serde_json::to_value(select_budget(500)).unwrap();
        assert_eq!(capped["kind"], "capped");
        assert_eq!(capped["limit"], 500);

        let unbounded = serde_json::to_value(select_budget(0)).unwrap();
        assert_eq!(unbounded["kind"], "unbounded");
        assert_eq!(select_budget(7).to_string(), "capped(7)");
    }
}
