//! Staking workload generator.

use crate::workloads::WorkloadGenerator;
use loadtest_distribution::{CategoricalDistribution, NumericDistribution};
use loadtest_types::{MessageGroup, MessagePlan, StakingMessageType};
use rand::RngCore;

/// Generates delegate, undelegate and redelegate messages.
///
/// Amounts are drawn from the quantity distribution.
pub struct StakingWorkload {
    amount: NumericDistribution,
    kinds: CategoricalDistribution<StakingMessageType>,
}

impl StakingWorkload {
    pub fn new(
        amount: NumericDistribution,
        kinds: CategoricalDistribution<StakingMessageType>,
    ) -> Self {
        Self { amount, kinds }
    }
}

impl WorkloadGenerator for StakingWorkload {
    fn group(&self) -> MessageGroup {
        MessageGroup::Staking
    }

    fn generate_one(&self, rng: &mut dyn RngCore) -> MessagePlan {
        let kind = *self.kinds.sample(rng);
        let amount = self.amount.sample(rng);
        MessagePlan::staking(kind, amount)
    }
}
