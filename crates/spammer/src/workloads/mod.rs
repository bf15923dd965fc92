//! Workload generators.
//!
//! A generator turns one random stream into concrete messages. Generators
//! hold only validated, immutable distributions, so one instance can be
//! shared by every worker thread; each worker brings its own stream.

mod dex;
mod staking;

pub use dex::DexWorkload;
pub use staking::StakingWorkload;

use crate::config::{ConfigError, LoadTest};
use loadtest_execution::ExecutionBudget;
use loadtest_types::{MessageGroup, MessagePlan};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Trait for generating message workloads.
pub trait WorkloadGenerator: Send + Sync {
    /// The message group this generator produces.
    fn group(&self) -> MessageGroup;

    /// Generate a single message.
    fn generate_one(&self, rng: &mut dyn RngCore) -> MessagePlan;

    /// Generate `count` messages from the same stream.
    fn generate_batch(&self, count: usize, rng: &mut dyn RngCore) -> Vec<MessagePlan> {
        (0..count).map(|_| self.generate_one(rng)).collect()
    }
}

/// All sampled parameters for one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxPlan {
    /// Round (block) this transaction belongs to.
    pub round: u64,

    /// Position of the transaction within its round.
    pub index: u64,

    /// Execution budget to attach to the transaction.
    pub budget: ExecutionBudget,

    pub messages: Vec<MessagePlan>,
}

/// Build the generator for a validated load test.
pub fn generator_for(test: &LoadTest) -> Result<Box<dyn WorkloadGenerator>, ConfigError> {
    match test.group {
        MessageGroup::Dex => {
            let order_types = test
                .message_types
                .dex()
                .cloned()
                .ok_or(ConfigError::GroupNotConfigured {
                    group: MessageGroup::Dex,
                })?;
            let contracts = test.contracts.clone().ok_or(ConfigError::NoContracts)?;
            Ok(Box::new(DexWorkload::new(
                test.price.clone(),
                test.quantity.clone(),
                order_types,
                contracts,
            )))
        }
        MessageGroup::Staking => {
            let kinds = test
                .message_types
                .staking()
                .cloned()
                .ok_or(ConfigError::GroupNotConfigured {
                    group: MessageGroup::Staking,
                })?;
            Ok(Box::new(StakingWorkload::new(test.quantity.clone(), kinds)))
        }
    }
}
