//! DEX order workload generator.

use crate::workloads::WorkloadGenerator;
use loadtest_distribution::{CategoricalDistribution, ContractDistribution, NumericDistribution};
use loadtest_types::{DexMessageType, MessageGroup, MessagePlan};
use rand::RngCore;

/// Generates limit and market orders against a weighted set of contracts.
pub struct DexWorkload {
    /// Order price.
    price: NumericDistribution,

    /// Order quantity.
    quantity: NumericDistribution,

    /// Limit/market mix.
    order_types: CategoricalDistribution<DexMessageType>,

    /// Target contract mix.
    contracts: ContractDistribution,
}

impl DexWorkload {
    /// Create a new DEX workload generator.
    pub fn new(
        price: NumericDistribution,
        quantity: NumericDistribution,
        order_types: CategoricalDistribution<DexMessageType>,
        contracts: ContractDistribution,
    ) -> Self {
        Self {
            price,
            quantity,
            order_types,
            contracts,
        }
    }
}

impl WorkloadGenerator for DexWorkload {
    fn group(&self) -> MessageGroup {
        MessageGroup::Dex
    }

    fn generate_one(&self, rng: &mut dyn RngCore) -> MessagePlan {
        // Draw order matters for reproducibility: price, quantity, type, contract.
        let price = self.price.sample(rng);
        let quantity = self.quantity.sample(rng);
        let kind = *self.order_types.sample(rng);
        let contract = self.contracts.sample(rng).clone();

        MessagePlan::order(kind, contract, price, quantity)
    }
}
