//! Message-type mixes for the DEX and staking groups.

use crate::{CategoricalDistribution, DistributionError};
use loadtest_types::{DexMessageType, MessageGroup, MessageType, StakingMessageType};
use rand::Rng;
use rust_decimal::Decimal;

/// Message-type mixes, one per group.
///
/// A group whose percentages are all zero is left unconfigured; a load
/// test only needs the group it generates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageTypeMix {
    dex: Option<CategoricalDistribution<DexMessageType>>,
    staking: Option<CategoricalDistribution<StakingMessageType>>,
}

impl MessageTypeMix {
    /// Build the DEX group from limit/market percentages.
    ///
    /// Returns `Ok(None)` when both percentages are zero.
    pub fn dex_group(
        limit: Decimal,
        market: Decimal,
    ) -> Result<Option<CategoricalDistribution<DexMessageType>>, DistributionError> {
        if limit.is_zero() && market.is_zero() {
            return Ok(None);
        }
        CategoricalDistribution::from_pairs([
            (DexMessageType::Limit, limit),
            (DexMessageType::Market, market),
        ])
        .map(Some)
    }

    /// Build the staking group from delegate/undelegate/redelegate percentages.
    ///
    /// Returns `Ok(None)` when all three percentages are zero.
    pub fn staking_group(
        delegate: Decimal,
        undelegate: Decimal,
        begin_redelegate: Decimal,
    ) -> Result<Option<CategoricalDistribution<StakingMessageType>>, DistributionError> {
        if delegate.is_zero() && undelegate.is_zero() && begin_redelegate.is_zero() {
            return Ok(None);
        }
        CategoricalDistribution::from_pairs([
            (StakingMessageType::Delegate, delegate),
            (StakingMessageType::Undelegate, undelegate),
            (StakingMessageType::BeginRedelegate, begin_redelegate),
        ])
        .map(Some)
    }

    pub fn new(
        dex: Option<CategoricalDistribution<DexMessageType>>,
        staking: Option<CategoricalDistribution<StakingMessageType>>,
    ) -> Self {
        Self { dex, staking }
    }

    pub fn dex(&self) -> Option<&CategoricalDistribution<DexMessageType>> {
        self.dex.as_ref()
    }

    pub fn staking(&self) -> Option<&CategoricalDistribution<StakingMessageType>> {
        self.staking.as_ref()
    }

    /// Whether the given group can be sampled.
    pub fn has_group(&self, group: MessageGroup) -> bool {
        match group {
            MessageGroup::Dex => self.dex.is_some(),
            MessageGroup::Staking => self.staking.is_some(),
        }
    }

    /// Draw a message type from the given group.
    ///
    /// Returns `None` if the group is not configured.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        group: MessageGroup,
        rng: &mut R,
    ) -> Option<MessageType> {
        match group {
            MessageGroup::Dex => self.dex.as_ref().map(|d| MessageType::Dex(*d.sample(rng))),
            MessageGroup::Staking => self
                .staking
                .as_ref()
                .map(|d| MessageType::Staking(*d.sample(rng))),
        }
    }
}
