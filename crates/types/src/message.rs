//! Message labels and concrete message plans.

use crate::ContractAddress;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Group of message types sampled together.
///
/// Each group has its own categorical mix in the configuration; the
/// configured `message_type` of a load test names the group it generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageGroup {
    /// Order placement against DEX contracts.
    Dex,
    /// Validator staking operations.
    Staking,
}

impl MessageGroup {
    /// Name of the group as it appears in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageGroup::Dex => "dex",
            MessageGroup::Staking => "staking",
        }
    }
}

impl fmt::Display for MessageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message labels in the DEX group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DexMessageType {
    Limit,
    Market,
}

impl DexMessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DexMessageType::Limit => "limit",
            DexMessageType::Market => "market",
        }
    }
}

/// Message labels in the staking group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakingMessageType {
    Delegate,
    Undelegate,
    BeginRedelegate,
}

impl StakingMessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StakingMessageType::Delegate => "delegate",
            StakingMessageType::Undelegate => "undelegate",
            StakingMessageType::BeginRedelegate => "begin_redelegate",
        }
    }
}

/// A message label drawn from one of the groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageType {
    Dex(DexMessageType),
    Staking(StakingMessageType),
}

impl MessageType {
    /// The group this label belongs to.
    pub fn group(&self) -> MessageGroup {
        match self {
            MessageType::Dex(_) => MessageGroup::Dex,
            MessageType::Staking(_) => MessageGroup::Staking,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Dex(t) => t.as_str(),
            MessageType::Staking(t) => t.as_str(),
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DexMessageType> for MessageType {
    fn from(t: DexMessageType) -> Self {
        MessageType::Dex(t)
    }
}

impl From<StakingMessageType> for MessageType {
    fn from(t: StakingMessageType) -> Self {
        MessageType::Staking(t)
    }
}

/// One concrete message, with every parameter already sampled.
///
/// Handed to the transaction-building layer, which turns it into a
/// chain-specific message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessagePlan {
    LimitOrder {
        contract: ContractAddress,
        price: Decimal,
        quantity: Decimal,
    },
    MarketOrder {
        contract: ContractAddress,
        price: Decimal,
        quantity: Decimal,
    },
    Delegate {
        amount: Decimal,
    },
    Undelegate {
        amount: Decimal,
    },
    BeginRedelegate {
        amount: Decimal,
    },
}

impl MessagePlan {
    /// Build a DEX order plan for the given label.
    pub fn order(
        kind: DexMessageType,
        contract: ContractAddress,
        price: Decimal,
        quantity: Decimal,
    ) -> Self {
        match kind {
            DexMessageType::Limit => MessagePlan::LimitOrder {
                contract,
                price,
                quantity,
            },
            DexMessageType::Market => MessagePlan::MarketOrder {
                contract,
                price,
                quantity,
            },
        }
    }

    /// Build a staking plan for the given label.
    pub fn staking(kind: StakingMessageType, amount: Decimal) -> Self {
        match kind {
            StakingMessageType::Delegate => MessagePlan::Delegate { amount },
            StakingMessageType::Undelegate => MessagePlan::Undelegate { amount },
            StakingMessageType::BeginRedelegate => MessagePlan::BeginRedelegate { amount },
        }
    }

    /// The label this plan was generated for.
    pub fn message_type(&self) -> MessageType {
        match self {
            MessagePlan::LimitOrder { .. } => DexMessageType::Limit.into(),
            MessagePlan::MarketOrder { .. } => DexMessageType::Market.into(),
            MessagePlan::Delegate { .. } => StakingMessageType::Delegate.into(),
            MessagePlan::Undelegate { .. } => StakingMessageType::Undelegate.into(),
            MessagePlan::BeginRedelegate { .. } => StakingMessageType::BeginRedelegate.into(),
        }
    }

    /// Target contract, for messages that have one.
    pub fn contract(&self) -> Option<&ContractAddress> {
        match self {
            MessagePlan::LimitOrder { contract, .. } | MessagePlan::MarketOrder { contract, .. } => {
                Some(contract)
            }
            _ => None,
        }
    }
}
