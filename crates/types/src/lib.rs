//! Core types for load-test message generation.
//!
//! These are plain value types shared between the sampling core and the
//! workload generators:
//!
//! - [`ContractAddress`] - target contract identifier
//! - [`DexMessageType`] / [`StakingMessageType`] - labels drawn per message group
//! - [`MessageGroup`] / [`MessageType`] - group selector and the label drawn from it
//! - [`MessagePlan`] - one concrete message ready for transaction building

mod identifiers;
mod message;

pub use identifiers::ContractAddress;
pub use message::{
    DexMessageType, MessageGroup, MessagePlan, MessageType, StakingMessageType,
};
