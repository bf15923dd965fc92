//! Load-test workload planner.
//!
//! Reads a declarative workload description and turns it into concrete
//! per-transaction parameters: prices, quantities, message types, target
//! contracts and execution budgets.
//!
//! # Architecture
//!
//! ```text
//! config file ──► LoadTestConfig ──validate──► LoadTest
//!                                                │
//!                                                ▼
//!                               PlanRunner (one WorkloadGenerator)
//!                                                │
//!                         per round, in parallel │ per tx: own ChaCha8 stream
//!                                                ▼
//!                                     TxPlan { budget, messages }
//!                                                │
//!                                                ▼
//!                                 sink (transaction builder, stdout, ...)
//! ```
//!
//! Building, signing and submitting the transactions is left to the sink.

pub mod config;
pub mod runner;
pub mod workloads;

pub use config::{ConfigError, LoadTest, LoadTestConfig};
pub use runner::{PlanRunner, RoundReport, RunReport};
pub use workloads::{DexWorkload, StakingWorkload, TxPlan, WorkloadGenerator};
