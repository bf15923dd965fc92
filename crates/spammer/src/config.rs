//! Load-test configuration.
//!
//! The file format mirrors the chain's load-test JSON: decimals are given
//! as strings (numbers are also accepted), percentages as fractions of 1.
//! Files ending in `.toml` are read as TOML with the same field names.
//!
//! Loading always validates. Every distribution is converted into its
//! sampler type up front, so a bad weight or range stops the run before
//! any transaction is generated.

use loadtest_distribution::{
    CategoricalDistribution, ContractDistribution, DistributionError, MessageTypeMix,
    NumericDistribution, SeedSource,
};
use loadtest_execution::{select_budget, ExecutionBudget};
use loadtest_types::{ContractAddress, MessageGroup};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Raw load-test configuration, as read from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadTestConfig {
    /// Chain the transactions are built for.
    pub chain_id: String,

    /// Transactions generated per block (per round).
    pub txs_per_block: u64,

    /// Messages packed into each transaction.
    pub msgs_per_tx: u64,

    /// Number of rounds to generate.
    pub rounds: u64,

    /// Message group to generate.
    pub message_type: MessageGroup,

    /// Gas limit per transaction. 0 means unbounded.
    #[serde(default)]
    pub gas_limit: u64,

    /// Master seed for all random sources.
    #[serde(default)]
    pub seed: u64,

    pub price_distribution: NumericDistributionConfig,

    pub quantity_distribution: NumericDistributionConfig,

    #[serde(default)]
    pub message_type_distribution: MessageTypeDistributionConfig,

    #[serde(default)]
    pub contract_distribution: Vec<ContractWeightConfig>,
}

/// Numeric range as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericDistributionConfig {
    pub min: Decimal,
    pub max: Decimal,
    pub number_of_distinct_values: u64,
}

impl NumericDistributionConfig {
    pub fn new(min: Decimal, max: Decimal, number_of_distinct_values: u64) -> Self {
        Self {
            min,
            max,
            number_of_distinct_values,
        }
    }

    fn validate(&self) -> Result<NumericDistribution, DistributionError> {
        NumericDistribution::new(self.min, self.max, self.number_of_distinct_values)
    }
}

/// Message-type percentages for both groups.
///
/// Absent fields are zero. A group with all-zero percentages is treated as
/// not configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTypeDistributionConfig {
    pub limit_order_percentage: Decimal,
    pub market_order_percentage: Decimal,
    pub delegate_percentage: Decimal,
    pub undelegate_percentage: Decimal,
    pub begin_redelegate_percentage: Decimal,
}

impl MessageTypeDistributionConfig {
    /// DEX-only mix.
    pub fn dex(limit: Decimal, market: Decimal) -> Self {
        Self {
            limit_order_percentage: limit,
            market_order_percentage: market,
            ..Default::default()
        }
    }

    /// Staking-only mix.
    pub fn staking(delegate: Decimal, undelegate: Decimal, begin_redelegate: Decimal) -> Self {
        Self {
            delegate_percentage: delegate,
            undelegate_percentage: undelegate,
            begin_redelegate_percentage: begin_redelegate,
            ..Default::default()
        }
    }

    fn validate(&self) -> Result<MessageTypeMix, ConfigError> {
        let dex =
            MessageTypeMix::dex_group(self.limit_order_percentage, self.market_order_percentage)
                .map_err(|source| ConfigError::Distribution {
                    field: "message_type_distribution.dex",
                    source,
                })?;
        let staking = MessageTypeMix::staking_group(
            self.delegate_percentage,
            self.undelegate_percentage,
            self.begin_redelegate_percentage,
        )
        .map_err(|source| ConfigError::Distribution {
            field: "message_type_distribution.staking",
            source,
        })?;
        Ok(MessageTypeMix::new(dex, staking))
    }
}

/// One entry of the target-contract mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractWeightConfig {
    pub contract_address: ContractAddress,
    pub percentage: Decimal,
}

impl ContractWeightConfig {
    pub fn new(contract_address: impl Into<String>, percentage: Decimal) -> Self {
        Self {
            contract_address: ContractAddress::new(contract_address),
            percentage,
        }
    }
}

impl LoadTestConfig {
    /// Create a config with one round of one single-message transaction.
    pub fn new(
        chain_id: impl Into<String>,
        message_type: MessageGroup,
        price_distribution: NumericDistributionConfig,
        quantity_distribution: NumericDistributionConfig,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            txs_per_block: 1,
            msgs_per_tx: 1,
            rounds: 1,
            message_type,
            gas_limit: 0,
            seed: 0,
            price_distribution,
            quantity_distribution,
            message_type_distribution: MessageTypeDistributionConfig::default(),
            contract_distribution: Vec::new(),
        }
    }

    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<LoadTest, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml_str(&contents)?
        } else {
            Self::from_json_str(&contents)?
        };

        info!(
            path = %path.display(),
            chain_id = %config.chain_id,
            message_type = %config.message_type,
            "Loaded load-test config"
        );

        config.validate()
    }

    /// Parse a JSON config without validating it.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Parse a TOML config without validating it.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Set transactions per block.
    pub fn with_txs_per_block(mut self, txs: u64) -> Self {
        self.txs_per_block = txs;
        self
    }

    /// Set messages per transaction.
    pub fn with_msgs_per_tx(mut self, msgs: u64) -> Self {
        self.msgs_per_tx = msgs;
        self
    }

    /// Set the number of rounds.
    pub fn with_rounds(mut self, rounds: u64) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the per-transaction gas limit (0 = unbounded).
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Set the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the message-type percentages.
    pub fn with_message_type_distribution(mut self, mix: MessageTypeDistributionConfig) -> Self {
        self.message_type_distribution = mix;
        self
    }

    /// Add a target contract with its percentage.
    pub fn with_contract(
        mut self,
        contract_address: impl Into<String>,
        percentage: Decimal,
    ) -> Self {
        self.contract_distribution
            .push(ContractWeightConfig::new(contract_address, percentage));
        self
    }

    /// Validate every distribution and build the sampler set.
    pub fn validate(&self) -> Result<LoadTest, ConfigError> {
        for (field, value) in [
            ("txs_per_block", self.txs_per_block),
            ("msgs_per_tx", self.msgs_per_tx),
            ("rounds", self.rounds),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroCount { field });
            }
        }

        let price = self
            .price_distribution
            .validate()
            .map_err(|source| ConfigError::Distribution {
                field: "price_distribution",
                source,
            })?;
        let quantity = self
            .quantity_distribution
            .validate()
            .map_err(|source| ConfigError::Distribution {
                field: "quantity_distribution",
                source,
            })?;

        let message_types = self.message_type_distribution.validate()?;
        if !message_types.has_group(self.message_type) {
            return Err(ConfigError::GroupNotConfigured {
                group: self.message_type,
            });
        }

        let contracts = if self.contract_distribution.is_empty() {
            None
        } else {
            let contracts = CategoricalDistribution::from_pairs(
                self.contract_distribution
                    .iter()
                    .map(|entry| (entry.contract_address.clone(), entry.percentage)),
            )
            .map_err(|source| ConfigError::Distribution {
                field: "contract_distribution",
                source,
            })?;
            Some(contracts)
        };
        if self.message_type == MessageGroup::Dex && contracts.is_none() {
            return Err(ConfigError::NoContracts);
        }

        let budget = select_budget(self.gas_limit);
        debug!(
            price_values = price.distinct_count(),
            quantity_values = quantity.distinct_count(),
            contracts = contracts.as_ref().map_or(0, |c| c.len()),
            %budget,
            "Validated load-test distributions"
        );

        Ok(LoadTest {
            chain_id: self.chain_id.clone(),
            txs_per_block: self.txs_per_block,
            msgs_per_tx: self.msgs_per_tx,
            rounds: self.rounds,
            group: self.message_type,
            budget,
            seeds: SeedSource::new(self.seed),
            price,
            quantity,
            message_types,
            contracts,
        })
    }
}

/// A validated load test: every distribution is ready to sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTest {
    pub chain_id: String,
    pub txs_per_block: u64,
    pub msgs_per_tx: u64,
    pub rounds: u64,
    pub group: MessageGroup,
    pub budget: ExecutionBudget,
    pub seeds: SeedSource,
    pub price: NumericDistribution,
    pub quantity: NumericDistribution,
    pub message_types: MessageTypeMix,
    pub contracts: Option<ContractDistribution>,
}

impl LoadTest {
    /// Total transactions across all rounds.
    pub fn total_transactions(&self) -> u64 {
        self.rounds.saturating_mul(self.txs_per_block)
    }

    /// Override the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seeds = SeedSource::new(seed);
        self
    }

    /// Override the number of rounds.
    pub fn with_rounds(mut self, rounds: u64) -> Result<Self, ConfigError> {
        if rounds == 0 {
            return Err(ConfigError::ZeroCount { field: "rounds" });
        }
        self.rounds = rounds;
        Ok(self)
    }
}

/// Errors while loading or validating a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid {field}: {source}")]
    Distribution {
        field: &'static str,
        #[source]
        source: DistributionError,
    },

    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },

    #[error("message_type is {group} but message_type_distribution has no {group} percentages")]
    GroupNotConfigured { group: MessageGroup },

    #[error("contract_distribution is empty; dex messages need a target contract")]
    NoContracts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadtest_test_helpers::fixtures;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn dex_config() -> LoadTestConfig {
        LoadTestConfig::new(
            "sei-loadtest",
            MessageGroup::Dex,
            NumericDistributionConfig::new(dec("1"), dec("2"), 4),
            NumericDistributionConfig::new(dec("10"), dec("20"), 10),
        )
        .with_message_type_distribution(MessageTypeDistributionConfig::dex(
            dec("0.7"),
            dec("0.3"),
        ))
        .with_contract("sei1a", dec("0.5"))
        .with_contract("sei1b", dec("0.5"))
    }

    #[test]
    fn test_parse_and_validate_dex_fixture() {
        let config = LoadTestConfig::from_json_str(fixtures::DEX_CONFIG_JSON).unwrap();
        assert_eq!(config.message_type, MessageGroup::Dex);
        assert_eq!(config.price_distribution.min, dec("1.0"));
        assert_eq!(config.contract_distribution.len(), 3);

        let test = config.validate().unwrap();
        assert_eq!(test.price.distinct_count(), 4);
        assert!(test.message_types.has_group(MessageGroup::Dex));
        assert!(!test.message_types.has_group(MessageGroup::Staking));
        assert_eq!(test.contracts.as_ref().map(|c| c.len()), Some(3));
        assert_eq!(test.budget, select_budget(200_000));
    }

    #[test]
    fn test_parse_staking_fixture_without_contracts() {
        let config = LoadTestConfig::from_json_str(fixtures::STAKING_CONFIG_JSON).unwrap();
        let test = config.validate().unwrap();
        assert_eq!(test.group, MessageGroup::Staking);
        assert!(test.contracts.is_none());
        assert!(test.budget.is_unbounded());
    }

    #[test]
    fn test_numbers_accepted_for_decimals() {
        let json = fixtures::DEX_CONFIG_JSON.replace("\"min\": \"1.0\"", "\"min\": 1.0");
        let config = LoadTestConfig::from_json_str(&json).unwrap();
        assert_eq!(config.price_distribution.min, Decimal::ONE);
    }

    #[test]
    fn test_toml_matches_json() {
        let from_toml = LoadTestConfig::from_toml_str(fixtures::DEX_CONFIG_TOML).unwrap();
        let from_json = LoadTestConfig::from_json_str(fixtures::DEX_CONFIG_JSON).unwrap();
        assert_eq!(from_toml, from_json);
    }

    #[test]
    fn test_weights_not_summing_to_one_rejected() {
        let config = dex_config().with_message_type_distribution(
            MessageTypeDistributionConfig::dex(dec("0.5"), dec("0.4")),
        );
        let err = config.validate().unwrap_err();
        match err {
            ConfigError::Distribution { field, source } => {
                assert_eq!(field, "message_type_distribution.dex");
                assert!(matches!(source, DistributionError::WeightsDoNotSumToOne { .. }));
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_bad_contract_mix_names_field() {
        let config = dex_config().with_contract("sei1c", dec("0.1"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("Invalid contract_distribution"));
    }

    #[test]
    fn test_zero_distinct_values_rejected() {
        let mut config = dex_config();
        config.quantity_distribution.number_of_distinct_values = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Distribution {
                field: "quantity_distribution",
                source: DistributionError::NoDistinctValues,
            }
        ));
    }

    #[test]
    fn test_inverted_price_range_rejected() {
        let mut config = dex_config();
        config.price_distribution = NumericDistributionConfig::new(dec("5"), dec("1"), 2);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Distribution {
                field: "price_distribution",
                ..
            })
        ));
    }

    #[test]
    fn test_unconfigured_group_rejected() {
        let config = dex_config().with_message_type_distribution(
            MessageTypeDistributionConfig::staking(dec("1"), Decimal::ZERO, Decimal::ZERO),
        );
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GroupNotConfigured {
                group: MessageGroup::Dex
            })
        ));
    }

    #[test]
    fn test_dex_requires_contracts() {
        let mut config = dex_config();
        config.contract_distribution.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoContracts)));
    }

    #[test]
    fn test_zero_counts_rejected() {
        let err = dex_config().with_rounds(0).validate().unwrap_err();
        assert_eq!(err.to_string(), "rounds must be at least 1");
    }

    #[test]
    fn test_rounds_override() {
        let test = dex_config().validate().unwrap();

        let err = test.clone().with_rounds(0).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCount { field: "rounds" }));

        let test = test.with_rounds(7).unwrap();
        assert_eq!(test.rounds, 7);
        assert_eq!(test.total_transactions(), 7 * test.txs_per_block);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, fixtures::DEX_CONFIG_JSON).unwrap();

        let test = LoadTestConfig::load(&path).unwrap();
        assert_eq!(test.chain_id, "sei-loadtest");
        assert_eq!(test.total_transactions(), 20);

        let toml_path = dir.path().join("config.toml");
        std::fs::write(&toml_path, fixtures::DEX_CONFIG_TOML).unwrap();
        assert_eq!(LoadTestConfig::load(&toml_path).unwrap(), test);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = LoadTestConfig::load("/nonexistent/loadtest.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/loadtest.json"));
    }
}
