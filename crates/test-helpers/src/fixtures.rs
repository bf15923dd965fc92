//! Config fixtures.
//!
//! `DEX_CONFIG_JSON` and `DEX_CONFIG_TOML` describe the same load test.

/// DEX load test: 4 rounds of 5 transactions, 2 messages each, three contracts.
pub const DEX_CONFIG_JSON: &str = r#"{
    "chain_id": "sei-loadtest",
    "txs_per_block": 5,
    "msgs_per_tx": 2,
    "rounds": 4,
    "message_type": "dex",
    "gas_limit": 200000,
    "seed": 42,
    "price_distribution": {
        "min": "1.0",
        "max": "2.0",
        "number_of_distinct_values": 4
    },
    "quantity_distribution": {
        "min": "10",
        "max": "20",
        "number_of_distinct_values": 10
    },
    "message_type_distribution": {
        "limit_order_percentage": "0.7",
        "market_order_percentage": "0.3",
        "delegate_percentage": "0",
        "undelegate_percentage": "0",
        "begin_redelegate_percentage": "0"
    },
    "contract_distribution": [
        { "contract_address": "sei1contracta", "percentage": "0.5" },
        { "contract_address": "sei1contractb", "percentage": "0.3" },
        { "contract_address": "sei1contractc", "percentage": "0.2" }
    ]
}"#;

/// Same load test as [`DEX_CONFIG_JSON`], in TOML.
pub const DEX_CONFIG_TOML: &str = r#"
chain_id = "sei-loadtest"
txs_per_block = 5
msgs_per_tx = 2
rounds = 4
message_type = "dex"
gas_limit = 200000
seed = 42

[price_distribution]
min = "1.0"
max = "2.0"
number_of_distinct_values = 4

[quantity_distribution]
min = "10"
max = "20"
number_of_distinct_values = 10

[message_type_distribution]
limit_order_percentage = "0.7"
market_order_percentage = "0.3"
delegate_percentage = "0"
undelegate_percentage = "0"
begin_redelegate_percentage = "0"

[[contract_distribution]]
contract_address = "sei1contracta"
percentage = "0.5"

[[contract_distribution]]
contract_address = "sei1contractb"
percentage = "0.3"

[[contract_distribution]]
contract_address = "sei1contractc"
percentage = "0.2"
"#;

/// Staking load test: no contracts, unbounded gas, default seed.
pub const STAKING_CONFIG_JSON: &str = r#"{
    "chain_id": "sei-loadtest",
    "txs_per_block": 3,
    "msgs_per_tx": 1,
    "rounds": 2,
    "message_type": "staking",
    "price_distribution": {
        "min": "0",
        "max": "0",
        "number_of_distinct_values": 1
    },
    "quantity_distribution": {
        "min": "1000",
        "max": "2000",
        "number_of_distinct_values": 5
    },
    "message_type_distribution": {
        "delegate_percentage": "0.5",
        "undelegate_percentage": "0.25",
        "begin_redelegate_percentage": "0.25"
    }
}"#;

/// DEX load test whose order-type weights sum to 0.9.
pub const BAD_WEIGHTS_CONFIG_JSON: &str = r#"{
    "chain_id": "sei-loadtest",
    "txs_per_block": 1,
    "msgs_per_tx": 1,
    "rounds": 1,
    "message_type": "dex",
    "price_distribution": { "min": "1", "max": "2", "number_of_distinct_values": 2 },
    "quantity_distribution": { "min": "1", "max": "2", "number_of_distinct_values": 2 },
    "message_type_distribution": {
        "limit_order_percentage": "0.5",
        "market_order_percentage": "0.4"
    },
    "contract_distribution": [
        { "contract_address": "sei1contracta", "percentage": "1" }
    ]
}"#;
