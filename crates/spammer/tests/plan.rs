//! End-to-end planning tests
//!
//! Config file on disk -> validated load test -> transaction plans.

use loadtest_execution::ExecutionBudget;
use loadtest_spammer::config::{ConfigError, LoadTestConfig};
use loadtest_spammer::runner::PlanRunner;
use loadtest_spammer::TxPlan;
use loadtest_test_helpers::fixtures;
use loadtest_types::{MessageGroup, MessagePlan};
use rust_decimal::Decimal;
use std::convert::Infallible;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn collect(runner: &PlanRunner) -> Vec<TxPlan> {
    let mut txs = Vec::new();
    runner
        .run(|tx| {
            txs.push(tx);
            Ok::<(), Infallible>(())
        })
        .unwrap();
    txs
}

#[test]
fn test_dex_config_to_plans() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "dex.json", fixtures::DEX_CONFIG_JSON);

    let runner = PlanRunner::new(LoadTestConfig::load(&path).unwrap()).unwrap();
    let txs = collect(&runner);
    assert_eq!(txs.len(), 20);

    let prices: Vec<Decimal> = ["1.0", "1.25", "1.5", "1.75"]
        .iter()
        .map(|s| Decimal::from_str_exact(s).unwrap())
        .collect();
    let contracts = ["sei1contracta", "sei1contractb", "sei1contractc"];

    for tx in &txs {
        assert_eq!(tx.budget.limit(), Some(200_000));
        assert_eq!(tx.messages.len(), 2);
        for message in &tx.messages {
            match message {
                MessagePlan::LimitOrder {
                    contract,
                    price,
                    quantity,
                }
                | MessagePlan::MarketOrder {
                    contract,
                    price,
                    quantity,
                } => {
                    assert!(prices.contains(price), "price {price} off grid");
                    assert!(*quantity >= Decimal::TEN && *quantity < Decimal::from(20));
                    assert!(contracts.contains(&contract.as_str()));
                }
                other => panic!("staking message in dex load test: {other:?}"),
            }
        }
    }
}

#[test]
fn test_staking_config_to_plans() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "staking.json", fixtures::STAKING_CONFIG_JSON);

    let runner = PlanRunner::new(LoadTestConfig::load(&path).unwrap()).unwrap();
    let txs = collect(&runner);
    assert_eq!(txs.len(), 6);

    for tx in &txs {
        assert_eq!(tx.budget, ExecutionBudget::Unbounded);
        for message in &tx.messages {
            assert_eq!(message.message_type().group(), MessageGroup::Staking);
        }
    }
}

#[test]
fn test_toml_and_json_configs_plan_identically() {
    let dir = TempDir::new().unwrap();
    let json = write_config(&dir, "dex.json", fixtures::DEX_CONFIG_JSON);
    let toml = write_config(&dir, "dex.toml", fixtures::DEX_CONFIG_TOML);

    let from_json = collect(&PlanRunner::new(LoadTestConfig::load(&json).unwrap()).unwrap());
    let from_toml = collect(&PlanRunner::new(LoadTestConfig::load(&toml).unwrap()).unwrap());
    assert_eq!(from_json, from_toml);
}

#[test]
fn test_bad_weights_fail_before_generation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "bad.json", fixtures::BAD_WEIGHTS_CONFIG_JSON);

    let err = LoadTestConfig::load(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Distribution {
            field: "message_type_distribution.dex",
            ..
        }
    ));
    assert!(err.to_string().contains("0.9"));
}

#[test]
fn test_plans_serialize_for_transaction_builder() {
    let test = LoadTestConfig::from_json_str(fixtures::DEX_CONFIG_JSON)
        .unwrap()
        .validate()
        .unwrap();
    let runner = PlanRunner::new(test).unwrap();
    let tx = runner.generate_tx(0, 0);

    let json = serde_json::to_value(&tx).unwrap();
    assert_eq!(json["round"], 0);
    assert_eq!(json["budget"]["kind"], "capped");
    assert_eq!(json["budget"]["limit"], 200_000);

    let first = &json["messages"][0];
    assert!(first["type"] == "limit_order" || first["type"] == "market_order");
    assert!(first["contract"].as_str().unwrap().starts_with("sei1contract"));

    let back: TxPlan = serde_json::from_value(json).unwrap();
    assert_eq!(back, tx);
}
