// Copyright (c) 2026 Amunchain
// Licensed under the Apache License, Version 2.0

#![forbid(unsafe_code)]

use amunchain_txfilter::core::config::{ConfigError, NodeConfig, TxFilterConfig};
use amunchain_txfilter::core::txfilter::{ContractAllowlist, FilterPolicy, PolicyError};
use amunchain_txfilter::core::types::{Msg, Tx};
use std::fs;

fn msg(type_url: &str) -> Msg {
    Msg::other(type_url).expect("valid type url")
}

#[test]
fn loads_tx_filter_section_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("node.toml");
    fs::write(
        &path,
        r#"
[node]
name = "proxy-7"

[tx-filter]
allowed-targets = ["cosmos.bank", "cosmwasm.wasm"]
initial-block-height = 42
allowed-contracts = ["allowedAddress", "allowedAddress"]
disable-contract-filter = false
"#,
    )
    .expect("write");

    let cfg = NodeConfig::load(&path).expect("load");
    assert_eq!(cfg.node.name, "proxy-7");
    assert_eq!(cfg.tx_filter.initial_block_height, 42);

    let policy = FilterPolicy::from_config(&cfg.tx_filter).expect("compile");
    assert_eq!(policy.initial_block_height, 42);
    assert!(policy.contracts.permits("allowedAddress"));
    assert!(!policy.contracts.permits("forbiddenAddress"));
    assert!(policy.check_msgs(&[Msg::execute_contract("allowedAddress")]).is_ok());
}

#[test]
fn missing_keys_take_defaults() {
    let cfg = NodeConfig::from_toml_str("").expect("empty config");
    assert_eq!(cfg.tx_filter, TxFilterConfig::default());
    assert_eq!(cfg.tx_filter.allowed_targets, vec!["cosmos.bank".to_string()]);
    assert_eq!(cfg.tx_filter.initial_block_height, 0);
    assert!(cfg.tx_filter.allowed_contracts.is_empty());
    assert!(!cfg.tx_filter.disable_contract_filter);

    let cfg = NodeConfig::from_toml_str("[tx-filter]\ndisable-contract-filter = true\n").unwrap();
    assert_eq!(cfg.tx_filter.allowed_targets, vec!["cosmos.bank".to_string()]);
    let policy = FilterPolicy::from_config(&cfg.tx_filter).unwrap();
    assert_eq!(policy.contracts, ContractAllowlist::Disabled);
}

#[test]
fn explicit_empty_targets_deny_all() {
    let cfg = NodeConfig::from_toml_str("[tx-filter]\nallowed-targets = []\n").unwrap();
    let policy = FilterPolicy::from_config(&cfg.tx_filter).unwrap();
    assert!(policy.pattern.is_deny_all());
    assert!(policy.check_msgs(&[msg("/cosmos.bank.v1beta1.MsgSend")]).is_err());
    assert!(policy.check_msgs(Tx::default().msgs()).is_ok());
}

#[test]
fn invalid_target_refuses_policy() {
    let cfg = NodeConfig::from_toml_str(
        "[tx-filter]\nallowed-targets = [\"wrong.prefix.non-standard.namespace.test\"]\n",
    )
    .unwrap();
    let err = FilterPolicy::from_config(&cfg.tx_filter).unwrap_err();
    assert!(matches!(err, PolicyError::InvalidTarget { segments: 5, .. }));
}

#[test]
fn unreadable_and_malformed_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.toml");
    assert!(matches!(NodeConfig::load(&missing), Err(ConfigError::Read { .. })));

    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "[tx-filter]\ninitial-block-height = \"ten\"\n").unwrap();
    assert!(matches!(NodeConfig::load(&bad), Err(ConfigError::Parse(_))));
}
