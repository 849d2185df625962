// Copyright (c) 2026 Amunchain
// Licensed under the Apache-2.0 License.

#![no_main]
#![forbid(unsafe_code)]

use amunchain_txfilter::core::txfilter::{AllowedMsgPattern, ContractAllowlist, FilterPolicy};
use amunchain_txfilter::core::types::Msg;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    targets: Vec<String>,
    contracts: Vec<String>,
    disable_contract_filter: bool,
    type_urls: Vec<String>,
    exec_contract: Option<String>,
}

fuzz_target!(|input: Input| {
    // Arbitrary targets either compile or fail with a config error; never panic.
    let Ok(pattern) = AllowedMsgPattern::compile(&input.targets) else {
        return;
    };
    assert!(!pattern.is_match(""));

    let contracts = ContractAllowlist::compile(input.contracts, input.disable_contract_filter);
    let policy = FilterPolicy::new(pattern, 0, contracts);

    let mut msgs: Vec<Msg> = input
        .type_urls
        .into_iter()
        .filter_map(|u| Msg::other(u).ok())
        .collect();
    if let Some(c) = input.exec_contract {
        msgs.push(Msg::execute_contract(c));
    }
    let _ = policy.check_msgs(&msgs);
});
