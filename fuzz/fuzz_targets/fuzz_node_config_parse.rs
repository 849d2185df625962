// Copyright (c) 2026 Amunchain
// Licensed under the Apache-2.0 License.

#![no_main]
#![forbid(unsafe_code)]

use amunchain_txfilter::core::config::NodeConfig;
use amunchain_txfilter::core::txfilter::FilterPolicy;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parser robustness: config parse and policy compile must not panic.
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(cfg) = NodeConfig::from_toml_str(s) {
            let _ = FilterPolicy::from_config(&cfg.tx_filter);
        }
    }
});
