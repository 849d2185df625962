// Copyright (c) 2026 Amunchain
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use tracing::info;

use super::{AllowedMsgPattern, ContractAllowlist, PolicyError, TxFilterError, WASM_MODULE};
use crate::core::config::TxFilterConfig;
use crate::core::types::Msg;

/// Immutable filter policy, built once at startup and shared read-only.
#[derive(Clone, Debug)]
pub struct FilterPolicy {
    /// Allowed message types.
    pub pattern: AllowedMsgPattern,
    /// Height at which filtering is bypassed (genesis / seed transactions).
    pub initial_block_height: i64,
    /// Allowed contracts for `MsgExecuteContract`.
    pub contracts: ContractAllowlist,
}

impl FilterPolicy {
    /// Assemble a policy from already compiled parts.
    pub fn new(
        pattern: AllowedMsgPattern,
        initial_block_height: i64,
        contracts: ContractAllowlist,
    ) -> Self {
        Self { pattern, initial_block_height, contracts }
    }

    /// Compile operator settings.
    pub fn from_config(cfg: &TxFilterConfig) -> Result<Self, PolicyError> {
        let pattern = AllowedMsgPattern::compile(&cfg.allowed_targets)?;
        let contracts = ContractAllowlist::compile(
            cfg.allowed_contracts.iter().cloned(),
            cfg.disable_contract_filter,
        );

        info!(
            pattern = pattern.as_str().unwrap_or("<deny all>"),
            initial_block_height = cfg.initial_block_height,
            contract_filter = !contracts.is_disabled(),
            "tx filter policy compiled"
        );

        Ok(Self::new(pattern, cfg.initial_block_height, contracts))
    }

    /// Check every message in order; the first failure wins.
    pub fn check_msgs(&self, msgs: &[Msg]) -> Result<(), TxFilterError> {
        for msg in msgs {
            let type_url = msg.type_url();
            if !self.pattern.is_match(type_url) {
                return Err(TxFilterError::MsgNotAllowed(type_url.to_string()));
            }

            if type_url.split('.').nth(1) == Some(WASM_MODULE) {
                self.check_wasm_msg(msg)?;
            }
        }
        Ok(())
    }

    // Only contract execution is eligible; other wasm messages are refused even when
    // the module prefix is allowed.
    fn check_wasm_msg(&self, msg: &Msg) -> Result<(), TxFilterError> {
        match msg {
            Msg::ExecuteContract(exec) => {
                if self.contracts.permits(&exec.contract) {
                    Ok(())
                } else {
                    Err(TxFilterError::ContractNotAllowed(exec.contract.clone()))
                }
            }
            other => Err(TxFilterError::MsgNotAllowed(other.type_url().to_string())),
        }
    }
}
