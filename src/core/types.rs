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
#![warn(missing_docs)]

//! Transaction model seen by the ante pipeline.
//!
//! Only what admission needs is modelled: the message type URL, and for contract
//! execution the target contract address. Message bodies are opaque here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type URL of the contract execution message.
pub const MSG_EXECUTE_CONTRACT_TYPE_URL: &str = "/cosmwasm.wasm.v1.MsgExecuteContract";

/// Message envelope decoding errors.
#[derive(Debug, Error)]
pub enum MsgError {
    /// Type URL is empty or not slash-prefixed.
    #[error("invalid type url {0:?}")]
    InvalidTypeUrl(String),
    /// Execute-contract message without a contract address (or built as opaque).
    #[error("/cosmwasm.wasm.v1.MsgExecuteContract requires a contract address")]
    MissingContract,
}

/// Contract execution message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgExecuteContract {
    /// Target contract address (bech32).
    pub contract: String,
}

/// A transaction message, identified by its type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MsgEnvelope", into = "MsgEnvelope")]
pub enum Msg {
    /// `/cosmwasm.wasm.v1.MsgExecuteContract`.
    ExecuteContract(MsgExecuteContract),
    /// Any other message, known only by its type URL.
    Other(OpaqueMsg),
}

/// Message other than contract execution. Only built through [`Msg::other`], so it never
/// carries [`MSG_EXECUTE_CONTRACT_TYPE_URL`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpaqueMsg {
    type_url: String,
}

impl OpaqueMsg {
    /// Fully qualified type URL, e.g. `/cosmos.bank.v1beta1.MsgSend`.
    pub fn type_url(&self) -> &str {
        &self.type_url
    }
}

impl Msg {
    /// Build an opaque message from its type URL.
    ///
    /// The execute-contract URL is refused: that message needs its contract address and
    /// must be built with [`Msg::execute_contract`].
    pub fn other(type_url: impl Into<String>) -> Result<Self, MsgError> {
        let type_url = type_url.into();
        if !type_url.starts_with('/') || type_url.len() < 2 {
            return Err(MsgError::InvalidTypeUrl(type_url));
        }
        if type_url == MSG_EXECUTE_CONTRACT_TYPE_URL {
            return Err(MsgError::MissingContract);
        }
        Ok(Msg::Other(OpaqueMsg { type_url }))
    }

    /// Build a contract execution message.
    pub fn execute_contract(contract: impl Into<String>) -> Self {
        Msg::ExecuteContract(MsgExecuteContract { contract: contract.into() })
    }

    /// Fully qualified, slash-prefixed type URL.
    pub fn type_url(&self) -> &str {
        match self {
            Msg::ExecuteContract(_) => MSG_EXECUTE_CONTRACT_TYPE_URL,
            Msg::Other(m) => m.type_url(),
        }
    }
}

/// Wire form of [`Msg`].
#[derive(Clone, Debug, Serialize, Deserialize)]
struct MsgEnvelope {
    type_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contract: Option<String>,
}

impl TryFrom<MsgEnvelope> for Msg {
    type Error = MsgError;

    fn try_from(env: MsgEnvelope) -> Result<Self, Self::Error> {
        if env.type_url == MSG_EXECUTE_CONTRACT_TYPE_URL {
            let contract = env.contract.ok_or(MsgError::MissingContract)?;
            return Ok(Msg::execute_contract(contract));
        }
        Msg::other(env.type_url)
    }
}

impl From<Msg> for MsgEnvelope {
    fn from(msg: Msg) -> Self {
        match msg {
            Msg::ExecuteContract(m) => MsgEnvelope {
                type_url: MSG_EXECUTE_CONTRACT_TYPE_URL.to_string(),
                contract: Some(m.contract),
            },
            Msg::Other(m) => MsgEnvelope { type_url: m.type_url, contract: None },
        }
    }
}

/// A transaction: an ordered list of messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tx {
    /// Messages in execution order.
    pub msgs: Vec<Msg>,
}

impl Tx {
    /// Create a transaction from its messages.
    pub fn new(msgs: Vec<Msg>) -> Self {
        Self { msgs }
    }

    /// Messages in execution order.
    pub fn msgs(&self) -> &[Msg] {
        &self.msgs
    }
}

/// Node-defined transaction processing mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecMode {
    /// First-time mempool admission.
    Check,
    /// Re-validation of an already admitted transaction (mempool maintenance).
    #[serde(alias = "recheck")]
    ReCheck,
    /// Execution during block application.
    Deliver,
    /// Gas estimation; never admitted.
    Simulate,
}

/// Chain context handed to every ante stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainCtx {
    /// Processing mode.
    pub mode: ExecMode,
    /// Height of the block being built or checked against.
    pub block_height: i64,
}

impl ChainCtx {
    /// Create a context.
    pub fn new(mode: ExecMode, block_height: i64) -> Self {
        Self { mode, block_height }
    }

    /// True for first-time admission.
    pub fn is_check_tx(&self) -> bool {
        self.mode == ExecMode::Check
    }

    /// True for mempool re-validation.
    pub fn is_recheck_tx(&self) -> bool {
        self.mode == ExecMode::ReCheck
    }
}
