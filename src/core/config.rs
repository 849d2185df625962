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

//! Node configuration file (TOML).
//!
//! ```text
//! [node]
//! name = "proxy-1"
//!
//! [tx-filter]
//! allowed-targets = ["cosmos.bank", "cosmwasm.wasm"]
//! initial-block-height = 0
//! allowed-contracts = ["link1..."]
//! disable-contract-filter = false
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Module trusted when the operator lists nothing.
pub const DEFAULT_ALLOWED_TARGET: &str = "cosmos.bank";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Cannot read config file.
    #[error("read config {path}: {source}")]
    Read {
        /// File path.
        path: String,
        /// Underlying io error.
        source: std::io::Error,
    },
    /// Cannot parse TOML.
    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Node configuration root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Node settings.
    pub node: NodeSettings,
    /// Transaction filter settings.
    #[serde(rename = "tx-filter")]
    pub tx_filter: TxFilterConfig,
}

/// Node settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSettings {
    /// Human-readable name.
    pub name: String,
}

impl Default for NodeSettings {
    fn default() -> Self {
        Self { name: "amunchain-proxy".to_string() }
    }
}

/// Transaction filter settings (`[tx-filter]`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TxFilterConfig {
    /// Allowed message targets (`namespace[.module[.version[.Msg]]]`).
    /// An explicitly empty list denies every message.
    pub allowed_targets: Vec<String>,
    /// Block height at which filtering is bypassed.
    pub initial_block_height: i64,
    /// Contract addresses allowed for `MsgExecuteContract`.
    pub allowed_contracts: Vec<String>,
    /// Turn off the contract allowlist (any contract may be executed).
    pub disable_contract_filter: bool,
}

impl Default for TxFilterConfig {
    fn default() -> Self {
        Self {
            allowed_targets: vec![DEFAULT_ALLOWED_TARGET.to_string()],
            initial_block_height: 0,
            allowed_contracts: Vec::new(),
            disable_contract_filter: false,
        }
    }
}

impl NodeConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}
