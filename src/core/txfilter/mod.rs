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

//! Transaction filter for proxy nodes.
//!
//! A proxy node only relays transactions whose messages are on an operator allowlist.
//! Two error types keep the failure modes apart:
//! - [`PolicyError`]: bad operator config; the node must refuse to start.
//! - [`TxFilterError`]: a rejected transaction; the node keeps serving.

use thiserror::Error;

/// Contract address allowlist.
pub mod contracts;
/// Ante decorator applying the policy.
pub mod decorator;
/// Message type pattern compiler.
pub mod pattern;
/// Compiled filter policy.
pub mod policy;

pub use contracts::ContractAllowlist;
pub use decorator::TxFilterDecorator;
pub use pattern::AllowedMsgPattern;
pub use policy::FilterPolicy;

/// Module name of contract messages (second segment of their type URL).
pub const WASM_MODULE: &str = "wasm";

/// Policy compilation errors (fatal at startup).
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Target does not have 1-4 dot-separated segments.
    #[error("invalid tx-filter target {target:?}: {segments} segments, expected 1-4")]
    InvalidTarget {
        /// Offending target.
        target: String,
        /// Number of segments found.
        segments: usize,
    },
    /// Combined expression failed to build.
    #[error("tx-filter pattern: {0}")]
    Pattern(#[source] regex::Error),
}

/// Admission rejections (per transaction).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TxFilterError {
    /// Message type is not on the allowlist.
    #[error("{0} is not allowed on proxy node")]
    MsgNotAllowed(String),
    /// Contract address is not on the contract allowlist.
    #[error("{0} is not allowed contract")]
    ContractNotAllowed(String),
}
