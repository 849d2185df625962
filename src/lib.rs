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

//! Amunchain proxy node - mempool transaction filter.
//!
//! This crate provides:
//! - An operator-configured allowlist of message types, compiled once at startup
//! - A per-contract allowlist for contract execution messages
//! - An ante decorator that gates first-time mempool admission (`CheckTx`)
//! - Monitoring via Prometheus metrics and structured JSON logging

/// Core primitives (transaction model, config, ante pipeline, tx filter).
pub mod core;
/// Observability (metrics, logging setup).
pub mod monitoring;
