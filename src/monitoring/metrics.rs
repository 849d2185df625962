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

use prometheus::{Encoder, IntCounter, Registry, TextEncoder};
use thiserror::Error;

/// Metrics errors.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Metric creation or registration failed.
    #[error("prometheus")]
    Prom,
    /// Text exposition failed.
    #[error("encode")]
    Encode,
}

/// Metrics container.
#[derive(Clone)]
pub struct Metrics {
    /// Registry.
    pub registry: Registry,

    /// Transactions evaluated by the tx filter.
    pub txfilter_checked_total: IntCounter,
    /// Transactions forwarded without evaluation (recheck / initial height).
    pub txfilter_bypassed_total: IntCounter,
    /// Rejections for a message type outside the allowlist.
    pub txfilter_rejected_msg_total: IntCounter,
    /// Rejections for a contract outside the contract allowlist.
    pub txfilter_rejected_contract_total: IntCounter,
}

fn counter(registry: &Registry, name: &str, help: &str) -> Result<IntCounter, MetricsError> {
    let c = IntCounter::new(name, help).map_err(|_| MetricsError::Prom)?;
    registry
        .register(Box::new(c.clone()))
        .map_err(|_| MetricsError::Prom)?;
    Ok(c)
}

impl Metrics {
    /// Create and register metrics.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let txfilter_checked_total = counter(
            &registry,
            "amunchain_txfilter_checked_total",
            "Transactions evaluated by the tx filter",
        )?;
        let txfilter_bypassed_total = counter(
            &registry,
            "amunchain_txfilter_bypassed_total",
            "Transactions forwarded without tx filter evaluation",
        )?;
        let txfilter_rejected_msg_total = counter(
            &registry,
            "amunchain_txfilter_rejected_msg_total",
            "Transactions rejected for a disallowed message type",
        )?;
        let txfilter_rejected_contract_total = counter(
            &registry,
            "amunchain_txfilter_rejected_contract_total",
            "Transactions rejected for a disallowed contract",
        )?;

        Ok(Self {
            registry,
            txfilter_checked_total,
            txfilter_bypassed_total,
            txfilter_rejected_msg_total,
            txfilter_rejected_contract_total,
        })
    }

    /// Render all metrics in the Prometheus text format.
    pub fn render(&self) -> Result<String, MetricsError> {
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buf)
            .map_err(|_| MetricsError::Encode)?;
        String::from_utf8(buf).map_err(|_| MetricsError::Encode)
    }
}
