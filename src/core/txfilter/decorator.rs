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

use std::sync::Arc;

use tracing::debug;

use super::{FilterPolicy, TxFilterError};
use crate::core::ante::{AnteDecorator, AnteError, Next};
use crate::core::types::{ChainCtx, Msg, Tx};
use crate::monitoring::metrics::Metrics;

/// Blocks transactions whose messages are not on the allowlist.
///
/// Filtering applies to first-time admission (`CheckTx`) only:
/// - `ReCheckTx` already passed once and is forwarded.
/// - the configured initial block height is forwarded (genesis / seed txs).
/// - block execution is forwarded; this is a local mempool rule, not a validity rule.
#[derive(Clone)]
pub struct TxFilterDecorator {
    policy: Arc<FilterPolicy>,
    metrics: Option<Arc<Metrics>>,
}

impl TxFilterDecorator {
    /// Create a decorator over a shared policy.
    pub fn new(policy: Arc<FilterPolicy>) -> Self {
        Self { policy, metrics: None }
    }

    /// Count decisions in `metrics`.
    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Policy in use.
    pub fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    /// Check messages against the policy regardless of mode.
    pub fn check_if_allowed(&self, msgs: &[Msg]) -> Result<(), TxFilterError> {
        self.policy.check_msgs(msgs)
    }

    fn bypass(&self, ctx: &ChainCtx) -> bool {
        ctx.is_recheck_tx() || ctx.block_height == self.policy.initial_block_height
    }

    fn record(&self, res: &Result<(), TxFilterError>) {
        let Some(m) = &self.metrics else {
            return;
        };
        m.txfilter_checked_total.inc();
        match res {
            Ok(()) => {}
            Err(TxFilterError::MsgNotAllowed(_)) => m.txfilter_rejected_msg_total.inc(),
            Err(TxFilterError::ContractNotAllowed(_)) => m.txfilter_rejected_contract_total.inc(),
        }
    }
}

impl AnteDecorator for TxFilterDecorator {
    fn ante_handle(&self, ctx: &ChainCtx, tx: &Tx, next: Next<'_>) -> Result<(), AnteError> {
        if self.bypass(ctx) {
            debug!(mode = ?ctx.mode, height = ctx.block_height, "tx filter bypassed");
            if let Some(m) = &self.metrics {
                m.txfilter_bypassed_total.inc();
            }
            return next.run(ctx, tx);
        }

        if ctx.is_check_tx() {
            let res = self.check_if_allowed(tx.msgs());
            self.record(&res);
            if let Err(e) = res {
                debug!(height = ctx.block_height, reason = %e, "tx rejected by filter");
                return Err(e.into());
            }
        }

        next.run(ctx, tx)
    }
}
