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

//! Line-oriented admission service.
//!
//! Reads newline-delimited JSON requests, runs each through the ante chain and writes one
//! JSON verdict per non-blank input line, in input order:
//!
//! ```text
//! -> {"mode":"check","height":12,"msgs":[{"type_url":"/cosmos.bank.v1beta1.MsgSend"}]}
//! <- {"line":1,"accepted":true}
//! ```
//!
//! At most `concurrency` requests are in flight. Each verdict is flushed as soon as it and
//! every earlier verdict are ready, so an open input keeps producing output.

use std::io;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::core::ante::AnteChain;
use crate::core::types::{ChainCtx, ExecMode, Msg, Tx};

/// Default number of requests evaluated concurrently.
pub const DEFAULT_CONCURRENCY: usize = 64;

/// One admission request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TxRequest {
    /// Processing mode.
    pub mode: ExecMode,
    /// Current block height.
    pub height: i64,
    /// Transaction messages.
    #[serde(default)]
    pub msgs: Vec<Msg>,
}

/// Outcome for one input line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// 1-based input line number (blank lines count).
    pub line: usize,
    /// True when every stage forwarded the transaction.
    pub accepted: bool,
    /// Decode error or rejection reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Totals for a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdmissionStats {
    /// Accepted transactions.
    pub accepted: usize,
    /// Rejected or undecodable lines.
    pub rejected: usize,
}

/// Decode one request line and run it through `chain`.
pub fn admit(chain: &AnteChain, line_no: usize, line: &str) -> Verdict {
    let outcome = serde_json::from_str::<TxRequest>(line)
        .map_err(|e| format!("decode: {e}"))
        .and_then(|req| {
            let ctx = ChainCtx::new(req.mode, req.height);
            chain.handle(&ctx, &Tx::new(req.msgs)).map_err(|e| e.to_string())
        });
    Verdict { line: line_no, accepted: outcome.is_ok(), error: outcome.err() }
}

/// Admit every line of `input`, writing verdicts to `output` until `input` ends.
pub async fn serve_lines<R, W>(
    chain: Arc<AnteChain>,
    input: R,
    mut output: W,
    concurrency: usize,
) -> io::Result<AdmissionStats>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin,
{
    let lines = stream::unfold(input.lines(), |mut lines| async move {
        match lines.next_line().await {
            Ok(Some(line)) => Some((Ok(line), lines)),
            Ok(None) => None,
            Err(e) => Some((Err(e), lines)),
        }
    });

    let verdicts = lines
        .enumerate()
        .filter(|(_, line)| {
            let blank = matches!(line, Ok(l) if l.trim().is_empty());
            futures::future::ready(!blank)
        })
        .map(|(idx, line)| {
            let chain = chain.clone();
            async move {
                let line = line?;
                tokio::spawn(async move { admit(&chain, idx + 1, &line) })
                    .await
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
            }
        })
        .buffered(concurrency.max(1));
    futures::pin_mut!(verdicts);

    let mut stats = AdmissionStats::default();
    while let Some(verdict) = verdicts.next().await {
        let verdict = verdict?;
        if verdict.accepted {
            stats.accepted += 1;
        } else {
            stats.rejected += 1;
            debug!(line = verdict.line, error = ?verdict.error, "request rejected");
        }

        let mut out = serde_json::to_vec(&verdict)?;
        out.push(b'\n');
        output.write_all(&out).await?;
        output.flush().await?;
    }
    Ok(stats)
}
