#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Amunchain proxy admission entrypoint.
//!
//! Loads the node config, compiles the tx filter (exit code 1 on a bad allowlist), then
//! serves newline-delimited JSON transactions from stdin, writing one verdict per line
//! to stdout as soon as it is decided. See `core::admission` for the line format.

use std::path::Path;
use std::sync::Arc;

use amunchain_txfilter::core::admission::{serve_lines, DEFAULT_CONCURRENCY};
use amunchain_txfilter::core::ante::AnteChain;
use amunchain_txfilter::core::config::NodeConfig;
use amunchain_txfilter::core::txfilter::{FilterPolicy, TxFilterDecorator};
use amunchain_txfilter::monitoring::{logging, metrics::Metrics};
use anyhow::{Context, Result};
use tokio::io::BufReader;
use tracing::{error, info, warn};

fn env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn load_config(path: &str) -> Result<NodeConfig> {
    if !Path::new(path).exists() {
        warn!(path, "config file not found; using defaults");
        return Ok(NodeConfig::default());
    }
    NodeConfig::load(path).with_context(|| format!("loading {path}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init(env("TXFILTER_LOG_JSON", "0") == "1");

    let config_path = env("TXFILTER_CONFIG", "./config/node.toml");
    let cfg = load_config(&config_path)?;

    info!(
        node = %cfg.node.name,
        build = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
        rustc = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown"),
        "amunchain proxy starting"
    );

    let policy = match FilterPolicy::from_config(&cfg.tx_filter) {
        Ok(p) => Arc::new(p),
        Err(e) => {
            error!(%e, "invalid tx-filter configuration");
            std::process::exit(1);
        }
    };

    let concurrency = env("TXFILTER_CONCURRENCY", "")
        .parse::<usize>()
        .unwrap_or(DEFAULT_CONCURRENCY);

    let metrics = Arc::new(Metrics::new().context("metrics init")?);
    let chain = Arc::new(
        AnteChain::new().with(TxFilterDecorator::new(policy).with_metrics(metrics.clone())),
    );

    let stats = serve_lines(
        chain,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        concurrency,
    )
    .await?;
    info!(accepted = stats.accepted, rejected = stats.rejected, "input closed");

    match metrics.render() {
        Ok(text) => eprint!("{text}"),
        Err(e) => warn!(?e, "metrics render failed"),
    }
    Ok(())
}
