//! Default command: hash favicons for URLs on stdin.

use anyhow::Result;
use faviqon_core::config::FaviqonConfig;
use faviqon_core::fetch::{CurlFetcher, FetchOptions};
use faviqon_core::output::OutputMode;
use faviqon_core::pipeline::{self, ScanOptions};
use std::io;
use std::sync::Arc;

/// Read URLs from stdin, fetch and group their favicons, print to stdout.
/// Individual fetch failures are logged, not returned.
pub async fn run_scan(cfg: &FaviqonConfig, mode: OutputMode, annotate: bool) -> Result<()> {
    let fetch_opts = FetchOptions::from(cfg);
    if fetch_opts.accept_invalid_certs {
        tracing::debug!("TLS certificate verification disabled for favicon fetches");
    }
    let fetcher = Arc::new(CurlFetcher::new(fetch_opts));
    let opts = ScanOptions::from_config(cfg, mode, annotate);

    let input = io::stdin().lock();
    let mut out = io::stdout().lock();
    pipeline::run(input, &mut out, fetcher, &opts).await?;
    Ok(())
}
