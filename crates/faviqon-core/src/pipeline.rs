//! End-to-end run: read URLs → dispatch → aggregate → render.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::aggregate;
use crate::config::FaviqonConfig;
use crate::dispatch::{self, DEFAULT_MAX_CONCURRENT};
use crate::fetch::Fetcher;
use crate::output::{self, OutputMode};
use crate::target;

/// Per-run settings chosen by the caller (CLI flags plus config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub mode: OutputMode,
    /// Append known product names to output lines.
    pub annotate: bool,
    pub max_concurrent: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::Raw,
            annotate: false,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }
}

impl ScanOptions {
    pub fn from_config(cfg: &FaviqonConfig, mode: OutputMode, annotate: bool) -> Self {
        Self {
            mode,
            annotate,
            max_concurrent: cfg.max_concurrent_fetches,
        }
    }
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub targets: usize,
    pub failed: usize,
    pub groups: usize,
}

/// Runs the whole pipeline over newline-delimited URLs from `input`, writing
/// results to `out`.
///
/// Empty or all-blank input logs an error and returns without fetching or
/// writing anything. Per-target failures never make this return `Err`; only
/// reading `input` or writing `out` can.
pub async fn run<R, W, F>(
    input: R,
    out: &mut W,
    fetcher: Arc<F>,
    opts: &ScanOptions,
) -> Result<ScanSummary>
where
    R: BufRead,
    W: Write,
    F: Fetcher,
{
    let targets = target::read_targets(input).context("read URLs")?;
    if targets.is_empty() {
        tracing::error!("no URLs provided via stdin");
        return Ok(ScanSummary::default());
    }
    let total = targets.len();

    let outcomes = dispatch::dispatch(targets, fetcher, opts.max_concurrent).await;
    let failed = outcomes.iter().filter(|o| o.failed).count();

    let groups = aggregate::aggregate(&outcomes);
    output::render(&groups, opts.mode, opts.annotate, out).context("write results")?;

    let summary = ScanSummary {
        targets: total,
        failed,
        groups: groups.len(),
    };
    tracing::info!(
        targets = summary.targets,
        failed = summary.failed,
        groups = summary.groups,
        "scan complete"
    );
    Ok(summary)
}
