//! Bounded-parallel fetch + fingerprint over all targets.
//!
//! One task per target, at most `max_concurrent` of them inside the fetcher at
//! once. Each task writes only its own pre-assigned slot, so results come back
//! in input order whatever order the network completes in.

use std::sync::{Arc, OnceLock};

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::fetch::Fetcher;
use crate::hash;
use crate::target::{base_url, FetchTarget};

/// Default admission limit for concurrent fetches.
pub const DEFAULT_MAX_CONCURRENT: usize = 20;

/// Result for one target, stored at the target's index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Input URL with the `/favicon.ico` suffix stripped.
    pub base_url: String,
    /// Meaningless when `failed` is set.
    pub fingerprint: i32,
    pub failed: bool,
}

impl FetchOutcome {
    pub fn success(base_url: impl Into<String>, fingerprint: i32) -> Self {
        Self {
            base_url: base_url.into(),
            fingerprint,
            failed: false,
        }
    }

    pub fn failure(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            fingerprint: 0,
            failed: true,
        }
    }
}

/// Fetches and fingerprints every target, returning exactly one outcome per
/// target in target order.
///
/// Waits for every task before returning. A failing or panicking fetch only
/// marks its own outcome as failed and logs the base URL; nothing is retried
/// and no sibling is cancelled.
pub async fn dispatch<F: Fetcher>(
    targets: Vec<FetchTarget>,
    fetcher: Arc<F>,
    max_concurrent: usize,
) -> Vec<FetchOutcome> {
    let max_concurrent = max_concurrent.max(1);
    let targets: Arc<[FetchTarget]> = targets.into();
    let slots: Arc<[OnceLock<FetchOutcome>]> =
        (0..targets.len()).map(|_| OnceLock::new()).collect();
    let gate = Arc::new(Semaphore::new(max_concurrent));

    tracing::debug!(
        targets = targets.len(),
        max_concurrent,
        "dispatching favicon fetches"
    );

    let mut join_set = JoinSet::new();
    for pos in 0..targets.len() {
        let targets = Arc::clone(&targets);
        let slots = Arc::clone(&slots);
        let gate = Arc::clone(&gate);
        let fetcher = Arc::clone(&fetcher);
        join_set.spawn(async move {
            // The gate is never closed, so acquisition only fails if it were.
            let Ok(_permit) = gate.acquire_owned().await else {
                return;
            };
            let target = &targets[pos];
            let outcome = fetch_one(target, fetcher).await;
            // Disjoint slots: the only writer for this index.
            let _ = slots[target.index].set(outcome);
        });
    }

    while let Some(res) = join_set.join_next().await {
        if let Err(e) = res {
            tracing::error!("fetch task join: {}", e);
        }
    }

    targets
        .iter()
        .map(|t| {
            slots
                .get(t.index)
                .and_then(|slot| slot.get().cloned())
                .unwrap_or_else(|| FetchOutcome::failure(base_url(&t.url)))
        })
        .collect()
}

async fn fetch_one<F: Fetcher>(target: &FetchTarget, fetcher: Arc<F>) -> FetchOutcome {
    let base = base_url(&target.url).to_string();
    let url = target.url.clone();

    let res = tokio::task::spawn_blocking(move || {
        fetcher.fetch(&url).map(|body| hash::fingerprint(&body))
    })
    .await;

    match res {
        Ok(Ok(fingerprint)) => {
            tracing::debug!(url = %base, fingerprint, "fingerprinted");
            FetchOutcome::success(base, fingerprint)
        }
        Ok(Err(e)) => {
            tracing::error!(url = %base, kind = e.kind().as_str(), error = %e, "failed to fetch");
            FetchOutcome::failure(base)
        }
        Err(e) => {
            tracing::error!(url = %base, error = %e, "failed to fetch (task aborted)");
            FetchOutcome::failure(base)
        }
    }
}
