// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Scan Engine
 * Candidate dispatch under a bounded admission gate
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use crate::candidates::construct_url;
use crate::http_client::HttpClient;
use crate::probe::Prober;
use crate::reporter::{spawn_progress_ticker, spawn_reporter};
use crate::retry::RetryConfig;
use crate::signatures::resolve_kind;
use crate::types::{ScanOptions, ScanProgress, Wordlists};

/// What a finished scan looked like. `completed` equals `total` unless the
/// run was interrupted.
#[derive(Debug, Clone)]
pub struct ScanSummary {
    pub total: u64,
    pub completed: u64,
    pub findings: usize,
}

pub struct ScanEngine {
    options: ScanOptions,
    wordlists: Wordlists,
    prober: Arc<Prober>,
}

impl ScanEngine {
    pub fn new(options: ScanOptions, wordlists: Wordlists) -> Result<Self> {
        let http_client = Arc::new(
            HttpClient::new(options.timeout_secs).context("Failed to create HTTP client")?,
        );
        let prober = Arc::new(Prober::new(
            Arc::clone(&http_client),
            RetryConfig::default(),
            options.threshold_kib,
        ));

        Ok(Self {
            options,
            wordlists,
            prober,
        })
    }

    /// Replace the probe retry policy. Scans keep the default 3-attempt,
    /// 1-second linear backoff unless told otherwise.
    pub fn with_retry(mut self, retry: RetryConfig) -> Result<Self> {
        let http_client = Arc::new(
            HttpClient::new(self.options.timeout_secs).context("Failed to create HTTP client")?,
        );
        self.prober = Arc::new(Prober::new(http_client, retry, self.options.threshold_kib));
        Ok(self)
    }

    /// Probe the full cartesian product of targets x dirs x filenames x
    /// extensions. Submission blocks on the admission gate, so at most
    /// `concurrency` probes are in flight; every spawned probe is joined
    /// before the result channel closes and the reporter drains out.
    pub async fn run(&self, targets: &[String]) -> Result<ScanSummary> {
        let total = self.wordlists.total_candidates(targets.len());
        let progress = Arc::new(ScanProgress::new(total));
        let start = Instant::now();

        info!(
            targets = targets.len(),
            candidates = total,
            concurrency = self.options.concurrency,
            "Scan starting"
        );

        let (tx, rx) = mpsc::unbounded_channel();
        let reporter = spawn_reporter(rx, self.options.json_output);
        let ticker = self
            .options
            .show_progress
            .then(|| spawn_progress_ticker(Arc::clone(&progress), start));

        // Ctrl-C stops submission; in-flight probes drain and the barrier
        // below still runs, so the reporter always flushes.
        let cancelled = Arc::new(AtomicBool::new(false));
        let signal_watcher = {
            let cancelled = Arc::clone(&cancelled);
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Interrupt received, stopping submission");
                    cancelled.store(true, Ordering::SeqCst);
                }
            })
        };

        let semaphore = Arc::new(Semaphore::new(self.options.concurrency));
        let mut tasks = Vec::new();

        'submission: for target in targets {
            for dir in &self.wordlists.dirs {
                for filename in &self.wordlists.filenames {
                    for extension in &self.wordlists.extensions {
                        if cancelled.load(Ordering::SeqCst) {
                            break 'submission;
                        }

                        // Blocks the submitting loop until a slot frees up.
                        let permit = Arc::clone(&semaphore)
                            .acquire_owned()
                            .await
                            .context("admission gate closed")?;

                        let url = construct_url(target, dir, filename, extension);
                        let kind = resolve_kind(extension).to_string();
                        let prober = Arc::clone(&self.prober);
                        let progress = Arc::clone(&progress);
                        let tx = tx.clone();

                        tasks.push(tokio::spawn(async move {
                            // Permit held for the probe's whole lifetime and
                            // released on drop, whatever the outcome.
                            let _permit = permit;
                            prober.probe(&url, &kind, &tx).await;
                            progress.complete_one();
                        }));
                    }
                }
            }
        }

        // Barrier: the scan is complete only once every probe finished.
        for task in tasks {
            if let Err(e) = task.await {
                error!("Task join error: {}", e);
            }
        }

        // Closing the channel ends the reporter once it has drained.
        drop(tx);
        let findings = reporter.await.unwrap_or(0);

        if let Some(ticker) = ticker {
            ticker.abort();
        }
        signal_watcher.abort();

        let summary = ScanSummary {
            total,
            completed: progress.completed(),
            findings,
        };

        info!(
            completed = summary.completed,
            findings = summary.findings,
            elapsed_secs = start.elapsed().as_secs(),
            "Scan completed"
        );

        Ok(summary)
    }
}
