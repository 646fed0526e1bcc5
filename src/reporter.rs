// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Scan Reporter
 * Drains findings and renders progress without blocking probes
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::error;

use crate::types::{Finding, ScanProgress};

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

const PROGRESS_INTERVAL: Duration = Duration::from_secs(5);

/// Spawn the single consumer of the result sink. Findings print in
/// arrival order, one line each, until the channel closes; returns how
/// many were reported.
pub fn spawn_reporter(mut rx: UnboundedReceiver<Finding>, json_output: bool) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut count = 0usize;

        while let Some(finding) = rx.recv().await {
            if json_output {
                match serde_json::to_string(&finding) {
                    Ok(line) => println!("{}", line),
                    Err(e) => error!("Failed to serialize finding: {}", e),
                }
            } else {
                println!(
                    "{}Potential file found: {} (Size: {} bytes, Content-Type: {}){}",
                    RED, finding.url, finding.content_length, finding.content_type, RESET
                );
            }
            count += 1;
        }

        count
    })
}

/// Spawn the fixed-interval progress line. Remaining time extrapolates
/// from the average time per completed task; the +1 in the denominator
/// guards the zero-completed case.
pub fn spawn_progress_ticker(progress: Arc<ScanProgress>, start: Instant) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PROGRESS_INTERVAL);
        // The first tick fires immediately; skip it.
        interval.tick().await;

        loop {
            interval.tick().await;

            let completed = progress.completed();
            let total = progress.total().max(1);
            let percent = completed as f64 / total as f64 * 100.0;

            let elapsed = start.elapsed();
            let average_per_task = elapsed.div_f64((completed + 1) as f64);
            let remaining = average_per_task
                .mul_f64(total as f64)
                .saturating_sub(elapsed);

            println!(
                "Progress: {:.2}% | Elapsed Time: {} | Estimated Remaining Time: {}",
                percent,
                format_duration(elapsed),
                format_duration(remaining)
            );
        }
    })
}

/// Render a duration as 02h03m04s / 03m04s / 04s, rounded to the second.
pub fn format_duration(duration: Duration) -> String {
    let mut total_secs = duration.as_secs();
    if duration.subsec_millis() >= 500 {
        total_secs += 1;
    }

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{:02}h{:02}m{:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{:02}m{:02}s", minutes, seconds)
    } else {
        format!("{:02}s", seconds)
    }
}
