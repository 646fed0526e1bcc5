// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Probe Pipeline
 * Request, retry, sample, and classify one candidate URL
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::error_page::is_error_page;
use crate::http_client::HttpClient;
use crate::retry::{retry_with_backoff, RetryConfig};
use crate::signatures::matches_signature;
use crate::types::Finding;

pub struct Prober {
    http_client: Arc<HttpClient>,
    retry: RetryConfig,
    threshold_kib: u64,
}

impl Prober {
    pub fn new(http_client: Arc<HttpClient>, retry: RetryConfig, threshold_kib: u64) -> Self {
        Self {
            http_client,
            retry,
            threshold_kib,
        }
    }

    /// Probe one candidate and push a Finding into the sink on a match.
    /// Returns whether a finding was emitted. Never fails the scan: every
    /// error path degrades to "no match" for this candidate alone.
    pub async fn probe(&self, url: &str, kind: &str, sink: &UnboundedSender<Finding>) -> bool {
        debug!(url = url, kind = kind, "Probing candidate");

        let response = match retry_with_backoff(&self.retry, "probe", || {
            self.http_client.get_sampled(url)
        })
        .await
        {
            Ok(response) => response,
            Err(e) => {
                debug!(url = url, error = %e, "Probe gave up");
                return false;
            }
        };

        if response.status_code != 200 && response.status_code != 206 {
            debug!(
                url = url,
                status = response.status_code,
                "Ignoring non-200/206 response"
            );
            return false;
        }

        debug!(
            url = url,
            status = response.status_code,
            content_length = response.content_length,
            content_type = %response.content_type,
            sampled = response.body.len(),
            "Response received"
        );

        // Binary backup formats never declare text/html, so the error-page
        // filter only runs for HTML responses.
        if response.content_type.contains("text/html") && is_error_page(&response.body) {
            debug!(url = url, "Detected error page");
            return false;
        }

        if !matches_signature(&response.body, kind) {
            debug!(url = url, kind = kind, "No matching file signature");
            return false;
        }

        // The size threshold is advisory: a signature-confirmed match is
        // reported even below it.
        if response.content_length >= 0
            && (response.content_length as u64) < self.threshold_kib * 1024
        {
            debug!(
                url = url,
                content_length = response.content_length,
                threshold_kib = self.threshold_kib,
                "Below size threshold but signature matches, keeping"
            );
        }

        let finding = Finding {
            url: url.to_string(),
            content_type: response.content_type,
            content_length: response.content_length,
            status_code: response.status_code,
        };

        sink.send(finding).is_ok()
    }
}
