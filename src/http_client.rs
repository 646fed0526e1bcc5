// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

use crate::errors::{HttpError, ScannerError, ScannerResult};

/// Fixed probe User-Agent. Deliberately a plain browser string so probes
/// blend in with ordinary traffic.
const PROBE_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Cap on how much of a response body is sampled for classification.
/// Backup/archive magic bytes are front-loaded, so a prefix suffices.
pub const MAX_SAMPLE_SIZE: usize = 16 * 1024;

const MAX_REDIRECTS: usize = 10;

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_sample_size: usize,
}

/// A probed response: status line data plus a bounded body sample.
#[derive(Debug, Clone)]
pub struct SampledResponse {
    pub status_code: u16,
    pub content_type: String,
    /// Declared Content-Length, -1 when absent.
    pub content_length: i64,
    pub body: Vec<u8>,
}

impl HttpClient {
    /// Build the shared probe client. Certificate validation is disabled
    /// on purpose: scan targets routinely present self-signed or expired
    /// certificates, and an exposed backup behind a broken certificate is
    /// still an exposed backup. This is a scanning-mode trust tradeoff,
    /// not an oversight; the tool makes no claims about transport
    /// authenticity.
    pub fn new(timeout_secs: u64) -> ScannerResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(PROBE_USER_AGENT));
        default_headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .danger_accept_invalid_certs(true)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .default_headers(default_headers)
            .build()
            .map_err(|e| ScannerError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            max_sample_size: MAX_SAMPLE_SIZE,
        })
    }

    /// Issue one GET and read at most `max_sample_size` bytes of the body.
    /// Send failures surface as retryable transport errors; a failure
    /// while streaming the body is a per-candidate abort, not retryable.
    pub async fn get_sampled(&self, url: &str) -> ScannerResult<SampledResponse> {
        let response = self.client.get(url).send().await.map_err(ScannerError::from)?;

        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let content_length = response
            .content_length()
            .map(|len| len as i64)
            .unwrap_or(-1);

        let body = self.sample_body(url, response).await?;

        Ok(SampledResponse {
            status_code,
            content_type,
            content_length,
            body,
        })
    }

    async fn sample_body(
        &self,
        url: &str,
        mut response: reqwest::Response,
    ) -> ScannerResult<Vec<u8>> {
        let mut body: Vec<u8> = Vec::new();

        while body.len() < self.max_sample_size {
            match response.chunk().await {
                Ok(Some(chunk)) => {
                    let remaining = self.max_sample_size - body.len();
                    let take = chunk.len().min(remaining);
                    body.extend_from_slice(&chunk[..take]);
                }
                Ok(None) => break,
                Err(e) => {
                    return Err(ScannerError::Http(HttpError::BodyReadFailed {
                        url: url.to_string(),
                        reason: e.to_string(),
                    }));
                }
            }
        }

        Ok(body)
    }
}
