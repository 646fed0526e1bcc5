// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Scanner Error Types
 * Probe error taxonomy with retryability classification
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::time::Duration;
use thiserror::Error;

/// Main scanner error type
#[derive(Error, Debug)]
pub enum ScannerError {
    /// Network-related errors
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// HTTP-related errors
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// General errors
    #[error("Scanner error: {0}")]
    General(String),
}

/// Network-specific errors with detailed classification
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Connection timeout after {timeout:?} to {url}")]
    ConnectionTimeout { url: String, timeout: Duration },

    #[error("Connection refused for {url}")]
    ConnectionRefused { url: String },

    #[error("Connection reset by peer for {url}")]
    ConnectionReset { url: String },

    #[error("TLS handshake failed for {host}: {reason}")]
    TlsHandshakeFailed { host: String, reason: String },

    #[error("Too many redirects (>{max_redirects}) for {url}")]
    TooManyRedirects { url: String, max_redirects: usize },

    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    #[error("Network error: {0}")]
    Other(String),
}

/// HTTP-specific errors
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Malformed HTTP response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("Body read failed from {url}: {reason}")]
    BodyReadFailed { url: String, reason: String },

    #[error("HTTP error: {0}")]
    Other(String),
}

impl NetworkError {
    /// Transport failures are retried; structural failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionTimeout { .. } => true,
            NetworkError::ConnectionRefused { .. } => true,
            NetworkError::ConnectionReset { .. } => true,
            NetworkError::TlsHandshakeFailed { .. } => true,
            NetworkError::TooManyRedirects { .. } => false,
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::Other(_) => true,
        }
    }
}

impl HttpError {
    /// A truncated or unreadable body aborts the probe for that candidate
    /// only; re-requesting would not help, so none of these retry.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl ScannerError {
    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            ScannerError::Network(e) => e.is_retryable(),
            ScannerError::Http(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Convert reqwest errors to our error types
impl From<reqwest::Error> for ScannerError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();

        if err.is_timeout() {
            ScannerError::Network(NetworkError::ConnectionTimeout {
                url,
                timeout: Duration::from_secs(30),
            })
        } else if err.is_connect() {
            ScannerError::Network(NetworkError::ConnectionRefused { url })
        } else if err.is_redirect() {
            ScannerError::Network(NetworkError::TooManyRedirects {
                url,
                max_redirects: 10,
            })
        } else if err.is_builder() || err.is_request() {
            ScannerError::Network(NetworkError::InvalidUrl { url })
        } else if err.is_body() || err.is_decode() {
            ScannerError::Http(HttpError::BodyReadFailed {
                url,
                reason: err.to_string(),
            })
        } else {
            ScannerError::Network(NetworkError::Other(err.to_string()))
        }
    }
}

/// Result type for scanner operations
pub type ScannerResult<T> = Result<T, ScannerError>;
