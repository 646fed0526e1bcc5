// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Probe Pipeline Tests
 * Request, classification, and filtering behavior against mock servers
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use kaivuri_scanner::http_client::HttpClient;
use kaivuri_scanner::probe::Prober;
use kaivuri_scanner::retry::RetryConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn test_prober() -> Prober {
    let client = Arc::new(HttpClient::new(30).unwrap());
    let retry = RetryConfig::default().with_base_delay(Duration::from_millis(10));
    Prober::new(client, retry, 1)
}

#[tokio::test]
async fn test_probe_reports_sql_dump() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/backup/db.sql"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/plain")
                .set_body_string("-- MySQL dump 10.13  Distrib 8.0.33\nCREATE TABLE `users`;"),
        )
        .mount(&mock_server)
        .await;

    let prober = test_prober();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let url = format!("{}/backup/db.sql", mock_server.uri());

    assert!(prober.probe(&url, "sql", &tx).await);

    let finding = rx.try_recv().unwrap();
    assert_eq!(finding.url, url);
    assert_eq!(finding.status_code, 200);
    assert_eq!(finding.content_type, "text/plain");
    assert!(finding.content_length > 0);
}

#[tokio::test]
async fn test_probe_discards_html_error_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/backup/db.sql"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/html")
                .set_body_string("<html><title>404 Not Found</title></html>"),
        )
        .mount(&mock_server)
        .await;

    let prober = test_prober();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let url = format!("{}/backup/db.sql", mock_server.uri());

    assert!(!prober.probe(&url, "sql", &tx).await);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_probe_skips_error_page_filter_for_non_html() {
    let mock_server = MockServer::start().await;

    // The body contains an error phrase, but binary/text dumps never
    // declare text/html, so the filter must not run.
    Mock::given(method("GET"))
        .and(path("/dump.sql"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/plain")
                .set_body_string("-- MySQL dump\n-- error logging disabled"),
        )
        .mount(&mock_server)
        .await;

    let prober = test_prober();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let url = format!("{}/dump.sql", mock_server.uri());

    assert!(prober.probe(&url, "sql", &tx).await);
    assert!(rx.try_recv().is_ok());
}

#[tokio::test]
async fn test_probe_ignores_non_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/backup/db.sql"))
        .respond_with(ResponseTemplate::new(404).set_body_string("-- MySQL dump"))
        .mount(&mock_server)
        .await;

    let prober = test_prober();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let url = format!("{}/backup/db.sql", mock_server.uri());

    assert!(!prober.probe(&url, "sql", &tx).await);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_probe_accepts_partial_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/db.sqlite"))
        .respond_with(
            ResponseTemplate::new(206)
                .insert_header("Content-Type", "application/octet-stream")
                .set_body_bytes(b"SQLite format 3\x00".to_vec()),
        )
        .mount(&mock_server)
        .await;

    let prober = test_prober();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let url = format!("{}/db.sqlite", mock_server.uri());

    assert!(prober.probe(&url, "db", &tx).await);
    assert_eq!(rx.try_recv().unwrap().status_code, 206);
}

#[tokio::test]
async fn test_probe_matches_gzip_magic() {
    let mock_server = MockServer::start().await;

    let mut body = vec![0x1f, 0x8b, 0x08, 0x00];
    body.extend_from_slice(&[0u8; 64]);

    Mock::given(method("GET"))
        .and(path("/backup.sql.gz"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/octet-stream")
                .set_body_bytes(body),
        )
        .mount(&mock_server)
        .await;

    let prober = test_prober();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let url = format!("{}/backup.sql.gz", mock_server.uri());

    // "sql.gz" resolves to kind "gz" before the probe is issued.
    assert!(prober.probe(&url, "gz", &tx).await);
    assert!(rx.try_recv().is_ok());
}

#[tokio::test]
async fn test_probe_no_signature_no_finding() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/backup/db.sql"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/plain")
                .set_body_string("just an ordinary page body"),
        )
        .mount(&mock_server)
        .await;

    let prober = test_prober();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let url = format!("{}/backup/db.sql", mock_server.uri());

    assert!(!prober.probe(&url, "sql", &tx).await);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_probe_reports_match_below_size_threshold() {
    let mock_server = MockServer::start().await;

    // Tiny body, far below the 64 KiB threshold configured here. The
    // threshold is advisory: the signature match wins.
    Mock::given(method("GET"))
        .and(path("/db.sql"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/plain")
                .set_body_string("INSERT INTO t VALUES (1);"),
        )
        .mount(&mock_server)
        .await;

    let client = Arc::new(HttpClient::new(30).unwrap());
    let retry = RetryConfig::default().with_base_delay(Duration::from_millis(10));
    let prober = Prober::new(client, retry, 64);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let url = format!("{}/db.sql", mock_server.uri());

    assert!(prober.probe(&url, "sql", &tx).await);
    assert!(rx.try_recv().is_ok());
}

#[tokio::test]
async fn test_probe_gives_up_after_retries_on_refused_connection() {
    let prober = test_prober();
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Nothing listens on port 1; every attempt is refused.
    assert!(!prober.probe("http://127.0.0.1:1/db.sql", "sql", &tx).await);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_probe_samples_only_a_prefix_of_large_bodies() {
    let mock_server = MockServer::start().await;

    // Signature well inside the 16 KiB sample window.
    let mut body = b"-- MySQL dump 10.13\n".to_vec();
    body.extend_from_slice(&vec![b'a'; 256 * 1024]);

    Mock::given(method("GET"))
        .and(path("/big.sql"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/plain")
                .set_body_bytes(body),
        )
        .mount(&mock_server)
        .await;

    let prober = test_prober();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let url = format!("{}/big.sql", mock_server.uri());

    assert!(prober.probe(&url, "sql", &tx).await);
    let finding = rx.try_recv().unwrap();
    // The advisory content length reflects the full body, not the sample.
    assert!(finding.content_length > 16 * 1024);
}
