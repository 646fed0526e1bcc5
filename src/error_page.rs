// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Error Page Classifier
 * Suppresses HTML placeholder and soft-404 false positives
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

/// Phrases that mark a response as a server error/placeholder page.
/// Compared case-insensitively, so stored lowercased.
const ERROR_INDICATORS: &[&str] = &[
    "404 not found",
    "error",
    "page not found",
    "the page you requested could not be found",
    "forbidden",
    "access denied",
    "unauthorized",
    "error 404",
    "not found",
    "cannot be found",
    "oops!",
    "bad request",
    "400 bad request",
    "500 internal server error",
    "service unavailable",
];

const HTML_TOKENS: &[&str] = &["<html", "<head", "<title>", "<body"];

/// Heuristic: is this sampled body an error/placeholder page rather than a
/// real artifact? Callers apply this only to responses declaring a
/// text/html content type; binary backup formats never do, so the filter
/// only has to catch HTML soft-404s.
pub fn is_error_page(body: &[u8]) -> bool {
    let text = String::from_utf8_lossy(body).to_lowercase();

    if HTML_TOKENS.iter().any(|token| text.contains(token)) {
        return true;
    }

    ERROR_INDICATORS
        .iter()
        .any(|indicator| text.contains(indicator))
}
