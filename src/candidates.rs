// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Candidate URL Generation
 * Deterministic expansion of (target, dir, filename, extension) tuples
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use chrono::Local;
use url::Url;

const HOSTNAME_PLACEHOLDER: &str = "{{Hostname}}";
const DATE_COMPACT_PLACEHOLDER: &str = "{{date_time('%Y%m%d')}}";
const DATE_DASHED_PLACEHOLDER: &str = "{{date_time('%Y-%m-%d')}}";

/// Build one fully-resolved candidate URL. Pure function of its inputs
/// plus the current wall clock (date placeholders are evaluated at
/// generation time, not scan-start time).
///
/// Normalization: the base loses any trailing slash; the root directory
/// "/" collapses to empty, any other directory gets exactly one leading
/// slash and no trailing slash. The result is
/// `base + dir + "/" + filename + "." + extension`.
pub fn construct_url(base: &str, dir: &str, filename: &str, extension: &str) -> String {
    let base = base.trim_end_matches('/');

    let dir = if dir == "/" {
        String::new()
    } else {
        let trimmed = dir.trim_end_matches('/');
        if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        }
    };

    // An unparseable base degrades the hostname to empty rather than
    // failing the candidate; it still gets probed.
    let hostname = Url::parse(base)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .unwrap_or_default();

    let now = Local::now();
    let filename = filename
        .replace(HOSTNAME_PLACEHOLDER, &hostname)
        .replace(DATE_COMPACT_PLACEHOLDER, &now.format("%Y%m%d").to_string())
        .replace(DATE_DASHED_PLACEHOLDER, &now.format("%Y-%m-%d").to_string());

    format!("{}{}/{}.{}", base, dir, filename, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_construction() {
        let url = construct_url("http://example.com", "/backup/", "db", "sql");
        assert_eq!(url, "http://example.com/backup/db.sql");
    }

    #[test]
    fn test_root_dir_collapses_without_double_slash() {
        let url = construct_url("http://example.com", "/", "dump", "tar.gz");
        assert_eq!(url, "http://example.com/dump.tar.gz");
    }

    #[test]
    fn test_trailing_slash_on_base_is_stripped() {
        let url = construct_url("http://example.com/", "/db/", "data", "zip");
        assert_eq!(url, "http://example.com/db/data.zip");
    }

    #[test]
    fn test_dir_gains_single_leading_slash() {
        let url = construct_url("http://example.com", "dumps/", "export", "sql");
        assert_eq!(url, "http://example.com/dumps/export.sql");
    }

    #[test]
    fn test_hostname_placeholder_resolves_to_host_component() {
        let url = construct_url("https://db.example.com:8443", "/backup/", "{{Hostname}}_db", "sql");
        assert_eq!(url, "https://db.example.com:8443/backup/db.example.com_db.sql");
    }

    #[test]
    fn test_unparseable_base_yields_empty_hostname() {
        let url = construct_url("not a url", "/backup/", "{{Hostname}}_db", "sql");
        assert_eq!(url, "not a url/backup/_db.sql");
    }

    #[test]
    fn test_date_placeholders_are_format_equivalent() {
        // Evaluated within the same invocation, the two date formats must
        // describe the same day.
        let compact = construct_url("http://h", "/", "{{date_time('%Y%m%d')}}", "sql");
        let dashed = construct_url("http://h", "/", "{{date_time('%Y-%m-%d')}}", "sql");

        let compact_date = compact
            .trim_start_matches("http://h/")
            .trim_end_matches(".sql")
            .to_string();
        let dashed_date = dashed
            .trim_start_matches("http://h/")
            .trim_end_matches(".sql")
            .replace('-', "");
        assert_eq!(compact_date.len(), 8);
        assert_eq!(compact_date, dashed_date);
    }
}
