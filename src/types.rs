// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::wordlists;

/// A confirmed match: one candidate URL whose response carried a known
/// backup/database signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub url: String,
    pub content_type: String,
    /// Declared Content-Length in bytes, -1 when the server did not send one.
    /// Advisory only: a signature match is reported regardless of size.
    pub content_length: i64,
    pub status_code: u16,
}

/// Runtime knobs for a scan, built once from the CLI and passed by
/// reference. Replaces the mutable process globals of earlier revisions.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Maximum number of concurrently in-flight probes.
    pub concurrency: usize,

    /// Minimum file size in KiB worth flagging. Advisory: only affects
    /// debug logging, never suppresses a signature-confirmed match.
    pub threshold_kib: u64,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    pub debug: bool,
    pub json_output: bool,
    pub show_progress: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            concurrency: 20,
            threshold_kib: 1,
            timeout_secs: 30,
            debug: false,
            json_output: false,
            show_progress: false,
        }
    }
}

/// The directory, filename-template, and extension lists a scan expands
/// into candidates. Immutable once built.
#[derive(Debug, Clone)]
pub struct Wordlists {
    pub dirs: Vec<String>,
    pub filenames: Vec<String>,
    pub extensions: Vec<String>,
}

impl Default for Wordlists {
    fn default() -> Self {
        Self {
            dirs: to_owned(wordlists::DEFAULT_DIRS),
            filenames: to_owned(wordlists::DEFAULT_FILENAMES),
            extensions: to_owned(wordlists::DEFAULT_EXTENSIONS),
        }
    }
}

impl Wordlists {
    /// Build wordlists, replacing the directory and/or extension defaults
    /// with comma-separated CLI overrides when given.
    pub fn with_overrides(dirs: Option<&str>, extensions: Option<&str>) -> Self {
        let mut lists = Self::default();
        if let Some(raw) = dirs {
            lists.dirs = split_csv(raw);
        }
        if let Some(raw) = extensions {
            lists.extensions = split_csv(raw);
        }
        lists
    }

    /// Total candidate count for a given number of targets. Fixed before
    /// the scan starts.
    pub fn total_candidates(&self, target_count: usize) -> u64 {
        target_count as u64
            * self.dirs.len() as u64
            * self.filenames.len() as u64
            * self.extensions.len() as u64
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Shared progress counters: total is fixed before the scan, completed is
/// bumped exactly once per finished probe from concurrent tasks.
#[derive(Debug)]
pub struct ScanProgress {
    completed: AtomicU64,
    total: u64,
}

impl ScanProgress {
    pub fn new(total: u64) -> Self {
        Self {
            completed: AtomicU64::new(0),
            total,
        }
    }

    pub fn complete_one(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}
