// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - File Signature Matching
 * Identifies backup/database formats from sampled response bytes
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

/// One recognition rule for a file kind. An offset >= 0 requires the magic
/// bytes at exactly that position; a negative offset means the magic may
/// occur anywhere in the sampled buffer.
#[derive(Debug, Clone, Copy)]
pub struct FileSignature {
    pub kind: &'static str,
    pub magic: &'static [u8],
    pub offset: i32,
}

/// Static rule table, shared read-only across all probes. Archive and
/// database magic bytes are front-loaded, so matching against a sampled
/// prefix is sufficient.
pub const FILE_SIGNATURES: &[FileSignature] = &[
    // SQL dumps: textual markers, position varies with dump headers
    FileSignature { kind: "sql", magic: b"-- MySQL dump", offset: -1 },
    FileSignature { kind: "sql", magic: b"-- PostgreSQL database dump", offset: -1 },
    FileSignature { kind: "sql", magic: b"SQL Server database backup", offset: -1 },
    FileSignature { kind: "sql", magic: b"/*", offset: -1 },
    FileSignature { kind: "sql", magic: b"BEGIN TRANSACTION;", offset: -1 },
    FileSignature { kind: "sql", magic: b"CREATE TABLE", offset: -1 },
    FileSignature { kind: "sql", magic: b"INSERT INTO", offset: -1 },
    FileSignature { kind: "sql", magic: b"DROP TABLE", offset: -1 },
    // GZIP
    FileSignature { kind: "gz", magic: &[0x1f, 0x8b], offset: 0 },
    // ZIP
    FileSignature { kind: "zip", magic: &[0x50, 0x4b, 0x03, 0x04], offset: 0 },
    // BZIP2
    FileSignature { kind: "bz2", magic: &[0x42, 0x5a, 0x68], offset: 0 },
    // XZ
    FileSignature { kind: "xz", magic: &[0xfd, 0x37, 0x7a, 0x58, 0x5a], offset: 0 },
    // 7z
    FileSignature { kind: "7z", magic: &[0x37, 0x7a, 0xbc, 0xaf, 0x27, 0x1c], offset: 0 },
    // Tar: "ustar" at the POSIX header position
    FileSignature { kind: "tar", magic: &[0x75, 0x73, 0x74, 0x61, 0x72], offset: 257 },
    // RAR 1.5 - 4.0
    FileSignature { kind: "rar", magic: &[0x52, 0x61, 0x72, 0x21, 0x1a, 0x07, 0x00], offset: 0 },
    // RAR 5.0+
    FileSignature { kind: "rar", magic: &[0x52, 0x61, 0x72, 0x21, 0x1a, 0x07, 0x01, 0x00], offset: 0 },
    // SQLite
    FileSignature { kind: "db", magic: b"SQLite format 3", offset: 0 },
    FileSignature { kind: "sqlite", magic: b"SQLite format 3", offset: 0 },
    FileSignature { kind: "sqlite3", magic: b"SQLite format 3", offset: 0 },
    // Vim swap
    FileSignature { kind: "swp", magic: &[0x62, 0x30], offset: 0 },
];

/// Declared extension token (possibly multi-part) to the kind used for
/// signature lookup. Tokens without an entry fall back to themselves;
/// kinds with no signature rules ("bak") simply never match.
const EXTENSION_ALIASES: &[(&str, &str)] = &[
    ("sql", "sql"),
    ("sql.gz", "gz"),
    ("sql.zip", "zip"),
    ("sql.bz2", "bz2"),
    ("sql.xz", "xz"),
    ("sql.tar", "tar"),
    ("sql.7z", "7z"),
    ("sql.tar.gz", "gz"),
    ("sql.bak", "bak"),
    ("db", "db"),
    ("db.gz", "gz"),
    ("db.zip", "zip"),
    ("db.bz2", "bz2"),
    ("db.xz", "xz"),
    ("db.tar", "tar"),
    ("db.7z", "7z"),
    ("db.rar", "rar"),
    ("db.bak", "bak"),
    ("bak", "bak"),
    ("bak.gz", "gz"),
    ("bak.zip", "zip"),
    ("bak.bz2", "bz2"),
    ("bak.xz", "xz"),
    ("bak.tar", "tar"),
    ("bak.7z", "7z"),
    ("bak.rar", "rar"),
    ("tar.gz", "gz"),
    ("tgz", "gz"),
    ("tar.bz2", "bz2"),
    ("rar", "rar"),
    ("sqlite", "db"),
    ("sqlite3", "db"),
    ("swp", "swp"),
];

/// Resolve a declared extension token to its signature-lookup kind.
pub fn resolve_kind(extension: &str) -> &str {
    EXTENSION_ALIASES
        .iter()
        .find(|(token, _)| *token == extension)
        .map(|(_, kind)| *kind)
        .unwrap_or(extension)
}

/// Test a sampled body against every rule for the given kind. First
/// satisfied rule wins; unknown kinds never match.
pub fn matches_signature(body: &[u8], kind: &str) -> bool {
    for sig in FILE_SIGNATURES {
        if sig.kind != kind {
            continue;
        }
        if sig.offset >= 0 {
            let offset = sig.offset as usize;
            if body.len() >= offset + sig.magic.len()
                && &body[offset..offset + sig.magic.len()] == sig.magic
            {
                return true;
            }
        } else if contains_subsequence(body, sig.magic) {
            return true;
        }
    }
    false
}

fn contains_subsequence(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}
