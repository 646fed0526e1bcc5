// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Default Scan Wordlists
 * Directory, filename-template, and extension lists for candidate expansion
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub const DEFAULT_DIRS: &[&str] = &[
    "/", "/backup/", "/db/", "/database/", "/dump/", "/sql/", "/data/", "/temp/", "/tmp/",
    "/dumps/", "/web/", "/api/",
];

/// Filename templates. `{{Hostname}}` expands to the target's host and the
/// `{{date_time(...)}}` placeholders to the current date.
pub const DEFAULT_FILENAMES: &[&str] = &[
    "backup",
    "database",
    "web",
    "dump",
    "db",
    "data",
    "sql",
    "mysqldump",
    "backup_",
    "database_",
    "db_backup",
    "dump_",
    "dumpfile",
    "export",
    "latest_backup",
    "site_backup",
    "website_backup",
    "wordpress_backup",
    "joomla_backup",
    "magento_backup",
    "wp_backup",
    "sql_backup",
    "mysql_backup",
    "user_data",
    "customer_data",
    "production_db",
    "prod_db",
    "test_db",
    "staging_db",
    "dev_db",
    "admin_db",
    "old_db",
    "new_db",
    "data_backup",
    "all_data",
    "full_backup",
    "complete_backup",
    "v1",
    "backupfile",
    "dbexport",
    "dbdumpfile",
    "{{Hostname}}",
    "{{Hostname}}_db",
    "{{Hostname}}_backup",
    "{{Hostname}}_dump",
    "{{Hostname}}_{{date_time('%Y%m%d')}}",
    "backup{{date_time('%Y%m%d')}}",
    "db{{date_time('%Y%m%d')}}",
    "database{{date_time('%Y%m%d')}}",
    "backup{{date_time('%Y-%m-%d')}}",
    "db{{date_time('%Y-%m-%d')}}",
    "database{{date_time('%Y-%m-%d')}}",
    "backup_{{date_time('%Y-%m-%d')}}",
    "db_{{date_time('%Y-%m-%d')}}",
];

pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "sql", "sql.gz", "sql.zip", "sql.bz2", "sql.xz", "db", "bak", "zip", "gz", "tar", "tar.gz",
    "tgz", "rar", "7z", "bak.gz", "bak.zip", "tar.bz2", "bz2", "xz", "dump", "backup", "sql.bak",
    "sql.tar", "db.gz", "db.zip", "db.bak", "db.tar", "sqlite", "sqlite3", "tmp", "temp", "old",
    "orig", "copy", "save", "swp", "bk", "old.bak",
];
