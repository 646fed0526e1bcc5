// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Kaivuri - Exposed Backup/Database Artifact Scanner
 * Pipes targets from stdin through the probing engine
 *
 * (c) 2026 Bountyy Oy
 */

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead};
use tracing::{info, Level};

use kaivuri_scanner::engine::ScanEngine;
use kaivuri_scanner::types::{ScanOptions, Wordlists};

/// Kaivuri - Exposed Backup/Database Artifact Scanner
#[derive(Parser)]
#[command(name = "kaivuri")]
#[command(author = "Bountyy Oy <info@bountyy.fi>")]
#[command(version = "1.0.0")]
#[command(
    about = "Digs up exposed backup and database files. Pipe targets on stdin.",
    long_about = None
)]
struct Cli {
    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Minimum file size in KiB worth flagging (advisory, debug-only)
    #[arg(short = 't', long, default_value = "1")]
    threshold: u64,

    /// Maximum number of concurrent probes
    #[arg(short = 'c', long, default_value = "20")]
    concurrency: usize,

    /// Emit one JSON object per finding instead of human-readable lines
    #[arg(long)]
    json: bool,

    /// Display progress and estimated scan duration
    #[arg(short = 'p', long)]
    progress: bool,

    /// Override the directory wordlist (comma-separated)
    #[arg(long)]
    dir: Option<String>,

    /// Override the extension wordlist (comma-separated)
    #[arg(long)]
    file: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Per-candidate failures only surface in debug mode; the default run
    // prints nothing but the banner, findings, and progress.
    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    display_banner();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .thread_name("kaivuri-worker")
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> Result<()> {
    let targets = read_targets();
    if targets.is_empty() {
        eprintln!("No targets on stdin. Usage: cat targets.txt | kaivuri [flags]");
        return Ok(());
    }

    let options = ScanOptions {
        concurrency: cli.concurrency,
        threshold_kib: cli.threshold,
        timeout_secs: 30,
        debug: cli.debug,
        json_output: cli.json,
        show_progress: cli.progress,
    };
    let wordlists = Wordlists::with_overrides(cli.dir.as_deref(), cli.file.as_deref());

    info!(
        targets = targets.len(),
        dirs = wordlists.dirs.len(),
        filenames = wordlists.filenames.len(),
        extensions = wordlists.extensions.len(),
        "Configuration loaded"
    );

    let engine = ScanEngine::new(options, wordlists)?;
    engine.run(&targets).await?;

    Ok(())
}

/// One target per line on stdin; blank lines skipped; schemeless lines
/// get an http:// prefix.
fn read_targets() -> Vec<String> {
    let mut targets = Vec::new();

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        let target = line.trim();
        if target.is_empty() {
            continue;
        }
        if target.starts_with("http://") || target.starts_with("https://") {
            targets.push(target.to_string());
        } else {
            targets.push(format!("http://{}", target));
        }
    }

    targets
}

fn display_banner() {
    print!("\x1b[36m");
    println!(" _         _                 _ ");
    println!("| | ____ _(_)_   ___   _ _ __(_)");
    println!("| |/ / _` | \\ \\ / / | | | '__| |");
    println!("|   < (_| | |\\ V /| |_| | |  | |");
    println!("|_|\\_\\__,_|_| \\_/  \\__,_|_|  |_|");
    print!("\x1b[0m");
    println!();
    print!("\x1b[1m\x1b[97m");
    println!("   Exposed Backup/Database Artifact Scanner");
    print!("\x1b[0m\x1b[36m");
    println!("   v1.0 - (c) 2026 Bountyy Oy");
    print!("\x1b[0m");
    println!();
}
