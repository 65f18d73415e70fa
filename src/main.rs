// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (diagnostics go to stderr, reports to stdout)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = broken links, 2 = error)
//
// Everything runs on one thread, one file after another. There is no network
// access: links are checked against the files on disk.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - link checking logic
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - site root and URL attribute table
mod migrate; // src/migrate/ - gtag -> trackEvent migration
mod walk; // src/walk/ - finding the files to work on

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};
use config::SiteConfig;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=debug shows per-file details; the default only shows problems
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run our application logic and capture the exit code
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = success (no broken links, or migration done)
//   Ok(1) = broken links found
//   Err = unexpected error
fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { root, json } => handle_check(&root, json),
        Commands::MigrateEvents { root, dry_run } => handle_migrate(&root, dry_run),
    }
}

// Builds the config for a site root given on the command line
//
// The root is made absolute so "/x" and "../x" links resolve the same way no
// matter which directory we were started from.
fn load_config(root: &Path) -> Result<SiteConfig> {
    let root = fs::canonicalize(root)
        .with_context(|| format!("site root {} not found", root.display()))?;
    Ok(SiteConfig::new(root))
}

// Handles the 'check' subcommand
fn handle_check(root: &Path, json: bool) -> Result<i32> {
    let config = load_config(root)?;
    let report = checker::check_site(&config)?;

    print_report(&report, json)?;

    if report.is_clean() {
        Ok(0) // Exit code 0 = all good
    } else {
        Ok(1) // Exit code 1 = broken links found
    }
}

// Handles the 'migrate-events' subcommand
fn handle_migrate(root: &Path, dry_run: bool) -> Result<i32> {
    let config = load_config(root)?;
    let results = migrate::migrate_events(&config, dry_run)?;

    print_changes(&results, dry_run);
    Ok(0)
}

// Prints the link report either as text or JSON
fn print_report(report: &checker::LinkReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        println!("=== Link Check Report ===");
        println!("HTML files scanned: {}", report.files_scanned);
        println!("Internal links/resources checked: {}", report.links_checked);
        println!("Broken count: {}", report.broken_count());

        for (i, record) in report.broken.iter().enumerate() {
            println!("{}", format_broken(i + 1, record));
        }
    }
    Ok(())
}

// One numbered report line:
//   1. a/b.html -> href='../c.html' (tag <a>) => c.html
fn format_broken(number: usize, record: &checker::BrokenLinkRecord) -> String {
    format!(
        "{}. {} -> {}='{}' (tag <{}>) => {}",
        number, record.file, record.attr, record.url, record.tag, record.resolved
    )
}

// Lists the pages the migration changed (or would change)
fn print_changes(results: &[migrate::RewriteResult], dry_run: bool) {
    if dry_run {
        println!("Files that would change:");
    } else {
        println!("Changed files:");
    }

    for result in results.iter().filter(|r| r.changed) {
        println!("- {}", result.path);
    }
}
