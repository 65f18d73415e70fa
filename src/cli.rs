// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "site-janitor",
    version = "0.1.0",
    about = "Maintenance tools for a static HTML site",
    long_about = "site-janitor finds local links and resources that would 404 when the site is \
                  served, and migrates game pages from gtag('event', ...) to trackEvent(...)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

// Our subcommands (check, migrate-events)
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report local links and resources that would 404
    ///
    /// Example: site-janitor check --root ./public
    Check {
        /// Site root: the directory that "/" in a URL maps to
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Output the report in JSON format instead of text
        #[arg(long)]
        json: bool,
    },

    /// Rewrite gtag('event', ...) to trackEvent(...) in games/*/index.html
    ///
    /// Example: site-janitor migrate-events --root ./public --dry-run
    MigrateEvents {
        /// Site root containing the games/ directory
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Show which pages would change without writing them
        #[arg(long)]
        dry_run: bool,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. How does MigrateEvents become `migrate-events`?
//    - clap turns CamelCase variant names into kebab-case subcommands
//    - Fields work the same way: dry_run becomes --dry-run
//
// 2. Why PathBuf instead of String for --root?
//    - Paths aren't always valid UTF-8 on every OS
//    - PathBuf keeps them exactly as the user typed them
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_defaults() {
        let cli = Cli::parse_from(["site-janitor", "check"]);
        match cli.command {
            Commands::Check { root, json } => {
                assert_eq!(root, PathBuf::from("."));
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_migrate_events() {
        let cli = Cli::parse_from(["site-janitor", "migrate-events", "--root", "site", "--dry-run"]);
        match cli.command {
            Commands::MigrateEvents { root, dry_run } => {
                assert_eq!(root, PathBuf::from("site"));
                assert!(dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
