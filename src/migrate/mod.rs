// src/migrate/mod.rs
// =============================================================================
// This module migrates game pages from gtag('event', ...) to trackEvent(...).
//
// Submodules:
// - rewrite: The text transformation for a single page
// - run: Finds the game pages and writes the ones that changed
// =============================================================================

mod rewrite;
mod run;

pub use run::{migrate_events, RewriteResult};
