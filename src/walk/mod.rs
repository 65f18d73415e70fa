// src/walk/mod.rs
// =============================================================================
// This module finds the files our tools work on.
//
// Two entry points:
// - collect_html_files: every .html file under the site root (for `check`)
// - collect_game_pages: games/*/index.html (for `migrate-events`)
//
// Both return sorted lists so reports come out in the same order every run.
// =============================================================================

mod files;

// Re-export the listing functions
pub use files::{collect_game_pages, collect_html_files};
