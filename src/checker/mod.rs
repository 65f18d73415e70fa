// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - html: Extracts URL attributes from HTML pages
// - resolve: Maps a URL to a path on disk
// - exists: Decides whether a static server would serve that path
// - report: The results we hand back to main.rs
// - scan: Ties the steps together for a whole site
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod exists;
mod html;
mod report;
mod resolve;
mod scan;

// Re-export public items from submodules
// This lets users write `checker::check_site()` instead of
// `checker::scan::check_site()`
pub use report::{BrokenLinkRecord, LinkReport};
pub use scan::check_site;
