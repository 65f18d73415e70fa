// src/checker/scan.rs
// =============================================================================
// This module runs a complete link check over a site directory.
//
// Pipeline (one file at a time, nothing runs in parallel):
// 1. walk:    find every .html file under the root
// 2. html:    pull URL attributes out of each page
// 3. resolve: turn each local URL into a path on disk
// 4. exists:  ask whether a static server would serve that path
// 5. report:  remember every reference that would 404
//
// Failure handling:
// - A file we can't read (or that isn't UTF-8) is logged and skipped
// - Everything else keeps going; only a missing root stops the scan
// =============================================================================

use super::exists::path_is_servable;
use super::html::extract_html_links;
use super::report::{BrokenLinkRecord, LinkReport};
use super::resolve::PathResolver;
use crate::config::SiteConfig;
use crate::walk;
use anyhow::Result;
use std::fs;

// Checks every local reference in every HTML file under config.root
//
// Returns: the LinkReport (errors only when the root can't be walked)
pub fn check_site(config: &SiteConfig) -> Result<LinkReport> {
    let html_files = walk::collect_html_files(config.root())?;
    let resolver = PathResolver::new(config);

    let mut report = LinkReport {
        files_scanned: html_files.len(),
        ..LinkReport::default()
    };

    for html_path in &html_files {
        // read_to_string also rejects files that aren't valid UTF-8
        let content = match fs::read_to_string(html_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %html_path.display(), error = %e, "cannot read file, skipping");
                continue;
            }
        };

        let links = extract_html_links(&content, html_path, &config.url_attributes);
        tracing::debug!(path = %html_path.display(), links = links.len(), "extracted references");

        for link in links {
            let Some(resolved) = resolver.resolve(&link) else {
                continue; // external, fragment, mailto, ...
            };

            report.links_checked += 1;
            if !path_is_servable(&resolved) {
                report.broken.push(BrokenLinkRecord {
                    file: resolver.relative(&link.source).display().to_string(),
                    tag: link.tag,
                    attr: link.attr,
                    url: link.url,
                    resolved: resolver.relative(&resolved).display().to_string(),
                });
            }
        }
    }

    tracing::info!(
        files = report.files_scanned,
        checked = report.links_checked,
        broken = report.broken_count(),
        "link check finished"
    );

    Ok(report)
}
