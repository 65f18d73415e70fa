// src/migrate/run.rs
// =============================================================================
// This module applies the event rewrite to every game page.
//
// Pages: <root>/games/*/index.html
//
// Failure handling:
// - A page we can't read is skipped quietly (debug log only)
// - A page we can't write stops the whole run with an error
// =============================================================================

use super::rewrite::EventRewriter;
use crate::config::SiteConfig;
use crate::walk;
use anyhow::{Context, Result};
use std::fs;

// What happened to one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    /// Page path relative to the site root, e.g. "games/snake/index.html"
    pub path: String,
    pub changed: bool,
}

// Migrates every game page under config.root
//
// Parameters:
//   config: the site to migrate
//   dry_run: if true, compute the changes but don't write anything
//
// Returns: one RewriteResult per page that could be read, in path order
pub fn migrate_events(config: &SiteConfig, dry_run: bool) -> Result<Vec<RewriteResult>> {
    let rewriter = EventRewriter::new()?;
    let pages = walk::collect_game_pages(config.root())?;

    let mut results = Vec::new();
    for page in pages {
        let original = match fs::read_to_string(&page) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(path = %page.display(), error = %e, "skipping unreadable page");
                continue;
            }
        };

        let rewrite = rewriter.rewrite(&original);
        if rewrite.changed && !dry_run {
            fs::write(&page, &rewrite.text)
                .with_context(|| format!("failed to write {}", page.display()))?;
        }

        if rewrite.changed {
            tracing::info!(
                path = %page.display(),
                calls = rewrite.replaced_calls,
                inserted_script = rewrite.inserted_script,
                dry_run,
                "migrated page"
            );
        }

        let relative = page.strip_prefix(config.root()).unwrap_or(&page);
        results.push(RewriteResult {
            path: relative.display().to_string(),
            changed: rewrite.changed,
        });
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrate::rewrite::MAIN_SCRIPT_TAG;
    use std::path::Path;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn changed_paths(results: &[RewriteResult]) -> Vec<&str> {
        results
            .iter()
            .filter(|r| r.changed)
            .map(|r| r.path.as_str())
            .collect()
    }

    #[test]
    fn test_migrate_only_pages_that_need_it() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "games/snake/index.html", "<body><script>gtag('event', 'eat');</script></body>");
        let done = format!("<body>{}</body>", MAIN_SCRIPT_TAG);
        write(root, "games/tetris/index.html", &done);
        write(root, "index.html", "<body><script>gtag('event', 'home');</script></body>");

        let results = migrate_events(&SiteConfig::new(root), false).unwrap();
        assert_eq!(changed_paths(&results), vec!["games/snake/index.html"]);

        let snake = fs::read_to_string(root.join("games/snake/index.html")).unwrap();
        assert!(snake.contains("trackEvent('eat');"));
        assert!(snake.contains(MAIN_SCRIPT_TAG));

        // untouched: already migrated, and not a game page
        assert_eq!(fs::read_to_string(root.join("games/tetris/index.html")).unwrap(), done);
        assert!(fs::read_to_string(root.join("index.html")).unwrap().contains("gtag("));
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "games/pong/index.html", "<script>gtag(\"event\", \"serve\")</script>");

        let config = SiteConfig::new(root);
        let first = migrate_events(&config, false).unwrap();
        assert_eq!(changed_paths(&first), vec!["games/pong/index.html"]);

        let after_first = fs::read_to_string(root.join("games/pong/index.html")).unwrap();
        let second = migrate_events(&config, false).unwrap();
        assert!(changed_paths(&second).is_empty());
        assert_eq!(
            fs::read_to_string(root.join("games/pong/index.html")).unwrap(),
            after_first
        );
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let page = "<body>gtag('event', 'x')</body>";
        write(root, "games/dodger/index.html", page);

        let results = migrate_events(&SiteConfig::new(root), true).unwrap();
        assert_eq!(changed_paths(&results), vec!["games/dodger/index.html"]);
        assert_eq!(fs::read_to_string(root.join("games/dodger/index.html")).unwrap(), page);
    }

    #[test]
    fn test_unreadable_page_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "games/ok/index.html", "<p>nothing to do</p>");
        let bad = root.join("games/bad/index.html");
        fs::create_dir_all(bad.parent().unwrap()).unwrap();
        fs::write(&bad, [0xc3, 0x28]).unwrap();

        let results = migrate_events(&SiteConfig::new(root), false).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, "games/ok/index.html");
        assert!(!results[0].changed);
    }
}
