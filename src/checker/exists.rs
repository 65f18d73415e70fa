// src/checker/exists.rs
// =============================================================================
// This module decides whether a static file server would answer a path.
//
// A typical static server (nginx, GitHub Pages, `python -m http.server`)
// serves:
// 1. the file itself, if it exists
// 2. dir/index.html, if the path is a directory
// 3. path.html, for "pretty" extensionless URLs like /about -> about.html
//
// This is a heuristic, not a guarantee of what a given server really does.
// =============================================================================

use std::path::{Path, PathBuf};

const DIRECTORY_INDEX: &str = "index.html";

/// Returns true if a static server would serve something for `path`.
pub fn path_is_servable(path: &Path) -> bool {
    // Exact file
    if path.is_file() {
        return true;
    }

    // Directory with an index page
    if has_directory_index(path) {
        return true;
    }

    // No extension: maybe a directory without trailing slash, maybe a
    // pretty URL for <path>.html
    if path.extension().is_none() {
        if has_directory_index(path) {
            return true;
        }
        if with_html_suffix(path).is_file() {
            return true;
        }
    }

    false
}

fn has_directory_index(path: &Path) -> bool {
    path.is_dir() && path.join(DIRECTORY_INDEX).is_file()
}

// "about" -> "about.html" (appends, never replaces an extension)
fn with_html_suffix(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".html");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_existing_file_is_servable() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("logo.png");
        fs::write(&file, b"png").unwrap();
        assert!(path_is_servable(&file));
    }

    #[test]
    fn test_directory_needs_index() {
        let dir = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        assert!(!path_is_servable(&docs));

        fs::write(docs.join("index.html"), "<html></html>").unwrap();
        assert!(path_is_servable(&docs));
    }

    #[test]
    fn test_extensionless_falls_back_to_html() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("about.html"), "<html></html>").unwrap();
        assert!(path_is_servable(&dir.path().join("about")));
    }

    #[test]
    fn test_html_fallback_only_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("page.v2.html"), "<html></html>").unwrap();
        assert!(!path_is_servable(&dir.path().join("page.v2")));
    }

    #[test]
    fn test_missing_file_is_broken() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!path_is_servable(&dir.path().join("missing.css")));
    }
}
