// src/checker/resolve.rs
// =============================================================================
// This module turns a URL from an HTML attribute into a path on disk.
//
// Resolution rules:
// - javascript:, mailto: and tel: links are skipped
// - http:// and https:// links are external and skipped
// - "#section" only points inside the current page and is skipped
// - srcset="a.png 1x, b.png 2x" only checks the first candidate (a.png)
// - ?query and #fragment are dropped
// - "/x" is looked up under the site root
// - "x" and "../x" are looked up next to the page that links to them
//
// Note: ".." is not guarded. "../../../etc/passwd" resolves outside the site
// root and is reported like any other missing file.
//
// Rust concepts:
// - Option<T>: None means "nothing to check for this reference"
// - Path components: Walking a path piece by piece to normalize it
// =============================================================================

use super::html::LinkReference;
use crate::config::SiteConfig;
use std::path::{Component, Path, PathBuf};
use url::{ParseError, Url};

// Links that can never point at a file
const SKIP_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:"];

// Maps link references to filesystem paths for one site
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    pub fn new(config: &SiteConfig) -> Self {
        PathResolver {
            root: config.root().to_path_buf(),
        }
    }

    // Resolves a reference to the file it points at
    //
    // Returns: Some(absolute path) for local references, None for references
    // that are skipped (external, fragment-only, special schemes, empty)
    //
    // Example (root = /site):
    //   /site/a/b.html, href="../c.html?v=2" -> Some("/site/c.html")
    //   /site/a/b.html, href="/img/x.png"    -> Some("/site/img/x.png")
    //   /site/a/b.html, href="https://x.io"  -> None
    pub fn resolve(&self, link: &LinkReference) -> Option<PathBuf> {
        let path = local_url_path(&link.attr, &link.url)?;

        match path.strip_prefix('/') {
            Some(rooted) => {
                let resolved = normalize(&self.root.join(rooted.trim_start_matches('/')));
                // "/about.html/" names a directory: keep the slash so the
                // file about.html doesn't satisfy it
                if path.len() > 1 && path.ends_with('/') {
                    Some(with_trailing_slash(resolved))
                } else {
                    Some(resolved)
                }
            }
            None => {
                let base = link.source.parent().unwrap_or_else(|| Path::new(""));
                Some(normalize(&base.join(&path)))
            }
        }
    }

    // Shows `path` relative to the site root, for the report
    pub fn relative(&self, path: &Path) -> PathBuf {
        relative_to(&normalize(path), &normalize(&self.root))
    }
}

// Extracts the local path part of an attribute value
//
// Returns None when the value does not refer to a local file.
fn local_url_path(attr: &str, raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }

    let lower = url.to_ascii_lowercase();
    if SKIP_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        return None;
    }

    // srcset="a.png 1x, b.png 2x": keep "a.png"
    let url = if attr == "srcset" && url.contains(',') {
        first_srcset_candidate(url)
    } else {
        url
    };

    // Fragment-only links stay on the same page
    if url.starts_with('#') {
        return None;
    }

    let path = match Url::parse(url) {
        // http and https are external, we never check those
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => return None,
        // Any other scheme: only the path part is looked at
        Ok(parsed) => parsed.path().to_string(),
        // No scheme at all: the usual case for links inside a site
        Err(ParseError::RelativeUrlWithoutBase) => relative_url_path(url).to_string(),
        Err(e) => {
            tracing::debug!(url, error = %e, "skipping unparseable url");
            return None;
        }
    };

    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}

// First URL of a srcset list, without its width/density descriptor
fn first_srcset_candidate(srcset: &str) -> &str {
    srcset
        .split(',')
        .next()
        .and_then(|candidate| candidate.split_whitespace().next())
        .unwrap_or("")
}

// Path part of a relative reference: no query, no fragment, no "//host"
//
// Examples:
//   "img/a.png?v=3#top" -> "img/a.png"
//   "//cdn.example.com/lib.js" -> "/lib.js"
//   "?page=2" -> ""
fn relative_url_path(url: &str) -> &str {
    let end = url.find(&['?', '#'][..]).unwrap_or(url.len());
    let path = &url[..end];

    match path.strip_prefix("//") {
        Some(rest) => rest.find('/').map(|i| &rest[i..]).unwrap_or(""),
        None => path,
    }
}

// Removes "." and resolves ".." without touching the filesystem
//
// Example: /site/a/../b/./c.html -> /site/b/c.html
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // "/.." is still "/"
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                // Relative paths keep leading ".."
                _ => out.push(component),
            },
            _ => out.push(component),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

fn with_trailing_slash(path: PathBuf) -> PathBuf {
    let mut raw = path.into_os_string();
    raw.push("/");
    PathBuf::from(raw)
}

// Lexical relative path from `base` to `path` (both normalized)
//
// Examples:
//   /site/games/a.html from /site -> games/a.html
//   /c.html from /site            -> ../c.html
fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_parts: Vec<Component> = path.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..base_parts.len() {
        out.push("..");
    }
    for part in &path_parts[common..] {
        out.push(part);
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not std::fs::canonicalize?
//    - canonicalize asks the filesystem and fails for missing files
//    - Missing files are exactly what we're looking for!
//    - So we normalize the path text ourselves
//
// 2. What is `Ok(parsed) if ... =>`?
//    - A match arm with a guard: it only matches when the condition holds
//    - The next arm catches every other Ok value
//
// 3. Why is "foo.png" an error for Url::parse?
//    - A URL needs a scheme (https:, data:, ...)
//    - RelativeUrlWithoutBase is the url crate telling us "this is relative"
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> PathResolver {
        PathResolver::new(&SiteConfig::new("/site"))
    }

    fn link(source: &str, attr: &str, url: &str) -> LinkReference {
        LinkReference {
            source: PathBuf::from(source),
            tag: "a".to_string(),
            attr: attr.to_string(),
            url: url.to_string(),
        }
    }

    fn resolve(source: &str, attr: &str, url: &str) -> Option<PathBuf> {
        resolver().resolve(&link(source, attr, url))
    }

    #[test]
    fn test_skip_external_links() {
        assert_eq!(resolve("/site/index.html", "href", "https://example.com/x"), None);
        assert_eq!(resolve("/site/index.html", "href", "HTTP://EXAMPLE.COM"), None);
    }

    #[test]
    fn test_skip_fragment_and_special_schemes() {
        assert_eq!(resolve("/site/index.html", "href", "#section"), None);
        assert_eq!(resolve("/site/index.html", "href", "mailto:me@example.com"), None);
        assert_eq!(resolve("/site/index.html", "href", "tel:+100"), None);
        assert_eq!(resolve("/site/index.html", "href", "JavaScript:void(0)"), None);
        assert_eq!(resolve("/site/index.html", "href", "   "), None);
    }

    #[test]
    fn test_resolve_relative_with_parent() {
        assert_eq!(
            resolve("/site/a/b.html", "href", "../c.html"),
            Some(PathBuf::from("/site/c.html"))
        );
    }

    #[test]
    fn test_resolve_rooted_against_site_root() {
        assert_eq!(
            resolve("/site/a/b.html", "src", "/assets/js/main.js"),
            Some(PathBuf::from("/site/assets/js/main.js"))
        );
    }

    #[test]
    fn test_rooted_trailing_slash_is_kept() {
        let resolved = resolve("/site/index.html", "href", "/about.html/").unwrap();
        assert_eq!(resolved.as_os_str(), "/site/about.html/");

        let root = resolve("/site/index.html", "href", "/").unwrap();
        assert_eq!(root.as_os_str(), "/site");
    }

    #[test]
    fn test_strip_query_and_fragment() {
        assert_eq!(
            resolve("/site/index.html", "href", "docs/page.html?x=1#top"),
            Some(PathBuf::from("/site/docs/page.html"))
        );
        assert_eq!(resolve("/site/index.html", "href", "?page=2"), None);
    }

    #[test]
    fn test_srcset_uses_first_candidate() {
        assert_eq!(
            resolve("/site/index.html", "srcset", "a.png 1x, b.png 2x"),
            Some(PathBuf::from("/site/a.png"))
        );
    }

    #[test]
    fn test_scheme_relative_is_local() {
        assert_eq!(
            resolve("/site/index.html", "src", "//cdn.example.com/lib.js"),
            Some(PathBuf::from("/site/lib.js"))
        );
    }

    #[test]
    fn test_parent_can_escape_root() {
        assert_eq!(
            resolve("/site/index.html", "href", "../../outside.html"),
            Some(PathBuf::from("/outside.html"))
        );
    }

    #[test]
    fn test_relative_report_paths() {
        let r = resolver();
        assert_eq!(r.relative(Path::new("/site/c.html")), PathBuf::from("c.html"));
        assert_eq!(r.relative(Path::new("/other/x.png")), PathBuf::from("../other/x.png"));
        assert_eq!(r.relative(Path::new("/site")), PathBuf::from("."));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
    }
}
