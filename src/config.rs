// src/config.rs
// =============================================================================
// This module holds the settings both tools run with.
//
// Instead of a global ROOT constant, the site root and the table of
// "which tags carry URLs in which attributes" live in one SiteConfig value.
// main.rs builds it from the command line and passes it down.
//
// Rust concepts:
// - PathBuf: An owned filesystem path
// - &'static str: String slices baked into the binary
// - Default trait: A standard way to say "the normal value of this type"
// =============================================================================

use std::path::{Path, PathBuf};

// Tags and the attributes on them that may contain URLs
const DEFAULT_URL_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href"]),
    ("link", &["href"]),
    ("script", &["src"]),
    ("img", &["src", "srcset"]),
    ("source", &["src", "srcset"]),
    ("video", &["src", "poster"]),
    ("audio", &["src"]),
    ("iframe", &["src"]),
];

/// Maps a lowercase tag name to the attributes that hold URLs on it.
#[derive(Debug, Clone)]
pub struct AttributeTable {
    entries: Vec<(String, Vec<String>)>,
}

impl AttributeTable {
    /// Returns the URL attributes for `tag`, or an empty slice when the tag
    /// is not tracked.
    pub fn attributes_for(&self, tag: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == tag)
            .map(|(_, attrs)| attrs.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for AttributeTable {
    fn default() -> Self {
        let entries = DEFAULT_URL_ATTRIBUTES
            .iter()
            .map(|(tag, attrs)| {
                (
                    tag.to_string(),
                    attrs.iter().map(|a| a.to_string()).collect(),
                )
            })
            .collect();
        AttributeTable { entries }
    }
}

/// Everything a scan or migration needs to know about the site.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory that `/` in a URL maps to
    pub root: PathBuf,
    pub url_attributes: AttributeTable,
}

impl SiteConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        SiteConfig {
            root: root.into(),
            url_attributes: AttributeTable::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_tracks_img_srcset() {
        let table = AttributeTable::default();
        assert_eq!(table.attributes_for("img"), ["src", "srcset"]);
    }

    #[test]
    fn test_untracked_tag_has_no_attributes() {
        let table = AttributeTable::default();
        assert!(table.attributes_for("div").is_empty());
    }
}
