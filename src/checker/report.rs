// src/checker/report.rs
// =============================================================================
// This module holds the results of a link check.
//
// - BrokenLinkRecord: one reference that would 404
// - LinkReport: the totals plus every broken record, in the order found
//
// Both derive Serialize so `check --json` can print them as JSON.
// =============================================================================

use serde::Serialize;

// One local reference whose target would not be served
//
// Paths are relative to the site root so the report reads the same on every
// machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLinkRecord {
    /// The page containing the reference
    pub file: String,
    pub tag: String,
    pub attr: String,
    /// The attribute value as written
    pub url: String,
    /// Where we looked for it (may start with ".." when it leaves the root)
    pub resolved: String,
}

// Summary of a whole scan
#[derive(Debug, Clone, Default, Serialize)]
pub struct LinkReport {
    /// Number of .html files found (including ones that couldn't be read)
    pub files_scanned: usize,
    /// Local references that were resolved and looked up
    pub links_checked: usize,
    pub broken: Vec<BrokenLinkRecord>,
}

impl LinkReport {
    /// True when nothing is broken (an empty site counts as clean)
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }

    pub fn broken_count(&self) -> usize {
        self.broken.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_clean() {
        let report = LinkReport::default();
        assert!(report.is_clean());
        assert_eq!(report.broken_count(), 0);
    }

    #[test]
    fn test_report_serializes_records() {
        let report = LinkReport {
            files_scanned: 1,
            links_checked: 1,
            broken: vec![BrokenLinkRecord {
                file: "a/b.html".to_string(),
                tag: "a".to_string(),
                attr: "href".to_string(),
                url: "../c.html".to_string(),
                resolved: "c.html".to_string(),
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["links_checked"], 1);
        assert_eq!(json["broken"][0]["resolved"], "c.html");
        assert!(!report.is_clean());
    }
}
