// src/migrate/rewrite.rs
// =============================================================================
// This module rewrites one page's analytics calls.
//
// What changes:
//   gtag('event', 'click', {...})  ->  trackEvent('click', {...})
//   gtag("EVENT",'start')          ->  trackEvent('start')
//
// trackEvent lives in /assets/js/main.js, so a page that uses it also needs
//   <script src="/assets/js/main.js"></script>
// We add that tag right before </body> when it's missing.
//
// Running the rewrite on its own output changes nothing.
//
// Rust concepts:
// - regex::Regex: Compiled patterns, built once and reused for every page
// - Cow<str>: replace_all only allocates when something actually matched
// =============================================================================

use anyhow::Result;
use regex::Regex;

/// The script tag that defines trackEvent
pub const MAIN_SCRIPT_TAG: &str = r#"<script src="/assets/js/main.js"></script>"#;

const TRACK_EVENT_CALL: &str = "trackEvent(";

// gtag( 'event' , ...   with either quote style, any case, any spacing.
// Everything after the comma is left alone.
const GTAG_EVENT_PATTERN: &str = r#"(?i)gtag\(\s*(?:'event'|"event")\s*,\s*"#;

const MAIN_SCRIPT_PATTERN: &str = r#"(?i)<script[^>]+src="/assets/js/main\.js"[^>]*>\s*</script>"#;

// The outcome of rewriting one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRewrite {
    pub text: String,
    /// How many gtag('event', ...) calls were renamed
    pub replaced_calls: usize,
    /// Whether the main.js script tag was added
    pub inserted_script: bool,
    /// True if `text` differs from the input
    pub changed: bool,
}

pub struct EventRewriter {
    gtag_event: Regex,
    main_script: Regex,
}

impl EventRewriter {
    pub fn new() -> Result<Self> {
        Ok(EventRewriter {
            gtag_event: Regex::new(GTAG_EVENT_PATTERN)?,
            main_script: Regex::new(MAIN_SCRIPT_PATTERN)?,
        })
    }

    // Rewrites one page's HTML
    //
    // Parameters:
    //   original: the page as read from disk
    //
    // Returns: the new text plus what happened to it
    pub fn rewrite(&self, original: &str) -> PageRewrite {
        let replaced_calls = self.gtag_event.find_iter(original).count();
        let mut text = self
            .gtag_event
            .replace_all(original, TRACK_EVENT_CALL)
            .into_owned();

        // Pages that use trackEvent need main.js
        let needs_main = text.contains(TRACK_EVENT_CALL)
            || original.contains("gtag('event'")
            || original.contains("gtag(\"event\"");

        let inserted_script = needs_main && !self.main_script.is_match(&text);
        if inserted_script {
            text = insert_main_script(&text);
        }

        let changed = text != original;
        PageRewrite {
            text,
            replaced_calls,
            inserted_script,
            changed,
        }
    }
}

// Puts the main.js tag before the last </body>, or at the end of the page
fn insert_main_script(text: &str) -> String {
    let insertion = format!("\n  {}\n", MAIN_SCRIPT_TAG);

    // ASCII lowercasing keeps byte offsets, so idx is valid in `text` too
    let lower = text.to_ascii_lowercase();
    match lower.rfind("</body>") {
        Some(idx) => format!("{}{}{}", &text[..idx], insertion, &text[idx..]),
        None => format!("{}{}\n", text.trim_end(), insertion),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why (?:'event'|"event") instead of a backreference?
//    - The regex crate guarantees linear-time matching
//    - The price is no backreferences like (['"])event\1
//    - Spelling out both quote styles matches the same text
//
// 2. What does (?i) do?
//    - Turns on case-insensitive matching for the whole pattern
//    - So GTAG('Event', ...) is migrated too
//
// 3. Why return a struct instead of just the new String?
//    - The caller needs to know whether to write the file
//    - The counts are handy for logging
// -----------------------------------------------------------------------------
