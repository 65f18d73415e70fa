// src/checker/html.rs
// =============================================================================
// This module extracts URL references from HTML pages.
//
// We use the tokenizer from the `html5ever` crate which:
// - Splits HTML into tokens (start tags, end tags, text, comments, ...)
// - Is Mozilla's HTML parser, the one `scraper` is built on
// - Never gives up on broken markup: it reports a parse error and moves on
//
// Why only the tokenizer and not a full DOM?
// - A DOM builder "repairs" markup: an unclosed <a> gets copied into every
//   following <li> or <p>, so one href would be counted several times
// - It also hides tags inside <noscript>, where tracking pixels live
// - The tokenizer gives us exactly one token per start tag in the source
//
// Unlike a crawler we don't only want <a href>: images, scripts, stylesheets,
// videos and iframes all point at files that must exist on disk. Which
// attributes to look at comes from the AttributeTable in our config.
//
// Rust concepts:
// - Traits: We implement html5ever's TokenSink to receive tokens
// - Lifetimes: The sink borrows the table and path for the parse
// - Cow<str>: Parse error messages are usually static strings
// =============================================================================

use crate::config::AttributeTable;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

// One URL found in one attribute of one tag
//
// Example: <img src="logo.png"> in site/index.html becomes
//   LinkReference { source: "site/index.html", tag: "img", attr: "src", url: "logo.png" }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReference {
    /// The HTML file the reference was found in
    pub source: PathBuf,
    /// Lowercase tag name (a, img, script, ...)
    pub tag: String,
    /// Attribute the URL came from (href, src, srcset, poster)
    pub attr: String,
    /// The attribute value exactly as written in the page
    pub url: String,
}

// Receives tokens from the tokenizer and keeps the URLs we care about
struct StartTagCollector<'a> {
    table: &'a AttributeTable,
    source: &'a Path,
    links: Vec<LinkReference>,
    errors: Vec<Cow<'static, str>>,
}

impl StartTagCollector<'_> {
    fn collect(&mut self, tag: &Tag) {
        // The tokenizer already lowercases tag and attribute names
        let tag_name: &str = &tag.name;
        let tracked = self.table.attributes_for(tag_name);
        if tracked.is_empty() {
            return;
        }

        // Attributes in source order
        for attr in &tag.attrs {
            let name: &str = &attr.name.local;
            if !attr.value.is_empty() && tracked.iter().any(|t| t == name) {
                self.links.push(LinkReference {
                    source: self.source.to_path_buf(),
                    tag: tag_name.to_string(),
                    attr: name.to_string(),
                    url: String::from(&*attr.value),
                });
            }
        }
    }
}

impl TokenSink for StartTagCollector<'_> {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) if tag.kind == TagKind::StartTag => {
                self.collect(&tag);

                // <script> and <style> bodies are text, not markup:
                // document.write('<img src="x">') is not an image
                if !tag.self_closing {
                    match &*tag.name {
                        "script" => return TokenSinkResult::RawData(RawKind::ScriptData),
                        "style" => return TokenSinkResult::RawData(RawKind::Rawtext),
                        _ => {}
                    }
                }
            }
            Token::ParseError(error) => self.errors.push(error),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

// Extracts every tracked, non-empty URL attribute from an HTML document
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   source: the path of the file the HTML came from
//   table: which tags/attributes to collect
//
// Returns: references in document order, one per attribute per start tag
//
// Example:
//   html = "<a href='/docs'>Docs</a><img src='a.png' srcset=''>"
//   result = [a/href "/docs", img/src "a.png"]   (empty srcset is dropped)
pub fn extract_html_links(html: &str, source: &Path, table: &AttributeTable) -> Vec<LinkReference> {
    let collector = StartTagCollector {
        table,
        source,
        links: Vec::new(),
        errors: Vec::new(),
    };

    // Feed the whole page in one go, then flush the tokenizer
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(html));

    let mut tokenizer = Tokenizer::new(collector, TokenizerOpts::default());
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();

    let collector = tokenizer.sink;

    // Broken markup never stops extraction, but the tokenizer tells us what
    // it had to skip over. Those notes go to the debug log.
    if let Some(first) = collector.errors.first() {
        tracing::debug!(
            path = %source.display(),
            errors = collector.errors.len(),
            first = %first,
            "recovered from malformed markup"
        );
    }

    collector.links
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is a TokenSink?
//    - The tokenizer pushes every token it finds into a "sink"
//    - We implement the TokenSink trait, so our struct is that sink
//    - A full HTML parser is just a much bigger sink that builds a tree
//
// 2. What does TokenSinkResult::RawData do?
//    - It tells the tokenizer how to read what comes next
//    - After <script>, everything up to </script> is plain text
//    - Without it, tags written inside JavaScript strings would be counted
//
// 3. Why `let _ = tokenizer.feed(...)`?
//    - feed() reports when a script needs to run (for browsers)
//    - We never run scripts, so there's nothing to do with the result
//
// 4. Why keep the raw attribute value?
//    - The report shows the URL exactly as the author wrote it
//    - Cleaning it up (query strings, srcset descriptors) happens later
// -----------------------------------------------------------------------------
