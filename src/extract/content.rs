//! Content block location and text cleaning
//!
//! Given a page's HTML, this module strips boilerplate subtrees, locates the
//! primary content block via a fixed selector cascade, and produces cleaned
//! text with derived metadata. The cascade order is a contract: the first
//! candidate with enough text wins, and the document body is the fallback.

use scraper::{ElementRef, Html, Selector};

/// Subtrees removed before any text is collected
const STRIP_TAGS: &[&str] = &[
    "script", "style", "nav", "header", "footer", "aside", "iframe", "noscript",
];

/// Candidate content containers, tried in order
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role=\"main\"]",
    ".content",
    ".post-content",
    ".entry-content",
    ".article-content",
    "#content",
    "#main-content",
];

/// A cascade candidate must exceed this many characters of raw text
const MIN_BLOCK_CHARS: usize = 200;

/// Cleaned text under this floor drops the page entirely
const MIN_CONTENT_CHARS: usize = 100;

/// Length of the derived summary
const SUMMARY_CHARS: usize = 200;

/// Cleaned readable text plus metadata derived from one page
#[derive(Debug, Clone)]
pub struct PageContent {
    pub title: Option<String>,
    pub content: String,
    pub word_count: usize,
    pub main_topic: Option<String>,
    pub summary: String,
}

/// Extracts the primary readable content from a page
///
/// # Algorithm
///
/// 1. Parse the document; collect text with `script`/`style`/`nav`/`header`/
///    `footer`/`aside`/`iframe`/`noscript` subtrees skipped
/// 2. Try each cascade selector in order; accept the first element whose raw
///    text exceeds 200 characters
/// 3. Fall back to the full body text when no candidate qualifies
/// 4. Collapse all whitespace to single spaces and trim
/// 5. Drop the page (return None) when the cleaned text is under 100
///    characters
///
/// `main_topic` comes from the first non-empty `<h1>`, else the page title;
/// `summary` is the first 200 characters of the cleaned text.
pub fn extract_page_content(html: &str) -> Option<PageContent> {
    let document = Html::parse_document(html);

    let title = element_text(&document, "title").filter(|s| !s.is_empty());

    let mut raw = None;
    for selector_str in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = stripped_text(element);
            if text.chars().count() > MIN_BLOCK_CHARS {
                raw = Some(text);
                break;
            }
        }
    }

    let raw = match raw {
        Some(text) => text,
        None => body_text(&document),
    };

    let content = collapse_whitespace(&raw);
    if content.chars().count() < MIN_CONTENT_CHARS {
        return None;
    }

    let word_count = content.split_whitespace().count();

    let main_topic = element_text(&document, "h1")
        .filter(|s| !s.is_empty())
        .or_else(|| title.clone());

    let summary: String = content.chars().take(SUMMARY_CHARS).collect();

    Some(PageContent {
        title,
        content,
        word_count,
        main_topic,
        summary,
    })
}

/// Collapsed text of the first element matching `selector`
fn element_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|element| collapse_whitespace(&stripped_text(element)))
}

/// Full body text with boilerplate subtrees skipped
fn body_text(document: &Html) -> String {
    match Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next())
    {
        Some(body) => stripped_text(body),
        None => String::new(),
    }
}

/// Collects descendant text, skipping [`STRIP_TAGS`] subtrees
fn stripped_text(element: ElementRef) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if STRIP_TAGS.contains(&child_element.value().name()) {
                continue;
            }
            collect_text(child_element, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}

/// Collapses all whitespace runs to single spaces and trims
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
