//! HTML parser for extracting links and metadata
//!
//! This module parses page HTML to extract:
//! - The page title
//! - Anchor hrefs anywhere in the document
//! - Anchor hrefs inside `<nav>` and `<footer>` regions (used to decide
//!   whether a page is itself navigation-referenced)

use crate::url::{is_asset_path, is_junk_path, normalize_url};
use scraper::{Html, Selector};
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title (from the `<title>` tag)
    pub title: Option<String>,

    /// Raw href values from all anchor tags, in document order
    pub links: Vec<String>,

    /// Raw href values from anchors inside `<nav>`/`<footer>` regions
    pub nav_links: Vec<String>,
}

/// Parses HTML content and extracts the title and anchor hrefs
///
/// Hrefs are returned raw; resolution and filtering against the current page
/// happen in [`resolve_internal_link`].
///
/// # Arguments
///
/// * `html` - The HTML content to parse
pub fn parse_page(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        links: collect_hrefs(&document, "a[href]"),
        nav_links: collect_hrefs(&document, "nav a[href], footer a[href]"),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Collects href attribute values for all elements matching `selector`
fn collect_hrefs(document: &Html, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.to_string())
        .collect()
}

/// Resolves an anchor href against the current page and keeps it only if it
/// is a crawlable internal target
///
/// Returns the normalized target URL, or None when the href is excluded:
/// - empty hrefs and unresolvable values
/// - non-HTTP(S) schemes after resolution (javascript:, mailto:, tel:, data:)
/// - targets on a different hostname
/// - targets carrying a fragment
/// - static asset files
/// - junk paths (admin/API/feed/upload endpoints)
///
/// # Arguments
///
/// * `href` - The raw href value
/// * `base` - The URL of the page the href was found on
pub fn resolve_internal_link(href: &str, base: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    let resolved = base.join(href).ok()?;

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    if resolved.host_str() != base.host_str() {
        return None;
    }

    if resolved.fragment().is_some() {
        return None;
    }

    if is_asset_path(resolved.path()) || is_junk_path(resolved.path()) {
        return None;
    }

    normalize_url(resolved.as_str()).ok()
}
