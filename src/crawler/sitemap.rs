//! Sitemap discovery
//!
//! A single `/sitemap.xml` fetch runs before the crawl loop. Success seeds
//! the frontier; any failure (network error, non-success status, malformed
//! XML) is informational and the crawl proceeds with pure BFS discovery.

use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Attempts to fetch and parse the site's sitemap
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base` - Any URL on the site; the sitemap is fetched from its root
/// * `timeout` - Per-request timeout override for this one fetch
///
/// # Returns
///
/// * `Some(urls)` - Raw `<loc>` values, in document order, unfiltered
/// * `None` - Sitemap unavailable; not an error condition
pub async fn fetch_sitemap_urls(client: &Client, base: &Url, timeout: Duration) -> Option<Vec<String>> {
    let sitemap_url = base.join("/sitemap.xml").ok()?;

    let response = match client.get(sitemap_url.as_str()).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("Sitemap not available: {}", e);
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::debug!("Sitemap request returned HTTP {}", response.status());
        return None;
    }

    match response.text().await {
        Ok(body) => Some(parse_loc_entries(&body)),
        Err(e) => {
            tracing::debug!("Failed to read sitemap body: {}", e);
            None
        }
    }
}

/// Harvests the text content of every `<loc>` element
///
/// Tolerates malformed XML: entries collected before the first parse error
/// are kept.
pub fn parse_loc_entries(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut urls = Vec::new();
    let mut in_loc = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"loc" => in_loc = true,
            Ok(Event::End(e)) if e.local_name().as_ref() == b"loc" => in_loc = false,
            Ok(Event::Text(text)) if in_loc => {
                if let Ok(value) = text.unescape() {
                    let value = value.trim().to_string();
                    if !value.is_empty() {
                        urls.push(value);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::debug!("Sitemap XML parse error: {}", e);
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    urls
}
