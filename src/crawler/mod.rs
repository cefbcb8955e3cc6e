//! Crawler module for site discovery
//!
//! This module contains the breadth-first Crawl Controller, including:
//! - HTTP fetching with browser-identifying headers
//! - HTML parsing and link extraction
//! - Sitemap seeding
//! - Frontier management under the page budget
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod sitemap;

pub use coordinator::{CrawlRequest, Crawler};
pub use fetcher::{build_http_client, fetch_page, is_html, FetchResult};
pub use frontier::{Frontier, FrontierEntry};
pub use parser::{parse_page, resolve_internal_link, ParsedPage};
pub use sitemap::{fetch_sitemap_urls, parse_loc_entries};

use crate::config::Config;
use crate::progress::LogObserver;
use crate::results::CrawlResult;
use crate::ScopeError;
use std::sync::Arc;

/// Runs a complete crawl with a fresh client and log-based progress
///
/// Convenience wrapper for callers that don't need to inject their own HTTP
/// client or progress observer.
///
/// # Arguments
///
/// * `config` - The pipeline configuration
/// * `request` - The crawl request (seed URL, optional overrides)
///
/// # Returns
///
/// * `Ok(CrawlResult)` - Crawl completed
/// * `Err(ScopeError)` - Seed validation or client construction failed
pub async fn crawl(config: &Config, request: &CrawlRequest) -> Result<CrawlResult, ScopeError> {
    let client = build_http_client(&config.http, config.crawler.page_timeout_secs)?;
    let crawler = Crawler::new(config.crawler.clone(), client, Arc::new(LogObserver));
    crawler.run(request).await
}
