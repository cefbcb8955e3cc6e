//! Output module for crawl and extraction reports
//!
//! This module handles:
//! - Writing result aggregates as pretty-printed JSON files
//! - Printing human-readable run summaries to stdout

use crate::results::{ContentExtractionResult, CrawlResult};
use crate::ScopeError;
use serde::Serialize;
use std::path::Path;

/// Writes a result aggregate to a JSON report file
///
/// # Arguments
///
/// * `value` - Any serializable result aggregate
/// * `path` - Destination file path (overwritten if present)
pub fn write_json_report<T: Serialize>(value: &T, path: &Path) -> Result<(), ScopeError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    tracing::info!("Report written to {}", path.display());
    Ok(())
}

/// Prints a crawl summary to stdout
pub fn print_crawl_summary(result: &CrawlResult) {
    println!("=== Crawl Summary ===\n");

    println!("Base URL: {}", result.base_url);
    println!("Pages found: {}", result.pages_found);
    println!("Sitemap URLs: {}", result.sitemap_urls.len());
    println!("Errors: {}", result.errors.len());
    println!();

    println!("Pages by Category:");
    for (name, urls) in [
        ("core", &result.url_groups.core),
        ("blog", &result.url_groups.blog),
        ("service", &result.url_groups.service),
        ("product", &result.url_groups.product),
        ("category", &result.url_groups.category),
        ("other", &result.url_groups.other),
    ] {
        if !urls.is_empty() {
            println!("  {}: {}", name, urls.len());
        }
    }
    println!();

    if !result.top_linked_pages.is_empty() {
        println!("Top Linked Pages:");
        for page in &result.top_linked_pages {
            println!("  {} ({} inbound links)", page.url, page.link_count);
        }
        println!();
    }

    if !result.errors.is_empty() {
        println!("Errors:");
        for error in &result.errors {
            println!("  - {}", error);
        }
        println!();
    }

    let failed = result.pages.iter().filter(|p| p.error.is_some()).count();
    println!(
        "Success Rate: {}/{} pages fetched without transport errors",
        result.pages_found - failed,
        result.pages_found
    );
}

/// Prints an extraction summary to stdout
pub fn print_extraction_summary(result: &ContentExtractionResult) {
    println!("=== Extraction Summary ===\n");

    println!("Base URL: {}", result.base_url);
    println!("Pages processed: {}", result.pages_processed);
    println!("Total word count: {}", result.total_word_count);
    println!();

    println!("Aggregated Content:");
    println!("  services: {} pages", result.aggregated_content.services.len());
    println!("  blogs: {} pages", result.aggregated_content.blogs.len());
    println!("  products: {} pages", result.aggregated_content.products.len());
    println!();

    for page in &result.extracted_pages {
        let topic = page.main_topic.as_deref().unwrap_or("-");
        println!("  {} [{}] {} words: {}", page.url, page.kind, page.word_count, topic);
    }
}
