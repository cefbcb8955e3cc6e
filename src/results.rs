//! Result aggregates produced by the two pipeline stages
//!
//! These types form the external interface of the crate: they serialize with
//! the camelCase field names consumers expect. Both aggregates are assembled
//! once at the end of a run and never mutated afterwards.

use crate::url::PageCategory;
use serde::{Deserialize, Serialize};

/// One visited page in a crawl run
///
/// Created exactly once per recorded URL. A page that failed to fetch carries
/// `http_status` 0 and the error message; a page that answered with an error
/// status carries that status and no outbound links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub url: String,

    pub http_status: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Same-hostname links found on the page, deduplicated, capped at 50
    pub outbound_links: Vec<String>,

    /// Breadth-first distance from the seed (sitemap entries start at 1)
    pub depth: u32,

    /// Inbound internal link count at the time the record was created
    pub inbound_link_count: u64,

    /// Whether the page's own nav/footer references the page itself
    pub is_navigation: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Partition of recorded URLs by [`PageCategory`]
///
/// Every recorded URL lands in exactly one bucket; the union of all buckets
/// equals the recorded-page set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlGroups {
    pub core: Vec<String>,
    pub blog: Vec<String>,
    pub product: Vec<String>,
    pub service: Vec<String>,
    pub category: Vec<String>,
    pub other: Vec<String>,
}

impl UrlGroups {
    /// Adds a URL to the bucket for its category
    pub fn push(&mut self, category: PageCategory, url: String) {
        match category {
            PageCategory::Core => self.core.push(url),
            PageCategory::Blog => self.blog.push(url),
            PageCategory::Product => self.product.push(url),
            PageCategory::Service => self.service.push(url),
            PageCategory::Category => self.category.push(url),
            PageCategory::Other => self.other.push(url),
        }
    }

    /// Total number of URLs across all buckets
    pub fn len(&self) -> usize {
        self.core.len()
            + self.blog.len()
            + self.product.len()
            + self.service.len()
            + self.category.len()
            + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A URL and its inbound internal link count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLinkedPage {
    pub url: String,
    pub link_count: u64,
}

/// Immutable aggregate produced by a crawl run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    pub base_url: String,
    pub pages_found: usize,
    pub pages: Vec<PageRecord>,
    pub sitemap_urls: Vec<String>,
    pub errors: Vec<String>,
    pub url_groups: UrlGroups,
    pub top_linked_pages: Vec<TopLinkedPage>,
}

/// One page selected for content extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRef {
    pub url: String,

    #[serde(rename = "type")]
    pub kind: PageCategory,
}

/// Cleaned readable text pulled from a single page
///
/// Only materialized when the cleaned content reaches the 100-character
/// floor; shorter candidates are dropped entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedPage {
    pub url: String,

    #[serde(rename = "type")]
    pub kind: PageCategory,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub content: String,

    pub word_count: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_topic: Option<String>,

    pub summary: String,
}

/// Per-category content buckets, recomputed each run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregatedContent {
    pub services: Vec<String>,
    pub blogs: Vec<String>,
    pub products: Vec<String>,
}

impl AggregatedContent {
    /// Files content under the bucket for its category, if it has one
    ///
    /// Only service, blog, and product pages aggregate; other categories are
    /// recorded individually but not bucketed.
    pub fn push(&mut self, category: PageCategory, content: String) {
        match category {
            PageCategory::Service => self.services.push(content),
            PageCategory::Blog => self.blogs.push(content),
            PageCategory::Product => self.products.push(content),
            _ => {}
        }
    }
}

/// Immutable aggregate produced by an extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentExtractionResult {
    pub base_url: String,
    pub pages_processed: usize,
    pub extracted_pages: Vec<ExtractedPage>,
    pub aggregated_content: AggregatedContent,
    pub total_word_count: usize,
}
