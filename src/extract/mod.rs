//! Content extraction module
//!
//! Pulls clean readable text out of a selected subset of crawled pages:
//! boilerplate removal, content-block location via a selector cascade, and
//! per-category aggregation.

pub mod content;
mod extractor;

pub use content::{extract_page_content, PageContent};
pub use extractor::{ExtractionRequest, Extractor};

use crate::config::Config;
use crate::crawler::build_http_client;
use crate::progress::LogObserver;
use crate::results::ContentExtractionResult;
use crate::ScopeError;
use std::sync::Arc;

/// Runs a complete extraction with a fresh client and log-based progress
///
/// Convenience wrapper mirroring [`crate::crawler::crawl`].
pub async fn extract(
    config: &Config,
    request: &ExtractionRequest,
) -> Result<ContentExtractionResult, ScopeError> {
    let client = build_http_client(&config.http, config.extraction.page_timeout_secs)?;
    let extractor = Extractor::new(config.extraction.clone(), client, Arc::new(LogObserver));
    extractor.run(request).await
}
