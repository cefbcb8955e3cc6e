//! Content Extraction Stage - per-page fetch and extraction loop
//!
//! Refetches a caller-selected subset of pages strictly sequentially,
//! delegating content-block location to [`crate::extract::content`]. Every
//! per-page failure (fetch error, non-HTML response, insufficient content)
//! simply omits that page; nothing in the loop is fatal.

use crate::config::ExtractionConfig;
use crate::crawler::{fetch_page, is_html, FetchResult};
use crate::extract::content::extract_page_content;
use crate::progress::{display_url, MonotonicProgress, ProgressObserver, ProgressUpdate};
use crate::results::{AggregatedContent, ContentExtractionResult, ExtractedPage, PageRef};
use crate::state::StageState;
use crate::ScopeError;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Input for one extraction run
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// The site the pages belong to, echoed back in the result
    pub base_url: String,

    /// Pages to process, with their crawl-assigned categories
    pub pages: Vec<PageRef>,

    /// Page budget override; the configured budget applies when None
    pub max_pages: Option<usize>,

    /// When false, pages are recorded with empty content and no fetching
    /// happens (pass-through mode)
    pub extract_content: bool,
}

impl ExtractionRequest {
    pub fn new(base_url: impl Into<String>, pages: Vec<PageRef>) -> Self {
        Self {
            base_url: base_url.into(),
            pages,
            max_pages: None,
            extract_content: true,
        }
    }
}

/// The Content Extraction Stage
pub struct Extractor {
    config: ExtractionConfig,
    client: Client,
    observer: Arc<dyn ProgressObserver>,
}

impl Extractor {
    /// Creates a new extractor
    ///
    /// # Arguments
    ///
    /// * `config` - Extraction behavior configuration
    /// * `client` - Shared HTTP client (built once per process)
    /// * `observer` - Progress side-channel sink
    pub fn new(
        config: ExtractionConfig,
        client: Client,
        observer: Arc<dyn ProgressObserver>,
    ) -> Self {
        Self {
            config,
            client,
            observer,
        }
    }

    /// Runs a complete extraction
    ///
    /// Processes at most `max_pages` of the supplied list in order, with a
    /// fixed politeness delay between requests.
    pub async fn run(
        &self,
        request: &ExtractionRequest,
    ) -> Result<ContentExtractionResult, ScopeError> {
        let max_pages = request.max_pages.unwrap_or(self.config.max_pages);
        let mut state = StageState::Initialized;
        let mut progress = MonotonicProgress::new(self.observer.as_ref());

        progress.publish(ProgressUpdate {
            progress: 0,
            label: "Starting content extraction...".to_string(),
            pages_found: 0,
            audit_id: None,
            error: None,
        });

        state = state.transition(StageState::Processing)?;

        let to_process = &request.pages[..request.pages.len().min(max_pages)];
        let total = to_process.len();
        let delay = Duration::from_millis(self.config.request_delay_ms);

        let mut extracted_pages: Vec<ExtractedPage> = Vec::new();
        let mut aggregated_content = AggregatedContent::default();
        let mut total_word_count = 0usize;

        for (index, page) in to_process.iter().enumerate() {
            let pct = (((index + 1) as f64 / total as f64) * 100.0).round() as u8;
            progress.publish(ProgressUpdate {
                progress: pct.min(99),
                label: format!(
                    "Extracting content from {}/{}: {}",
                    index + 1,
                    total,
                    display_url(&page.url, 50)
                ),
                pages_found: extracted_pages.len(),
                audit_id: None,
                error: None,
            });

            if !request.extract_content {
                // Pass-through: record the page without fetching it.
                extracted_pages.push(ExtractedPage {
                    url: page.url.clone(),
                    kind: page.kind,
                    title: None,
                    content: String::new(),
                    word_count: 0,
                    main_topic: None,
                    summary: String::new(),
                });
                continue;
            }

            match fetch_page(&self.client, &page.url).await {
                FetchResult::Page {
                    content_type, body, ..
                } if is_html(&content_type) => {
                    match extract_page_content(&body) {
                        Some(content) => {
                            total_word_count += content.word_count;
                            aggregated_content.push(page.kind, content.content.clone());
                            extracted_pages.push(ExtractedPage {
                                url: page.url.clone(),
                                kind: page.kind,
                                title: content.title,
                                content: content.content,
                                word_count: content.word_count,
                                main_topic: content.main_topic,
                                summary: content.summary,
                            });
                        }
                        None => {
                            tracing::debug!(
                                "Could not extract sufficient content from: {}",
                                page.url
                            );
                        }
                    }
                }

                FetchResult::Page { content_type, .. } => {
                    tracing::debug!(
                        "Skipping non-HTML content: {} ({})",
                        page.url,
                        content_type
                    );
                }

                FetchResult::Failed { error } => {
                    tracing::warn!("Error extracting content from {}: {}", page.url, error);
                }
            }

            // Politeness delay between requests
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        state = state.transition(StageState::Aggregating)?;
        progress.publish(ProgressUpdate {
            progress: 100,
            label: format!(
                "Content extraction complete! Processed {} pages",
                extracted_pages.len()
            ),
            pages_found: extracted_pages.len(),
            audit_id: None,
            error: None,
        });
        state.transition(StageState::Completed)?;

        Ok(ContentExtractionResult {
            base_url: request.base_url.clone(),
            pages_processed: extracted_pages.len(),
            extracted_pages,
            aggregated_content,
            total_word_count,
        })
    }
}
