//! Crawl Controller - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates all aspects of
//! a discovery run:
//! - Validating the seed URL (the only fatal failure)
//! - Seeding the frontier from the seed URL and an optional sitemap
//! - Breadth-first traversal under the page budget
//! - Per-page fetching, link extraction, and importance tracking
//! - Classifying visited URLs and assembling the final result
//!
//! Per-page failures are recorded as data and never abort the run.

use crate::config::CrawlerConfig;
use crate::crawler::fetcher::{fetch_page, is_html, FetchResult};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::{parse_page, resolve_internal_link, ParsedPage};
use crate::crawler::sitemap::fetch_sitemap_urls;
use crate::links::LinkTracker;
use crate::progress::{display_url, MonotonicProgress, ProgressObserver, ProgressUpdate};
use crate::results::{CrawlResult, PageRecord, UrlGroups};
use crate::state::StageState;
use crate::url::{classify_path, is_junk_path, normalize_url};
use crate::{ScopeError, UrlError};
use reqwest::Client;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Outbound links kept per page record; the tracker still counts every
/// occurrence beyond the cap.
const MAX_OUTBOUND_LINKS: usize = 50;

/// Input for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlRequest {
    /// The seed URL to start from
    pub url: String,

    /// Page budget override; the configured budget applies when None
    pub max_pages: Option<usize>,

    /// Correlation token echoed back through progress updates
    pub audit_id: Option<String>,
}

impl CrawlRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_pages: None,
            audit_id: None,
        }
    }
}

/// The Crawl Controller
///
/// Holds the injected HTTP client and progress observer; all per-run state
/// (frontier, visited set, link counts) lives inside [`Crawler::run`] and is
/// discarded when it returns.
pub struct Crawler {
    config: CrawlerConfig,
    client: Client,
    observer: Arc<dyn ProgressObserver>,
}

impl Crawler {
    /// Creates a new crawler
    ///
    /// # Arguments
    ///
    /// * `config` - Crawl behavior configuration
    /// * `client` - Shared HTTP client (built once per process)
    /// * `observer` - Progress side-channel sink
    pub fn new(config: CrawlerConfig, client: Client, observer: Arc<dyn ProgressObserver>) -> Self {
        Self {
            config,
            client,
            observer,
        }
    }

    /// Runs a complete crawl
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlResult)` - The run completed; per-page issues are inside
    /// * `Err(ScopeError::InvalidSeed)` - The seed URL failed validation;
    ///   no partial result is produced
    pub async fn run(&self, request: &CrawlRequest) -> Result<CrawlResult, ScopeError> {
        let max_pages = request.max_pages.unwrap_or(self.config.max_pages);
        let mut state = StageState::Initialized;
        let mut progress = MonotonicProgress::new(self.observer.as_ref());

        let seed = match normalize_url(&request.url) {
            Ok(seed) => seed,
            Err(e) => {
                // Fatal: nothing has been fetched, no partial result exists.
                let _ = state.transition(StageState::Failed);
                return Err(ScopeError::InvalidSeed {
                    url: request.url.clone(),
                    message: e.to_string(),
                });
            }
        };
        let hostname = seed
            .host_str()
            .ok_or(UrlError::MissingHost)?
            .to_string();

        tracing::info!("Starting crawl of {} (budget: {} pages)", seed, max_pages);
        progress.publish(ProgressUpdate {
            progress: 0,
            label: "Starting site crawl...".to_string(),
            pages_found: 0,
            audit_id: request.audit_id.clone(),
            error: None,
        });

        let mut frontier = Frontier::new();
        frontier.seed(seed.clone(), 0);

        // Sitemap discovery; unavailability is not an error
        state = state.transition(StageState::Discovery)?;
        let sitemap_timeout = Duration::from_secs(self.config.sitemap_timeout_secs);
        let mut sitemap_urls: Vec<String> = Vec::new();

        match fetch_sitemap_urls(&self.client, &seed, sitemap_timeout).await {
            Some(locations) => {
                for location in locations {
                    let Ok(parsed) = normalize_url(&location) else {
                        continue;
                    };
                    if parsed.host_str() != Some(hostname.as_str()) {
                        continue;
                    }
                    sitemap_urls.push(location);
                    frontier.seed(parsed, 1);
                }
                tracing::info!("Seeded {} URLs from sitemap", sitemap_urls.len());
                progress.publish(ProgressUpdate {
                    progress: 5,
                    label: format!("Found {} URLs in sitemap", sitemap_urls.len()),
                    pages_found: sitemap_urls.len(),
                    audit_id: request.audit_id.clone(),
                    error: None,
                });
            }
            None => {
                progress.publish(ProgressUpdate {
                    progress: 5,
                    label: "Sitemap not available, crawling from homepage".to_string(),
                    pages_found: 0,
                    audit_id: request.audit_id.clone(),
                    error: None,
                });
            }
        }

        // Main breadth-first loop
        state = state.transition(StageState::Processing)?;
        let mut pages: Vec<PageRecord> = Vec::new();
        let mut errors: Vec<String> = Vec::new();
        let mut tracker = LinkTracker::new();
        let delay = Duration::from_millis(self.config.request_delay_ms);

        eprintln!("DBG loop start: visited={} max_pages={} pending={}", frontier.visited_count(), max_pages, frontier.pending());
        while frontier.visited_count() < max_pages {
            let Some(entry) = frontier.pop() else {
                eprintln!("DBG frontier exhausted visited={}", frontier.visited_count());
                tracing::info!("Frontier exhausted after {} pages", frontier.visited_count());
                break;
            };
            eprintln!("DBG popped {}", entry.url);

            let current = entry.url.clone();
            let current_str = current.as_str().to_string();

            if !frontier.visit(&current_str) {
                continue;
            }
            let visited = frontier.visited_count();

            let pct = crawl_progress(visited, max_pages);
            progress.publish(ProgressUpdate {
                progress: pct,
                label: format!(
                    "Crawling page {}/{}: {}",
                    visited,
                    max_pages,
                    display_url(&current_str, 50)
                ),
                pages_found: visited,
                audit_id: request.audit_id.clone(),
                error: None,
            });

            match fetch_page(&self.client, current.as_str()).await {
                FetchResult::Page {
                    status,
                    content_type,
                    body,
                } => {
                    eprintln!("DBG fetched status={} ct={:?} is_html={} junk={} bodylen={}", status, content_type, is_html(&content_type), is_junk_path(current.path()), body.len());
                    if status >= 400 {
                        // Recorded on the page itself, deliberately not in
                        // the run-level errors list; no link processing.
                        tracing::debug!("HTTP {} for {}", status, current_str);
                        pages.push(PageRecord {
                            url: current_str,
                            http_status: status,
                            title: None,
                            outbound_links: Vec::new(),
                            depth: entry.depth,
                            inbound_link_count: tracker.count(current.as_str()),
                            is_navigation: false,
                            error: None,
                        });
                    } else if !is_html(&content_type) {
                        tracing::debug!("Skipping non-HTML content: {}", current_str);
                    } else if is_junk_path(current.path()) {
                        tracing::debug!("Skipping junk path: {}", current_str);
                    } else {
                        let parsed = parse_page(&body);
                        let record = self.process_page(
                            &parsed,
                            &current,
                            entry.depth,
                            status,
                            max_pages,
                            &mut frontier,
                            &mut tracker,
                        );
                        pages.push(record);
                    }
                }

                FetchResult::Failed { error } => {
                    // Transient per-page failure: recorded on the page and in
                    // the run-level errors list, then the loop continues.
                    tracing::warn!("Error crawling {}: {}", current_str, error);
                    errors.push(format!("{}: {}", current_str, error));
                    progress.publish(ProgressUpdate {
                        progress: pct,
                        label: format!(
                            "Error crawling {}: {}",
                            display_url(&current_str, 30),
                            display_url(&error, 50)
                        ),
                        pages_found: visited,
                        audit_id: request.audit_id.clone(),
                        error: Some(error.clone()),
                    });
                    pages.push(PageRecord {
                        url: current_str,
                        http_status: 0,
                        title: None,
                        outbound_links: Vec::new(),
                        depth: entry.depth,
                        inbound_link_count: 0,
                        is_navigation: false,
                        error: Some(error),
                    });
                }
            }

            // Politeness delay between requests
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        // Classification and ranking over the recorded pages
        state = state.transition(StageState::Aggregating)?;
        let mut url_groups = UrlGroups::default();
        for page in &pages {
            let category = Url::parse(&page.url)
                .map(|u| classify_path(u.path()))
                .unwrap_or(crate::url::PageCategory::Other);
            url_groups.push(category, page.url.clone());
        }
        let top_linked_pages = tracker.top_linked(10);

        progress.publish(ProgressUpdate {
            progress: 100,
            label: format!("Crawl complete! Found {} pages", pages.len()),
            pages_found: pages.len(),
            audit_id: request.audit_id.clone(),
            error: None,
        });
        state.transition(StageState::Completed)?;

        tracing::info!(
            "Crawl of {} complete: {} pages, {} errors",
            request.url,
            pages.len(),
            errors.len()
        );

        Ok(CrawlResult {
            base_url: request.url.clone(),
            pages_found: pages.len(),
            pages,
            sitemap_urls,
            errors,
            url_groups,
            top_linked_pages,
        })
    }

    /// Processes a successfully fetched HTML page
    ///
    /// Extracts and resolves links, feeds the importance tracker, enqueues
    /// unseen targets while the budget allows, detects whether the page is
    /// referenced from its own nav/footer, and builds the page record.
    #[allow(clippy::too_many_arguments)]
    fn process_page(
        &self,
        parsed: &ParsedPage,
        current: &Url,
        depth: u32,
        status: u16,
        max_pages: usize,
        frontier: &mut Frontier,
        tracker: &mut LinkTracker,
    ) -> PageRecord {
        let mut outbound: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for href in &parsed.links {
            let Some(target) = resolve_internal_link(href, current) else {
                continue;
            };
            let target_str = target.as_str().to_string();

            // Every occurrence counts toward importance, even targets the
            // budget prevents us from visiting.
            tracker.record(&target_str);

            if seen.insert(target_str.clone()) && outbound.len() < MAX_OUTBOUND_LINKS {
                outbound.push(target_str);
            }

            frontier.enqueue(target, depth + 1, max_pages);
        }

        let is_navigation = parsed.nav_links.iter().any(|href| {
            resolve_nav_target(href, current)
                .map(|target| target == *current)
                .unwrap_or(false)
        });

        PageRecord {
            url: current.as_str().to_string(),
            http_status: status,
            title: parsed.title.clone(),
            outbound_links: outbound,
            depth,
            inbound_link_count: tracker.count(current.as_str()),
            is_navigation,
            error: None,
        }
    }
}

/// Resolves a nav/footer href for self-reference detection
///
/// Unlike link discovery this keeps asset/junk targets: the question is only
/// whether the href points back at the current page.
fn resolve_nav_target(href: &str, base: &Url) -> Option<Url> {
    let resolved = base.join(href.trim()).ok()?;
    if resolved.host_str() != base.host_str() {
        return None;
    }
    normalize_url(resolved.as_str()).ok()
}

/// Percentage for the main loop: 5 after discovery, capped at 90 until the
/// final aggregation publishes 100
fn crawl_progress(visited: usize, max_pages: usize) -> u8 {
    let scaled = ((visited as f64 / max_pages as f64) * 90.0).round() as u64 + 5;
    scaled.min(90) as u8
}
