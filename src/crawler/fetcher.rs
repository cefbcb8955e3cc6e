//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the pipeline, including:
//! - Building the shared HTTP client with browser-identifying headers
//! - GET requests to fetch page content
//! - Error classification for failed fetches
//!
//! The client is built once per process and passed explicitly into the stage
//! constructors; nothing in this crate holds a global client.

use crate::config::HttpConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

/// Result of a single page fetch
///
/// A response of any status code is a `Page`; only transport-level failures
/// (DNS, connect, timeout, body read) are `Failed`. The stages interpret the
/// status and content type according to their own rules.
#[derive(Debug)]
pub enum FetchResult {
    /// The server answered; body fully read
    Page {
        /// HTTP status code
        status: u16,
        /// Content-Type header value (empty if absent)
        content_type: String,
        /// Response body
        body: String,
    },

    /// Network error (DNS failure, connection refused, timeout, ...)
    Failed {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client shared by both pipeline stages
///
/// The client carries a browser-identifying User-Agent plus standard
/// Accept/Accept-Language headers to reduce the chance of being blocked,
/// follows redirects automatically, and bounds every request with
/// `timeout_secs` (individual requests may override this, e.g. the sitemap
/// fetch).
///
/// # Arguments
///
/// * `config` - The HTTP identification configuration
/// * `timeout_secs` - Default per-request timeout in seconds
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig, timeout_secs: u64) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    if let Ok(accept) = HeaderValue::from_str(&config.accept) {
        headers.insert(ACCEPT, accept);
    }
    if let Ok(accept_language) = HeaderValue::from_str(&config.accept_language) {
        headers.insert(ACCEPT_LANGUAGE, accept_language);
    }

    Client::builder()
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page
///
/// Redirects are followed by the client; the returned status and body belong
/// to the final response in the chain. A hang is bounded by the client's
/// request timeout and surfaces as `Failed`.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();

            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string();

            match response.text().await {
                Ok(body) => FetchResult::Page {
                    status,
                    content_type,
                    body,
                },
                Err(e) => FetchResult::Failed {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => FetchResult::Failed {
            error: classify_error(&e),
        },
    }
}

/// Returns true if the Content-Type header identifies an HTML response
pub fn is_html(content_type: &str) -> bool {
    content_type.contains("text/html")
}

/// Maps a reqwest error to a stable, human-readable message
fn classify_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        format!("Connection failed: {}", error)
    } else {
        error.to_string()
    }
}
