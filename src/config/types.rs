use serde::Deserialize;

/// Main configuration structure for Sitescope
///
/// All sections are optional in the TOML file; missing sections fall back to
/// the defaults below, so both stages can run without a config file at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Crawl Controller behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of pages to visit in one run
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: usize,

    /// Timeout for a single page fetch (seconds)
    #[serde(rename = "page-timeout-secs", default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    /// Timeout for the one-shot sitemap fetch (seconds)
    #[serde(rename = "sitemap-timeout-secs", default = "default_sitemap_timeout")]
    pub sitemap_timeout_secs: u64,

    /// Politeness delay between page fetches (milliseconds)
    #[serde(rename = "request-delay-ms", default = "default_request_delay")]
    pub request_delay_ms: u64,
}

/// Content Extraction Stage behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Maximum number of supplied pages to process in one run
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: usize,

    /// Timeout for a single page fetch (seconds)
    #[serde(rename = "page-timeout-secs", default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    /// Politeness delay between page fetches (milliseconds)
    #[serde(rename = "request-delay-ms", default = "default_request_delay")]
    pub request_delay_ms: u64,
}

/// HTTP client identification configuration
///
/// A browser-identifying User-Agent plus standard Accept headers reduce the
/// chance of being blocked by the target site.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_accept")]
    pub accept: String,

    #[serde(rename = "accept-language", default = "default_accept_language")]
    pub accept_language: String,
}

fn default_max_pages() -> usize {
    50
}

fn default_page_timeout() -> u64 {
    30
}

fn default_sitemap_timeout() -> u64 {
    10
}

fn default_request_delay() -> u64 {
    200
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

fn default_accept() -> String {
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8".to_string()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.5".to_string()
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            page_timeout_secs: default_page_timeout(),
            sitemap_timeout_secs: default_sitemap_timeout(),
            request_delay_ms: default_request_delay(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            page_timeout_secs: default_page_timeout(),
            request_delay_ms: default_request_delay(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            accept: default_accept(),
            accept_language: default_accept_language(),
        }
    }
}
