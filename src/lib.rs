//! Sitescope: site discovery and content extraction
//!
//! This crate implements a two-stage pipeline: a breadth-first crawl that maps
//! a website's reachable pages under a fixed page budget, and a content
//! extraction stage that pulls clean readable text out of a chosen subset of
//! those pages.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod links;
pub mod output;
pub mod progress;
pub mod results;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Sitescope operations
#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid seed URL '{url}': {message}")]
    InvalidSeed { url: String, message: String },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::StageState,
        to: state::StageState,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Sitescope operations
pub type Result<T> = std::result::Result<T, ScopeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlRequest, Crawler};
pub use extract::{ExtractionRequest, Extractor};
pub use progress::{ProgressObserver, ProgressUpdate};
pub use results::{ContentExtractionResult, CrawlResult};
pub use url::{classify_path, normalize_url, PageCategory};
