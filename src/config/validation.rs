use crate::config::types::{Config, CrawlerConfig, ExtractionConfig, HttpConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_extraction_config(&config.extraction)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "crawler.max-pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.page_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "crawler.page-timeout-secs must be >= 1, got {}",
            config.page_timeout_secs
        )));
    }

    if config.sitemap_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "crawler.sitemap-timeout-secs must be >= 1, got {}",
            config.sitemap_timeout_secs
        )));
    }

    Ok(())
}

/// Validates extraction configuration
fn validate_extraction_config(config: &ExtractionConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "extraction.max-pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.page_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "extraction.page-timeout-secs must be >= 1, got {}",
            config.page_timeout_secs
        )));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "http.user-agent cannot be empty".to_string(),
        ));
    }

    if config.accept.trim().is_empty() {
        return Err(ConfigError::Validation(
            "http.accept cannot be empty".to_string(),
        ));
    }

    if config.accept_language.trim().is_empty() {
        return Err(ConfigError::Validation(
            "http.accept-language cannot be empty".to_string(),
        ));
    }

    Ok(())
}
