//! Configuration module for Sitescope
//!
//! Handles loading, parsing, and validating TOML configuration files.
//! Every setting has a default so both pipeline stages can run without a
//! config file.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, ExtractionConfig, HttpConfig};
pub use validation::validate;
