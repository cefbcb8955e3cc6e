//! URL handling module for Sitescope
//!
//! This module provides URL normalization, asset/junk path filtering, and
//! path-pattern classification of pages into content categories.

mod filters;
mod normalize;

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export main functions
pub use filters::{is_asset_path, is_junk_path};
pub use normalize::normalize_url;

/// Content category assigned to every crawled URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageCategory {
    /// Homepage, contact, about, legal pages
    Core,
    /// Blog/news/article style pages
    Blog,
    /// Service and solution pages
    Service,
    /// Individual product/shop pages
    Product,
    /// Listing pages: categories, collections, tags
    Category,
    /// Everything else
    Other,
}

impl PageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Blog => "blog",
            Self::Service => "service",
            Self::Product => "product",
            Self::Category => "category",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered classification rules, evaluated top-to-bottom; first match wins.
///
/// The order is the classifier's entire contract: `/services/` pages must
/// match `Service` before `Product` gets a chance, `/products/` listing pages
/// must fall through to `Category`, and so on.
const CLASSIFY_RULES: &[(PageCategory, &[&str])] = &[
    (
        PageCategory::Core,
        &["/contact", "/about", "/privacy-policy", "/terms"],
    ),
    (
        PageCategory::Blog,
        &["/blog/", "/news/", "/post/", "/article/", "/insights/", "/journal/"],
    ),
    (
        PageCategory::Service,
        &["/service/", "/services/", "/solution/", "/solutions/", "/offering/"],
    ),
    (
        PageCategory::Product,
        &["/product/", "/item/", "/shop/", "/p/", "/store/"],
    ),
    (
        PageCategory::Category,
        &["/category/", "/collection/", "/tag/", "/products/"],
    ),
];

/// Classifies a URL path into a content category
///
/// Pure function over the path string. The homepage (`/`) is core; other
/// paths are matched case-insensitively against the rule table above, and
/// anything unmatched is `Other`.
///
/// # Arguments
///
/// * `path` - The URL path to classify (e.g. `/blog/my-post`)
///
/// # Examples
///
/// ```
/// use sitescope::url::{classify_path, PageCategory};
///
/// assert_eq!(classify_path("/"), PageCategory::Core);
/// assert_eq!(classify_path("/blog/hello"), PageCategory::Blog);
/// assert_eq!(classify_path("/pricing"), PageCategory::Other);
/// ```
pub fn classify_path(path: &str) -> PageCategory {
    let path = path.to_ascii_lowercase();

    if path == "/" {
        return PageCategory::Core;
    }

    for (category, patterns) in CLASSIFY_RULES {
        if patterns.iter().any(|pattern| path.contains(pattern)) {
            return *category;
        }
    }

    PageCategory::Other
}
