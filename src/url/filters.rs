//! Path filters applied during link discovery
//!
//! Two families of URLs are excluded from crawling: static asset files and
//! CMS/infrastructure endpoints that never hold readable content.

/// File extensions that identify static assets
const ASSET_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".svg", ".pdf", ".css", ".js", ".ico", ".woff", ".woff2",
    ".ttf", ".eot",
];

/// Path fragments that identify CMS/infrastructure junk endpoints
const JUNK_FRAGMENTS: &[&str] = &[
    "/xmlrpc.php",
    "/wp-json/",
    "/feed/",
    "/wp-content/uploads/",
    "/wp-admin/",
    "/wp-includes/",
];

/// Returns true if the path points at a static asset file
///
/// Matching is case-insensitive on the path's extension.
///
/// # Examples
///
/// ```
/// use sitescope::url::is_asset_path;
///
/// assert!(is_asset_path("/images/logo.PNG"));
/// assert!(!is_asset_path("/blog/post"));
/// ```
pub fn is_asset_path(path: &str) -> bool {
    let path = path.to_ascii_lowercase();
    ASSET_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Returns true if the path matches a known junk pattern
///
/// Junk paths are admin panels, API/feed endpoints, and upload directories;
/// they are skipped without recording an error.
///
/// # Examples
///
/// ```
/// use sitescope::url::is_junk_path;
///
/// assert!(is_junk_path("/wp-admin/options.php"));
/// assert!(!is_junk_path("/services/consulting"));
/// ```
pub fn is_junk_path(path: &str) -> bool {
    let path = path.to_ascii_lowercase();
    JUNK_FRAGMENTS.iter().any(|fragment| path.contains(fragment))
}
